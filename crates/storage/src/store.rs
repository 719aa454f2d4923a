//! Immutable in-memory process catalog
//!
//! The store is populated once at process start and never mutated
//! afterwards. All engine operations are pure reads, so a loaded store can
//! be shared across threads (typically behind an `Arc`) without locking.
//!
//! Catalog order is the source order of the records; the ranker relies on
//! it as the tie-break for equal scores, so enumeration and full scans must
//! preserve it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bizproc_core::{Error, ProcessRecord, ProcessSummary, Result, MISSING_DESCRIPTION};
use tracing::info;

/// The process catalog: an ordered record list plus an id index.
#[derive(Debug)]
pub struct ProcessStore {
    records: Vec<ProcessRecord>,
    by_id: HashMap<String, usize>,
}

impl ProcessStore {
    /// Build a store from already-parsed records.
    ///
    /// Validates the catalog invariants: at least one record, non-empty
    /// ids and names, and id uniqueness. Records with an empty or absent
    /// description get [`MISSING_DESCRIPTION`] substituted.
    pub fn from_records(records: Vec<ProcessRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut by_id = HashMap::with_capacity(records.len());
        let mut records = records;
        for (position, record) in records.iter_mut().enumerate() {
            if record.id.is_empty() {
                return Err(Error::InvalidRecord(format!(
                    "record {position} has an empty id"
                )));
            }
            if record.name.is_empty() {
                return Err(Error::InvalidRecord(format!(
                    "record {} has an empty name",
                    record.id
                )));
            }
            if record.description.is_empty() {
                record.description = MISSING_DESCRIPTION.to_string();
            }
            if by_id.insert(record.id.clone(), position).is_some() {
                return Err(Error::DuplicateId(record.id.clone()));
            }
        }

        Ok(ProcessStore { records, by_id })
    }

    /// Load the catalog from a JSON file containing an array of records.
    ///
    /// Missing files, malformed JSON and invariant violations all fail the
    /// load; there is no fallback to an empty catalog.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let records: Vec<ProcessRecord> = serde_json::from_str(&raw)?;
        let store = Self::from_records(records)?;
        info!(count = store.len(), path = %path.display(), "catalog loaded");
        Ok(store)
    }

    /// Look up a record by exact, case-sensitive id. Absence is `None`,
    /// never an error.
    pub fn by_id(&self, id: &str) -> Option<&ProcessRecord> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    /// Full records in catalog order, for the scorer's full scan.
    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    /// `(id, name)` projections in catalog order, for listing UIs.
    pub fn summaries(&self) -> Vec<ProcessSummary> {
        self.records.iter().map(ProcessSummary::from).collect()
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty. Always false for a constructed store;
    /// kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_records() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new("B1.1", "Прием перевозки", "Порядок приема перевозки", ""),
            ProcessRecord::new("B1.6", "Пустая упаковка", "Обнаружена пустая упаковка", ""),
            ProcessRecord::new("B3.1", "Выдача заказа", "", "выдача, заказ"),
        ]
    }

    #[test]
    fn test_from_records_preserves_order() {
        let store = ProcessStore::from_records(sample_records()).unwrap();
        let ids: Vec<_> = store.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["B1.1", "B1.6", "B3.1"]);
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let err = ProcessStore::from_records(vec![]).unwrap_err();
        assert!(matches!(err, Error::EmptyCatalog));
    }

    #[test]
    fn test_duplicate_id_is_an_error() {
        let mut records = sample_records();
        records.push(ProcessRecord::new("B1.1", "Дубликат", "", ""));
        let err = ProcessStore::from_records(records).unwrap_err();
        assert!(matches!(err, Error::DuplicateId(id) if id == "B1.1"));
    }

    #[test]
    fn test_empty_name_is_an_error() {
        let records = vec![ProcessRecord::new("B9.1", "", "", "")];
        let err = ProcessStore::from_records(records).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord(_)));
    }

    #[test]
    fn test_missing_description_gets_placeholder() {
        let store = ProcessStore::from_records(sample_records()).unwrap();
        let record = store.by_id("B3.1").unwrap();
        assert_eq!(record.description, MISSING_DESCRIPTION);
    }

    #[test]
    fn test_by_id_exact_match_only() {
        let store = ProcessStore::from_records(sample_records()).unwrap();
        assert!(store.by_id("B1.6").is_some());
        // Case-sensitive, no normalization of ids
        assert!(store.by_id("b1.6").is_none());
        assert!(store.by_id("UNKNOWN").is_none());
    }

    #[test]
    fn test_summaries_project_id_and_name() {
        let store = ProcessStore::from_records(sample_records()).unwrap();
        let summaries = store.summaries();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[1].id, "B1.6");
        assert_eq!(summaries[1].name, "Пустая упаковка");
    }

    #[test]
    fn test_load_path_missing_file() {
        let err = ProcessStore::load_path("/nonexistent/processes.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_path_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = ProcessStore::load_path(file.path()).unwrap_err();
        assert!(matches!(err, Error::CatalogFormat(_)));
    }

    #[test]
    fn test_load_path_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_records()).unwrap();
        write!(file, "{json}").unwrap();

        let store = ProcessStore::load_path(file.path()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.by_id("B1.6").unwrap().name, "Пустая упаковка");
    }
}
