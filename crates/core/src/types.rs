//! Catalog record types
//!
//! A catalog is a flat, immutable list of [`ProcessRecord`]s loaded once at
//! startup. Records are addressable by exact id or enumerated in catalog
//! order; the search engine scans the full list per query.

use serde::{Deserialize, Serialize};

/// Placeholder substituted for records whose source omits a description.
pub const MISSING_DESCRIPTION: &str = "Описание отсутствует";

/// One business-process record in the catalog.
///
/// `id` is catalog-unique and carries a hierarchical prefix code
/// (e.g. `B1.6`: category `B1`, process `6`) that callers may use for
/// categorization and direct lookup. Ids are matched exactly and
/// case-sensitively; they are never normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Stable catalog-unique identifier with a hierarchical prefix code
    pub id: String,

    /// Human-readable title, required and non-empty
    pub name: String,

    /// Free-text description; loaders substitute [`MISSING_DESCRIPTION`]
    /// when the source omits it
    #[serde(default)]
    pub description: String,

    /// Free-text keywords, searched like the description
    #[serde(default)]
    pub keywords: String,
}

impl ProcessRecord {
    /// Create a record with all four fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        keywords: impl Into<String>,
    ) -> Self {
        ProcessRecord {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            keywords: keywords.into(),
        }
    }
}

/// The `(id, name)` projection of a record, used for catalog listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSummary {
    /// Catalog id
    pub id: String,
    /// Human-readable title
    pub name: String,
}

impl From<&ProcessRecord> for ProcessSummary {
    fn from(record: &ProcessRecord) -> Self {
        ProcessSummary {
            id: record.id.clone(),
            name: record.name.clone(),
        }
    }
}
