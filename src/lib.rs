//! bizproc - Relevance-ranking search over a business-process catalog
//!
//! bizproc answers free-text queries against a small, immutable catalog of
//! named business-process records and returns the best matches ranked by a
//! rule-based relevance score. The engine is built for an inflected
//! language: queries are normalized, expanded into stem sets via a fixed
//! suffix-rule table plus an exception dictionary, and matched by substring
//! containment against each record's searchable fields.
//!
//! # Quick Start
//!
//! ```ignore
//! use bizproc::Engine;
//!
//! // Load the catalog once at startup; load failure is fatal.
//! let engine = Engine::open("data/processes.json")?;
//!
//! // Free-text search, ranked and capped at five results.
//! for hit in engine.search("пустая упаковка") {
//!     println!("{} {} ({})", hit.record.id, hit.record.name, hit.score);
//! }
//!
//! // Direct lookup when the caller already has a catalog id.
//! let record = engine.get_by_id("B1.6");
//! ```
//!
//! # Architecture
//!
//! The catalog lives in a `ProcessStore`, read-only after load. Every query
//! is scored against the full catalog by the `bizproc-search` crate and the
//! top results are selected by a fixed cap-then-confidence-floor policy.
//! The `Engine` facade wires the two together; presentation layers (the
//! bundled CLI, or any chat transport) stay outside the engine.

// Re-export the public API from bizproc-engine
pub use bizproc_engine::*;
