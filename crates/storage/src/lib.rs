//! Storage layer for bizproc
//!
//! This crate holds the two persisted shapes of the system:
//! - [`ProcessStore`]: the immutable in-memory process catalog, loaded once
//!   at startup from a JSON source and read-only for the process lifetime
//! - [`SuggestionLog`]: an append-only log of user feedback, never read by
//!   the search engine
//!
//! Catalog load failure is fatal by design; see `bizproc_core::error`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;
pub mod suggestions;

pub use store::ProcessStore;
pub use suggestions::{Suggestion, SuggestionLog};
