//! Error types for the storage layer.
//!
//! Parse failures on load are not represented here: the [`crate::Repository`]
//! swallows them and treats the collection as empty, so they never reach a
//! caller. What remains are the failures a controller has to react to.

use thiserror::Error;

/// Failures surfaced by collection mutations and photo handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An update or delete referenced an id that is not in the collection.
    #[error("no {collection} with id {id}")]
    NotFound {
        /// Collection label, e.g. `"member"` or `"event"`.
        collection: &'static str,
        /// The id the caller asked for.
        id: u32,
    },

    /// An uploaded photo could not be read or encoded.
    #[error("could not encode photo {file:?}")]
    PhotoEncode {
        /// Name of the file that failed.
        file: String,
    },
}
