//! Persistence codec for roster documents.
//!
//! # Responsibility
//! - Encode/decode the durable JSON document format.
//! - Read and atomically write documents at caller-chosen locations.
//!
//! # Invariants
//! - Decoded documents are always normalized to the active calendar.
//! - A failed write never leaves a partial document at the target path.
//! - The codec never chooses a location on its own.

pub mod document;
pub mod file;

pub use document::{deserialize, serialize, FormatError};
pub use file::{read_document, write_document, PersistError};
