//! Domain types and rules for the cinelog video catalog.
//!
//! Shared by the storage layer, the HTTP API and the typed client so that
//! all three agree on the wire shape of a video record.

pub mod error;
pub mod types;
pub mod video;
