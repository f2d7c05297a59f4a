//! Row structs and their mapping onto domain types.

pub mod video;
