//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. Every write is a single
//! statement.

pub mod video_repo;

pub use video_repo::VideoRepo;
