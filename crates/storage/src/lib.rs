#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::{JsonInitError, JsonPoolRepository};
pub use repository::{InMemoryRepository, PoolRepository, StorageError};
