#![forbid(unsafe_code)]

pub mod repository;
pub mod seed;
pub mod store;

pub use repository::{InMemoryRepository, Storage, StorageError};
pub use store::RecordStore;
