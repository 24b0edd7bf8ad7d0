//! Storage collaborators for the Snaplink URL shortener.
//!
//! Both backends implement the repository contract from `snaplink_core`:
//! they enforce short code uniqueness atomically at insert time, signal
//! duplicates with [`StorageError::Conflict`][snaplink_core::StorageError],
//! and keep records after expiry so codes are never reused.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;
pub use snaplink_core::{ReadRepository, Repository};
