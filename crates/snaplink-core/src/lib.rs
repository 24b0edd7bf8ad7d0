//! Core types and traits for the Snaplink URL shortener.
//!
//! This crate provides the shared vocabulary used by the assigner and
//! resolver services: the validated [`ShortCode`], the persisted
//! [`Mapping`], and the storage collaborator contract.

pub mod error;
pub mod mapping;
pub mod repository;
pub mod shortcode;

pub use error::{CoreError, StorageError};
pub use mapping::Mapping;
pub use repository::{ReadRepository, Repository};
pub use shortcode::ShortCode;
