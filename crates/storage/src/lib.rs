//! Session-scoped storage for the library ledger
//!
//! This crate implements the storage the ledger is mirrored into:
//! - SessionStorage: Web-storage-shaped trait (string keys, string values)
//! - MemoryStorage: BTreeMap-backed implementation with a byte quota,
//!   whose contents live exactly as long as the session holding it
//! - Mirror: The single JSON slot holding the serialized ledger

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod memory;
pub mod mirror;
pub mod session;

pub use error::{Result, StorageError};
pub use memory::{MemoryStorage, DEFAULT_QUOTA_BYTES};
pub use mirror::{Mirror, DEFAULT_STORAGE_KEY};
pub use session::SessionStorage;
