//! # BassLink Effects - Layer 3: Production Handlers
//!
//! Stateless or self-contained implementations of the storage interface from
//! `basslink-core`. Test doubles for the session, location and navigation
//! collaborators live in `basslink-testkit`.

pub mod storage;

pub use storage::{FilesystemStorageHandler, MemoryStorageHandler, UnavailableStorageHandler};
