//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define read-only data access contracts over stored contacts.
//! - Keep SQL details out of service/caller orchestration.
//!
//! # Invariants
//! - Repositories never write; lifecycle belongs to callers.
//! - Persistence failures surface unchanged as `RepoError::Db`.

pub mod contact_repo;
