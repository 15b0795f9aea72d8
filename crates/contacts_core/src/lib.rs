//! Core data access for contacts.
//! Read-only queries over stored contacts plus the store/logging bootstrap.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactId};
pub use repo::contact_repo::{
    ContactRepository, RepoError, RepoResult, SingleRow, SqliteContactRepository,
};
pub use service::contact_service::{ContactService, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
