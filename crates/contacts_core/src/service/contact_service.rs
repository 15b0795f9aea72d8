//! Contact use-case service.
//!
//! # Responsibility
//! - Expose contact reads to core callers.
//! - Turn the repository's duplicate probe into an enforceable check before
//!   a caller persists an updated contact.
//!
//! # Invariants
//! - Service APIs never bypass repository query contracts.

use crate::model::contact::{Contact, ContactId};
use crate::repo::contact_repo::{ContactRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors from contact use-cases.
#[derive(Debug)]
pub enum ServiceError {
    Repo(RepoError),
    /// Another contact already carries the identifier.
    DuplicateIdentifier {
        identifier: String,
        contact_id: ContactId,
    },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::DuplicateIdentifier {
                identifier,
                contact_id,
            } => write!(
                f,
                "identifier `{identifier}` of contact {contact_id} is already used by another contact"
            ),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::DuplicateIdentifier { .. } => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service wrapper for contact queries.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all contacts in ascending id order.
    pub fn list_contacts(&self) -> ServiceResult<Vec<Contact>> {
        Ok(self.repo.get_all()?)
    }

    /// Finds the contact carrying `identifier`, if exactly one does.
    pub fn find_contact(&self, identifier: &str) -> ServiceResult<Option<Contact>> {
        Ok(self.repo.get_by_identifier(identifier)?)
    }

    /// Checks that no other contact already uses `contact.identifier`.
    ///
    /// # Contract
    /// - Call before persisting an update to an existing contact.
    /// - The contact itself never counts as a collision.
    pub fn ensure_identifier_available(&self, contact: &Contact) -> ServiceResult<()> {
        if self.repo.contact_with_same_identifier_exists(contact)? {
            info!(
                "event=contact_identifier_check module=service status=rejected contact_id={}",
                contact.id
            );
            return Err(ServiceError::DuplicateIdentifier {
                identifier: contact.identifier.clone(),
                contact_id: contact.id,
            });
        }
        Ok(())
    }
}
