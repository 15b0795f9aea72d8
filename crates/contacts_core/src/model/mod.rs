//! Domain model for contact records.
//!
//! # Invariants
//! - Every contact is identified by a store-assigned `ContactId`.
//! - `identifier` is intended to be unique, but the model does not enforce it.

pub mod contact;
