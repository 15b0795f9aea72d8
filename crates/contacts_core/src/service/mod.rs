//! Use-case services layered over repositories.
//!
//! # Responsibility
//! - Own caller-side rules the repositories deliberately leave open.
//! - Stay storage-agnostic by depending only on repository traits.

pub mod contact_service;
