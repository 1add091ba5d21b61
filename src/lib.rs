//! In-memory catalog of authors, magazines and the articles that join them.
//!
//! Construction and reference changes are validated and rejected with
//! [`DomainError::Validation`]; title and author-name changes are ignored,
//! magazine name/category changes are ignored only when invalid.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::Catalog;
pub use domain::errors::{DomainError, DomainResult};
