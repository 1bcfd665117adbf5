//! Error types for registry construction
//!
//! Checking and adaptation never fail; only building a registry from
//! caller-supplied formats can.

use thiserror::Error;

/// A format document broke one of the registry invariants
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("institution slug is empty after normalization")]
    EmptySlug,

    #[error("institution slug '{0}' appears more than once")]
    DuplicateSlug(String),

    #[error("institution '{0}' defines no chapters")]
    NoChapters(String),

    #[error("institution '{0}' defines no end matter")]
    NoEndMatter(String),

    #[error("registry has no default '{}' institution", crate::registry::DEFAULT_SLUG)]
    MissingDefault,
}
