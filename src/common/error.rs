//! Recoverable gameplay errors.

use std::fmt;

use crate::plugins::enemies::registry::EnemyKindId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// An enemy kind id that is not in the catalog was requested.
    NotFound(EnemyKindId),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "unknown enemy kind id {}", id.0),
        }
    }
}

impl std::error::Error for RegistryError {}
