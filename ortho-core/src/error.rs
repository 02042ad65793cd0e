//! Error types for the core crate.

use thiserror::Error;

/// Text that does not name one of the three spatial axes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid axis '{0}', expected x, y or z")]
pub struct ParseAxisError(pub String);
