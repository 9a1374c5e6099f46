//! Error types for identifier parsing

use thiserror::Error;

/// Errors raised when turning raw strings into core identifiers.
///
/// The matching engine itself never fails; these only surface at the edges
/// where a caller hands in an untyped persona or widget tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    #[error("Unknown widget type: {0}")]
    UnknownWidgetType(String),
}

pub type Result<T> = std::result::Result<T, Error>;
