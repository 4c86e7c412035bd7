//! Engine error types
//!
//! The tick path never fails; everything here is input validation at the
//! configuration and lifecycle boundary.

use thiserror::Error;

/// Errors returned by the public engine surface
#[derive(Debug, Error)]
pub enum EngineError {
    /// An index or name outside the known tables
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A level or settings value that would make the simulation degenerate
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A lifecycle call made in a phase that does not allow it
    #[error("cannot {op} while {phase}")]
    InvalidState { op: &'static str, phase: &'static str },

    /// Settings JSON could not be parsed
    #[error("settings parse error: {0}")]
    Settings(#[from] serde_json::Error),

    /// Settings file could not be read
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
