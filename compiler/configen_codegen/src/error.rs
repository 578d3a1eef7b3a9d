//! Generation errors and their codes.
//!
//! Every error aborts the whole pass. Messages name the offending variable
//! and what was expected, since that is all the user needs to fix the input.

use std::fmt;
use std::io;
use std::path::PathBuf;

use configen_ir::{MappingError, ValueSourceError};
use thiserror::Error;

/// Error codes for all generator diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Input parsing
/// - E2xxx: Value rendering
/// - E3xxx: Encryption
/// - E4xxx: File system
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Malformed mapping file
    E1001,
    /// Malformed value source
    E1002,
    /// Declared variable has no value
    E2001,
    /// Value has the wrong dynamic type
    E2002,
    /// URL without a host
    E2003,
    /// Encrypted field without a usable key
    E3001,
    /// Cipher rejected key, IV or input
    E3002,
    /// Reading or writing a file failed
    E4001,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::E1001 => "E1001",
            Self::E1002 => "E1002",
            Self::E2001 => "E2001",
            Self::E2002 => "E2002",
            Self::E2003 => "E2003",
            Self::E3001 => "E3001",
            Self::E3002 => "E3002",
            Self::E4001 => "E4001",
        }
    }

    pub fn is_input_error(self) -> bool {
        matches!(self, Self::E1001 | Self::E1002)
    }

    pub fn is_encryption_error(self) -> bool {
        matches!(self, Self::E3001 | Self::E3002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fatal generation error.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid mapping file, {0}")]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    ValueSource(#[from] ValueSourceError),

    #[error("no configuration setting for variable name: {name}")]
    MissingValue { name: String },

    #[error("`{name}` is not the expected type: expected {expected}, found {found}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("found URL without host: `{value}` for setting: {name}")]
    InvalidUrl { name: String, value: String },

    #[error("`{name}`: {reason}")]
    EncryptionMisconfigured { name: String, reason: String },

    #[error("unable to encrypt `{name}`: {reason}")]
    EncryptionFailure { name: String, reason: String },

    #[error("failed to {action} at path {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Mapping(_) => ErrorCode::E1001,
            Self::ValueSource(_) => ErrorCode::E1002,
            Self::MissingValue { .. } => ErrorCode::E2001,
            Self::TypeMismatch { .. } => ErrorCode::E2002,
            Self::InvalidUrl { .. } => ErrorCode::E2003,
            Self::EncryptionMisconfigured { .. } => ErrorCode::E3001,
            Self::EncryptionFailure { .. } => ErrorCode::E3002,
            Self::Io { .. } => ErrorCode::E4001,
        }
    }

    pub(crate) fn type_mismatch(
        name: &str,
        expected: &'static str,
        found: &configen_ir::Value,
    ) -> Self {
        Self::TypeMismatch {
            name: name.to_string(),
            expected,
            found: found.kind(),
        }
    }
}
