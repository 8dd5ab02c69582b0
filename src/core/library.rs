use std::fmt;
use std::fmt::{Display, Formatter};

// LibraryError is raised by the storage layer. It never leaves the catalog
// service; see CatalogError for the outcomes callers observe.
#[derive(Debug)]
pub enum LibraryError {
    // The (title, author_first_name, author_last_name) constraint rejected a write.
    UniqueViolation {
        message: String,
        constraint: Option<String>,
    },
    Database {
        message: String,
        reason_code: Option<String>,
    },
    // Pool exhausted, closed, or the server could not be reached.
    Unavailable {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn unique_violation(message: &str, constraint: Option<String>) -> LibraryError {
        LibraryError::UniqueViolation { message: message.to_string(), constraint }
    }

    pub fn database(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Unavailable { message: message.to_string(), reason_code }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self, LibraryError::UniqueViolation { .. })
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::UniqueViolation { message, constraint } => {
                write!(f, "{} {:?}", message, constraint)
            }
            LibraryError::Database { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Unavailable { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for Repository .
pub type LibraryResult<T> = Result<T, LibraryError>;
