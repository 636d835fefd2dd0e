use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    Validation {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // No copy of the requested title is left on the shelf.
    Unavailable {
        message: String,
    },
    // The member already holds as many books as their tier allows.
    LimitExceeded {
        message: String,
    },
    NotBorrowed {
        message: String,
    },
    Io {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
    },
}

impl LibraryError {
    pub fn validation(message: &str) -> LibraryError {
        LibraryError::Validation { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str) -> LibraryError {
        LibraryError::Unavailable { message: message.to_string() }
    }

    pub fn limit_exceeded(message: &str) -> LibraryError {
        LibraryError::LimitExceeded { message: message.to_string() }
    }

    pub fn not_borrowed(message: &str) -> LibraryError {
        LibraryError::NotBorrowed { message: message.to_string() }
    }

    pub fn io(message: &str) -> LibraryError {
        LibraryError::Io { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str) -> LibraryError {
        LibraryError::Runtime { message: message.to_string() }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::io(format!("file io {:?}", err).as_str())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(format!("json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Unavailable { message } => {
                write!(f, "{}", message)
            }
            LibraryError::LimitExceeded { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotBorrowed { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Io { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TransactionKind {
    Issue,
    Return,
}

impl From<String> for TransactionKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "issue" => TransactionKind::Issue,
            "return" => TransactionKind::Return,
            _ => TransactionKind::Issue,
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TransactionKind::Issue => write!(f, "issue"),
            TransactionKind::Return => write!(f, "return"),
        }
    }
}
