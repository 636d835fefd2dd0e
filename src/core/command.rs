use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Validation {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Unavailable {
        message: String,
    },
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
    Other {
        message: String,
    },
}

// Command abstracts a single user-visible operation executed at the
// interface boundary; it borrows the library context for one execution.
pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Validation { message } => {
                CommandError::Validation { message }
            }
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Unavailable { message } => {
                CommandError::Unavailable { message }
            }
            LibraryError::LimitExceeded { message } => {
                CommandError::LimitExceeded { message }
            }
            LibraryError::NotBorrowed { message } => {
                CommandError::NotBorrowed { message }
            }
            LibraryError::Io { message } => {
                CommandError::Io { message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message } => {
                CommandError::Other { message }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Validation { message } => {
                write!(f, "{}", message)
            }
            CommandError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            CommandError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CommandError::Unavailable { message } => {
                write!(f, "{}", message)
            }
            CommandError::LimitExceeded { message } => {
                write!(f, "{}", message)
            }
            CommandError::NotBorrowed { message } => {
                write!(f, "{}", message)
            }
            CommandError::Io { message } => {
                write!(f, "{}", message)
            }
            CommandError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CommandError::Other { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_build_command_error() {
        let _ = CommandError::Validation { message: "test".to_string() };
        let _ = CommandError::DuplicateKey { message: "test".to_string() };
        let _ = CommandError::NotFound { message: "test".to_string() };
        let _ = CommandError::Unavailable { message: "test".to_string() };
        let _ = CommandError::LimitExceeded { message: "test".to_string() };
        let _ = CommandError::NotBorrowed { message: "test".to_string() };
        let _ = CommandError::Io { message: "test".to_string() };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Other { message: "test".to_string() };
    }

    #[test]
    fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::validation("test")),
                         CommandError::Validation { message: _ }));
        assert!(matches!(CommandError::from(LibraryError::limit_exceeded("test")),
                         CommandError::LimitExceeded { message: _ }));
        assert!(matches!(CommandError::from(LibraryError::not_borrowed("test")),
                         CommandError::NotBorrowed { message: _ }));
        assert!(matches!(CommandError::from(LibraryError::runtime("test")),
                         CommandError::Other { message: _ }));
    }

    #[test]
    fn test_should_display_message_only() {
        let err = CommandError::NotFound { message: "book with isbn 111 not found".to_string() };
        assert_eq!("book with isbn 111 not found", err.to_string().as_str());
    }
}
