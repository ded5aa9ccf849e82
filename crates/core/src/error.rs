//! Error types for Tracklet operations.

use crate::record::Timestamp;
use alloc::string::String;
use core::fmt;

/// Result type alias for Tracklet operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for Tracklet operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A remote call through the transport collaborator failed.
    Transport {
        operation: String,
        message: String,
    },
    /// A mutation is already in flight for the scope.
    ///
    /// `scope` is `None` when the conflict is with an all-scope mutation.
    ScopeBusy {
        scope: Option<Timestamp>,
    },
    /// No aggregate carries the given scope key.
    ScopeNotFound {
        scope: Timestamp,
    },
    /// The ticket does not name an in-flight mutation.
    UnknownTicket {
        ticket: u64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport { operation, message } => {
                write!(f, "Transport failure during {}: {}", operation, message)
            }
            Error::ScopeBusy { scope: Some(scope) } => {
                write!(f, "Mutation already in flight for scope {}", scope)
            }
            Error::ScopeBusy { scope: None } => {
                write!(f, "Mutation already in flight across all scopes")
            }
            Error::ScopeNotFound { scope } => {
                write!(f, "No aggregate found for scope {}", scope)
            }
            Error::UnknownTicket { ticket } => {
                write!(f, "Unknown mutation ticket: {}", ticket)
            }
        }
    }
}

impl Error {
    /// Creates a transport failure error.
    pub fn transport(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Transport {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Creates a scope-busy error for a single scope.
    pub fn scope_busy(scope: Timestamp) -> Self {
        Error::ScopeBusy { scope: Some(scope) }
    }

    /// Creates a scope-busy error for an all-scope conflict.
    pub fn all_scopes_busy() -> Self {
        Error::ScopeBusy { scope: None }
    }

    /// Creates a scope-not-found error.
    pub fn scope_not_found(scope: Timestamp) -> Self {
        Error::ScopeNotFound { scope }
    }

    /// Creates an unknown-ticket error.
    pub fn unknown_ticket(ticket: u64) -> Self {
        Error::UnknownTicket { ticket }
    }
}
