//! Error types for scroll locking
//!
//! Every failure here is non-fatal: the operation that produced it has
//! already been turned into a no-op by the time the caller sees the error.

/// Errors that can occur in scroll lock operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollLockError {
    /// A required argument was missing or unusable
    InvalidArgument {
        /// The public operation that was attempted
        op: &'static str,
        /// Why the argument was rejected
        reason: &'static str,
    },
}

impl ScrollLockError {
    /// Missing lock target on a touch-primary device.
    pub(crate) fn missing_target(op: &'static str) -> Self {
        Self::InvalidArgument {
            op,
            reason: "targetElement must be provided on touch-primary devices",
        }
    }
}

impl std::fmt::Display for ScrollLockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { op, reason } => {
                write!(f, "{} unsuccessful - {}", op, reason)
            }
        }
    }
}

impl std::error::Error for ScrollLockError {}

/// Result type alias for scroll lock operations
pub type ScrollLockResult<T> = Result<T, ScrollLockError>;
