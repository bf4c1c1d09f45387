use std::fmt;

/// Errors that can arise while encoding a request or decoding a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// A numeric field held something that is not a finite number.
    InvalidNumber { field: &'static str, value: String },
    /// The signing key was rejected by the MAC.
    InvalidKey,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InvalidNumber { field, value } => {
                write!(f, "Invalid {}: {:?}", field, value)
            }
            ProtocolError::InvalidKey => write!(f, "Invalid signing key"),
        }
    }
}

impl std::error::Error for ProtocolError {}
