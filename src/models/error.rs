//! Validation errors raised while parsing a CIDR string.

use std::error::Error;
use std::fmt;

pub const INVALID_CIDR: &str = "Invalid CIDR('xxx.xxx.xxx.xxx/xx')";
pub const INVALID_IP_ADDRESS: &str = "Invalid IP address";
pub const IP_OUT_OF_RANGE: &str = "IP address out of range";
pub const MASK_OUT_OF_RANGE: &str = "Subnet mask out of range";

/// Broad category of a [`CidrError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The string does not have the `a.b.c.d/n` shape.
    Format,
    /// A number was parsed but lies outside its allowed bounds.
    Range,
}

/// Error returned by [`crate::models::parse_cidr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    Format(String),
    Range(String),
}

impl CidrError {
    pub fn format(msg: &str) -> Self {
        CidrError::Format(msg.to_string())
    }

    pub fn range(msg: &str) -> Self {
        CidrError::Range(msg.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CidrError::Format(_) => ErrorKind::Format,
            CidrError::Range(_) => ErrorKind::Range,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CidrError::Format(msg) | CidrError::Range(msg) => msg,
        }
    }
}

impl fmt::Display for CidrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Error for CidrError {}
