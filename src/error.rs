//! Error kinds surfaced by the subnet engine and its front ends.

use std::fmt;

/// Address family, used to word validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    V4,
    V6,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Terminal outcome of a failed validate/compute cycle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// Address or prefix does not match the family grammar.
    #[error("invalid {0} address")]
    InvalidSyntax(Family),

    /// Missing `/` or non-numeric prefix suffix.
    #[error("problem with parsing")]
    UnparsablePrefix,

    /// Both address families were given.
    #[error("only one IP address can be specified")]
    ConflictingInput,

    /// Neither address family was given.
    #[error("an IPv4 or IPv6 address must be specified")]
    MissingInput,

    /// A built-in grammar failed to compile.
    #[error("address grammar failed to compile: {0}")]
    Grammar(#[from] regex::Error),
}
