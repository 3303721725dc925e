//! Subnet calculation logic.
//!
//! This module contains the pure validate-then-compute engine:
//! - [`validate`] - Address/prefix grammars for both families
//! - [`parse`] - Splitting the prefix length off the address
//! - [`ipv4`] - Mask, wildcard and host range arithmetic
//! - [`ipv6`] - Expansion and network prefix truncation

mod ipv4;
mod ipv6;
mod parse;
mod validate;

use crate::error::{CalcError, Family};
use crate::models::{AddressInput, SubnetReport};

// Re-export public functions
pub use ipv4::{compute_ipv4, get_cidr_mask};
pub use ipv6::{boundary, compute_ipv6, expand_ipv6, truncate};
pub use parse::parse;
pub use validate::{validate_ipv4, validate_ipv6};

impl AddressInput {
    /// Split off the prefix, validate the text for its family and compute.
    pub fn process(&self) -> Result<SubnetReport, CalcError> {
        let family = self.family();
        let text = self.text();
        let parsed = parse(text)?;
        let valid = match family {
            Family::V4 => validate_ipv4(text)?,
            Family::V6 => validate_ipv6(text)?,
        };
        if !valid {
            return Err(CalcError::InvalidSyntax(family));
        }
        let prefix = u8::try_from(parsed.prefix).map_err(|_| CalcError::InvalidSyntax(family))?;
        match family {
            Family::V4 => Ok(SubnetReport::V4(compute_ipv4(&parsed.address, prefix)?)),
            Family::V6 => Ok(SubnetReport::V6(compute_ipv6(&parsed.address, prefix)?)),
        }
    }
}
