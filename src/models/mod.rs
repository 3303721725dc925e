//! Domain models for subnet calculation.
//!
//! This module contains the data structures passed between the front ends and
//! the engine:
//! - [`AddressInput`] - Raw `address/prefix` text tagged with its family
//! - [`ParsedAddress`] - Address text split from its prefix length
//! - [`Ipv4Report`], [`Ipv6Report`] and [`SubnetReport`] - Computed results

mod input;
mod report;

pub use input::{AddressInput, ParsedAddress};
pub use report::{Ipv4Report, Ipv6Report, SubnetReport};
