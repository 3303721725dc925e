//! Subnet calculator for IPv4 and IPv6 `address/prefix` notation.
//!
//! The engine in [`processing`] is pure: validate the text, split off the
//! prefix and derive the subnet fields. [`cli`] and [`web`] are thin front
//! ends that render its [`models::SubnetReport`].

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod web;

pub use error::{CalcError, Family};
pub use models::{AddressInput, SubnetReport};

/// Validate and compute one address, whichever family it is.
///
/// # Examples
/// ```
/// use subnetcalc::{calculate, AddressInput, SubnetReport};
/// let report = calculate(&AddressInput::V4("10.1.2.3/8".to_string())).unwrap();
/// if let SubnetReport::V4(r) = report {
///     assert_eq!(r.upper, "10.255.255.255");
/// }
/// ```
pub fn calculate(input: &AddressInput) -> Result<SubnetReport, CalcError> {
    input.process()
}
