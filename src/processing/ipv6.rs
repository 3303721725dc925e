//! IPv6 expansion and network prefix truncation.

use crate::error::{CalcError, Family};
use crate::models::Ipv6Report;
use std::net::Ipv6Addr;

/// Number of bits in an IPv6 address.
pub const MAX_LENGTH: u8 = 128;

/// Expand any accepted textual form into eight 16-bit groups.
///
/// Drops a `%zone` suffix and resolves `::` and trailing dotted-quad forms.
pub fn expand_ipv6(address: &str) -> Result<[u16; 8], CalcError> {
    let address = address.split_once('%').map_or(address, |(a, _)| a);
    let addr: Ipv6Addr = address
        .parse()
        .map_err(|_| CalcError::InvalidSyntax(Family::V6))?;
    Ok(addr.segments())
}

/// Locate the prefix boundary for `prefix`.
///
/// Returns `(group, bit)` with groups counted 0 (most significant) to 7 and
/// bits 15 (MSB of the group) to 0, as `7 - (127 - prefix) / 16` and
/// `15 - (127 - prefix) % 16`. `None` when `prefix` covers all 128 bits.
pub fn boundary(prefix: u8) -> Option<(usize, u32)> {
    if prefix >= MAX_LENGTH {
        return None;
    }
    let rest = u32::from(MAX_LENGTH - 1 - prefix);
    let group = 7 - (rest / 16) as usize;
    let bit = 15 - rest % 16;
    Some((group, bit))
}

fn render(groups: &[u16; 8]) -> String {
    groups
        .iter()
        .map(|g| format!("{g:04x}"))
        .collect::<Vec<String>>()
        .join(":")
}

/// Zero the bits of the boundary group below the boundary bit and every
/// group after it.
pub fn truncate(groups: [u16; 8], prefix: u8) -> [u16; 8] {
    let mut network = groups;
    if let Some((group, bit)) = boundary(prefix) {
        network[group] = (network[group] >> bit) << bit;
        for g in network.iter_mut().skip(group + 1) {
            *g = 0;
        }
    }
    network
}

/// Compute the full and network forms of `address/prefix`.
///
/// Expects text that already passed [`validate_ipv6`](super::validate_ipv6).
pub fn compute_ipv6(address: &str, prefix: u8) -> Result<Ipv6Report, CalcError> {
    if prefix > MAX_LENGTH {
        return Err(CalcError::InvalidSyntax(Family::V6));
    }
    let groups = expand_ipv6(address)?;
    Ok(Ipv6Report {
        address: render(&groups),
        network_address: render(&truncate(groups, prefix)),
    })
}
