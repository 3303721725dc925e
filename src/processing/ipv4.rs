//! IPv4 mask, wildcard and host range.

use crate::error::{CalcError, Family};
use crate::models::Ipv4Report;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnetcalc::processing::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CalcError> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidSyntax(Family::V4))
    } else {
        let right_len = MAX_LENGTH - len;
        // widen so /0 shifts by 32 without overflow
        let all_bits = u32::MAX as u64;
        let mask = (all_bits >> right_len) << right_len;
        Ok(mask as u32)
    }
}

fn padded(octets: [u8; 4]) -> String {
    let [a, b, c, d] = octets;
    format!("{a:03}.{b:03}.{c:03}.{d:03}")
}

fn binary(octets: [u8; 4]) -> String {
    let [a, b, c, d] = octets;
    format!("{a:08b}. {b:08b}. {c:08b}. {d:08b}")
}

/// Compute the subnet fields of `address/prefix`.
///
/// Expects text that already passed [`validate_ipv4`](super::validate_ipv4).
pub fn compute_ipv4(address: &str, prefix: u8) -> Result<Ipv4Report, CalcError> {
    let addr: Ipv4Addr = address
        .parse()
        .map_err(|_| CalcError::InvalidSyntax(Family::V4))?;

    if prefix == MAX_LENGTH {
        return Ok(Ipv4Report {
            address: address.to_string(),
            prefix,
            mask: Ipv4Addr::BROADCAST.to_string(),
            mask_binary: binary([u8::MAX; 4]),
            wildcard: Ipv4Addr::UNSPECIFIED.to_string(),
            wildcard_binary: binary([0; 4]),
            lower: addr.to_string(),
            upper: addr.to_string(),
        });
    }

    let mask = get_cidr_mask(prefix)?.to_be_bytes();
    let wildcard = mask.map(|m| !m);
    let octets = addr.octets();

    let mut lower = [0u8; 4];
    let mut upper = [0u8; 4];
    for i in 0..4 {
        lower[i] = octets[i] & mask[i];
        upper[i] = lower[i] | wildcard[i];
    }

    // /0 prints its mask unpadded, like the /32 wildcard
    let mask_text = if prefix == 0 {
        Ipv4Addr::UNSPECIFIED.to_string()
    } else {
        padded(mask)
    };

    Ok(Ipv4Report {
        address: address.to_string(),
        prefix,
        mask: mask_text,
        mask_binary: binary(mask),
        wildcard: padded(wildcard),
        wildcard_binary: binary(wildcard),
        lower: Ipv4Addr::from(lower).to_string(),
        upper: Ipv4Addr::from(upper).to_string(),
    })
}
