//! Split `address/prefix` text.

use crate::error::CalcError;
use crate::models::ParsedAddress;

/// Split `text` on its last `/` into the address and the prefix length.
///
/// A missing `/` or a non-numeric prefix is reported as
/// [`CalcError::UnparsablePrefix`]. Prefix `0` is a value; range checks
/// belong to the family grammar.
pub fn parse(text: &str) -> Result<ParsedAddress, CalcError> {
    let (address, prefix) = text.rsplit_once('/').ok_or(CalcError::UnparsablePrefix)?;
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalcError::UnparsablePrefix);
    }
    // all digits, so only overflow can fail
    let prefix: u32 = prefix.parse().unwrap_or(u32::MAX);
    Ok(ParsedAddress {
        address: address.to_string(),
        prefix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok() {
        let p = parse("192.168.1.10/24").unwrap();
        assert_eq!(p.address, "192.168.1.10");
        assert_eq!(p.prefix, 24);

        let p = parse("fe80::1%eth0/64").unwrap();
        assert_eq!(p.address, "fe80::1%eth0");
        assert_eq!(p.prefix, 64);
    }

    #[test]
    fn test_parse_zero_and_leading_zero() {
        assert_eq!(parse("0.0.0.0/0").unwrap().prefix, 0);
        assert_eq!(parse("10.0.0.1/07").unwrap().prefix, 7);
    }

    #[test]
    fn test_parse_out_of_range_is_numeric() {
        assert_eq!(parse("10.0.0.1/300").unwrap().prefix, 300);
        assert_eq!(parse("2001:db8::1/1000").unwrap().prefix, 1000);
        assert_eq!(parse("10.0.0.1/99999999999").unwrap().prefix, u32::MAX);
    }

    #[test]
    fn test_parse_unparsable() {
        for s in ["10.0.0.1", "10.0.0.1/", "10.0.0.1/x", "10.0.0.1/-1", "10.0.0.1/+4", "10.0.0.1/2a"] {
            assert_eq!(parse(s), Err(CalcError::UnparsablePrefix), "{s}");
        }
    }
}
