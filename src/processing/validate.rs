//! Address/prefix grammar checks.
//!
//! Both grammars are fixed regular expressions compiled once per process.

use crate::error::CalcError;
use regex::Regex;
use std::sync::OnceLock;

const DEC_OCTET: &str = r"([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])";
const DOTTED_QUAD: &str =
    r"((25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])\.){3,3}(25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])";
const HEX: &str = "[0-9a-fA-F]";

static IPV4_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
static IPV6_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

fn ipv4_pattern() -> String {
    format!(r"^({DEC_OCTET}\.){{3}}{DEC_OCTET}/((0?[0-9])|([1-2][0-9])|(3[0-2]))$")
}

fn ipv6_pattern() -> String {
    let h = format!("{HEX}{{1,4}}");
    let forms = [
        // 1:2:3:4:5:6:7:8
        format!("({h}:){{7,7}}{h}"),
        // 1::  1:2:3:4:5:6:7::
        format!("({h}:){{1,7}}:"),
        // 1::8  1:2:3:4:5:6::8
        format!("({h}:){{1,6}}:{h}"),
        format!("({h}:){{1,5}}(:{h}){{1,2}}"),
        format!("({h}:){{1,4}}(:{h}){{1,3}}"),
        format!("({h}:){{1,3}}(:{h}){{1,4}}"),
        format!("({h}:){{1,2}}(:{h}){{1,5}}"),
        format!("{h}:((:{h}){{1,6}})"),
        // ::2:3:4:5:6:7:8  ::
        format!(":((:{h}){{1,7}}|:)"),
        // fe80::7:8%eth0
        format!("fe80:(:{HEX}{{0,4}}){{0,4}}%[0-9a-zA-Z]{{1,}}"),
        // ::ffff:255.255.255.255  ::ffff:0:255.255.255.255
        format!("::(ffff(:0{{1,4}}){{0,1}}:){{0,1}}{DOTTED_QUAD}"),
        // 2001:db8:3:4::192.0.2.33
        format!("({h}:){{1,4}}:{DOTTED_QUAD}"),
    ];
    format!(
        r"^({})/(64|([1-5][0-9])|(6[0-4])|(0?[1-9]))$",
        forms.join("|")
    )
}

fn grammar(
    cell: &'static OnceLock<Result<Regex, regex::Error>>,
    pattern: fn() -> String,
) -> Result<&'static Regex, CalcError> {
    cell.get_or_init(|| Regex::new(&pattern()))
        .as_ref()
        .map_err(|e| CalcError::Grammar(e.clone()))
}

/// Check `text` against the IPv4 `a.b.c.d/prefix` grammar, prefix 0-32.
///
/// `Ok(false)` means the text does not match; `Err` only if the grammar
/// itself cannot be built.
pub fn validate_ipv4(text: &str) -> Result<bool, CalcError> {
    Ok(grammar(&IPV4_REGEX, ipv4_pattern)?.is_match(text))
}

/// Check `text` against the IPv6 `address/prefix` grammar, prefix 1-64.
///
/// Accepts full, `::` compressed, link-local zone (`fe80::1%eth0`) and
/// embedded dotted-quad forms.
pub fn validate_ipv6(text: &str) -> Result<bool, CalcError> {
    Ok(grammar(&IPV6_REGEX, ipv6_pattern)?.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_valid() {
        for s in [
            "192.168.1.10/24",
            "0.0.0.0/0",
            "255.255.255.255/32",
            "10.0.0.1/8",
            "10.0.0.1/07",
            "172.16.254.3/30",
        ] {
            assert!(validate_ipv4(s).unwrap(), "{s} should be valid");
        }
    }

    #[test]
    fn test_ipv4_invalid() {
        for s in [
            "256.1.1.1/24",
            "10.0.0.1/33",
            "10.0.0.1",
            "10.0.0/24",
            "10.0.0.01/24",
            "10.0.0.1/",
            "10.0.0.1/24 ",
            "a.b.c.d/24",
            "",
        ] {
            assert!(!validate_ipv4(s).unwrap(), "{s} should be invalid");
        }
    }

    #[test]
    fn test_ipv6_valid() {
        for s in [
            "2001:0db8:0000:0000:0000:0000:0000:0001/64",
            "2001:db8::1/32",
            "::1/64",
            "::/1",
            "2001:db8::/48",
            "fe80::1%eth0/64",
            "::ffff:192.168.1.1/64",
            "2001:db8:3:4::192.0.2.33/64",
            "1:2:3:4:5:6:7::/16",
            "2001:db8::1/09",
        ] {
            assert!(validate_ipv6(s).unwrap(), "{s} should be valid");
        }
    }

    #[test]
    fn test_ipv6_invalid() {
        for s in [
            "2001:db8::1/65",
            "2001:db8::1/128",
            "2001:db8::1/0",
            "2001:db8::1",
            "2001:db8:::1/32",
            "12345::1/32",
            "g001:db8::1/32",
            "192.168.1.1/24",
        ] {
            assert!(!validate_ipv6(s).unwrap(), "{s} should be invalid");
        }
    }

    #[test]
    fn test_validate_is_repeatable() {
        let s = "10.1.2.3/16";
        assert_eq!(validate_ipv4(s).unwrap(), validate_ipv4(s).unwrap());
        let s = "2001:db8::1/32";
        assert_eq!(validate_ipv6(s).unwrap(), validate_ipv6(s).unwrap());
    }
}
