//! Computed subnet reports.

use serde::Serialize;
use std::fmt;

/// Derived IPv4 subnet fields.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Ipv4Report {
    /// Address as supplied, without the prefix.
    pub address: String,
    /// Prefix length (0-32).
    pub prefix: u8,
    /// Network mask, zero padded dotted decimal.
    pub mask: String,
    /// Network mask as binary octets.
    pub mask_binary: String,
    /// Complement of the mask, zero padded dotted decimal.
    pub wildcard: String,
    /// Complement of the mask as binary octets.
    pub wildcard_binary: String,
    /// Network address.
    pub lower: String,
    /// Broadcast address.
    pub upper: String,
}

/// Full and network-truncated form of an IPv6 address.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Ipv6Report {
    pub address: String,
    pub network_address: String,
}

/// Result of one validate-then-compute cycle.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SubnetReport {
    V4(Ipv4Report),
    V6(Ipv6Report),
}

impl Ipv4Report {
    /// Label/value pairs of the text report, in print order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("IPv4:", format!("{}/{}", self.address, self.prefix)),
            ("Mask:", self.mask.clone()),
            ("Mask Binary:", self.mask_binary.clone()),
            ("Wildcard:", self.wildcard.clone()),
            ("Wildcard Binary:", self.wildcard_binary.clone()),
            ("Lower Bound:", self.lower.clone()),
            ("Upper Bound:", self.upper.clone()),
        ]
    }
}

impl Ipv6Report {
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("IPv6:", self.address.clone()),
            ("Network:", self.network_address.clone()),
        ]
    }
}

impl SubnetReport {
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        match self {
            SubnetReport::V4(r) => r.rows(),
            SubnetReport::V6(r) => r.rows(),
        }
    }

    /// Column width that fits the longest label plus two spaces.
    pub fn label_width(&self) -> usize {
        self.rows().iter().map(|(l, _)| l.len()).max().unwrap_or(0) + 2
    }
}

impl fmt::Display for SubnetReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.label_width();
        for (label, value) in self.rows() {
            writeln!(f, "{label:<width$}{value}")?;
        }
        Ok(())
    }
}
