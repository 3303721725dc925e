//! Caller supplied address text.

use crate::error::Family;

/// Raw `address/prefix` text as typed by the user, tagged with its family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressInput {
    V4(String),
    V6(String),
}

impl AddressInput {
    /// Pick the family from the text itself: anything with a `:` is IPv6.
    pub fn detect(text: &str) -> AddressInput {
        let text = text.trim();
        if text.contains(':') {
            AddressInput::V6(text.to_string())
        } else {
            AddressInput::V4(text.to_string())
        }
    }

    pub fn family(&self) -> Family {
        match self {
            AddressInput::V4(_) => Family::V4,
            AddressInput::V6(_) => Family::V6,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            AddressInput::V4(s) | AddressInput::V6(s) => s,
        }
    }
}

/// Address part and prefix length of an `address/prefix` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    pub address: String,
    pub prefix: u32,
}
