// # IP Address
//
// Dotted-quad IPv4 literal as typed by the user and stored in the backing
// file.
//
// ## Grammar
//
// Exactly four dot-separated groups, each one of:
// `25[0-5] | 2[0-4]\d | 1\d\d | [1-9]\d | \d`
//
// so `0` is a legal group but `00`, `010` and `256` are not.
//
// ## Ordering
//
// Addresses compare as plain text on the canonical dotted form, which is
// also the order used by `ls -a`. `193.51.31.154` sorts before
// `193.51.31.90`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Validated IPv4 address in canonical dotted form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IpAddress {
    // Field order matters: derived `Ord` must compare the text first.
    text: String,
    octets: [u8; 4],
}

impl IpAddress {
    /// Validate and wrap an address literal
    ///
    /// The input is taken verbatim; surrounding whitespace is rejected.
    pub fn new(input: &str) -> Result<Self> {
        let octets = parse_octets(input)
            .ok_or_else(|| Error::invalid_format(format!("invalid IP address format: {input}")))?;

        Ok(Self {
            text: input.to_string(),
            octets,
        })
    }

    /// The canonical dotted form
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The four numeric octets
    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }
}

/// Check an address literal without allocating
pub fn is_valid_address(input: &str) -> bool {
    parse_octets(input).is_some()
}

fn parse_octets(input: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut groups = input.split('.');

    for slot in octets.iter_mut() {
        *slot = parse_octet(groups.next()?)?;
    }

    if groups.next().is_some() {
        return None;
    }

    Some(octets)
}

fn parse_octet(group: &str) -> Option<u8> {
    let digits = group.as_bytes();
    if digits.is_empty() || digits.len() > 3 || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    // No leading zero on multi-digit groups
    if digits.len() > 1 && digits[0] == b'0' {
        return None;
    }
    group.parse().ok()
}

impl FromStr for IpAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for IpAddress {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses_round_trip() {
        for input in [
            "0.0.0.0",
            "1.2.3.4",
            "9.99.199.249",
            "193.51.31.90",
            "255.255.255.255",
            "10.0.250.1",
        ] {
            let ip = IpAddress::new(input).unwrap();
            assert_eq!(ip.to_string(), input);
            assert_eq!(ip.as_str(), input);
        }
    }

    #[test]
    fn test_octets() {
        let ip = IpAddress::new("193.51.31.154").unwrap();
        assert_eq!(ip.octets(), [193, 51, 31, 154]);
    }

    #[test]
    fn test_rejects_out_of_range_and_malformed() {
        for input in [
            "",
            "256.1.1.1",
            "1.2.3.300",
            "1.2.3",
            "1.2.3.4.5",
            "1.2.3.",
            ".1.2.3",
            "a.b.c.d",
            "1.2.3.4a",
            "01.2.3.4",
            "1.2.3.004",
            "1..2.3",
            " 1.2.3.4",
            "1.2.3.4 ",
            "+1.2.3.4",
            "1000.2.3.4",
        ] {
            assert!(IpAddress::new(input).is_err(), "accepted {input:?}");
            assert!(!is_valid_address(input));
        }
    }

    #[test]
    fn test_rejection_is_invalid_format() {
        let err = IpAddress::new("300.1.1.1").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
        assert!(err.to_string().contains("300.1.1.1"));
    }

    #[test]
    fn test_ordering_is_textual() {
        let a = IpAddress::new("193.51.31.154").unwrap();
        let b = IpAddress::new("193.51.31.90").unwrap();
        let c = IpAddress::new("193.51.25.12").unwrap();

        // Numerically 90 < 154, textually "154" < "90"
        assert!(a < b);
        assert!(c < a);
    }
}
