//! Tagged input accepted wherever an address or a mask is expected.

use itertools::Itertools;
use serde::{Deserialize, Deserializer};

/// An address or mask in one of the accepted shapes.
///
/// Text is classified by [`From<&str>`]:
/// - contains `/` → [`AddressInput::Combined`] (`"10.0.0.1/24"`, `"/24"`)
/// - optional sign and digits only → [`AddressInput::Cidr`] (`"24"`)
/// - blank → `Cidr(0)`
/// - anything else → [`AddressInput::Dotted`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressInput {
    /// `a.b.c.d`
    Dotted(String),
    /// `a.b.c.d/pp`, `a.b.c.d/m.m.m.m` or `/pp`
    Combined(String),
    /// Bare prefix length.
    Cidr(i64),
    /// Numeric octets, padded or truncated to four.
    Octets(Vec<i64>),
    /// Loosely typed octets; non-numeric elements count as 0.
    Fields(Vec<String>),
}

impl AddressInput {
    /// Read a prefix length from a digit string, saturating on overflow.
    fn parse_cidr(s: &str) -> Option<i64> {
        let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(s.parse::<i64>().unwrap_or(if s.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }))
    }
}

impl From<&str> for AddressInput {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.contains('/') {
            AddressInput::Combined(s.to_string())
        } else if s.is_empty() {
            AddressInput::Cidr(0)
        } else if let Some(len) = AddressInput::parse_cidr(s) {
            AddressInput::Cidr(len)
        } else {
            AddressInput::Dotted(s.to_string())
        }
    }
}

impl From<String> for AddressInput {
    fn from(s: String) -> Self {
        AddressInput::from(s.as_str())
    }
}

impl From<[u8; 4]> for AddressInput {
    fn from(octets: [u8; 4]) -> Self {
        AddressInput::Octets(octets.iter().map(|&o| i64::from(o)).collect())
    }
}

impl From<Vec<i64>> for AddressInput {
    fn from(octets: Vec<i64>) -> Self {
        AddressInput::Octets(octets)
    }
}

impl From<u8> for AddressInput {
    fn from(len: u8) -> Self {
        AddressInput::Cidr(i64::from(len))
    }
}

impl From<i64> for AddressInput {
    fn from(len: i64) -> Self {
        AddressInput::Cidr(len)
    }
}

impl From<std::net::Ipv4Addr> for AddressInput {
    fn from(addr: std::net::Ipv4Addr) -> Self {
        AddressInput::from(addr.octets())
    }
}

impl std::fmt::Display for AddressInput {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AddressInput::Dotted(s) | AddressInput::Combined(s) => write!(f, "{s}"),
            AddressInput::Cidr(len) => write!(f, "/{len}"),
            AddressInput::Octets(octets) => write!(f, "[{}]", octets.iter().join(", ")),
            AddressInput::Fields(fields) => write!(f, "[{}]", fields.iter().join(", ")),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInput {
    Number(i64),
    Text(String),
    Numbers(Vec<i64>),
    Mixed(Vec<RawField>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl<'de> Deserialize<'de> for AddressInput {
    fn deserialize<D>(deserializer: D) -> Result<AddressInput, D::Error>
    where
        D: Deserializer<'de>,
    {
        let input = match RawInput::deserialize(deserializer)? {
            RawInput::Number(len) => AddressInput::Cidr(len),
            RawInput::Text(s) => AddressInput::from(s),
            RawInput::Numbers(octets) => AddressInput::Octets(octets),
            RawInput::Mixed(fields) => AddressInput::Fields(
                fields
                    .into_iter()
                    .map(|field| match field {
                        RawField::Number(n) => n.to_string(),
                        RawField::Text(s) => s,
                        RawField::Other(_) => String::new(),
                    })
                    .collect(),
            ),
        };
        Ok(input)
    }
}
