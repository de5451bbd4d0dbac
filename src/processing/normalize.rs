//! Normalisation of loosely shaped inputs into addresses and masks.
//!
//! Octets are clamped into 0..=255 and octet lists padded or truncated to
//! four elements; only unrecognised shapes and non-contiguous masks fail.

use crate::models::{AddrError, AddressInput, Mask, MAX_LENGTH};
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Four dot-separated digit runs. Range is not checked, values are clamped.
static DOTTED_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_regex() -> &'static Regex {
    DOTTED_REGEX.get_or_init(|| {
        Regex::new(r"^\d+\.\d+\.\d+\.\d+$").expect("Invalid Regex")
    })
}

/// Clamp a number into the octet range.
pub fn clamp_octet(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

/// Coerce a loosely typed element into an octet.
///
/// Blank and non-numeric elements become 0, fractions are truncated.
pub fn coerce_octet(field: &str) -> u8 {
    let field = field.trim();
    if field.is_empty() {
        return 0;
    }
    if let Ok(value) = field.parse::<i64>() {
        return clamp_octet(value);
    }
    match field.parse::<f64>() {
        Ok(value) if value.is_nan() => 0,
        Ok(value) => value.clamp(0.0, 255.0) as u8,
        Err(_) => {
            log::debug!("coerce_octet({field}) not numeric, using 0");
            0
        }
    }
}

/// Pad with zeros or truncate to exactly four octets.
fn fit_octets<I: IntoIterator<Item = u8>>(octets: I) -> [u8; 4] {
    let mut fitted = [0u8; 4];
    let mut count = 0;
    for (slot, oct) in fitted.iter_mut().zip(octets) {
        *slot = oct;
        count += 1;
    }
    if count < 4 {
        log::debug!("fit_octets() padded {count} octets to 4");
    }
    fitted
}

fn parse_dotted(text: &str) -> Result<Ipv4Addr, AddrError> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if !get_dotted_regex().is_match(&cleaned) {
        return Err(AddrError::InvalidAddress(text.to_string()));
    }
    let octets = fit_octets(cleaned.split('.').map(|part| {
        // digits only, so a parse failure means the value overflowed
        part.parse::<u64>().map_or(u8::MAX, |v| v.min(255) as u8)
    }));
    Ok(Ipv4Addr::from(octets))
}

/// Normalise any accepted address shape into an [`Ipv4Addr`].
///
/// # Examples
/// ```
/// use ipv4_calc::models::AddressInput;
/// use ipv4_calc::processing::any_to_address;
/// let addr = any_to_address(&AddressInput::from("10.0.21.256/24")).unwrap();
/// assert_eq!(addr.octets(), [10, 0, 21, 255]);
/// ```
pub fn any_to_address(input: &AddressInput) -> Result<Ipv4Addr, AddrError> {
    match input {
        AddressInput::Dotted(text) => parse_dotted(text),
        AddressInput::Combined(text) => {
            let addr = text.split('/').next().unwrap_or_default();
            parse_dotted(addr).map_err(|_| AddrError::InvalidAddress(text.clone()))
        }
        AddressInput::Cidr(_) => Err(AddrError::InvalidAddress(input.to_string())),
        AddressInput::Octets(octets) => Ok(Ipv4Addr::from(fit_octets(
            octets.iter().map(|&o| clamp_octet(o)),
        ))),
        AddressInput::Fields(fields) => Ok(Ipv4Addr::from(fit_octets(
            fields.iter().map(|f| coerce_octet(f)),
        ))),
    }
}

/// Normalise any accepted mask shape into a [`Mask`].
///
/// Prefix lengths are clamped into 0..=32. Dotted and octet masks go through
/// [`any_to_address`] and must have contiguous bits.
pub fn any_to_mask(input: &AddressInput) -> Result<Mask, AddrError> {
    match input {
        AddressInput::Cidr(len) => {
            let len = (*len).clamp(0, i64::from(MAX_LENGTH));
            Ok(Mask::from_cidr(len as u8))
        }
        AddressInput::Combined(text) => {
            let mask = text.split('/').nth(1).unwrap_or_default();
            any_to_mask(&AddressInput::from(mask))
                .map_err(|_| AddrError::InvalidMask(text.clone()))
        }
        _ => {
            let octets = any_to_address(input)
                .map_err(|_| AddrError::InvalidMask(input.to_string()))?
                .octets();
            Mask::try_from_octets(octets).map_err(|e| {
                log::warn!("any_to_mask({input}) rejected: {e}");
                AddrError::InvalidMask(input.to_string())
            })
        }
    }
}

/// Prefix length of a mask given in any accepted shape.
pub fn cidr_of(mask: &AddressInput) -> Result<u8, AddrError> {
    any_to_mask(mask).map(|m| m.cidr())
}
