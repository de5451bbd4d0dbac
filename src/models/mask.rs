//! Subnet mask and CIDR prefix utilities.
//!
//! Provides the [`Mask`] type, which can only hold a contiguous run of one
//! bits followed by zero bits, and the raw octet conversions behind it.

use super::AddrError;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Lengths above 32 are clamped to 32.
///
/// # Examples
/// ```
/// use ipv4_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Expand a CIDR prefix length into four mask octets.
pub fn cidr_to_mask(len: u8) -> [u8; 4] {
    get_cidr_mask(len).to_be_bytes()
}

/// Count the one bits across all four octets.
///
/// Contiguity is not checked here: `[255, 0, 255, 0]` yields 16. Masks are
/// validated once, when a [`Mask`] is built.
pub fn mask_to_cidr(mask: [u8; 4]) -> u8 {
    mask.iter().map(|oct| oct.count_ones() as u8).sum()
}

/// True when the 32 bit pattern is a run of ones followed by a run of zeros.
pub fn mask_is_valid(mask: [u8; 4]) -> bool {
    let bits = u32::from_be_bytes(mask);
    bits == get_cidr_mask(bits.count_ones() as u8)
}

/// Usable host addresses for a prefix length: `2^(32 - len) - 2`.
///
/// /31 gives 0 and /32 gives -1; neither is special-cased.
pub fn hosts_for_cidr(len: u8) -> i64 {
    let len = len.min(MAX_LENGTH);
    (1i64 << (MAX_LENGTH - len)) - 2
}

/// A subnet mask whose bits are always contiguous.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Mask(Ipv4Addr);

impl Mask {
    /// The all-zero mask, /0.
    pub const UNSPECIFIED: Mask = Mask(Ipv4Addr::UNSPECIFIED);

    /// Build a mask from a prefix length, clamping lengths above 32.
    pub fn from_cidr(len: u8) -> Mask {
        Mask(Ipv4Addr::from(cidr_to_mask(len)))
    }

    /// Build a mask from raw octets, rejecting non-contiguous patterns.
    pub fn try_from_octets(octets: [u8; 4]) -> Result<Mask, AddrError> {
        if mask_is_valid(octets) {
            Ok(Mask(Ipv4Addr::from(octets)))
        } else {
            Err(AddrError::InvalidMask(Ipv4Addr::from(octets).to_string()))
        }
    }

    pub fn octets(&self) -> [u8; 4] {
        self.0.octets()
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.0
    }

    /// Prefix length of this mask.
    pub fn cidr(&self) -> u8 {
        mask_to_cidr(self.octets())
    }

    /// Inverted mask, e.g. `0.0.0.255` for /24.
    pub fn hostmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(!u32::from(self.0))
    }
}

impl Default for Mask {
    fn default() -> Self {
        Mask::UNSPECIFIED
    }
}

impl std::fmt::Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0), 0x00000000);
        assert_eq!(get_cidr_mask(8), 0xFF000000);
        assert_eq!(get_cidr_mask(12), 0xFFF00000);
        assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32), 0xFFFFFFFF);
        assert_eq!(get_cidr_mask(40), 0xFFFFFFFF);
    }

    #[test]
    fn test_cidr_to_mask() {
        assert_eq!(cidr_to_mask(0), [0, 0, 0, 0]);
        assert_eq!(cidr_to_mask(12), [255, 240, 0, 0]);
        assert_eq!(cidr_to_mask(18), [255, 255, 192, 0]);
        assert_eq!(cidr_to_mask(32), [255, 255, 255, 255]);
    }

    #[test]
    fn test_cidr_round_trip() {
        for len in 0..=MAX_LENGTH {
            assert_eq!(mask_to_cidr(cidr_to_mask(len)), len, "len={len}");
            assert_eq!(Mask::from_cidr(len).cidr(), len);
        }
    }

    #[test]
    fn test_mask_to_cidr_counts_bits() {
        assert_eq!(mask_to_cidr([255, 255, 192, 0]), 18);
        // not a valid mask, still counted
        assert_eq!(mask_to_cidr([255, 0, 255, 0]), 16);
    }

    #[test]
    fn test_mask_is_valid() {
        assert!(mask_is_valid([255, 240, 0, 0]));
        assert!(mask_is_valid([0, 0, 0, 0]));
        assert!(mask_is_valid([255, 255, 255, 255]));
        assert!(!mask_is_valid([255, 0, 255, 0]));
        assert!(!mask_is_valid([255, 255, 253, 0]));
        assert!(!mask_is_valid([0, 0, 0, 1]));
    }

    #[test]
    fn test_try_from_octets() {
        let mask = Mask::try_from_octets([255, 255, 255, 0]).unwrap();
        assert_eq!(mask.cidr(), 24);
        assert_eq!(mask.hostmask(), Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(mask.to_string(), "255.255.255.0");
        assert_eq!(
            Mask::try_from_octets([255, 255, 253, 0]).unwrap_err(),
            AddrError::InvalidMask("255.255.253.0".to_string())
        );
    }

    #[test]
    fn test_hosts_for_cidr() {
        assert_eq!(hosts_for_cidr(0), 4294967294);
        assert_eq!(hosts_for_cidr(8), 16777214);
        assert_eq!(hosts_for_cidr(24), 254);
        assert_eq!(hosts_for_cidr(30), 2);
        assert_eq!(hosts_for_cidr(31), 0);
        assert_eq!(hosts_for_cidr(32), -1);
    }

    proptest! {
        #[test]
        fn valid_iff_no_one_after_zero(bits in any::<u32>()) {
            let pattern = format!("{bits:032b}");
            let expected = !pattern.contains("01");
            prop_assert_eq!(mask_is_valid(bits.to_be_bytes()), expected);
        }

        #[test]
        fn from_cidr_is_always_valid(len in 0u8..=32) {
            prop_assert!(mask_is_valid(cidr_to_mask(len)));
        }
    }
}
