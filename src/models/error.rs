//! Error type shared by the address, mask and subnet operations.

use thiserror::Error;

/// Broad class of an [`AddrError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input shape not recognised, or mask bits not contiguous.
    Parse,
    /// Requested subnet count does not fit under 32 bits.
    Range,
}

/// Failure returned by normalisation and subnet partitioning.
///
/// Malformed octets are never an error: they are clamped or padded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddrError {
    #[error("Failed to parse '{0}' as IPv4 address.")]
    InvalidAddress(String),

    #[error("Failed to parse '{0}' as a contiguous subnet mask.")]
    InvalidMask(String),

    #[error("Cannot fit {requested} subnets under /{base_cidr}: prefix /{subnet_cidr} exceeds /32.")]
    SubnetOverflow {
        requested: u64,
        base_cidr: u8,
        subnet_cidr: u32,
    },
}

impl AddrError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AddrError::InvalidAddress(_) | AddrError::InvalidMask(_) => ErrorKind::Parse,
            AddrError::SubnetOverflow { .. } => ErrorKind::Range,
        }
    }
}
