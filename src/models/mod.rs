//! Domain models for IPv4 addressing.
//!
//! This module contains the core data structures:
//! - [`Ipv4Address`] - address plus contiguous mask, with derived values
//! - [`Mask`] - subnet mask and prefix length conversions
//! - [`AddressInput`] - the accepted input shapes
//! - [`AddrError`] - parse and range failures

mod error;
mod input;
mod ipv4;
mod mask;

// Re-export public types
pub use error::{AddrError, ErrorKind};
pub use input::AddressInput;
pub use ipv4::{
    broadcast_addr, broadcast_address, network_addr, network_address, number_of_hosts,
    Ipv4Address, Ipv4Info,
};
pub use mask::{
    cidr_to_mask, get_cidr_mask, hosts_for_cidr, mask_is_valid, mask_to_cidr, Mask, MAX_LENGTH,
};
