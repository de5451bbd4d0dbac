//! IPv4 address with an associated subnet mask.
//!
//! Provides the [`Ipv4Address`] struct and the derived values it reports:
//! network and broadcast addresses, host count, prefix length and subnets.

use super::{hosts_for_cidr, AddrError, AddressInput, Mask};
use crate::processing::{any_to_address, any_to_mask, plan_subnets, SubnetPlan};
use serde::Serialize;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Network address of `address` under `mask`: octet-wise AND.
pub fn network_addr(address: Ipv4Addr, mask: Mask) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(address) & u32::from(mask.addr()))
}

/// Broadcast address of `address` under `mask`: network OR inverted mask.
pub fn broadcast_addr(address: Ipv4Addr, mask: Mask) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(network_addr(address, mask)) | u32::from(mask.hostmask()))
}

/// Network address for an address and mask in any accepted shape.
///
/// # Examples
/// ```
/// use ipv4_calc::models::network_address;
/// let net = network_address(&[192u8, 168, 1, 88].into(), &"255.255.255.0".into()).unwrap();
/// assert_eq!(net.octets(), [192, 168, 1, 0]);
/// ```
pub fn network_address(
    address: &AddressInput,
    mask: &AddressInput,
) -> Result<Ipv4Addr, AddrError> {
    Ok(network_addr(any_to_address(address)?, any_to_mask(mask)?))
}

/// Broadcast address for an address and mask in any accepted shape.
pub fn broadcast_address(
    address: &AddressInput,
    mask: &AddressInput,
) -> Result<Ipv4Addr, AddrError> {
    Ok(broadcast_addr(any_to_address(address)?, any_to_mask(mask)?))
}

/// Usable host addresses for a mask in any accepted shape.
pub fn number_of_hosts(mask: &AddressInput) -> Result<i64, AddrError> {
    Ok(hosts_for_cidr(any_to_mask(mask)?.cidr()))
}

/// Snapshot of everything derived from an [`Ipv4Address`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ipv4Info {
    pub address: Ipv4Addr,
    pub cidr: u8,
    pub mask: Mask,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    pub number_of_hosts: i64,
}

/// IPv4 address together with a contiguous subnet mask.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Ipv4Address {
    address: Ipv4Addr,
    mask: Mask,
}

impl Default for Ipv4Address {
    fn default() -> Self {
        Ipv4Address {
            address: Ipv4Addr::UNSPECIFIED,
            mask: Mask::UNSPECIFIED,
        }
    }
}

impl Ipv4Address {
    /// `0.0.0.0` with mask `0.0.0.0`.
    pub fn new() -> Ipv4Address {
        Ipv4Address::default()
    }

    /// One input supplies both address and mask, e.g. `"10.0.21.37/24"`.
    ///
    /// A bare dotted address is read as its own mask, so `"10.0.21.37"`
    /// fails with [`AddrError::InvalidMask`].
    pub fn from_combined(input: impl Into<AddressInput>) -> Result<Ipv4Address, AddrError> {
        let input = input.into();
        let mask = any_to_mask(&input)?;
        let address = any_to_address(&input)?;
        Ok(Ipv4Address { address, mask })
    }

    /// Address and mask given separately, each in any accepted shape.
    pub fn with_mask(
        address: impl Into<AddressInput>,
        mask: impl Into<AddressInput>,
    ) -> Result<Ipv4Address, AddrError> {
        let mask = any_to_mask(&mask.into())?;
        let address = any_to_address(&address.into())?;
        Ok(Ipv4Address { address, mask })
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Prefix length, counted from the stored mask's one bits.
    pub fn cidr(&self) -> u8 {
        self.mask.cidr()
    }

    pub fn network(&self) -> Ipv4Addr {
        network_addr(self.address, self.mask)
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_addr(self.address, self.mask)
    }

    /// `2^(32 - cidr) - 2`; negative for /32.
    pub fn number_of_hosts(&self) -> i64 {
        hosts_for_cidr(self.cidr())
    }

    /// Split this block into `count` equally sized subnets.
    pub fn subnets(&self, count: i64) -> Result<SubnetPlan, AddrError> {
        plan_subnets(self.address, self.mask, count)
    }

    pub fn info(&self) -> Ipv4Info {
        Ipv4Info {
            address: self.address,
            cidr: self.cidr(),
            mask: self.mask,
            network_address: self.network(),
            broadcast_address: self.broadcast(),
            number_of_hosts: self.number_of_hosts(),
        }
    }
}

impl FromStr for Ipv4Address {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Address::from_combined(s)
    }
}

impl std::fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.address, self.cidr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unspecified() {
        let ip = Ipv4Address::new();
        assert_eq!(ip.address(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(ip.mask().octets(), [0, 0, 0, 0]);
        assert_eq!(ip.to_string(), "0.0.0.0/0");
    }

    #[test]
    fn test_from_combined() {
        let ip = Ipv4Address::from_combined("192.168.1.88/24").unwrap();
        assert_eq!(ip.address(), Ipv4Addr::new(192, 168, 1, 88));
        assert_eq!(ip.cidr(), 24);
        assert_eq!(ip.network(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(ip.broadcast(), Ipv4Addr::new(192, 168, 1, 255));

        let ip: Ipv4Address = "10.0.0.1/255.255.0.0".parse().unwrap();
        assert_eq!(ip.cidr(), 16);

        assert_eq!(
            Ipv4Address::from_combined("10.0.21.37").unwrap_err(),
            AddrError::InvalidMask("10.0.21.37".to_string())
        );
        // a valid mask can stand in for both
        let ip = Ipv4Address::from_combined("255.255.0.0").unwrap();
        assert_eq!(ip.network(), Ipv4Addr::new(255, 255, 0, 0));
    }

    #[test]
    fn test_with_mask() {
        let ip = Ipv4Address::with_mask("10.0.21.37", "255.0.0.0").unwrap();
        assert_eq!(ip.cidr(), 8);
        assert_eq!(ip.address(), Ipv4Addr::new(10, 0, 21, 37));

        let ip = Ipv4Address::with_mask([10u8, 0, 21, 37], 12u8).unwrap();
        assert_eq!(ip.mask().octets(), [255, 240, 0, 0]);

        assert!(Ipv4Address::with_mask("10.0.21.37", [255u8, 0, 255, 0]).is_err());
        assert!(Ipv4Address::with_mask("nope", 8u8).is_err());
    }

    #[test]
    fn test_network_and_broadcast_address() {
        let addr = AddressInput::from([192u8, 168, 1, 88]);
        for mask in ["255.255.255.0", "/24", "24"] {
            let mask = AddressInput::from(mask);
            assert_eq!(
                network_address(&addr, &mask).unwrap().octets(),
                [192, 168, 1, 0]
            );
            assert_eq!(
                broadcast_address(&addr, &mask).unwrap().octets(),
                [192, 168, 1, 255]
            );
        }
        assert!(network_address(&addr, &"255.0.255.0".into()).is_err());
        assert!(broadcast_address(&"24".into(), &"/24".into()).is_err());
    }

    #[test]
    fn test_number_of_hosts() {
        assert_eq!(number_of_hosts(&"255.255.255.0".into()).unwrap(), 254);
        assert_eq!(number_of_hosts(&[255u8, 255, 255, 0].into()).unwrap(), 254);
        assert_eq!(number_of_hosts(&"/24".into()).unwrap(), 254);
        assert_eq!(number_of_hosts(&24u8.into()).unwrap(), 254);
        assert_eq!(number_of_hosts(&32u8.into()).unwrap(), -1);
        assert!(number_of_hosts(&"192.168.1.1".into()).is_err());
    }

    #[test]
    fn test_info() {
        let ip = Ipv4Address::with_mask("10.0.21.37", "255.0.0.0").unwrap();
        let info = ip.info();
        assert_eq!(info.address, Ipv4Addr::new(10, 0, 21, 37));
        assert_eq!(info.cidr, 8);
        assert_eq!(info.mask.octets(), [255, 0, 0, 0]);
        assert_eq!(info.network_address, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(info.broadcast_address, Ipv4Addr::new(10, 255, 255, 255));
        assert_eq!(info.number_of_hosts, 16777214);
        assert_eq!(ip.info(), info);
    }

    #[test]
    fn test_info_slash_12() {
        let info = Ipv4Address::from_combined("172.16.0.0/12").unwrap().info();
        assert_eq!(info.mask.octets(), [255, 240, 0, 0]);
        assert_eq!(info.broadcast_address, Ipv4Addr::new(172, 31, 255, 255));
        assert_eq!(info.number_of_hosts, 1048574);
    }

    #[test]
    fn test_subnets_from_instance() {
        let ip = Ipv4Address::from_combined("172.16.0.0/12").unwrap();
        let plan = ip.subnets(7).unwrap();
        assert_eq!(plan.subnet_cidr, 15);
        assert_eq!(plan.subnets.last(), Some(&Ipv4Addr::new(172, 28, 0, 0)));
        assert!(Ipv4Address::from_combined("192.168.1.1/24")
            .unwrap()
            .subnets(1337)
            .is_err());
    }

    #[test]
    fn test_serialize_info() {
        let info = Ipv4Address::from_combined("192.168.1.88/24").unwrap().info();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["mask"], "255.255.255.0");
        assert_eq!(json["network_address"], "192.168.1.0");
        assert_eq!(json["number_of_hosts"], 254);
    }
}
