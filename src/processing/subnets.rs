//! Splitting an address block into equally sized subnets.

use super::normalize::{any_to_address, any_to_mask};
use crate::models::{hosts_for_cidr, AddrError, AddressInput, Mask, MAX_LENGTH};
use serde::Serialize;
use std::net::Ipv4Addr;

const PREALLOCATE_LIMIT: u64 = 1 << 16;

/// Result of partitioning one block into N subnets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetPlan {
    /// Prefix length of every subnet.
    pub subnet_cidr: u8,
    /// Mask matching `subnet_cidr`.
    pub subnet_mask: Mask,
    /// Number of subnets requested.
    pub used_subnets: u64,
    /// Subnets that fit under the new prefix but were not requested.
    pub unused_subnets: u64,
    /// Usable hosts in each subnet.
    pub hosts_per_subnet: i64,
    /// Network address of each subnet, lowest first.
    pub subnets: Vec<Ipv4Addr>,
}

/// Smallest `k` with `2^k >= count`; 0 for counts of 0 and 1.
pub fn extra_bits(count: u64) -> u32 {
    if count <= 1 {
        0
    } else {
        u64::BITS - (count - 1).leading_zeros()
    }
}

/// Octet index and step used to move from one subnet to the next.
fn hop_for(subnet_cidr: u8) -> (usize, u16) {
    let octet = if subnet_cidr == 0 {
        0
    } else {
        usize::from(subnet_cidr - 1) / 8
    };
    let hop = match subnet_cidr % 8 {
        0 => 1,
        rem => 1u16 << (8 - rem),
    };
    (octet, hop)
}

/// Add `hop` to one octet and carry any overflow towards octet 0.
fn next_subnet(current: [u8; 4], octet: usize, hop: u16) -> [u8; 4] {
    let mut wide = current.map(u16::from);
    wide[octet] += hop;
    for j in (1..4).rev() {
        if wide[j] >= 256 {
            wide[j] -= 256;
            wide[j - 1] += 1;
        }
    }
    // subnets never leave the base block, so octet 0 stays below 256
    wide.map(|oct| oct as u8)
}

/// Partition the block `network / base_mask` into `count` subnets.
///
/// The sign of `count` is ignored. A count of 0 still lists the base
/// network once.
pub fn plan_subnets(
    address: Ipv4Addr,
    base_mask: Mask,
    count: i64,
) -> Result<SubnetPlan, AddrError> {
    let requested = count.unsigned_abs();
    let bits = extra_bits(requested);
    let base_cidr = base_mask.cidr();
    let subnet_cidr = u32::from(base_cidr) + bits;
    if subnet_cidr > u32::from(MAX_LENGTH) {
        log::warn!(
            "plan_subnets({address}/{base_cidr}, {requested}) needs /{subnet_cidr}, longer than /32"
        );
        return Err(AddrError::SubnetOverflow {
            requested,
            base_cidr,
            subnet_cidr,
        });
    }
    let subnet_cidr = subnet_cidr as u8;
    let (octet, hop) = hop_for(subnet_cidr);
    log::debug!(
        "plan_subnets({address}/{base_cidr}, {requested}) -> /{subnet_cidr} octet={octet} hop={hop}"
    );

    let network = u32::from(address) & u32::from(base_mask.addr());
    let mut current = network.to_be_bytes();
    let mut subnets = Vec::with_capacity(requested.clamp(1, PREALLOCATE_LIMIT) as usize);
    subnets.push(Ipv4Addr::from(current));
    for _ in 1..requested {
        current = next_subnet(current, octet, hop);
        subnets.push(Ipv4Addr::from(current));
    }

    Ok(SubnetPlan {
        subnet_cidr,
        subnet_mask: Mask::from_cidr(subnet_cidr),
        used_subnets: requested,
        unused_subnets: (1u64 << bits) - requested,
        hosts_per_subnet: hosts_for_cidr(subnet_cidr),
        subnets,
    })
}

/// Normalise `address` and `mask`, then partition into `count` subnets.
///
/// # Examples
/// ```
/// use ipv4_calc::models::AddressInput;
/// use ipv4_calc::processing::get_subnets;
/// let plan = get_subnets(&"172.16.0.0".into(), &"255.240.0.0".into(), 7).unwrap();
/// assert_eq!(plan.subnet_cidr, 15);
/// assert_eq!(plan.subnets.len(), 7);
/// ```
pub fn get_subnets(
    address: &AddressInput,
    mask: &AddressInput,
    count: i64,
) -> Result<SubnetPlan, AddrError> {
    let address = any_to_address(address)?;
    let mask = any_to_mask(mask)?;
    plan_subnets(address, mask, count)
}
