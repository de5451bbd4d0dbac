//! CSV output formatting for info snapshots and subnet plans.

use super::terminal::format_field;
use crate::models::{broadcast_addr, Ipv4Info};
use crate::processing::SubnetPlan;
use itertools::Itertools;

/// One CSV header plus one row describing the address.
pub fn info_csv(info: &Ipv4Info) -> String {
    let header = [
        "address",
        "cidr",
        "mask",
        "network_address",
        "broadcast_address",
        "number_of_hosts",
    ]
    .iter()
    .map(|h| format_field(h, 0))
    .join(",");
    let row = [
        format_field(info.address, 17),
        format_field(info.cidr, 4),
        format_field(info.mask, 17),
        format_field(info.network_address, 17),
        format_field(info.broadcast_address, 17),
        format_field(info.number_of_hosts, 12),
    ]
    .join(",");
    format!("{header}\n{row}\n")
}

/// One CSV header plus one row per subnet.
pub fn plan_csv(plan: &SubnetPlan) -> String {
    let mut out = String::from(r#""cnt","subnet_cidr","subnet_mask","broadcast","hosts""#);
    out.push('\n');
    for (i, subnet) in plan.subnets.iter().enumerate() {
        let row = [
            format_field(i + 1, 6),
            format_field(format!("{subnet}/{}", plan.subnet_cidr), 20),
            format_field(plan.subnet_mask, 17),
            format_field(broadcast_addr(*subnet, plan.subnet_mask), 17),
            format_field(plan.hosts_per_subnet, 12),
        ]
        .join(",");
        out.push_str(&row);
        out.push('\n');
    }
    log::debug!("plan_csv() rendered {} rows", plan.subnets.len());
    out
}
