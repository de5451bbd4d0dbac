//! Terminal output utilities.
//!
//! Provides the labelled, coloured text rendering and the field helpers
//! shared with CSV output.

use crate::models::{broadcast_addr, Ipv4Info};
use crate::processing::SubnetPlan;
use colored::Colorize;
use std::error::Error;
use std::fmt::Write;

/// Width of the label column in text output.
const LABEL_WIDTH: usize = 18;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

fn label(out: &mut String, name: &str, value: impl std::fmt::Display) -> std::fmt::Result {
    let name = format!("{name}:");
    writeln!(
        out,
        "{name} {value}",
        name = format!("{name:<LABEL_WIDTH$}").bold(),
        value = value.to_string().green()
    )
}

/// Render an info snapshot as labelled lines.
pub fn info_text(info: &Ipv4Info) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();
    label(&mut out, "address", info.address)?;
    label(&mut out, "cidr", format!("/{}", info.cidr))?;
    label(&mut out, "mask", info.mask)?;
    label(&mut out, "network_address", info.network_address)?;
    label(&mut out, "broadcast_address", info.broadcast_address)?;
    label(&mut out, "number_of_hosts", info.number_of_hosts)?;
    Ok(out)
}

/// Render a subnet plan as labelled lines followed by one line per subnet.
pub fn plan_text(plan: &SubnetPlan) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();
    label(&mut out, "subnet_cidr", format!("/{}", plan.subnet_cidr))?;
    label(&mut out, "subnet_mask", plan.subnet_mask)?;
    label(&mut out, "used_subnets", plan.used_subnets)?;
    label(&mut out, "unused_subnets", plan.unused_subnets)?;
    label(&mut out, "hosts_per_subnet", plan.hosts_per_subnet)?;
    for (i, subnet) in plan.subnets.iter().enumerate() {
        let network = format!("{subnet}/{}", plan.subnet_cidr);
        writeln!(
            out,
            "{i:>6}  {network:<18} {broadcast}",
            i = i + 1,
            broadcast = broadcast_addr(*subnet, plan.subnet_mask).to_string().dimmed()
        )?;
    }
    Ok(out)
}
