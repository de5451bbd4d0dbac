//! IPv4 addressing toolkit.
//!
//! Normalises addresses and masks given as dotted strings, `address/prefix`
//! strings, octet lists or bare prefix lengths, and derives network and
//! broadcast addresses, host counts and equally sized subnets.
//!
//! ```
//! use ipv4_calc::Ipv4Address;
//! let ip = Ipv4Address::from_combined("172.16.0.0/12").unwrap();
//! assert_eq!(ip.info().number_of_hosts, 1048574);
//! assert_eq!(ip.subnets(7).unwrap().subnet_cidr, 15);
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use cli::{build_address, mask_to_prefix, prefix_to_mask, Cli, Command};
use config::Settings;
use output::{render_info, render_plan};
use std::error::Error;

pub use models::{AddrError, AddressInput, ErrorKind, Ipv4Address, Ipv4Info, Mask};
pub use processing::SubnetPlan;

/// Execute one parsed command and return the rendered output.
pub fn run(cli: Cli, settings: &Settings) -> Result<String, Box<dyn Error>> {
    let format = cli.output.unwrap_or(settings.output);
    log::info!("#Start run({:?}) output={:?}", cli.command, format);

    let rendered = match cli.command {
        Command::Info { address, mask } => {
            let ip = build_address(&address, mask.as_deref())?;
            render_info(&ip.info(), format)?
        }
        Command::Subnets {
            address,
            mask,
            count,
        } => {
            let ip = build_address(&address, mask.as_deref())?;
            let plan = ip.subnets(count)?;
            log::info!(
                "{ip} split into {} subnets of /{}",
                plan.used_subnets,
                plan.subnet_cidr
            );
            render_plan(&plan, format)?
        }
        Command::Cidr { mask } => format!("{}\n", mask_to_prefix(&mask)?),
        Command::Mask { cidr } => format!("{}\n", prefix_to_mask(&cidr)?),
    };
    Ok(rendered)
}
