//! Command line interface.

use crate::models::{AddressInput, Ipv4Address, Mask};
use crate::output::OutputFormat;
use crate::processing::cidr_of;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about = "IPv4 address, mask and subnet calculator")]
pub struct Cli {
    /// Output format, overrides IPV4_CALC_OUTPUT.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Address, mask, network, broadcast and host count.
    Info {
        /// `a.b.c.d`, `a.b.c.d/pp`, `a.b.c.d/m.m.m.m` or a JSON octet array.
        address: String,
        /// Mask or prefix length; taken from ADDRESS when omitted.
        mask: Option<String>,
    },
    /// Split a block into N equally sized subnets.
    Subnets {
        address: String,
        mask: Option<String>,
        /// Number of subnets; the sign is ignored.
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        count: i64,
    },
    /// Prefix length of a mask, e.g. `255.255.240.0` -> 20.
    Cidr { mask: String },
    /// Dotted mask of a prefix length, e.g. `20` -> `255.255.240.0`.
    Mask { cidr: String },
}

/// Read one command line argument as an [`AddressInput`].
///
/// Arguments starting with `[` are JSON octet arrays, e.g. `[10,0,21]`.
pub fn parse_input(arg: &str) -> Result<AddressInput, Box<dyn Error>> {
    if arg.trim_start().starts_with('[') {
        let input = serde_json::from_str(arg)
            .map_err(|e| format!("Invalid octet array '{arg}': {e}"))?;
        Ok(input)
    } else {
        Ok(AddressInput::from(arg))
    }
}

/// Build the address for `info` and `subnets` from one or two arguments.
pub fn build_address(address: &str, mask: Option<&str>) -> Result<Ipv4Address, Box<dyn Error>> {
    let address = parse_input(address)?;
    let ip = match mask {
        Some(mask) => Ipv4Address::with_mask(address, parse_input(mask)?)?,
        None => Ipv4Address::from_combined(address)?,
    };
    Ok(ip)
}

/// Prefix length for the `cidr` command.
pub fn mask_to_prefix(mask: &str) -> Result<u8, Box<dyn Error>> {
    Ok(cidr_of(&parse_input(mask)?)?)
}

/// Mask for the `mask` command; prefix lengths are clamped into 0..=32.
pub fn prefix_to_mask(cidr: &str) -> Result<Mask, Box<dyn Error>> {
    match parse_input(cidr)? {
        AddressInput::Cidr(len) => Ok(Mask::from_cidr(len.clamp(0, 32) as u8)),
        AddressInput::Combined(text) if text.starts_with('/') => {
            Ok(Mask::from_cidr(cidr_of(&AddressInput::Combined(text))?))
        }
        other => Err(format!("Expected a prefix length, got '{other}'").into()),
    }
}
