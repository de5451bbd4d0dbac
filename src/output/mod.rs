//! Output formatting for info snapshots and subnet plans.
//!
//! This module handles rendering computed values:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors
//!
//! JSON output goes straight through `serde_json`.

mod csv;
mod terminal;

use crate::models::Ipv4Info;
use crate::processing::SubnetPlan;
use clap::ValueEnum;
use serde::Serialize;
use std::error::Error;

pub use csv::{info_csv, plan_csv};
pub use terminal::{format_field, info_text, plan_text};

/// How results are rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <OutputFormat as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| format!("Invalid output format '{s}', expected text, json or csv"))
    }
}

/// Render an info snapshot in the requested format.
pub fn render_info(info: &Ipv4Info, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Text => info_text(info),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(info)? + "\n"),
        OutputFormat::Csv => Ok(info_csv(info)),
    }
}

/// Render a subnet plan in the requested format.
pub fn render_plan(plan: &SubnetPlan, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Text => plan_text(plan),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(plan)? + "\n"),
        OutputFormat::Csv => Ok(plan_csv(plan)),
    }
}
