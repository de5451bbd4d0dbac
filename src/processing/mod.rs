//! Address processing logic.
//!
//! This module contains the calculations over raw inputs:
//! - [`normalize`] - turning loosely shaped inputs into addresses and masks
//! - [`subnets`] - partitioning a block into equally sized subnets

mod normalize;
mod subnets;

// Re-export public functions
pub use normalize::{any_to_address, any_to_mask, cidr_of, clamp_octet, coerce_octet};
pub use subnets::{extra_bits, get_subnets, plan_subnets, SubnetPlan};
