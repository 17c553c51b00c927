//! # vlsm_planner
//!
//! Variable Length Subnet Mask planning for IPv4.
//!
//! Given a base network and a list of host counts, every requirement gets
//! the smallest block that holds its hosts plus the network and broadcast
//! addresses. Blocks are packed largest first from the base address and
//! reported in the order the requirements were given.
//!
//! ```
//! use vlsm_planner::{parse_host_list, parse_network, plan};
//!
//! let base = parse_network("192.168.1.0/24")?;
//! let hosts = parse_host_list("50, 20, 10")?;
//! let plan = plan(base, &hosts)?;
//! assert_eq!(plan.subnets[2].network.to_string(), "192.168.1.96/28");
//! # Ok::<(), vlsm_planner::VlsmError>(())
//! ```
//!
//! Everything is pure and synchronous; no state outlives a call.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use config::{Config, OutputFormat, Overrides};
pub use error::{Result, VlsmError};
pub use models::{AllocatedSubnet, AllocationPlan, Network, UsableRange};
pub use processing::{
    allocate, free_blocks, parse_host_list, parse_network, plan, required_prefix_length,
    usable_range,
};

/// Parse both text inputs and build the plan in one step.
pub fn plan_from_text(base: &str, hosts: &str) -> Result<AllocationPlan> {
    let base = parse_network(base)?;
    let hosts = parse_host_list(hosts)?;
    plan(base, &hosts)
}

/// Render a plan in the requested format.
pub fn render(plan: &AllocationPlan, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(output::render_table(plan, color)),
        OutputFormat::Csv => Ok(output::render_csv(plan)),
        OutputFormat::Json => output::render_json(plan),
    }
}
