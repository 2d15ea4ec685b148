// cargo watch -x 'fmt' -x 'run'  // 'run -- 192.168.1.0/24 50,20,10'

pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

use models::{Ipv4, SubnetAllocation};
use processing::{allocate, parse_host_list, split_host_values, validate_input, AllocationFailure};
use std::error::Error;

/// Parse, validate and allocate in one call.
///
/// `network` is CIDR notation with non-strict semantics (host bits are
/// kept as given); `hosts` is a comma separated list of positive host
/// counts. Returns the parsed base network together with the allocation.
pub fn plan(network: &str, hosts: &str) -> Result<(Ipv4, Vec<SubnetAllocation>), Box<dyn Error>> {
    let host_values = split_host_values(hosts);
    if let Err(rejected) = validate_input(network, &host_values) {
        return Err(AllocationFailure::InvalidInput {
            detail: rejected.join("; "),
        }
        .into());
    }

    let base = Ipv4::new(network)?;
    let demands = parse_host_list(hosts)?;
    let subnets = allocate(base, &demands)?;
    Ok((base, subnets))
}

/// Check plan input without allocating, for interactive callers.
///
/// Returns the specific rejected values on failure.
pub fn check_input(network: &str, hosts: &str) -> Result<(), Vec<String>> {
    let host_values = split_host_values(hosts);
    validate_input(network, &host_values)
}
