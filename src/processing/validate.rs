//! Pre-allocation input validation.
//!
//! Boundary checks used ahead of the allocator, exposed standalone so
//! interactive callers can check input without allocating: the network
//! string must parse as an IPv4 CIDR and every host value must be a
//! positive integer.

use crate::models::Ipv4;
use super::allocator::AllocationFailure;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Dotted-quad-with-prefix shape, e.g. "192.168.1.0/24".
    static ref NETWORK_RE: Regex =
        Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}/\d{1,2}$").expect("Invalid Regex?");
    // Commas and/or whitespace between host counts, e.g. "50, 20,10".
    static ref HOST_SPLIT_RE: Regex = Regex::new(r"[\s,]+").expect("Invalid Regex?");
}

/// Split a demand-list string into its raw values.
pub fn split_host_values(input: &str) -> Vec<&str> {
    HOST_SPLIT_RE
        .split(input.trim())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Check a network string and host-count values ahead of allocation.
///
/// Returns the specific rejected values on failure. Never allocates.
pub fn validate_input(network: &str, hosts: &[&str]) -> Result<(), Vec<String>> {
    let mut rejected = Vec::new();

    let network = network.trim();
    if !NETWORK_RE.is_match(network) {
        rejected.push(format!("network '{network}' is not in a.b.c.d/len form"));
    } else if let Err(e) = Ipv4::new(network) {
        rejected.push(format!("network '{network}': {e}"));
    }

    if hosts.is_empty() {
        rejected.push("no host counts supplied".to_string());
    }
    for value in hosts {
        let value = value.trim();
        match value.parse::<u32>() {
            Ok(0) => rejected.push(format!("host count '{value}' must be at least 1")),
            Ok(_) => {}
            Err(_) => rejected.push(format!("host count '{value}' is not a positive integer")),
        }
    }

    if rejected.is_empty() {
        Ok(())
    } else {
        log::debug!("Rejected input values: {}", rejected.iter().join("; "));
        Err(rejected)
    }
}

/// Parse a comma separated demand-list string into host counts.
pub fn parse_host_list(input: &str) -> Result<Vec<u32>, AllocationFailure> {
    let values = split_host_values(input);
    if values.is_empty() {
        return Err(AllocationFailure::InvalidInput {
            detail: "no host demands supplied".to_string(),
        });
    }
    values
        .iter()
        .map(|value| match value.parse::<u32>() {
            Ok(h) if h > 0 => Ok(h),
            Ok(_) => Err(AllocationFailure::InvalidInput {
                detail: format!("host demand '{value}' must be at least 1"),
            }),
            Err(_) => Err(AllocationFailure::InvalidInput {
                detail: format!("host demand '{value}' is not a positive integer"),
            }),
        })
        .collect()
}
