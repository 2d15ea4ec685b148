//! Table output for subnet allocations.

use crate::models::{Ipv4, SubnetAllocation};
use colored::Colorize;

use super::terminal::format_field;

/// Print the allocation as an aligned, quoted-field table to stdout.
///
/// # Arguments
/// * `network` - The base network the subnets were carved from
/// * `subnets` - The allocation, in allocation order
pub fn print_allocations(network: Ipv4, subnets: &[SubnetAllocation]) {
    log::info!(
        "#Start print_allocations() {} subnet(s) in {network}",
        subnets.len()
    );

    // Print table header
    println!(
        r#"  "cnt",       "subnet_cidr",       "broadcast",      "first_host",       "last_host", "usable_hosts""#
    );

    for (i, s) in subnets.iter().enumerate() {
        print_allocation_row(i + 1, s);
    }

    let allocated: u64 = subnets.iter().map(|s| s.cidr.addr_count()).sum();
    println!(
        "#{}# {} of {} addresses allocated in {}",
        "DONE".on_green(),
        allocated,
        network.addr_count(),
        network
    );
}

/// Print a single table row.
fn print_allocation_row(cnt: usize, s: &SubnetAllocation) {
    println!(
        r#"{cnt},{cidr},{broadcast},{first},{last},{hosts}"#,
        cnt = format_field(cnt, 7),
        cidr = format_field(s.cidr, 19),
        broadcast = format_field(s.broadcast, 17),
        first = format_field(s.first_host, 17),
        last = format_field(s.last_host, 17),
        hosts = format_field(s.usable_hosts, 14),
    );
}
