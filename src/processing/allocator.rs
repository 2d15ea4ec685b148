//! VLSM subnet allocation.
//!
//! Splits a base network into contiguous, minimally-sized subnets, one
//! per host-count demand, largest demand first.

use crate::models::{
    block_size, block_size_for_hosts, broadcast_addr, min_prefix_for_hosts, Ipv4, SubnetAllocation,
};
use std::error::Error;
use std::fmt;
use std::net::Ipv4Addr;

/// Why an allocation attempt was rejected.
///
/// Payloads carry the live numbers; rendering is left to [`Display`]
/// and the presentation layers.
///
/// [`Display`]: fmt::Display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationFailure {
    /// The sum of the minimal per-demand blocks exceeds the base network.
    CapacityExceeded {
        required_addresses: u64,
        available_addresses: u64,
        network: Ipv4,
    },
    /// A demand's subnet, placed at the current cursor, would extend past
    /// the base network's broadcast address.
    RangeExceeded { demand: u32, network: Ipv4 },
    /// Input that should have been rejected before allocation.
    InvalidInput { detail: String },
}

impl fmt::Display for AllocationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationFailure::CapacityExceeded {
                required_addresses,
                available_addresses,
                network,
            } => write!(
                f,
                "Required address count ({required_addresses}) exceeds the {available_addresses} \
                 available in {network}, adjust the base address or mask"
            ),
            AllocationFailure::RangeExceeded { demand, network } => write!(
                f,
                "Cannot allocate {demand} hosts within {network}, adjust the base address or mask"
            ),
            AllocationFailure::InvalidInput { detail } => write!(f, "Invalid input: {detail}"),
        }
    }
}

impl Error for AllocationFailure {}

fn invalid(detail: String) -> AllocationFailure {
    AllocationFailure::InvalidInput { detail }
}

/// Allocate one subnet per demand inside `network`, largest demand first.
///
/// The base address is used exactly as supplied; it is not snapped down
/// to its network boundary. Each placed subnet ends at the broadcast of
/// the aligned block its prefix implies, and the next subnet starts one
/// address later. Equal demands keep their relative input order; the
/// returned list is in allocation (descending-demand) order.
///
/// The capacity pre-check sums minimal block sizes only and ignores the
/// padding a misaligned cursor introduces, so placement can still run
/// past the range after the pre-check passed. That false negative is
/// kept as documented behavior.
pub fn allocate(
    network: Ipv4,
    demands: &[u32],
) -> Result<Vec<SubnetAllocation>, AllocationFailure> {
    log::info!(
        "#Start allocate() {} demand(s) in {network}",
        demands.len()
    );

    if demands.is_empty() {
        return Err(invalid("no host demands supplied".to_string()));
    }
    if demands.contains(&0) {
        return Err(invalid(
            "host demands must be positive integers, got 0".to_string(),
        ));
    }
    let available =
        block_size(network.mask).map_err(|e| invalid(format!("base network {network}: {e}")))?;

    // Largest first; sort_by is stable so ties keep their input order.
    let mut sorted: Vec<u32> = demands.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));

    // Capacity pre-check over minimal block sizes, before any placement.
    let required: u64 = sorted.iter().map(|h| block_size_for_hosts(*h)).sum();
    if required > available {
        log::warn!(
            "Capacity exceeded: {required} addresses required, {available} available in {network}"
        );
        return Err(AllocationFailure::CapacityExceeded {
            required_addresses: required,
            available_addresses: available,
            network,
        });
    }

    // Cursor runs in u64 so advancing past 255.255.255.255 stays representable.
    let base_broadcast = u64::from(u32::from(network.hi()));
    let mut cursor = u64::from(u32::from(network.addr));
    let mut subnets: Vec<SubnetAllocation> = Vec::with_capacity(sorted.len());

    for h in sorted {
        // The pre-check bounds every block by the base network size, so the
        // minimal prefix is always derivable here.
        let prefix = min_prefix_for_hosts(h).map_err(|e| invalid(e.to_string()))?;

        if cursor > base_broadcast {
            log::warn!("Range exceeded: no addresses left in {network} for {h} hosts");
            return Err(AllocationFailure::RangeExceeded { demand: h, network });
        }
        let addr = Ipv4Addr::from(cursor as u32);
        let broadcast = broadcast_addr(addr, prefix).map_err(|e| invalid(e.to_string()))?;
        if u64::from(u32::from(broadcast)) > base_broadcast {
            log::warn!(
                "Range exceeded: {addr}/{prefix} for {h} hosts broadcasts at {broadcast}, \
                 past {network}"
            );
            return Err(AllocationFailure::RangeExceeded { demand: h, network });
        }

        subnets.push(SubnetAllocation::new(Ipv4 { addr, mask: prefix }));
        cursor = u64::from(u32::from(broadcast)) + 1;
    }

    log::info!("# Allocated {} subnet(s) in {network}", subnets.len());
    Ok(subnets)
}
