//! Subnet allocation data model.

use super::Ipv4;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// One satisfied host demand: a placed subnet and its derived addresses.
///
/// Constructed once per demand by the allocator and never mutated
/// afterwards. Serializes to the record shape presentation layers
/// consume: CIDR string, broadcast, first/last usable host, host count.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetAllocation {
    /// Network address and prefix length, e.g. "192.168.1.0/26".
    pub cidr: Ipv4,
    /// Broadcast address of the placed block.
    pub broadcast: Ipv4Addr,
    /// First usable host address (network address + 1).
    pub first_host: Ipv4Addr,
    /// Last usable host address (broadcast - 1).
    pub last_host: Ipv4Addr,
    /// Usable host count (block size minus network and broadcast).
    pub usable_hosts: u64,
}

impl SubnetAllocation {
    /// Build the record for a placed block.
    pub fn new(cidr: Ipv4) -> SubnetAllocation {
        let broadcast = cidr.hi();
        SubnetAllocation {
            cidr,
            broadcast,
            first_host: Ipv4Addr::from(u32::from(cidr.addr).saturating_add(1)),
            last_host: Ipv4Addr::from(u32::from(broadcast).saturating_sub(1)),
            usable_hosts: cidr.usable_hosts(),
        }
    }
}

impl fmt::Display for SubnetAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (broadcast {}, hosts {}-{}, {} usable)",
            self.cidr, self.broadcast, self.first_host, self.last_host, self.usable_hosts
        )
    }
}
