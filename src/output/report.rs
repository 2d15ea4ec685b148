//! Plain-text report rendering.
//!
//! Builds the numbered report body downstream sinks (stdout, file
//! download) consume as-is; this module never writes anywhere itself.

use crate::models::{Ipv4, SubnetAllocation};

/// Render the allocation as a numbered plain-text report.
pub fn render_report(title: &str, network: Ipv4, subnets: &[SubnetAllocation]) -> String {
    let now = chrono::Utc::now();

    let mut out = String::new();
    out.push_str(&format!("{title}\n"));
    out.push_str(&format!("Base network: {network}\n"));
    out.push_str(&format!(
        "Generated: {}\n\n",
        now.format("%Y-%m-%d %H:%M UTC")
    ));

    for (i, s) in subnets.iter().enumerate() {
        out.push_str(&format!("Subnet {}: {}\n", i + 1, s.cidr));
        out.push_str(&format!("  Broadcast:    {}\n", s.broadcast));
        out.push_str(&format!("  Host range:   {} - {}\n", s.first_host, s.last_host));
        out.push_str(&format!("  Usable hosts: {}\n\n", s.usable_hosts));
    }

    out
}
