//! JSON output for allocations and validation results.

use crate::models::SubnetAllocation;
use std::error::Error;

/// Serialize the allocation list as pretty-printed JSON.
pub fn allocations_to_json(subnets: &[SubnetAllocation]) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(subnets)
        .map_err(|e| format!("Error serializing allocations: {e}"))?;
    Ok(json)
}

/// Serialize the outcome of an input validation as a JSON document.
///
/// `rejected` is the list of rejected values, empty when the input was
/// accepted.
pub fn validation_to_json(rejected: &[String]) -> Result<String, Box<dyn Error>> {
    let doc = serde_json::json!({
        "valid": rejected.is_empty(),
        "rejected": rejected,
    });
    let json = serde_json::to_string_pretty(&doc)
        .map_err(|e| format!("Error serializing validation result: {e}"))?;
    Ok(json)
}
