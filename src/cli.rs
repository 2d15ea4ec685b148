//! Command line argument handling.

use crate::config::OutputFormat;
use std::error::Error;

pub const USAGE: &str =
    "Usage: vlsm-planner <network/prefix> <hosts,comma,separated> [--format table|report|json]";

/// Parsed command line arguments.
#[derive(Debug)]
pub struct Args {
    /// Base network in CIDR notation, e.g. "192.168.1.0/24".
    pub network: String,
    /// Comma separated host counts, e.g. "50,20,10".
    pub hosts: String,
    /// Output format override; falls back to settings when absent.
    pub format: Option<OutputFormat>,
}

impl Args {
    /// Parse from an argument iterator (first item is the program name).
    pub fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Args, Box<dyn Error>> {
        let _program = args.next();

        let mut positional: Vec<String> = Vec::new();
        let mut format = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--format" | "-f" => {
                    let value = args
                        .next()
                        .ok_or(format!("--format needs a value\n{USAGE}"))?;
                    format = Some(value.parse()?);
                }
                "--help" | "-h" => return Err(USAGE.into()),
                _ => positional.push(arg),
            }
        }

        if positional.len() != 2 {
            return Err(format!("Expected <network> and <hosts> arguments\n{USAGE}").into());
        }
        let network = positional.remove(0);
        let hosts = positional.remove(0);

        Ok(Args {
            network,
            hosts,
            format,
        })
    }
}
