//! Environment-backed settings for the command line front end.
//!
//! The allocator itself reads nothing from the environment; settings
//! only shape presentation.

use std::error::Error;
use std::str::FromStr;

/// Output renderings the front end can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Report,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "report" | "txt" => Ok(OutputFormat::Report),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other}").into()),
        }
    }
}

/// Presentation settings, read from the environment with defaults.
///
/// `dotenv` is expected to have run already (main does this).
#[derive(Debug, Clone)]
pub struct Settings {
    /// Default output rendering, `VLSM_FORMAT` (table|report|json).
    pub format: OutputFormat,
    /// Title line of the plain-text report, `VLSM_REPORT_TITLE`.
    pub report_title: String,
}

impl Settings {
    pub fn from_env() -> Result<Settings, Box<dyn Error>> {
        let format = match std::env::var("VLSM_FORMAT") {
            Ok(v) => v.parse()?,
            Err(_) => OutputFormat::Table,
        };
        let report_title = std::env::var("VLSM_REPORT_TITLE")
            .unwrap_or_else(|_| "VLSM Subnet Plan".to_string());
        Ok(Settings {
            format,
            report_title,
        })
    }
}
