//! Main application modules.
//!
//! This module provides the input and output glue used by the binary:
//! reading the domain list and formatting the final report.

pub mod input;
pub mod report;

// Re-export public API
pub use input::{parse_domains, read_domains};
pub use report::{json_report, status_line};
