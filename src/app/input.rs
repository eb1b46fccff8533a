//! Domain list parsing and reading.

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Splits a domain list into domains.
///
/// Domains are separated by any whitespace, so both a single line and one
/// domain per line work. Lines whose first non-blank character is `#` are
/// comments.
pub fn parse_domains(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}

/// Reads a domain list to its end and parses it.
///
/// # Errors
///
/// Returns an error if reading fails or the input is not UTF-8.
pub async fn read_domains<R: AsyncRead + Unpin>(mut reader: R) -> Result<Vec<String>> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .await
        .context("Failed to read domain list")?;
    Ok(parse_domains(&input))
}
