//! Host requirement list parsing.

use crate::error::{Result, VlsmError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATOR: Regex = Regex::new(r"[,\s]+").expect("Invalid Regex?");
}

/// Parse a comma and/or whitespace separated list of host counts.
///
/// Empty entries are skipped, so trailing or doubled commas are accepted.
/// Any other entry that is not a non-negative decimal integer fails the
/// whole list.
pub fn parse_host_list(text: &str) -> Result<Vec<u64>> {
    let hosts = SEPARATOR
        .split(text.trim())
        .filter(|token| !token.is_empty())
        .map(parse_host_count)
        .collect::<Result<Vec<u64>>>()?;

    if hosts.is_empty() {
        log::warn!("Host list {text:?} holds no entries");
        return Err(VlsmError::InvalidHostList(text.trim().to_string()));
    }
    log::debug!("parse_host_list() -> {hosts:?}");
    Ok(hosts)
}

fn parse_host_count(token: &str) -> Result<u64> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VlsmError::InvalidHostList(token.to_string()));
    }
    token
        .parse::<u64>()
        .map_err(|_| VlsmError::InvalidHostList(token.to_string()))
}
