//! CSV output of an allocation plan.

use crate::models::{AllocatedSubnet, AllocationPlan};
use std::fmt::Write;

/// Column names and widths shared by the header and the rows.
const COLUMNS: [(&str, usize); 7] = [
    ("cnt", 8),
    ("hosts", 8),
    ("subnet_cidr", 18),
    ("broadcast", 16),
    ("first_usable", 17),
    ("last_usable", 17),
    ("mask", 18),
];

/// Quote `value` and right-align it in a column of `width` characters.
///
/// Values wider than the column are never cut, so an address always
/// survives intact.
pub fn csv_field<T: std::fmt::Display>(value: T, width: usize) -> String {
    format!("{:>width$}", format!("\"{value}\""))
}

/// CSV header line.
pub fn csv_header() -> String {
    COLUMNS
        .iter()
        .map(|(name, width)| csv_field(name, *width))
        .collect::<Vec<String>>()
        .join(",")
}

/// Render the plan as CSV, one row per subnet in input order.
pub fn render_csv(plan: &AllocationPlan) -> String {
    log::info!("# Got subnet count = {} for {}", plan.len(), plan.base);

    let mut out = String::new();
    let _ = writeln!(out, "{}", csv_header());
    for subnet in &plan.subnets {
        let _ = writeln!(out, "{}", csv_row(subnet));
    }
    out
}

/// Render a single CSV row.
fn csv_row(subnet: &AllocatedSubnet) -> String {
    let usable = subnet.usable_range();
    let endpoint = |ip: Option<std::net::Ipv4Addr>| {
        ip.map(|ip| ip.to_string())
            .unwrap_or_else(|| "None".to_string())
    };

    let values = [
        (subnet.index + 1).to_string(),
        subnet.hosts.to_string(),
        subnet.cidr().to_string(),
        subnet.broadcast().to_string(),
        endpoint(usable.first),
        endpoint(usable.last),
        subnet.mask(),
    ];

    values
        .iter()
        .zip(COLUMNS)
        .map(|(value, (_, width))| csv_field(value, width))
        .collect::<Vec<String>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{parse_network, plan};

    #[test]
    fn test_csv_field_pads_address() {
        assert_eq!(csv_field("10.0.0.1", 12), "  \"10.0.0.1\"");
    }

    #[test]
    fn test_csv_field_cidr_fills_column() {
        assert_eq!(csv_field("10.0.0.0/8", 12), "\"10.0.0.0/8\"");
    }

    #[test]
    fn test_csv_field_keeps_wide_address() {
        assert_eq!(csv_field("255.255.255.255", 5), "\"255.255.255.255\"");
    }

    #[test]
    fn test_csv_field_prefix_length() {
        assert_eq!(csv_field(24u8, 6), "  \"24\"");
    }

    #[test]
    fn test_render_csv() {
        let plan = plan(parse_network("192.168.1.0/24").unwrap(), &[50, 20, 10]).unwrap();
        let out = render_csv(&plan);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            r#"   "cnt", "hosts",     "subnet_cidr",     "broadcast",   "first_usable",    "last_usable",            "mask""#
        );
        assert_eq!(
            lines[1],
            r#"     "1",    "50",  "192.168.1.0/26",  "192.168.1.63",    "192.168.1.1",   "192.168.1.62", "255.255.255.192""#
        );
    }

    #[test]
    fn test_csv_row_no_usable_hosts() {
        let subnet = AllocatedSubnet {
            index: 0,
            hosts: 0,
            network: "10.0.0.7/32".parse().unwrap(),
        };
        let row = csv_row(&subnet);
        assert!(row.contains(r#""None","#));
        assert!(row.ends_with(r#""255.255.255.255""#));
    }
}
