//! Terminal output of an allocation plan.

use crate::models::AllocationPlan;
use crate::processing::free_blocks;
use colored::{ColoredString, Colorize};
use std::fmt::Write;

/// Render the plan as labelled entries followed by a summary.
pub fn render_table(plan: &AllocationPlan, color: bool) -> String {
    let mut out = String::new();
    for subnet in &plan.subnets {
        let _ = writeln!(out, "{}", paint(subnet.label(), color, |s| s.bold()));
        let _ = writeln!(
            out,
            "  network:   {}",
            paint(subnet.cidr().to_string(), color, |s| s.blue())
        );
        let _ = writeln!(out, "  broadcast: {}", subnet.broadcast());
        let _ = writeln!(out, "  usable:    {}", subnet.usable_range());
        let _ = writeln!(out, "  mask:      {}", subnet.mask());
    }

    let _ = writeln!(
        out,
        "Base {}: {} of {} addresses allocated, {} free",
        paint(plan.base.to_string(), color, |s| s.blue()),
        plan.allocated_addresses(),
        plan.total_addresses(),
        plan.free_addresses()
    );

    let free = free_blocks(plan);
    if !free.is_empty() {
        let _ = writeln!(
            out,
            "Free: {}",
            paint(
                free.iter()
                    .map(|b| b.to_string())
                    .collect::<Vec<String>>()
                    .join(", "),
                color,
                |s| s.green()
            )
        );
    }
    out
}

fn paint(s: String, color: bool, style: fn(&str) -> ColoredString) -> String {
    if color {
        style(&s).to_string()
    } else {
        s
    }
}
