//! Text and JSON rendering of solve results and LP arrays.

use std::fmt::Write as _;

use mf_core::Real;
use mf_solver::{FlowAssignment, LpProblem};

use crate::error::{CliError, CliResult};

const HEADERS: [&str; 3] = ["Origin", "Destination", "Max flow"];

/// Round-off from the simplex shows up as `3.9999999999`; print at most six
/// decimals and drop trailing zeros.
pub fn format_flow(v: Real) -> String {
    let s = format!("{v:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".into() } else { s.into() }
}

/// Box-drawn table with one row per edge.
pub fn flow_table(assignment: &FlowAssignment) -> String {
    let rows: Vec<[String; 3]> = assignment
        .iter()
        .map(|e| [e.origin.clone(), e.destination.clone(), format_flow(e.flow)])
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}\n", segments.join(mid))
    };

    let mut out = rule("┌", "┬", "┐");
    out.push('│');
    for (h, w) in HEADERS.iter().zip(widths) {
        let _ = write!(out, " {h:<w$} │");
    }
    out.push('\n');
    out.push_str(&rule("├", "┼", "┤"));
    for row in &rows {
        out.push('│');
        let _ = write!(out, " {:<w$} │", row[0], w = widths[0]);
        let _ = write!(out, " {:<w$} │", row[1], w = widths[1]);
        let _ = write!(out, " {:>w$} │", row[2], w = widths[2]);
        out.push('\n');
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}

pub fn flow_json(assignment: &FlowAssignment) -> CliResult<String> {
    serde_json::to_string_pretty(assignment).map_err(|e| CliError::Output(e.to_string()))
}

/// All five LP arrays, labelled, using nalgebra's matrix display.
pub fn lp_arrays(lp: &LpProblem) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} variables, {} inequality rows, {} equality rows",
        lp.num_vars(),
        lp.num_inequalities(),
        lp.num_equalities()
    );
    let _ = write!(out, "\nc ={}", lp.c.transpose());
    let _ = write!(out, "\nA_ub ={}", lp.a_ub);
    let _ = write!(out, "\nb_ub ={}", lp.b_ub.transpose());
    let _ = write!(out, "\nA_eq ={}", lp.a_eq);
    let _ = write!(out, "\nb_eq ={}", lp.b_eq.transpose());
    out
}
