//! Terminal listings for parsed nodes and catalog runs.

use std::io::{self, Write};

use crossterm::style::Stylize;
use tagmark::Node;

use crate::catalog::{Case, CaseReport};

/// Write one numbered line per node.
///
/// With `color`, tag names are highlighted and text nodes are dimmed.
pub fn write_nodes(out: &mut impl Write, nodes: &[Node], color: bool) -> io::Result<()> {
    for (index, node) in nodes.iter().enumerate() {
        let line = node.to_string();
        // `Display` always starts with the type name.
        let (name, rest) = line.split_at(node.type_name().len());

        write!(out, "{index:>3}  ")?;
        match (color, node.is_text()) {
            (false, _) => write!(out, "{name}")?,
            (true, true) => write!(out, "{}", name.dark_grey())?,
            (true, false) => write!(out, "{}", name.cyan().bold())?,
        }
        writeln!(out, "{rest}")?;
    }
    Ok(())
}

/// Write the supported tag names, one per line.
pub fn write_tags(out: &mut impl Write, tags: &[String]) -> io::Result<()> {
    for tag in tags {
        writeln!(out, "{tag}")?;
    }
    Ok(())
}

/// Write a one-line verdict for a catalog case.
pub fn write_case_summary(
    out: &mut impl Write,
    case: &Case,
    report: &CaseReport,
    color: bool,
) -> io::Result<()> {
    let verdict = if report.passed() { "ok" } else { "MISMATCH" };
    write!(
        out,
        "{:<20} {:>2}/{:<2} ",
        case.name, report.widgets, report.expected
    )?;
    match (color, report.passed()) {
        (false, _) => writeln!(out, "{verdict}"),
        (true, true) => writeln!(out, "{}", verdict.green()),
        (true, false) => writeln!(out, "{}", verdict.red().bold()),
    }
}
