//! Output formatting for the final report

use serde::Serialize;

use crate::core::error::Result;
use crate::core::report::Report;

/// Render the report as pretty-printed JSON with 4-space indentation.
///
/// Key order is canonical (the report is key-sorted) and non-ASCII
/// characters are emitted literally, so output is byte-deterministic per
/// run.
pub fn render_report(report: &Report) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    report.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8(buf).expect("serialized JSON is valid UTF-8"))
}

/// Write the rendered report to stdout.
pub fn print_report(report: &Report) -> Result<()> {
    println!("{}", render_report(report)?);
    Ok(())
}
