//! Human- and machine-readable rendering of scan results.
//!
//! Rendering writes into any `fmt::Write` so the binary can print to stdout
//! and tests can capture into a `String`. Nothing here re-orders groups; the
//! scanner owns ordering.

use crate::error::ReportError;
use crate::scanner::CapabilityGroup;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    /// One line per group, one indented line per operation.
    #[default]
    Text,
    /// Bordered `FullName | Supported | Methods` table.
    Table,
    /// Pretty-printed JSON document.
    Json,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RenderOptions {
    pub format: ReportFormat,
    /// Print operation names without parameter or return descriptors.
    pub names_only: bool,
    pub supported_only: bool,
}

pub const SUPPORTED_LABEL: &str = "Supported";
pub const NOT_SUPPORTED_LABEL: &str = "Not Supported";

pub fn support_label(is_supported: bool) -> &'static str {
    if is_supported {
        SUPPORTED_LABEL
    } else {
        NOT_SUPPORTED_LABEL
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    prefix: &'a str,
    groups: Vec<&'a CapabilityGroup>,
}

/// Render `groups` in the requested format. `prefix` is only echoed into the
/// JSON document so consumers know which namespace was scanned.
pub fn render_report<W: fmt::Write>(
    groups: &[CapabilityGroup],
    prefix: &str,
    options: &RenderOptions,
    writer: &mut W,
) -> Result<(), ReportError> {
    let visible: Vec<&CapabilityGroup> = groups
        .iter()
        .filter(|group| !options.supported_only || group.is_supported)
        .collect();

    match options.format {
        ReportFormat::Text => render_text(&visible, options.names_only, writer)?,
        ReportFormat::Table => render_table(&visible, writer)?,
        ReportFormat::Json => {
            let report = JsonReport {
                prefix,
                groups: visible,
            };
            let json = serde_json::to_string_pretty(&report)?;
            writeln!(writer, "{json}")?;
        }
    }
    Ok(())
}

fn render_text(
    groups: &[&CapabilityGroup],
    names_only: bool,
    writer: &mut impl fmt::Write,
) -> fmt::Result {
    for group in groups {
        writeln!(writer, "{} - {}", group.name, support_label(group.is_supported))?;
        for operation in &group.operations {
            if names_only {
                writeln!(writer, "\t{}", operation.name)?;
            } else {
                writeln!(writer, "\t{}", operation.signature())?;
            }
        }
    }
    Ok(())
}

const TABLE_HEADERS: [&str; 3] = ["FullName", "Supported", "Methods"];

fn render_table(groups: &[&CapabilityGroup], writer: &mut impl fmt::Write) -> fmt::Result {
    let rows: Vec<[String; 3]> = groups
        .iter()
        .map(|group| {
            [
                group.name.clone(),
                support_label(group.is_supported).to_string(),
                group.operations.len().to_string(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    // `| a | b | c |` is three cells of width+2 plus four pipes.
    let rule_len = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
    let rule = "-".repeat(rule_len);

    writeln!(writer, " {rule}")?;
    write_row(writer, &TABLE_HEADERS.map(str::to_string), &widths)?;
    writeln!(writer, " {rule}")?;
    for row in &rows {
        write_row(writer, row, &widths)?;
    }
    writeln!(writer, " {rule}")?;
    writeln!(writer)?;
    writeln!(writer, " Count: {}", rows.len())?;
    Ok(())
}

fn write_row(writer: &mut impl fmt::Write, cells: &[String; 3], widths: &[usize; 3]) -> fmt::Result {
    write!(writer, " |")?;
    for (cell, &width) in cells.iter().zip(widths) {
        write!(writer, " {cell:<width$} |")?;
    }
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Descriptor;
    use crate::scanner::Operation;

    fn sample_groups() -> Vec<CapabilityGroup> {
        vec![
            CapabilityGroup {
                name: "Ns.Intrinsics.Fast".to_string(),
                is_supported: true,
                operations: vec![
                    Operation {
                        name: "Add".to_string(),
                        parameters: vec![
                            Descriptor("Vector128<Int32>".to_string()),
                            Descriptor("Vector128<Int32>".to_string()),
                        ],
                        return_descriptor: Descriptor("Vector128<Int32>".to_string()),
                    },
                    Operation {
                        name: "Pause".to_string(),
                        parameters: Vec::new(),
                        return_descriptor: Descriptor("Void".to_string()),
                    },
                ],
            },
            CapabilityGroup {
                name: "Ns.Intrinsics.Slow".to_string(),
                is_supported: false,
                operations: Vec::new(),
            },
        ]
    }

    fn render(options: &RenderOptions) -> String {
        let mut out = String::new();
        render_report(&sample_groups(), "Ns.Intrinsics", options, &mut out).unwrap();
        out
    }

    #[test]
    fn text_lists_groups_and_signatures() {
        let out = render(&RenderOptions::default());
        assert_eq!(
            out,
            "Ns.Intrinsics.Fast - Supported\n\
             \tAdd(Vector128<Int32>, Vector128<Int32>) -> Vector128<Int32>\n\
             \tPause() -> Void\n\
             Ns.Intrinsics.Slow - Not Supported\n"
        );
    }

    #[test]
    fn names_only_drops_descriptors() {
        let out = render(&RenderOptions {
            names_only: true,
            ..RenderOptions::default()
        });
        assert!(out.contains("\tAdd\n"));
        assert!(!out.contains("Vector128"));
    }

    #[test]
    fn supported_only_hides_unsupported_groups() {
        let out = render(&RenderOptions {
            supported_only: true,
            ..RenderOptions::default()
        });
        assert!(out.contains("Ns.Intrinsics.Fast"));
        assert!(!out.contains("Ns.Intrinsics.Slow"));
    }

    #[test]
    fn table_pads_columns_and_counts_rows() {
        let out = render(&RenderOptions {
            format: ReportFormat::Table,
            ..RenderOptions::default()
        });
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with(" ---"));
        assert_eq!(
            lines[1],
            " | FullName           | Supported     | Methods |"
        );
        assert_eq!(
            lines[3],
            " | Ns.Intrinsics.Fast | Supported     | 2       |"
        );
        assert_eq!(
            lines[4],
            " | Ns.Intrinsics.Slow | Not Supported | 0       |"
        );
        assert_eq!(lines[0].len(), lines[1].len());
        assert_eq!(lines.last().copied(), Some(" Count: 2"));
    }

    #[test]
    fn json_carries_prefix_and_descriptors() {
        let out = render(&RenderOptions {
            format: ReportFormat::Json,
            ..RenderOptions::default()
        });
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["prefix"], "Ns.Intrinsics");
        assert_eq!(value["groups"][0]["is_supported"], true);
        assert_eq!(
            value["groups"][0]["operations"][0]["parameters"][1],
            "Vector128<Int32>"
        );
        assert_eq!(
            value["groups"][0]["operations"][1]["return_descriptor"],
            "Void"
        );
        assert_eq!(value["groups"][1]["operations"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn empty_input_renders_nothing_in_text_mode() {
        let mut out = String::new();
        render_report(&[], "Ns", &RenderOptions::default(), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
