//! Output module
//!
//! Renders a probe report as an ASCII table or as JSON.

mod table;

pub use table::AsciiTable;

use crate::error::Result;
use crate::probe::ProbeReport;

/// Heading of the id column
pub const ID_HEADING: &str = "tweet ids";

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// ASCII table, one row per id
    #[default]
    Table,
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}

/// Render a report in the given format
pub fn render(report: &ProbeReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Pretty => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Table with an id column plus one presence column per variant.
///
/// Variant headings list their search params one per line.
pub fn render_table(report: &ProbeReport) -> String {
    let mut headings = vec![ID_HEADING.to_string()];
    headings.extend(report.variants.iter().map(|variant| {
        variant
            .params
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }));

    let mut table = AsciiTable::new(headings);
    for row in &report.rows {
        let mut cells = vec![row.id.to_string()];
        cells.extend(
            row.present
                .iter()
                .map(|&present| if present { "x" } else { "" }.to_string()),
        );
        table.push_row(cells);
    }

    table.render()
}

#[cfg(test)]
mod tests;
