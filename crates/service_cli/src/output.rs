//! Terminal rendering helpers.
//!
//! This module provides:
//! - `OutputFormat`: `table` or `json`
//! - `Table`: box-drawn text table with right-aligned numeric columns

use std::fmt::Write as _;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{CliError, Result};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable box table
    Table,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            ))),
        }
    }
}

/// Serialise `value` as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format a price cell.
pub fn price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a signed percentage cell.
pub fn percent(value: f64) -> String {
    format!("{:+.2}%", value)
}

/// Simple box-drawn table.
///
/// The first column is left-aligned; the rest are right-aligned.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; short rows are padded with empty cells.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn line(widths: &[usize], cells: &[String]) -> String {
        let mut out = String::from("│");
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            if i == 0 {
                let _ = write!(out, " {:<width$} │", cell, width = width);
            } else {
                let _ = write!(out, " {:>width$} │", cell, width = width);
            }
        }
        out
    }

    /// Render the table.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut lines = vec![
            Self::border(&widths, '┌', '┬', '┐'),
            Self::line(&widths, &self.headers),
            Self::border(&widths, '├', '┼', '┤'),
        ];
        if self.rows.is_empty() {
            lines.push(Self::line(&widths, &["(no data)".to_string()]));
        }
        lines.extend(self.rows.iter().map(|row| Self::line(&widths, row)));
        lines.push(Self::border(&widths, '└', '┴', '┘'));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        let err = "csv".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("Supported: table, json"));
    }

    #[test]
    fn test_table_render_aligns_columns() {
        let mut table = Table::new(["Name", "Final"]);
        table.push_row(vec!["baseline".to_string(), price(101.5)]);
        table.push_row(vec!["crash".to_string(), price(81.25)]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "┌──────────┬────────┐");
        assert_eq!(lines[1], "│ Name     │  Final │");
        assert_eq!(lines[3], "│ baseline │ 101.50 │");
        assert_eq!(lines[4], "│ crash    │  81.25 │");
        assert_eq!(lines[5], "└──────────┴────────┘");
    }

    #[test]
    fn test_empty_table_shows_placeholder() {
        let table = Table::new(["Date", "Point"]);
        assert!(table.is_empty());
        assert!(table.render().contains("(no data)"));
    }

    #[test]
    fn test_cell_formatters() {
        assert_eq!(price(99.999), "100.00");
        assert_eq!(percent(2.5), "+2.50%");
        assert_eq!(percent(-20.0), "-20.00%");
    }
}
