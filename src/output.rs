//! Output formatting for human and JSON modes
//!
//! Human mode renders aligned tables and short detail views; JSON mode
//! pretty-prints the decoded records unchanged.

use std::fmt::Write as _;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Gap between table columns
const COLUMN_GAP: usize = 2;

/// A left-aligned text table with a header and an underline row
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given column headers
    #[must_use]
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

    /// Append a row of cells
    pub fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Number of data rows
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render to a string, one line per row
    #[must_use]
    pub fn render(&self) -> String {
        let underline: Vec<String> = self.headers.iter().map(|h| "-".repeat(h.width())).collect();

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.width());
                } else {
                    widths.push(cell.width());
                }
            }
        }

        let mut out = String::new();
        for line in std::iter::once(&self.headers)
            .chain(std::iter::once(&underline))
            .chain(self.rows.iter())
        {
            let last = line.len().saturating_sub(1);
            for (i, cell) in line.iter().enumerate() {
                out.push_str(cell);
                if i < last {
                    let pad = widths[i] - cell.width() + COLUMN_GAP;
                    out.push_str(&" ".repeat(pad));
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Shorten `s` to at most `max` characters, ending in `...` when cut
#[must_use]
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Format a byte count with binary units (`512 B`, `1.5 KB`)
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    const GB: u64 = 1024 * MB;

    let mut out = String::new();
    let _ = match bytes {
        b if b >= GB => write!(out, "{:.1} GB", b as f64 / GB as f64),
        b if b >= MB => write!(out, "{:.1} MB", b as f64 / MB as f64),
        b if b >= KB => write!(out, "{:.1} KB", b as f64 / KB as f64),
        b => write!(out, "{b} B"),
    };
    out
}

/// Date portion (`YYYY-MM-DD`) of a timestamp, or `-`
#[must_use]
pub fn date_part(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|ts| ts.get(..10))
        .unwrap_or("-")
        .to_string()
}

/// The value, or `-` when absent or empty
#[must_use]
pub fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}
