//! Output formats and delimited-row rendering

use clap::ValueEnum;

/// How command output is rendered.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Tables and labelled lines for humans
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated rows
    Csv,
    /// Tab-separated rows
    Tsv,
}

impl OutputFormat {
    fn delimiter(self) -> &'static str {
        match self {
            Self::Tsv => "\t",
            _ => ",",
        }
    }

    /// Escape one field for this format's delimited rendering.
    ///
    /// CSV wraps fields containing the delimiter, quotes or line breaks in
    /// double quotes, doubling interior quotes. TSV has no quoting rule, so
    /// tabs and line breaks become visible escapes instead.
    fn escape(self, field: &str) -> String {
        match self {
            Self::Csv => {
                if field.contains(',')
                    || field.contains('"')
                    || field.contains('\n')
                    || field.contains('\r')
                {
                    format!("\"{}\"", field.replace('"', "\"\""))
                } else {
                    field.to_string()
                }
            }
            Self::Tsv => field
                .replace('\t', "\\t")
                .replace('\n', "\\n")
                .replace('\r', "\\r"),
            _ => field.to_string(),
        }
    }
}

/// Join fields into one CSV or TSV row.
pub(crate) fn format_delimited_row(format: OutputFormat, fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| format.escape(field))
        .collect::<Vec<_>>()
        .join(format.delimiter())
}

/// Render an optional cell for display; empty means N/A
pub(crate) fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}
