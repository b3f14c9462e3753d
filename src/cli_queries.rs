//! Query catalogue CLI commands

use colored::Colorize;
use comfy_table::{Cell, Color};
use serde_json::json;
use stumps::catalogue::{QueryCatalogue, QueryDefinition};
use stumps::query::TabularResult;
use stumps::{Result, StumpsError};

use crate::cli_context::CliContext;
use crate::{format_delimited_row, OutputFormat, QueryCommands};

pub(crate) async fn handle_query_command(cmd: QueryCommands, ctx: &CliContext) -> Result<()> {
    let catalogue = QueryCatalogue::builtin();

    match cmd {
        QueryCommands::List => {
            match ctx.format {
                OutputFormat::Json => {
                    let labels: Vec<&str> = catalogue.labels().collect();
                    ctx.write_output(&format!("{}\n", serde_json::to_string_pretty(&labels)?))?;
                }
                OutputFormat::Csv | OutputFormat::Tsv => {
                    let mut lines = vec![format_delimited_row(ctx.format, &["label"])];
                    for label in catalogue.labels() {
                        lines.push(format_delimited_row(ctx.format, &[label]));
                    }
                    ctx.write_output(&format!("{}\n", lines.join("\n")))?;
                }
                _ => {
                    let mut table = ctx.table();
                    table.set_header(vec![Cell::new("Query").fg(Color::Cyan)]);
                    for label in catalogue.labels() {
                        table.add_row(vec![Cell::new(label)]);
                    }
                    ctx.write_output(&format!("{table}\n"))?;
                }
            }
        }

        QueryCommands::Show { label } => {
            let definition = resolve_label(&catalogue, &label)?;
            match ctx.format {
                OutputFormat::Json => {
                    ctx.write_output(&format!(
                        "{}\n",
                        serde_json::to_string_pretty(definition)?
                    ))?;
                }
                OutputFormat::Csv | OutputFormat::Tsv => {
                    let lines = vec![
                        format_delimited_row(ctx.format, &["label", "sql"]),
                        format_delimited_row(ctx.format, &[&definition.label, &definition.sql]),
                    ];
                    ctx.write_output(&format!("{}\n", lines.join("\n")))?;
                }
                _ => {
                    ctx.write_output(&format!(
                        "{}\n\n{}\n",
                        definition.label.bold(),
                        definition.sql.trim_end()
                    ))?;
                }
            }
        }

        QueryCommands::Run { label } => {
            let definition = resolve_label(&catalogue, &label)?;
            let executor = ctx.executor();

            let spinner = ctx.spinner(&format!("Running {}...", definition.label));
            let result = executor.execute(definition).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            let result = result?;

            render_result(&definition.label, &result, ctx)?;
        }
    }

    Ok(())
}

/// Resolve CLI input to a catalogue entry.
///
/// Exact labels always win; otherwise the text before the first `.` of
/// each label is compared case-insensitively, so `q7` selects
/// "Q7. ...". Anything else is an unknown label.
fn resolve_label<'a>(
    catalogue: &'a QueryCatalogue,
    input: &str,
) -> Result<&'a QueryDefinition> {
    if let Ok(definition) = catalogue.get(input) {
        return Ok(definition);
    }

    let wanted = input.trim();
    let mut matches = catalogue.iter().filter(|definition| {
        definition
            .label
            .split('.')
            .next()
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(wanted))
    });
    match (matches.next(), matches.next()) {
        (Some(definition), None) => Ok(definition),
        _ => Err(StumpsError::unknown_label(input)),
    }
}

fn render_result(label: &str, result: &TabularResult, ctx: &CliContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let payload = json!({
                "label": label,
                "columns": result.columns,
                "rows": result.rows.iter().map(|row| &row.values).collect::<Vec<_>>(),
                "row_count": result.row_count,
                "execution_ms": result.execution_ms,
            });
            ctx.write_output(&format!("{}\n", serde_json::to_string_pretty(&payload)?))?;
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let mut lines = Vec::with_capacity(result.row_count + 1);
            let header: Vec<&str> = result.columns.iter().map(String::as_str).collect();
            lines.push(format_delimited_row(ctx.format, &header));
            for row in &result.rows {
                let fields: Vec<&str> = row
                    .values
                    .iter()
                    .map(|value| value.as_deref().unwrap_or(""))
                    .collect();
                lines.push(format_delimited_row(ctx.format, &fields));
            }
            ctx.write_output(&format!("{}\n", lines.join("\n")))?;
        }
        _ => {
            if result.is_empty() {
                ctx.info("No data.");
                return Ok(());
            }

            let mut table = ctx.table();
            let header: Vec<Cell> = result
                .columns
                .iter()
                .map(|column| Cell::new(column).fg(Color::Cyan))
                .collect();
            table.set_header(header);
            for row in &result.rows {
                let cells: Vec<Cell> = row
                    .values
                    .iter()
                    .map(|value| Cell::new(value.as_deref().unwrap_or("")))
                    .collect();
                table.add_row(cells);
            }
            ctx.write_output(&format!("{table}\n"))?;
            println!(
                "{}",
                format!("{} row(s) in {} ms", result.row_count, result.execution_ms).dimmed()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_label() {
        let catalogue = QueryCatalogue::builtin();
        let definition = resolve_label(&catalogue, "Q1. Players from India")
            .unwrap_or_else(|e| panic!("exact label must resolve: {e}"));
        assert_eq!(definition.label, "Q1. Players from India");
    }

    #[test]
    fn test_resolve_prefix() {
        let catalogue = QueryCatalogue::builtin();
        let definition = resolve_label(&catalogue, "Q7")
            .unwrap_or_else(|e| panic!("prefix must resolve: {e}"));
        assert!(definition.label.starts_with("Q7."));
    }

    #[test]
    fn test_resolve_prefix_is_case_insensitive() {
        let catalogue = QueryCatalogue::builtin();
        let definition = resolve_label(&catalogue, "q25")
            .unwrap_or_else(|e| panic!("case-insensitive prefix must resolve: {e}"));
        assert!(definition.label.starts_with("Q25."));
    }

    #[test]
    fn test_resolve_short_prefix_stays_exact() {
        // "Q2" is Q2 only, never Q20..Q25.
        let catalogue = QueryCatalogue::builtin();
        let definition = resolve_label(&catalogue, "Q2")
            .unwrap_or_else(|e| panic!("prefix must resolve: {e}"));
        assert!(definition.label.starts_with("Q2."));
    }

    #[test]
    fn test_resolve_unknown_input_names_it() {
        let catalogue = QueryCatalogue::builtin();
        let err = match resolve_label(&catalogue, "Q99") {
            Err(err) => err,
            Ok(definition) => panic!("Q99 must not resolve to {}", definition.label),
        };
        assert!(err.to_string().contains("Q99"));
    }
}
