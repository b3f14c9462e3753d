//! Player search, profile and career stats CLI commands

use colored::Colorize;
use comfy_table::{Cell, Color};
use stumps::live::{PlayerProfile, RankEntry, StatsTable};
use stumps::Result;

use crate::cli_context::CliContext;
use crate::{format_delimited_row, or_na, OutputFormat, StatsCommands};

pub(crate) async fn handle_stats_command(cmd: StatsCommands, ctx: &CliContext) -> Result<()> {
    let client = ctx.live_client()?;

    match cmd {
        StatsCommands::Search { name } => {
            let spinner = ctx.spinner(&format!("Searching players matching '{name}'..."));
            let fetched = client.search_players(&name).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            let hits = fetched?;

            if hits.is_empty() {
                ctx.warn("No players found. Try another name.");
                return Ok(());
            }

            match ctx.format {
                OutputFormat::Json => {
                    ctx.write_output(&format!("{}\n", serde_json::to_string_pretty(&hits)?))?;
                }
                OutputFormat::Csv | OutputFormat::Tsv => {
                    let mut lines =
                        vec![format_delimited_row(ctx.format, &["id", "name", "team_name", "dob"])];
                    for hit in &hits {
                        lines.push(format_delimited_row(
                            ctx.format,
                            &[&hit.id, &hit.name, &hit.team_name, &hit.dob],
                        ));
                    }
                    ctx.write_output(&format!("{}\n", lines.join("\n")))?;
                }
                _ => {
                    let mut table = ctx.table();
                    table.set_header(vec![
                        Cell::new("ID").fg(Color::Cyan),
                        Cell::new("Name").fg(Color::Cyan),
                        Cell::new("Team").fg(Color::Cyan),
                        Cell::new("DOB").fg(Color::Cyan),
                    ]);
                    for hit in &hits {
                        table.add_row(vec![
                            Cell::new(&hit.id),
                            Cell::new(&hit.name),
                            Cell::new(or_na(&hit.team_name)),
                            Cell::new(or_na(&hit.dob)),
                        ]);
                    }
                    ctx.write_output(&format!("{table}\n"))?;
                }
            }
        }

        StatsCommands::Profile { id } => {
            let spinner = ctx.spinner(&format!("Fetching profile for player {id}..."));
            let fetched = client.player_profile(&id).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            let profile = fetched?;
            render_profile(&profile, ctx)?;
        }

        StatsCommands::Batting { id } => {
            let spinner = ctx.spinner(&format!("Fetching batting stats for player {id}..."));
            let fetched = client.batting_stats(&id).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            let table = fetched?.without_columns(&["400"]);

            if table.is_empty() {
                ctx.warn("No batting stats available.");
                return Ok(());
            }
            render_stats(&table, ctx)?;
        }

        StatsCommands::Bowling { id } => {
            let spinner = ctx.spinner(&format!("Fetching bowling stats for player {id}..."));
            let fetched = client.bowling_stats(&id).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            let table = fetched?.without_columns(&["10w"]);

            if table.is_empty() {
                ctx.warn("No bowling stats available.");
                return Ok(());
            }
            render_stats(&table, ctx)?;
        }
    }

    Ok(())
}

fn render_profile(profile: &PlayerProfile, ctx: &CliContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            ctx.write_output(&format!("{}\n", serde_json::to_string_pretty(profile)?))?;
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let mut lines = vec![format_delimited_row(ctx.format, &["field", "value"])];
            lines.push(format_delimited_row(ctx.format, &["name", &profile.name]));
            lines.push(format_delimited_row(ctx.format, &["role", &profile.role]));
            lines.push(format_delimited_row(
                ctx.format,
                &["batting_style", &profile.batting_style],
            ));
            lines.push(format_delimited_row(
                ctx.format,
                &["bowling_style", &profile.bowling_style],
            ));
            lines.push(format_delimited_row(
                ctx.format,
                &["birth_place", &profile.birth_place],
            ));
            lines.push(format_delimited_row(ctx.format, &["teams", &profile.teams]));
            for (discipline, entries) in rank_sections(profile) {
                for entry in entries {
                    lines.push(format_delimited_row(
                        ctx.format,
                        &[&format!("{}/{}", discipline, entry.label), &entry.value],
                    ));
                }
            }
            ctx.write_output(&format!("{}\n", lines.join("\n")))?;
        }
        _ => {
            let mut content = String::new();
            content.push_str(&format!("{}\n\n", or_na(&profile.name).bold()));
            content.push_str(&profile_line("Role:", &profile.role));
            content.push_str(&profile_line("Batting Style:", &profile.batting_style));
            content.push_str(&profile_line("Bowling Style:", &profile.bowling_style));
            content.push_str(&profile_line("Birth Place:", &profile.birth_place));
            content.push_str(&profile_line("Teams:", &profile.teams));

            let sections: Vec<_> = rank_sections(profile)
                .into_iter()
                .filter(|(_, entries)| !entries.is_empty())
                .collect();
            if !sections.is_empty() {
                content.push_str(&format!("\n{}\n", "ICC Rankings".bold()));
                let mut table = ctx.table();
                table.set_header(vec![
                    Cell::new("Discipline").fg(Color::Cyan),
                    Cell::new("Measure").fg(Color::Cyan),
                    Cell::new("Value").fg(Color::Cyan),
                ]);
                for (discipline, entries) in sections {
                    for entry in entries {
                        table.add_row(vec![
                            Cell::new(discipline),
                            Cell::new(&entry.label),
                            Cell::new(&entry.value),
                        ]);
                    }
                }
                content.push_str(&format!("{table}\n"));
            }
            ctx.write_output(&content)?;
        }
    }
    Ok(())
}

fn rank_sections(profile: &PlayerProfile) -> Vec<(&'static str, &[RankEntry])> {
    vec![
        ("Batting", profile.batting_ranks.as_slice()),
        ("Bowling", profile.bowling_ranks.as_slice()),
        ("All-round", profile.all_round_ranks.as_slice()),
    ]
}

fn profile_line(label: &str, value: &str) -> String {
    format!("  {} {}\n", format!("{label:<15}").dimmed(), or_na(value))
}

fn render_stats(table: &StatsTable, ctx: &CliContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            ctx.write_output(&format!("{}\n", serde_json::to_string_pretty(table)?))?;
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let header: Vec<&str> = table.headers.iter().map(String::as_str).collect();
            let mut lines = vec![format_delimited_row(ctx.format, &header)];
            for row in &table.rows {
                let cells: Vec<&str> = row.iter().map(String::as_str).collect();
                lines.push(format_delimited_row(ctx.format, &cells));
            }
            ctx.write_output(&format!("{}\n", lines.join("\n")))?;
        }
        _ => {
            let mut rendered = ctx.table();
            rendered.set_header(
                table
                    .headers
                    .iter()
                    .map(|header| Cell::new(header).fg(Color::Cyan))
                    .collect::<Vec<_>>(),
            );
            for row in &table.rows {
                rendered.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
            }
            ctx.write_output(&format!("{rendered}\n"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_sections_cover_all_disciplines() {
        let profile = PlayerProfile {
            name: "Virat Kohli".to_string(),
            role: "Batsman".to_string(),
            batting_style: String::new(),
            bowling_style: String::new(),
            birth_place: String::new(),
            teams: String::new(),
            batting_ranks: vec![RankEntry {
                label: "ODI Rank".to_string(),
                value: "3".to_string(),
            }],
            bowling_ranks: Vec::new(),
            all_round_ranks: Vec::new(),
        };
        let sections = rank_sections(&profile);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].0, "Batting");
        assert_eq!(sections[0].1.len(), 1);
        assert!(sections[1].1.is_empty());
        assert_eq!(sections[2].0, "All-round");
    }

    #[test]
    fn test_profile_line_pads_and_substitutes() {
        let line = profile_line("Role:", "");
        assert!(line.contains("N/A"));
        let line = profile_line("Role:", "Batsman");
        assert!(line.contains("Batsman"));
    }
}
