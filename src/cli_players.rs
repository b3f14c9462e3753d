//! Player and team record CLI commands

use colored::Colorize;
use comfy_table::{Cell, Color};
use serde_json::json;
use stumps::store::{InsertOutcome, MutationOutcome, Player};
use stumps::{Result, StumpsError};

use crate::cli_context::CliContext;
use crate::{format_delimited_row, OutputFormat, PlayerCommands};

pub(crate) async fn handle_teams_command(ctx: &CliContext) -> Result<()> {
    let store = ctx.store();
    let teams = store.list_teams().await?;

    match ctx.format {
        OutputFormat::Json => {
            ctx.write_output(&format!("{}\n", serde_json::to_string_pretty(&teams)?))?;
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let mut lines = vec![format_delimited_row(
                ctx.format,
                &["team_id", "team_name", "country"],
            )];
            for team in &teams {
                lines.push(format_delimited_row(
                    ctx.format,
                    &[&team.team_id.to_string(), &team.team_name, &team.country],
                ));
            }
            ctx.write_output(&format!("{}\n", lines.join("\n")))?;
        }
        _ => {
            if teams.is_empty() {
                ctx.info("No teams found.");
                return Ok(());
            }
            let mut table = ctx.table();
            table.set_header(vec![
                Cell::new("ID").fg(Color::Cyan),
                Cell::new("Team").fg(Color::Cyan),
                Cell::new("Country").fg(Color::Cyan),
            ]);
            for team in &teams {
                table.add_row(vec![
                    Cell::new(team.team_id),
                    Cell::new(&team.team_name),
                    Cell::new(&team.country),
                ]);
            }
            ctx.write_output(&format!("{table}\n"))?;
        }
    }
    Ok(())
}

pub(crate) async fn handle_player_command(cmd: PlayerCommands, ctx: &CliContext) -> Result<()> {
    let store = ctx.store();

    match cmd {
        PlayerCommands::List => {
            let roster = store.list_roster().await?;

            match ctx.format {
                OutputFormat::Json => {
                    ctx.write_output(&format!("{}\n", serde_json::to_string_pretty(&roster)?))?;
                }
                OutputFormat::Csv | OutputFormat::Tsv => {
                    let mut lines = vec![format_delimited_row(
                        ctx.format,
                        &[
                            "player_id",
                            "full_name",
                            "nick_name",
                            "team_name",
                            "country",
                            "role",
                            "batting_style",
                            "bowling_style",
                            "is_keeper",
                            "is_captain",
                            "team_id",
                        ],
                    )];
                    for row in &roster {
                        let team_id = row
                            .team_id
                            .map(|id| id.to_string())
                            .unwrap_or_default();
                        lines.push(format_delimited_row(
                            ctx.format,
                            &[
                                &row.player_id.to_string(),
                                &row.full_name,
                                &row.nick_name,
                                &row.team_name,
                                &row.country,
                                &row.role,
                                &row.batting_style,
                                &row.bowling_style,
                                &row.is_keeper.to_string(),
                                &row.is_captain.to_string(),
                                &team_id,
                            ],
                        ));
                    }
                    ctx.write_output(&format!("{}\n", lines.join("\n")))?;
                }
                _ => {
                    if roster.is_empty() {
                        ctx.info("No players found.");
                        return Ok(());
                    }
                    let mut table = ctx.table();
                    table.set_header(vec![
                        Cell::new("ID").fg(Color::Cyan),
                        Cell::new("Full Name").fg(Color::Cyan),
                        Cell::new("Nickname").fg(Color::Cyan),
                        Cell::new("Team").fg(Color::Cyan),
                        Cell::new("Country").fg(Color::Cyan),
                        Cell::new("Role").fg(Color::Cyan),
                        Cell::new("Batting").fg(Color::Cyan),
                        Cell::new("Bowling").fg(Color::Cyan),
                        Cell::new("WK").fg(Color::Cyan),
                        Cell::new("Capt").fg(Color::Cyan),
                    ]);
                    for row in &roster {
                        table.add_row(vec![
                            Cell::new(row.player_id),
                            Cell::new(&row.full_name),
                            Cell::new(&row.nick_name),
                            Cell::new(&row.team_name),
                            Cell::new(&row.country),
                            Cell::new(&row.role),
                            Cell::new(&row.batting_style),
                            Cell::new(&row.bowling_style),
                            Cell::new(yes_no(row.is_keeper)),
                            Cell::new(yes_no(row.is_captain)),
                        ]);
                    }
                    ctx.write_output(&format!("{table}\n"))?;
                }
            }
        }

        PlayerCommands::Summaries => {
            let summaries = store.list_player_summaries().await?;

            match ctx.format {
                OutputFormat::Json => {
                    ctx.write_output(&format!(
                        "{}\n",
                        serde_json::to_string_pretty(&summaries)?
                    ))?;
                }
                OutputFormat::Csv | OutputFormat::Tsv => {
                    let mut lines =
                        vec![format_delimited_row(ctx.format, &["player_id", "full_name"])];
                    for summary in &summaries {
                        lines.push(format_delimited_row(
                            ctx.format,
                            &[&summary.player_id.to_string(), &summary.full_name],
                        ));
                    }
                    ctx.write_output(&format!("{}\n", lines.join("\n")))?;
                }
                _ => {
                    if summaries.is_empty() {
                        ctx.info("No players found.");
                        return Ok(());
                    }
                    let mut table = ctx.table();
                    table.set_header(vec![
                        Cell::new("ID").fg(Color::Cyan),
                        Cell::new("Full Name").fg(Color::Cyan),
                    ]);
                    for summary in &summaries {
                        table.add_row(vec![
                            Cell::new(summary.player_id),
                            Cell::new(&summary.full_name),
                        ]);
                    }
                    ctx.write_output(&format!("{table}\n"))?;
                }
            }
        }

        PlayerCommands::Get { id } => {
            let Some(player) = store.get_player(id).await? else {
                if matches!(ctx.format, OutputFormat::Json) {
                    ctx.write_output("null\n")?;
                } else {
                    ctx.warn(&format!("No player with id {id}."));
                }
                return Ok(());
            };

            match ctx.format {
                OutputFormat::Json => {
                    ctx.write_output(&format!("{}\n", serde_json::to_string_pretty(&player)?))?;
                }
                OutputFormat::Csv | OutputFormat::Tsv => {
                    let team_id = player
                        .team_id
                        .map(|team| team.to_string())
                        .unwrap_or_default();
                    let lines = vec![
                        format_delimited_row(
                            ctx.format,
                            &[
                                "player_id",
                                "full_name",
                                "nick_name",
                                "role",
                                "batting_style",
                                "bowling_style",
                                "is_keeper",
                                "is_captain",
                                "team_id",
                            ],
                        ),
                        format_delimited_row(
                            ctx.format,
                            &[
                                &player.player_id.to_string(),
                                &player.full_name,
                                player.nick_name.as_deref().unwrap_or(""),
                                player.role.as_deref().unwrap_or(""),
                                player.batting_style.as_deref().unwrap_or(""),
                                player.bowling_style.as_deref().unwrap_or(""),
                                &player.is_keeper.to_string(),
                                &player.is_captain.to_string(),
                                &team_id,
                            ],
                        ),
                    ];
                    ctx.write_output(&format!("{}\n", lines.join("\n")))?;
                }
                _ => {
                    let team_id = player
                        .team_id
                        .map(|team| team.to_string())
                        .unwrap_or_else(|| "—".to_string());
                    let mut table = ctx.table();
                    table.set_header(vec![
                        Cell::new("Field").fg(Color::Cyan),
                        Cell::new("Value").fg(Color::Cyan),
                    ]);
                    table.add_row(vec![Cell::new("ID"), Cell::new(player.player_id)]);
                    table.add_row(vec![Cell::new("Full name"), Cell::new(&player.full_name)]);
                    table.add_row(vec![
                        Cell::new("Nickname"),
                        Cell::new(player.nick_name.as_deref().unwrap_or("—")),
                    ]);
                    table.add_row(vec![
                        Cell::new("Role"),
                        Cell::new(player.role.as_deref().unwrap_or("—")),
                    ]);
                    table.add_row(vec![
                        Cell::new("Batting style"),
                        Cell::new(player.batting_style.as_deref().unwrap_or("—")),
                    ]);
                    table.add_row(vec![
                        Cell::new("Bowling style"),
                        Cell::new(player.bowling_style.as_deref().unwrap_or("—")),
                    ]);
                    table.add_row(vec![
                        Cell::new("Wicket-keeper"),
                        Cell::new(yes_no(player.is_keeper)),
                    ]);
                    table.add_row(vec![
                        Cell::new("Captain"),
                        Cell::new(yes_no(player.is_captain)),
                    ]);
                    table.add_row(vec![Cell::new("Team id"), Cell::new(team_id)]);
                    ctx.write_output(&format!("{table}\n"))?;
                }
            }
        }

        PlayerCommands::Add {
            id,
            name,
            nick,
            role,
            batting_style,
            bowling_style,
            keeper,
            captain,
            team_id,
        } => {
            if name.trim().is_empty() {
                return Err(StumpsError::config("--name cannot be empty"));
            }

            let player = Player {
                player_id: id,
                full_name: name,
                nick_name: blank_to_null(nick),
                role: blank_to_null(role),
                batting_style: blank_to_null(batting_style),
                bowling_style: blank_to_null(bowling_style),
                is_keeper: keeper,
                is_captain: captain,
                team_id,
            };

            let spinner = ctx.spinner(&format!("Adding player {id}..."));
            let outcome = store.insert_player(&player).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }

            match outcome? {
                InsertOutcome::Inserted => match ctx.format {
                    OutputFormat::Json => {
                        ctx.write_output(&format!(
                            "{}\n",
                            serde_json::to_string_pretty(&json!({
                                "status": "inserted",
                                "player_id": id
                            }))?
                        ))?;
                    }
                    _ => {
                        ctx.success(&format!(
                            "Added player {} ({})",
                            id,
                            player.full_name.bold()
                        ));
                    }
                },
                InsertOutcome::AlreadyExists => match ctx.format {
                    OutputFormat::Json => {
                        ctx.write_output(&format!(
                            "{}\n",
                            serde_json::to_string_pretty(&json!({
                                "status": "already_exists",
                                "player_id": id
                            }))?
                        ))?;
                    }
                    _ => {
                        ctx.warn(&format!(
                            "Player {id} already exists — existing record left untouched."
                        ));
                    }
                },
            }
        }

        PlayerCommands::Update {
            id,
            name,
            nick,
            role,
            batting_style,
            bowling_style,
            keeper,
            captain,
            team_id,
            no_team,
        } => {
            if let Some(ref value) = name {
                if value.trim().is_empty() {
                    return Err(StumpsError::config("--name cannot be empty"));
                }
            }

            let Some(current) = store.get_player(id).await? else {
                report_not_found(id, ctx)?;
                return Ok(());
            };

            let player = Player {
                player_id: id,
                full_name: name.unwrap_or(current.full_name),
                nick_name: merge_optional(nick, current.nick_name),
                role: merge_optional(role, current.role),
                batting_style: merge_optional(batting_style, current.batting_style),
                bowling_style: merge_optional(bowling_style, current.bowling_style),
                is_keeper: keeper.unwrap_or(current.is_keeper),
                is_captain: captain.unwrap_or(current.is_captain),
                team_id: if no_team {
                    None
                } else {
                    team_id.or(current.team_id)
                },
            };

            let spinner = ctx.spinner(&format!("Updating player {id}..."));
            let outcome = store.update_player(&player).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }

            match outcome? {
                MutationOutcome::Applied => match ctx.format {
                    OutputFormat::Json => {
                        ctx.write_output(&format!(
                            "{}\n",
                            serde_json::to_string_pretty(&json!({
                                "status": "updated",
                                "player_id": id
                            }))?
                        ))?;
                    }
                    _ => {
                        ctx.success(&format!(
                            "Updated player {} ({})",
                            id,
                            player.full_name.bold()
                        ));
                    }
                },
                // The record vanished between the read and the write.
                MutationOutcome::NotFound => report_not_found(id, ctx)?,
            }
        }

        PlayerCommands::Remove { id } => {
            let Some(player) = store.get_player(id).await? else {
                report_not_found(id, ctx)?;
                return Ok(());
            };

            if !ctx.confirm(&format!("Delete player {} ({})?", id, player.full_name)) {
                ctx.info("Cancelled.");
                return Ok(());
            }

            let spinner = ctx.spinner(&format!("Deleting player {id}..."));
            let outcome = store.delete_player(id).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }

            match outcome? {
                MutationOutcome::Applied => match ctx.format {
                    OutputFormat::Json => {
                        ctx.write_output(&format!(
                            "{}\n",
                            serde_json::to_string_pretty(&json!({
                                "status": "deleted",
                                "player_id": id
                            }))?
                        ))?;
                    }
                    _ => {
                        ctx.success(&format!(
                            "Deleted player {} ({})",
                            id,
                            player.full_name.bold()
                        ));
                    }
                },
                MutationOutcome::NotFound => report_not_found(id, ctx)?,
            }
        }
    }

    Ok(())
}

/// A targeted mutation on an absent id is reported, never silent.
fn report_not_found(id: i64, ctx: &CliContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => ctx.write_output(&format!(
            "{}\n",
            serde_json::to_string_pretty(&json!({
                "status": "not_found",
                "player_id": id
            }))?
        )),
        _ => {
            ctx.warn(&format!("No player with id {id} — nothing changed."));
            Ok(())
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Blank-or-missing optional flags become NULL on insert.
fn blank_to_null(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Merge an update flag over the stored value: absent keeps, blank clears.
fn merge_optional(flag: Option<String>, current: Option<String>) -> Option<String> {
    match flag {
        Some(value) if value.trim().is_empty() => None,
        Some(value) => Some(value),
        None => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_optional_absent_keeps_current() {
        assert_eq!(
            merge_optional(None, Some("King Kohli".to_string())),
            Some("King Kohli".to_string())
        );
        assert_eq!(merge_optional(None, None), None);
    }

    #[test]
    fn test_merge_optional_blank_clears() {
        assert_eq!(merge_optional(Some("".to_string()), Some("old".to_string())), None);
        assert_eq!(merge_optional(Some("  ".to_string()), Some("old".to_string())), None);
    }

    #[test]
    fn test_merge_optional_value_replaces() {
        assert_eq!(
            merge_optional(Some("new".to_string()), Some("old".to_string())),
            Some("new".to_string())
        );
    }

    #[test]
    fn test_blank_to_null() {
        assert_eq!(blank_to_null(Some(" ".to_string())), None);
        assert_eq!(blank_to_null(None), None);
        assert_eq!(
            blank_to_null(Some("Chinnaswamy".to_string())),
            Some("Chinnaswamy".to_string())
        );
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }
}
