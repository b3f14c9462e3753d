//! Live match CLI commands

use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use comfy_table::{Cell, Color};
use stumps::live::{InningsScore, LiveMatch, Scorecard};
use stumps::Result;

use crate::cli_context::CliContext;
use crate::{format_delimited_row, LiveCommands, OutputFormat};

pub(crate) async fn handle_live_command(cmd: LiveCommands, ctx: &CliContext) -> Result<()> {
    let client = ctx.live_client()?;

    match cmd {
        LiveCommands::Matches { match_type, series } => {
            let spinner = ctx.spinner("Fetching live matches...");
            let fetched = client.list_live_matches().await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            let all = fetched?;

            let had_any = !all.is_empty();
            let matches = filter_matches(all, match_type.as_deref(), series.as_deref());
            if matches.is_empty() {
                if had_any {
                    ctx.warn("No live matches match the given filters.");
                } else {
                    ctx.warn("No live matches right now.");
                }
                return Ok(());
            }

            render_matches(&matches, ctx)?;
        }

        LiveCommands::Scorecard { match_id } => {
            let spinner = ctx.spinner(&format!("Fetching scorecard for match {match_id}..."));
            let fetched = client.scorecard(match_id).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            let scorecard = fetched?;

            if scorecard.innings.is_empty() {
                ctx.warn("No scorecard data available.");
                return Ok(());
            }

            render_scorecard(&scorecard, ctx)?;
        }
    }

    Ok(())
}

fn render_matches(matches: &[LiveMatch], ctx: &CliContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            ctx.write_output(&format!("{}\n", serde_json::to_string_pretty(matches)?))?;
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let mut lines = vec![format_delimited_row(
                ctx.format,
                &[
                    "match_id",
                    "match_type",
                    "series",
                    "description",
                    "format",
                    "team1",
                    "team2",
                    "status",
                    "state",
                    "ground",
                    "city",
                    "start_time",
                    "end_time",
                    "team1_score",
                    "team2_score",
                ],
            )];
            for m in matches {
                lines.push(format_delimited_row(
                    ctx.format,
                    &[
                        &m.match_id.to_string(),
                        &m.match_type,
                        &m.series_name,
                        &m.description,
                        &m.format,
                        &m.team1,
                        &m.team2,
                        &m.status,
                        &m.state,
                        &m.ground,
                        &m.city,
                        &rfc3339_or_empty(m.start_time),
                        &rfc3339_or_empty(m.end_time),
                        &m.team1_score.as_ref().map(compact_score).unwrap_or_default(),
                        &m.team2_score.as_ref().map(compact_score).unwrap_or_default(),
                    ],
                ));
            }
            ctx.write_output(&format!("{}\n", lines.join("\n")))?;
        }
        _ => {
            let mut content = String::new();
            for ((match_type, series), bucket) in group_by_series(matches) {
                content.push_str(&format!(
                    "{} {}\n\n",
                    series.bold(),
                    format!("({match_type})").dimmed()
                ));
                for m in bucket {
                    content.push_str(&match_block(m));
                    content.push('\n');
                }
            }
            ctx.write_output(&content)?;
        }
    }
    Ok(())
}

/// Feed order nests matches under their series, so grouping consecutive
/// rows reconstructs the series sections exactly.
fn group_by_series(matches: &[LiveMatch]) -> Vec<((&str, &str), Vec<&LiveMatch>)> {
    let mut groups: Vec<((&str, &str), Vec<&LiveMatch>)> = Vec::new();
    for m in matches {
        let key = (m.match_type.as_str(), m.series_name.as_str());
        match groups.last_mut() {
            Some((last, bucket)) if *last == key => bucket.push(m),
            _ => groups.push((key, vec![m])),
        }
    }
    groups
}

fn match_block(m: &LiveMatch) -> String {
    let mut block = String::new();
    block.push_str(&format!(
        "  {} {} {}\n",
        format!("{} vs {}", m.team1, m.team2).bold(),
        describe(m),
        format!("[id {}]", m.match_id).dimmed()
    ));
    if !m.status.is_empty() {
        block.push_str(&format!("    {} {}\n", "Status:".dimmed(), m.status));
    }
    if !m.state.is_empty() && m.state != m.status {
        block.push_str(&format!("    {} {}\n", "State:".dimmed(), m.state));
    }
    block.push_str(&format!("    {} {}\n", "Venue:".dimmed(), venue(m)));
    block.push_str(&format!(
        "    {} {}\n",
        "Starts:".dimmed(),
        format_local_time(m.start_time)
    ));
    block.push_str(&format!(
        "    {} {}\n",
        "Ends:".dimmed(),
        format_local_time(m.end_time)
    ));
    if let Some(ref score) = m.team1_score {
        block.push_str(&format!("    {}\n", score_line(&m.team1_short, score)));
    }
    if let Some(ref score) = m.team2_score {
        block.push_str(&format!("    {}\n", score_line(&m.team2_short, score)));
    }
    block
}

fn describe(m: &LiveMatch) -> String {
    match (m.description.is_empty(), m.format.is_empty()) {
        (false, false) => format!("— {} ({})", m.description, m.format),
        (false, true) => format!("— {}", m.description),
        (true, false) => format!("— {}", m.format),
        (true, true) => String::new(),
    }
}

fn venue(m: &LiveMatch) -> String {
    match (m.ground.is_empty(), m.city.is_empty()) {
        (false, false) => format!("{}, {}", m.ground, m.city),
        (false, true) => m.ground.clone(),
        (true, false) => m.city.clone(),
        (true, true) => "N/A".to_string(),
    }
}

fn score_line(short: &str, score: &InningsScore) -> String {
    format!(
        "{}: {}/{} in {} overs",
        short, score.runs, score.wickets, score.overs
    )
}

fn compact_score(score: &InningsScore) -> String {
    format!("{}/{} ({})", score.runs, score.wickets, score.overs)
}

fn rfc3339_or_empty(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.to_rfc3339()).unwrap_or_default()
}

/// Epoch times render in the viewer's timezone; missing times as N/A.
fn format_local_time(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(t) => t
            .with_timezone(&Local)
            .format("%d %b %Y, %I:%M %p")
            .to_string(),
        None => "N/A".to_string(),
    }
}

fn filter_matches(
    all: Vec<LiveMatch>,
    match_type: Option<&str>,
    series: Option<&str>,
) -> Vec<LiveMatch> {
    let series_needle = series.map(str::to_lowercase);
    all.into_iter()
        .filter(|m| {
            match_type.map_or(true, |wanted| m.match_type.eq_ignore_ascii_case(wanted))
        })
        .filter(|m| {
            series_needle
                .as_deref()
                .map_or(true, |needle| m.series_name.to_lowercase().contains(needle))
        })
        .collect()
}

fn render_scorecard(scorecard: &Scorecard, ctx: &CliContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            ctx.write_output(&format!("{}\n", serde_json::to_string_pretty(scorecard)?))?;
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let mut lines = vec![format_delimited_row(
                ctx.format,
                &[
                    "innings",
                    "team",
                    "kind",
                    "name",
                    "runs",
                    "balls",
                    "fours",
                    "sixes",
                    "strike_rate",
                    "dismissal",
                    "overs",
                    "maidens",
                    "wickets",
                    "economy",
                ],
            )];
            for (index, innings) in scorecard.innings.iter().enumerate() {
                let number = (index + 1).to_string();
                for line in &innings.batting {
                    lines.push(format_delimited_row(
                        ctx.format,
                        &[
                            &number,
                            &innings.batting_team,
                            "batting",
                            &line.name,
                            &line.runs.to_string(),
                            &line.balls.to_string(),
                            &line.fours.to_string(),
                            &line.sixes.to_string(),
                            &line.strike_rate,
                            &line.dismissal,
                            "",
                            "",
                            "",
                            "",
                        ],
                    ));
                }
                for line in &innings.bowling {
                    lines.push(format_delimited_row(
                        ctx.format,
                        &[
                            &number,
                            &innings.batting_team,
                            "bowling",
                            &line.name,
                            &line.runs.to_string(),
                            "",
                            "",
                            "",
                            "",
                            "",
                            &line.overs,
                            &line.maidens.to_string(),
                            &line.wickets.to_string(),
                            &line.economy,
                        ],
                    ));
                }
            }
            ctx.write_output(&format!("{}\n", lines.join("\n")))?;
        }
        _ => {
            let mut content = String::new();
            for (index, innings) in scorecard.innings.iter().enumerate() {
                content.push_str(&format!(
                    "{}\n",
                    format!("Innings {} — {}", index + 1, innings.batting_team).bold()
                ));

                if !innings.batting.is_empty() {
                    let mut table = ctx.table();
                    table.set_header(vec![
                        Cell::new("Batsman").fg(Color::Cyan),
                        Cell::new("R").fg(Color::Cyan),
                        Cell::new("B").fg(Color::Cyan),
                        Cell::new("4s").fg(Color::Cyan),
                        Cell::new("6s").fg(Color::Cyan),
                        Cell::new("SR").fg(Color::Cyan),
                        Cell::new("Dismissal").fg(Color::Cyan),
                    ]);
                    for line in &innings.batting {
                        table.add_row(vec![
                            Cell::new(&line.name),
                            Cell::new(line.runs),
                            Cell::new(line.balls),
                            Cell::new(line.fours),
                            Cell::new(line.sixes),
                            Cell::new(&line.strike_rate),
                            Cell::new(&line.dismissal),
                        ]);
                    }
                    content.push_str(&format!("{table}\n"));
                }

                if !innings.bowling.is_empty() {
                    let mut table = ctx.table();
                    table.set_header(vec![
                        Cell::new("Bowler").fg(Color::Cyan),
                        Cell::new("O").fg(Color::Cyan),
                        Cell::new("M").fg(Color::Cyan),
                        Cell::new("R").fg(Color::Cyan),
                        Cell::new("W").fg(Color::Cyan),
                        Cell::new("Econ").fg(Color::Cyan),
                    ]);
                    for line in &innings.bowling {
                        table.add_row(vec![
                            Cell::new(&line.name),
                            Cell::new(&line.overs),
                            Cell::new(line.maidens),
                            Cell::new(line.runs),
                            Cell::new(line.wickets),
                            Cell::new(&line.economy),
                        ]);
                    }
                    content.push_str(&format!("{table}\n"));
                }

                content.push('\n');
            }
            ctx.write_output(&content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(match_type: &str, series: &str, id: i64) -> LiveMatch {
        LiveMatch {
            match_id: id,
            series_name: series.to_string(),
            match_type: match_type.to_string(),
            description: "3rd Match".to_string(),
            format: "T20".to_string(),
            team1: "India".to_string(),
            team2: "Sri Lanka".to_string(),
            team1_short: "IND".to_string(),
            team2_short: "SL".to_string(),
            status: "Live".to_string(),
            state: "In Progress".to_string(),
            ground: "Dubai International Stadium".to_string(),
            city: "Dubai".to_string(),
            start_time: None,
            end_time: None,
            team1_score: None,
            team2_score: None,
        }
    }

    #[test]
    fn test_group_by_series_keeps_feed_sections() {
        let matches = vec![
            sample("International", "Asia Cup", 1),
            sample("International", "Asia Cup", 2),
            sample("League", "The Hundred", 3),
        ];
        let groups = group_by_series(&matches);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, ("International", "Asia Cup"));
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, ("League", "The Hundred"));
    }

    #[test]
    fn test_filter_matches_by_type_and_series() {
        let all = vec![
            sample("International", "Asia Cup", 1),
            sample("League", "The Hundred", 2),
        ];
        let filtered = filter_matches(all.clone(), Some("international"), None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].match_id, 1);

        let filtered = filter_matches(all.clone(), None, Some("hundred"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].match_id, 2);

        let filtered = filter_matches(all, Some("International"), Some("hundred"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_missing_times_render_na() {
        assert_eq!(format_local_time(None), "N/A");
    }

    #[test]
    fn test_score_line_phrasing() {
        let score = InningsScore {
            runs: 187,
            wickets: 4,
            overs: 19.2,
        };
        assert_eq!(score_line("IND", &score), "IND: 187/4 in 19.2 overs");
    }

    #[test]
    fn test_venue_falls_back_to_na() {
        let mut m = sample("International", "Asia Cup", 1);
        assert_eq!(venue(&m), "Dubai International Stadium, Dubai");
        m.ground.clear();
        assert_eq!(venue(&m), "Dubai");
        m.city.clear();
        assert_eq!(venue(&m), "N/A");
    }
}
