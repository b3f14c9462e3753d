//! Wire payloads and domain types for live data
//!
//! The upstream feed is loosely typed: ids arrive as numbers, epoch
//! timestamps as strings, rate fields as either, and whole branches go
//! missing between polls. The wire structs here absorb that with defaults
//! and tolerant field decoders, then flatten into strict domain types the
//! rest of the crate can rely on.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

// ── Tolerant field decoders ──────────────────────────────────────────────

fn stringify(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Accept a string or a number, yielding its display form.
fn de_display<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(stringify(&value))
}

/// Accept a count as a number or a numeric string; anything else is zero.
fn de_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().unwrap_or(0) as u32,
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Accept an overs figure as a number or a numeric string.
fn de_overs<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// A JSON object kept in document order, values stringified.
///
/// `serde_json`'s map type sorts keys; the ranking cards must render in
/// the order the feed sends them, so this decodes the entries itself.
#[derive(Debug, Clone, Default, PartialEq)]
struct OrderedFields(Vec<(String, String)>);

impl<'de> Deserialize<'de> for OrderedFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = OrderedFields;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, serde_json::Value>()? {
                    fields.push((key, stringify(&value)));
                }
                Ok(OrderedFields(fields))
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

fn parse_epoch_ms(raw: &str) -> Option<DateTime<Utc>> {
    let ms = raw.trim().parse::<i64>().ok()?;
    Utc.timestamp_millis_opt(ms).single()
}

// ── Live match feed ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(super) struct LiveFeedWire {
    #[serde(rename = "typeMatches", default)]
    type_matches: Vec<TypeMatchWire>,
}

#[derive(Debug, Deserialize)]
struct TypeMatchWire {
    #[serde(rename = "matchType")]
    match_type: Option<String>,
    #[serde(rename = "seriesMatches", default)]
    series_matches: Vec<SeriesMatchWire>,
}

/// One entry of `seriesMatches`; ad slots come through with no wrapper.
#[derive(Debug, Deserialize)]
struct SeriesMatchWire {
    #[serde(rename = "seriesAdWrapper")]
    series: Option<SeriesWrapperWire>,
}

#[derive(Debug, Deserialize)]
struct SeriesWrapperWire {
    #[serde(rename = "seriesName")]
    series_name: Option<String>,
    #[serde(default)]
    matches: Vec<MatchWire>,
}

#[derive(Debug, Deserialize)]
struct MatchWire {
    #[serde(rename = "matchInfo")]
    match_info: Option<MatchInfoWire>,
    #[serde(rename = "matchScore")]
    match_score: Option<MatchScoreWire>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchInfoWire {
    match_id: Option<i64>,
    #[serde(default)]
    match_desc: String,
    #[serde(default)]
    match_format: String,
    team1: Option<TeamWire>,
    team2: Option<TeamWire>,
    #[serde(default)]
    status: String,
    #[serde(default)]
    state_title: String,
    venue_info: Option<VenueWire>,
    // Epoch milliseconds, sent as strings.
    #[serde(default, deserialize_with = "de_display")]
    start_date: String,
    #[serde(default, deserialize_with = "de_display")]
    end_date: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamWire {
    team_name: Option<String>,
    team_s_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VenueWire {
    #[serde(default)]
    ground: String,
    #[serde(default)]
    city: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchScoreWire {
    team1_score: Option<ScoreWire>,
    team2_score: Option<ScoreWire>,
}

#[derive(Debug, Deserialize)]
struct ScoreWire {
    inngs1: Option<InningsScoreWire>,
}

#[derive(Debug, Deserialize)]
struct InningsScoreWire {
    #[serde(default, deserialize_with = "de_count")]
    runs: u32,
    #[serde(default, deserialize_with = "de_count")]
    wickets: u32,
    #[serde(default, deserialize_with = "de_overs")]
    overs: f64,
}

/// A match currently in the live feed, flattened from its series grouping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveMatch {
    pub match_id: i64,
    pub series_name: String,
    /// Feed grouping: "International", "League", "Domestic", "Women".
    pub match_type: String,
    /// Short label like "3rd T20I".
    pub description: String,
    pub format: String,
    pub team1: String,
    pub team2: String,
    pub team1_short: String,
    pub team2_short: String,
    pub status: String,
    pub state: String,
    pub ground: String,
    pub city: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub team1_score: Option<InningsScore>,
    pub team2_score: Option<InningsScore>,
}

/// First-innings score line for one side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InningsScore {
    pub runs: u32,
    pub wickets: u32,
    pub overs: f64,
}

/// Flatten the nested feed into match rows, preserving feed order.
///
/// Ad slots, series with no matches and matches without an id are dropped;
/// everything else keeps its position.
pub(super) fn flatten_feed(feed: LiveFeedWire) -> Vec<LiveMatch> {
    let mut matches = Vec::new();
    for type_match in feed.type_matches {
        let match_type = type_match
            .match_type
            .unwrap_or_else(|| "Unknown".to_string());
        for entry in type_match.series_matches {
            let Some(series) = entry.series else { continue };
            let series_name = series
                .series_name
                .unwrap_or_else(|| "Unknown Series".to_string());
            for m in series.matches {
                let Some(info) = m.match_info else { continue };
                let Some(match_id) = info.match_id else { continue };

                let (team1, team1_short) = team_names(info.team1, "Team 1");
                let (team2, team2_short) = team_names(info.team2, "Team 2");
                let (ground, city) = match info.venue_info {
                    Some(venue) => (venue.ground, venue.city),
                    None => (String::new(), String::new()),
                };
                let (team1_score, team2_score) = match m.match_score {
                    Some(score) => (
                        innings_score(score.team1_score),
                        innings_score(score.team2_score),
                    ),
                    None => (None, None),
                };

                matches.push(LiveMatch {
                    match_id,
                    series_name: series_name.clone(),
                    match_type: match_type.clone(),
                    description: info.match_desc,
                    format: info.match_format,
                    team1,
                    team2,
                    team1_short,
                    team2_short,
                    status: info.status,
                    state: info.state_title,
                    ground,
                    city,
                    start_time: parse_epoch_ms(&info.start_date),
                    end_time: parse_epoch_ms(&info.end_date),
                    team1_score,
                    team2_score,
                });
            }
        }
    }
    matches
}

fn team_names(team: Option<TeamWire>, fallback: &str) -> (String, String) {
    match team {
        Some(team) => {
            let name = team.team_name.unwrap_or_else(|| fallback.to_string());
            let short = team.team_s_name.unwrap_or_else(|| name.clone());
            (name, short)
        }
        None => (fallback.to_string(), fallback.to_string()),
    }
}

fn innings_score(score: Option<ScoreWire>) -> Option<InningsScore> {
    let innings = score?.inngs1?;
    Some(InningsScore {
        runs: innings.runs,
        wickets: innings.wickets,
        overs: innings.overs,
    })
}

// ── Scorecard ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(super) struct ScorecardWire {
    #[serde(default)]
    scorecard: Vec<InningsWire>,
}

#[derive(Debug, Deserialize)]
struct InningsWire {
    #[serde(rename = "batteamname", default)]
    batting_team: String,
    #[serde(rename = "batsman", default)]
    batsmen: Vec<BatsmanWire>,
    #[serde(rename = "bowler", default)]
    bowlers: Vec<BowlerWire>,
}

#[derive(Debug, Deserialize)]
struct BatsmanWire {
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "de_count")]
    runs: u32,
    #[serde(default, deserialize_with = "de_count")]
    balls: u32,
    #[serde(default, deserialize_with = "de_count")]
    fours: u32,
    #[serde(default, deserialize_with = "de_count")]
    sixes: u32,
    #[serde(rename = "strkrate", default, deserialize_with = "de_display")]
    strike_rate: String,
    #[serde(rename = "outdec", default)]
    dismissal: String,
}

#[derive(Debug, Deserialize)]
struct BowlerWire {
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "de_display")]
    overs: String,
    #[serde(default, deserialize_with = "de_count")]
    maidens: u32,
    #[serde(default, deserialize_with = "de_count")]
    runs: u32,
    #[serde(default, deserialize_with = "de_count")]
    wickets: u32,
    #[serde(default, deserialize_with = "de_display")]
    economy: String,
}

/// Full scorecard: one card per innings, in playing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub innings: Vec<InningsCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InningsCard {
    pub batting_team: String,
    pub batting: Vec<BattingLine>,
    pub bowling: Vec<BowlingLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingLine {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: String,
    /// Dismissal text, e.g. "c Head b Starc"; empty while not out.
    pub dismissal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlingLine {
    pub name: String,
    pub overs: String,
    pub maidens: u32,
    pub runs: u32,
    pub wickets: u32,
    pub economy: String,
}

pub(super) fn flatten_scorecard(wire: ScorecardWire) -> Scorecard {
    Scorecard {
        innings: wire
            .scorecard
            .into_iter()
            .map(|innings| InningsCard {
                batting_team: innings.batting_team,
                batting: innings
                    .batsmen
                    .into_iter()
                    .map(|b| BattingLine {
                        name: b.name,
                        runs: b.runs,
                        balls: b.balls,
                        fours: b.fours,
                        sixes: b.sixes,
                        strike_rate: b.strike_rate,
                        dismissal: b.dismissal,
                    })
                    .collect(),
                bowling: innings
                    .bowlers
                    .into_iter()
                    .map(|b| BowlingLine {
                        name: b.name,
                        overs: b.overs,
                        maidens: b.maidens,
                        runs: b.runs,
                        wickets: b.wickets,
                        economy: b.economy,
                    })
                    .collect(),
            })
            .collect(),
    }
}

// ── Player search ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(super) struct SearchWire {
    #[serde(rename = "player", default)]
    players: Vec<SearchHitWire>,
}

#[derive(Debug, Deserialize)]
struct SearchHitWire {
    #[serde(default, deserialize_with = "de_display")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "teamName", default)]
    team_name: String,
    #[serde(default)]
    dob: String,
}

/// One search result. The id is an upstream identifier, kept opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSearchHit {
    pub id: String,
    pub name: String,
    pub team_name: String,
    pub dob: String,
}

pub(super) fn flatten_search(wire: SearchWire) -> Vec<PlayerSearchHit> {
    wire.players
        .into_iter()
        .filter(|hit| !hit.id.is_empty())
        .map(|hit| PlayerSearchHit {
            id: hit.id,
            name: hit.name,
            team_name: hit.team_name,
            dob: hit.dob,
        })
        .collect()
}

// ── Player profile and rankings ──────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(super) struct ProfileWire {
    name: Option<String>,
    role: Option<String>,
    bat: Option<String>,
    bowl: Option<String>,
    #[serde(rename = "birthPlace")]
    birth_place: Option<String>,
    teams: Option<String>,
    rankings: Option<RankingsWire>,
}

#[derive(Debug, Deserialize)]
struct RankingsWire {
    #[serde(default)]
    bat: OrderedFields,
    #[serde(default)]
    bowl: OrderedFields,
    #[serde(rename = "all", default)]
    all_round: OrderedFields,
}

/// Player profile with the three ranking cards, feed order preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerProfile {
    pub name: String,
    pub role: String,
    pub batting_style: String,
    pub bowling_style: String,
    pub birth_place: String,
    pub teams: String,
    pub batting_ranks: Vec<RankEntry>,
    pub bowling_ranks: Vec<RankEntry>,
    pub all_round_ranks: Vec<RankEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    pub label: String,
    pub value: String,
}

pub(super) fn flatten_profile(wire: ProfileWire) -> PlayerProfile {
    let (batting_ranks, bowling_ranks, all_round_ranks) = match wire.rankings {
        Some(rankings) => (
            rank_entries(&rankings.bat),
            rank_entries(&rankings.bowl),
            rank_entries(&rankings.all_round),
        ),
        None => (Vec::new(), Vec::new(), Vec::new()),
    };
    PlayerProfile {
        name: wire.name.unwrap_or_default(),
        role: wire.role.unwrap_or_default(),
        batting_style: wire.bat.unwrap_or_default(),
        bowling_style: wire.bowl.unwrap_or_default(),
        birth_place: wire.birth_place.unwrap_or_default(),
        teams: wire.teams.unwrap_or_default(),
        batting_ranks,
        bowling_ranks,
        all_round_ranks,
    }
}

/// `DiffRank` keys are movement deltas, not positions; they are skipped.
fn rank_entries(fields: &OrderedFields) -> Vec<RankEntry> {
    fields
        .0
        .iter()
        .filter(|(key, _)| !key.contains("DiffRank"))
        .map(|(key, value)| RankEntry {
            label: prettify_rank_label(key),
            value: value.clone(),
        })
        .collect()
}

/// Turn a feed key like `odiBestRank` into a readable `ODI Best Rank`.
fn prettify_rank_label(key: &str) -> String {
    let spaced = key
        .replace("odi", "ODI ")
        .replace("test", "Test ")
        .replace("t20", "T20 ")
        .replace("Rank", " Rank")
        .replace("Best", " Best");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Career stats tables ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(super) struct StatsWire {
    #[serde(default)]
    headers: Vec<serde_json::Value>,
    #[serde(default)]
    values: Vec<StatsRowWire>,
}

#[derive(Debug, Deserialize)]
struct StatsRowWire {
    #[serde(default)]
    values: Vec<serde_json::Value>,
}

/// A career stats table exactly as the feed shapes it: a header row and
/// string cells, one row per metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl StatsTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Copy of the table without the named columns. Unknown names are
    /// ignored; cells keep their alignment with the surviving headers.
    pub fn without_columns(&self, drop: &[&str]) -> StatsTable {
        let keep: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, header)| !drop.contains(&header.as_str()))
            .map(|(index, _)| index)
            .collect();
        StatsTable {
            headers: keep.iter().map(|&i| self.headers[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| keep.iter().filter_map(|&i| row.get(i).cloned()).collect())
                .collect(),
        }
    }
}

pub(super) fn flatten_stats(wire: StatsWire) -> StatsTable {
    let headers: Vec<String> = wire.headers.iter().map(stringify).collect();
    let width = headers.len();
    let rows = wire
        .values
        .into_iter()
        .map(|row| {
            let mut cells: Vec<String> = row.values.iter().map(stringify).collect();
            // Ragged rows are realigned to the header width.
            cells.resize(width, String::new());
            cells
        })
        .collect();
    StatsTable { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_flattens_in_order_and_skips_ad_slots() {
        let raw = r#"{
            "typeMatches": [
                {
                    "matchType": "International",
                    "seriesMatches": [
                        {"adDetail": {"name": "native ad"}},
                        {
                            "seriesAdWrapper": {
                                "seriesId": 9211,
                                "seriesName": "Asia Cup 2026",
                                "matches": [
                                    {
                                        "matchInfo": {
                                            "matchId": 118928,
                                            "matchDesc": "3rd Match",
                                            "matchFormat": "T20",
                                            "startDate": "1755856800000",
                                            "endDate": "1755870300000",
                                            "state": "In Progress",
                                            "status": "India opt to bowl",
                                            "stateTitle": "In Progress",
                                            "team1": {"teamId": 2, "teamName": "India", "teamSName": "IND"},
                                            "team2": {"teamId": 5, "teamName": "Sri Lanka", "teamSName": "SL"},
                                            "venueInfo": {"ground": "Dubai International Stadium", "city": "Dubai"}
                                        },
                                        "matchScore": {
                                            "team1Score": {"inngs1": {"inningsId": 1, "runs": 187, "wickets": 4, "overs": 20}}
                                        }
                                    }
                                ]
                            }
                        }
                    ]
                },
                {
                    "matchType": "League",
                    "seriesMatches": [
                        {
                            "seriesAdWrapper": {
                                "seriesName": "The Hundred 2026",
                                "matches": [
                                    {
                                        "matchInfo": {
                                            "matchId": 120001,
                                            "matchDesc": "12th Match",
                                            "matchFormat": "T20",
                                            "team1": {"teamName": "Oval Invincibles", "teamSName": "OVI"},
                                            "team2": {"teamName": "London Spirit", "teamSName": "LNS"},
                                            "status": "Starts at 18:30"
                                        }
                                    }
                                ]
                            }
                        }
                    ]
                }
            ]
        }"#;

        let feed: LiveFeedWire = serde_json::from_str(raw).unwrap();
        let matches = flatten_feed(feed);
        assert_eq!(matches.len(), 2);

        let first = &matches[0];
        assert_eq!(first.match_id, 118928);
        assert_eq!(first.match_type, "International");
        assert_eq!(first.series_name, "Asia Cup 2026");
        assert_eq!(first.team1, "India");
        assert_eq!(first.team2_short, "SL");
        assert_eq!(first.ground, "Dubai International Stadium");
        assert_eq!(first.city, "Dubai");
        assert_eq!(
            first.team1_score,
            Some(InningsScore {
                runs: 187,
                wickets: 4,
                overs: 20.0
            })
        );
        assert!(first.team2_score.is_none());
        let start = first.start_time.unwrap();
        assert_eq!(start.timestamp_millis(), 1_755_856_800_000);

        let second = &matches[1];
        assert_eq!(second.match_type, "League");
        assert_eq!(second.series_name, "The Hundred 2026");
        assert!(second.start_time.is_none());
        assert!(second.team1_score.is_none());
    }

    #[test]
    fn test_feed_skips_matches_without_an_id() {
        let raw = r#"{
            "typeMatches": [{
                "matchType": "Domestic",
                "seriesMatches": [{
                    "seriesAdWrapper": {
                        "seriesName": "Ranji Trophy",
                        "matches": [{"matchInfo": {"matchDesc": "Final"}}]
                    }
                }]
            }]
        }"#;
        let feed: LiveFeedWire = serde_json::from_str(raw).unwrap();
        assert!(flatten_feed(feed).is_empty());
    }

    #[test]
    fn test_unparsable_epoch_is_none() {
        assert!(parse_epoch_ms("").is_none());
        assert!(parse_epoch_ms("soon").is_none());
        assert!(parse_epoch_ms("1755856800000").is_some());
    }

    #[test]
    fn test_scorecard_flattens_both_tables() {
        let raw = r#"{
            "scorecard": [
                {
                    "batteamname": "India",
                    "batsman": [
                        {"name": "Rohit Sharma", "runs": 64, "balls": 41, "fours": 6, "sixes": 3, "strkrate": "156.10", "outdec": "c Head b Starc"},
                        {"name": "Virat Kohli", "runs": 12, "balls": 9, "fours": 2, "sixes": 0, "strkrate": 133.33, "outdec": ""}
                    ],
                    "bowler": [
                        {"name": "Mitchell Starc", "overs": "4", "maidens": 0, "runs": 38, "wickets": 2, "economy": "9.50"}
                    ]
                },
                {
                    "batteamname": "Australia",
                    "batsman": [],
                    "bowler": []
                }
            ]
        }"#;

        let wire: ScorecardWire = serde_json::from_str(raw).unwrap();
        let card = flatten_scorecard(wire);
        assert_eq!(card.innings.len(), 2);

        let first = &card.innings[0];
        assert_eq!(first.batting_team, "India");
        assert_eq!(first.batting.len(), 2);
        assert_eq!(first.batting[0].runs, 64);
        assert_eq!(first.batting[0].dismissal, "c Head b Starc");
        assert_eq!(first.batting[0].strike_rate, "156.10");
        // Rate sent as a bare number still comes through as text.
        assert_eq!(first.batting[1].strike_rate, "133.33");
        assert_eq!(first.bowling[0].wickets, 2);
        assert_eq!(first.bowling[0].economy, "9.50");

        assert_eq!(card.innings[1].batting_team, "Australia");
        assert!(card.innings[1].batting.is_empty());
    }

    #[test]
    fn test_search_results_keep_feed_order_and_string_ids() {
        let raw = r#"{
            "player": [
                {"id": "1413", "name": "Virat Kohli", "teamName": "India", "dob": "November 05, 1988"},
                {"id": "8733", "name": "Virat Singh", "teamName": "Jharkhand"}
            ],
            "category": "Search Results"
        }"#;

        let wire: SearchWire = serde_json::from_str(raw).unwrap();
        let hits = flatten_search(wire);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "1413");
        assert_eq!(hits[0].dob, "November 05, 1988");
        assert_eq!(hits[1].name, "Virat Singh");
        assert_eq!(hits[1].dob, "");
    }

    #[test]
    fn test_search_with_no_players_is_empty() {
        let wire: SearchWire = serde_json::from_str("{}").unwrap();
        assert!(flatten_search(wire).is_empty());
    }

    #[test]
    fn test_profile_rankings_skip_diff_keys_and_keep_order() {
        let raw = r#"{
            "id": "1413",
            "name": "Virat Kohli",
            "role": "Batsman",
            "bat": "Right Handed Bat",
            "bowl": "Right-arm medium",
            "birthPlace": "Delhi",
            "teams": "India, Delhi, Royal Challengers Bengaluru",
            "rankings": {
                "bat": {
                    "testRank": "15",
                    "testBestRank": "1",
                    "odiRank": "3",
                    "odiDiffRank": "-1",
                    "t20Rank": "28"
                },
                "bowl": {},
                "all": {"odiRank": "97"}
            }
        }"#;

        let wire: ProfileWire = serde_json::from_str(raw).unwrap();
        let profile = flatten_profile(wire);
        assert_eq!(profile.name, "Virat Kohli");
        assert_eq!(profile.role, "Batsman");
        assert_eq!(profile.batting_style, "Right Handed Bat");
        assert_eq!(profile.birth_place, "Delhi");

        let labels: Vec<&str> = profile
            .batting_ranks
            .iter()
            .map(|entry| entry.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["Test Rank", "Test Best Rank", "ODI Rank", "T20 Rank"]
        );
        assert_eq!(profile.batting_ranks[2].value, "3");
        assert!(profile.bowling_ranks.is_empty());
        assert_eq!(profile.all_round_ranks.len(), 1);
    }

    #[test]
    fn test_profile_without_rankings_is_blank() {
        let wire: ProfileWire = serde_json::from_str(r#"{"name": "A Nonymous"}"#).unwrap();
        let profile = flatten_profile(wire);
        assert_eq!(profile.role, "");
        assert!(profile.batting_ranks.is_empty());
    }

    #[test]
    fn test_prettify_rank_labels() {
        assert_eq!(prettify_rank_label("odiRank"), "ODI Rank");
        assert_eq!(prettify_rank_label("testBestRank"), "Test Best Rank");
        assert_eq!(prettify_rank_label("t20Rank"), "T20 Rank");
    }

    #[test]
    fn test_stats_table_flattens_and_stringifies() {
        let raw = r#"{
            "headers": ["ROWHEADER", "Test", "ODI", "T20"],
            "values": [
                {"values": ["Matches", "113", "295", "117"]},
                {"values": ["Runs", 8848, 13906, 4188]}
            ]
        }"#;

        let wire: StatsWire = serde_json::from_str(raw).unwrap();
        let table = flatten_stats(wire);
        assert_eq!(table.headers, vec!["ROWHEADER", "Test", "ODI", "T20"]);
        assert_eq!(table.rows[1], vec!["Runs", "8848", "13906", "4188"]);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_stats_without_columns_drops_by_header() {
        let table = StatsTable {
            headers: vec!["ROWHEADER".into(), "400".into(), "ODI".into()],
            rows: vec![vec!["Hundreds".into(), "1".into(), "50".into()]],
        };
        let trimmed = table.without_columns(&["400", "10w"]);
        assert_eq!(trimmed.headers, vec!["ROWHEADER", "ODI"]);
        assert_eq!(trimmed.rows, vec![vec!["Hundreds", "50"]]);
    }

    #[test]
    fn test_ragged_stats_rows_are_realigned() {
        let raw = r#"{
            "headers": ["ROWHEADER", "Test", "ODI"],
            "values": [
                {"values": ["Matches", "113"]},
                {"values": ["Runs", "8848", "13906", "4188"]}
            ]
        }"#;
        let wire: StatsWire = serde_json::from_str(raw).unwrap();
        let table = flatten_stats(wire);
        assert_eq!(table.rows[0], vec!["Matches", "113", ""]);
        assert_eq!(table.rows[1], vec!["Runs", "8848", "13906"]);
    }

    #[test]
    fn test_empty_stats_payload_is_empty_table() {
        let wire: StatsWire = serde_json::from_str("{}").unwrap();
        let table = flatten_stats(wire);
        assert!(table.is_empty());
        assert!(table.headers.is_empty());
    }
}
