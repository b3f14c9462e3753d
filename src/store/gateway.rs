//! Gateway over the `players` and `teams` tables
//!
//! Every operation opens its own scoped connection and runs a single
//! statement; writes commit under autocommit, so a failure leaves prior
//! state untouched. The two reference listings are cached for 60 seconds
//! and every completed write invalidates both caches immediately.

use std::time::Duration;

use tracing::{debug, info};

use super::cache::{CachedValue, ListingCache};
use super::models::{InsertOutcome, MutationOutcome, Player, PlayerSummary, RosterRow, Team};
use crate::config::DatabaseConfig;
use crate::error::{DatabaseError, Result, StumpsError};

/// TTL for the team and player-summary listings.
const CACHE_TTL: Duration = Duration::from_secs(60);

const SELECT_TEAMS: &str = "SELECT team_id, team_name, country FROM teams ORDER BY team_name";

const SELECT_PLAYER_SUMMARIES: &str =
    "SELECT player_id, full_name FROM players ORDER BY full_name";

const SELECT_PLAYER: &str = "SELECT player_id, full_name, nick_name, role, batting_style, bowling_style,
       COALESCE(is_keeper, false) AS is_keeper,
       COALESCE(is_captain, false) AS is_captain,
       team_id
FROM players
WHERE player_id = $1";

const SELECT_ROSTER: &str = "SELECT
  p.player_id,
  p.full_name,
  COALESCE(p.nick_name, '—') AS nick_name,
  COALESCE(t.team_name, '—') AS team_name,
  COALESCE(t.country, '—') AS country,
  COALESCE(p.role, '—') AS role,
  COALESCE(p.batting_style, '—') AS batting_style,
  COALESCE(p.bowling_style, '—') AS bowling_style,
  COALESCE(p.is_keeper, false) AS is_keeper,
  COALESCE(p.is_captain, false) AS is_captain,
  p.team_id
FROM players p
LEFT JOIN teams t ON p.team_id = t.team_id
ORDER BY p.player_id";

const INSERT_PLAYER: &str = "INSERT INTO players
  (player_id, full_name, nick_name, role, batting_style, bowling_style,
   is_keeper, is_captain, team_id)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
ON CONFLICT (player_id) DO NOTHING";

const UPDATE_PLAYER: &str = "UPDATE players
SET full_name = $1, nick_name = $2, role = $3, batting_style = $4, bowling_style = $5,
    is_keeper = $6, is_captain = $7, team_id = $8
WHERE player_id = $9";

const DELETE_PLAYER: &str = "DELETE FROM players WHERE player_id = $1";

/// Fetch/insert/update/delete over player records plus the team lookup.
pub struct RecordStore {
    config: DatabaseConfig,
    cache: ListingCache,
}

impl RecordStore {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            cache: ListingCache::new(),
        }
    }

    /// Teams ordered by name. Served from cache inside the TTL window.
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        {
            let cache = self.cache.teams.read();
            if let Some(ref cached) = *cache {
                if let Some(value) = cached.get(CACHE_TTL) {
                    debug!("team listing served from cache");
                    return Ok(value);
                }
            }
        }

        let client = self.config.connect().await?;
        let rows = client
            .query(SELECT_TEAMS, &[])
            .await
            .map_err(query_error)?;
        let teams = rows
            .iter()
            .map(team_from_row)
            .collect::<Result<Vec<_>>>()?;

        {
            let mut cache = self.cache.teams.write();
            *cache = Some(CachedValue::new(teams.clone()));
        }
        Ok(teams)
    }

    /// Player id/name pairs ordered by name. Served from cache inside the
    /// TTL window.
    pub async fn list_player_summaries(&self) -> Result<Vec<PlayerSummary>> {
        {
            let cache = self.cache.players.read();
            if let Some(ref cached) = *cache {
                if let Some(value) = cached.get(CACHE_TTL) {
                    debug!("player summary listing served from cache");
                    return Ok(value);
                }
            }
        }

        let client = self.config.connect().await?;
        let rows = client
            .query(SELECT_PLAYER_SUMMARIES, &[])
            .await
            .map_err(query_error)?;
        let players = rows
            .iter()
            .map(summary_from_row)
            .collect::<Result<Vec<_>>>()?;

        {
            let mut cache = self.cache.players.write();
            *cache = Some(CachedValue::new(players.clone()));
        }
        Ok(players)
    }

    /// Exact lookup, never cached: the caller is usually about to edit the
    /// record and needs current state.
    pub async fn get_player(&self, player_id: i64) -> Result<Option<Player>> {
        let client = self.config.connect().await?;
        let row = client
            .query_opt(SELECT_PLAYER, &[&player_id])
            .await
            .map_err(query_error)?;
        row.as_ref().map(player_from_row).transpose()
    }

    /// The roster view: players left-joined with teams (players without a
    /// team still appear, with placeholder fields), ordered by player id.
    pub async fn list_roster(&self) -> Result<Vec<RosterRow>> {
        let client = self.config.connect().await?;
        let rows = client
            .query(SELECT_ROSTER, &[])
            .await
            .map_err(query_error)?;
        rows.iter().map(roster_from_row).collect()
    }

    /// Insert a player. A duplicate `player_id` is a silent no-op on the
    /// stored data (`ON CONFLICT DO NOTHING`), reported as
    /// [`InsertOutcome::AlreadyExists`].
    pub async fn insert_player(&self, player: &Player) -> Result<InsertOutcome> {
        let client = self.config.connect().await?;
        let rows = client
            .execute(
                INSERT_PLAYER,
                &[
                    &player.player_id,
                    &player.full_name,
                    &player.nick_name,
                    &player.role,
                    &player.batting_style,
                    &player.bowling_style,
                    &player.is_keeper,
                    &player.is_captain,
                    &player.team_id,
                ],
            )
            .await
            .map_err(query_error)?;
        self.cache.invalidate_all();

        let outcome = InsertOutcome::from_rows(rows);
        info!(player_id = player.player_id, outcome = ?outcome, "insert player");
        Ok(outcome)
    }

    /// Full replace of all mutable fields, keyed by `player.player_id`.
    pub async fn update_player(&self, player: &Player) -> Result<MutationOutcome> {
        let client = self.config.connect().await?;
        let rows = client
            .execute(
                UPDATE_PLAYER,
                &[
                    &player.full_name,
                    &player.nick_name,
                    &player.role,
                    &player.batting_style,
                    &player.bowling_style,
                    &player.is_keeper,
                    &player.is_captain,
                    &player.team_id,
                    &player.player_id,
                ],
            )
            .await
            .map_err(query_error)?;
        self.cache.invalidate_all();

        let outcome = MutationOutcome::from_rows(rows);
        info!(player_id = player.player_id, outcome = ?outcome, "update player");
        Ok(outcome)
    }

    /// Delete by id. No cascade handling: dependent rows are the store's
    /// problem, not this gateway's.
    pub async fn delete_player(&self, player_id: i64) -> Result<MutationOutcome> {
        let client = self.config.connect().await?;
        let rows = client
            .execute(DELETE_PLAYER, &[&player_id])
            .await
            .map_err(query_error)?;
        self.cache.invalidate_all();

        let outcome = MutationOutcome::from_rows(rows);
        info!(player_id, outcome = ?outcome, "delete player");
        Ok(outcome)
    }
}

// ── Private helpers ──────────────────────────────────────────────────────

fn query_error(e: tokio_postgres::Error) -> StumpsError {
    match e.as_db_error() {
        Some(db) => DatabaseError::query(db.message()).into(),
        None => DatabaseError::query(e.to_string()).into(),
    }
}

fn decode_error(e: tokio_postgres::Error) -> StumpsError {
    DatabaseError::row_decode(e.to_string()).into()
}

fn team_from_row(row: &tokio_postgres::Row) -> Result<Team> {
    Ok(Team {
        team_id: row.try_get("team_id").map_err(decode_error)?,
        team_name: row.try_get("team_name").map_err(decode_error)?,
        country: row.try_get("country").map_err(decode_error)?,
    })
}

fn summary_from_row(row: &tokio_postgres::Row) -> Result<PlayerSummary> {
    Ok(PlayerSummary {
        player_id: row.try_get("player_id").map_err(decode_error)?,
        full_name: row.try_get("full_name").map_err(decode_error)?,
    })
}

fn player_from_row(row: &tokio_postgres::Row) -> Result<Player> {
    Ok(Player {
        player_id: row.try_get("player_id").map_err(decode_error)?,
        full_name: row.try_get("full_name").map_err(decode_error)?,
        nick_name: row.try_get("nick_name").map_err(decode_error)?,
        role: row.try_get("role").map_err(decode_error)?,
        batting_style: row.try_get("batting_style").map_err(decode_error)?,
        bowling_style: row.try_get("bowling_style").map_err(decode_error)?,
        is_keeper: row.try_get("is_keeper").map_err(decode_error)?,
        is_captain: row.try_get("is_captain").map_err(decode_error)?,
        team_id: row.try_get("team_id").map_err(decode_error)?,
    })
}

fn roster_from_row(row: &tokio_postgres::Row) -> Result<RosterRow> {
    Ok(RosterRow {
        player_id: row.try_get("player_id").map_err(decode_error)?,
        full_name: row.try_get("full_name").map_err(decode_error)?,
        nick_name: row.try_get("nick_name").map_err(decode_error)?,
        team_name: row.try_get("team_name").map_err(decode_error)?,
        country: row.try_get("country").map_err(decode_error)?,
        role: row.try_get("role").map_err(decode_error)?,
        batting_style: row.try_get("batting_style").map_err(decode_error)?,
        bowling_style: row.try_get("bowling_style").map_err(decode_error)?,
        is_keeper: row.try_get("is_keeper").map_err(decode_error)?,
        is_captain: row.try_get("is_captain").map_err(decode_error)?,
        team_id: row.try_get("team_id").map_err(decode_error)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_statement_is_idempotent() {
        assert!(INSERT_PLAYER.contains("ON CONFLICT (player_id) DO NOTHING"));
    }

    #[test]
    fn test_update_statement_is_keyed_by_player_id() {
        assert!(UPDATE_PLAYER.contains("WHERE player_id = $9"));
        // Full replace: every mutable column appears in the SET list.
        for column in [
            "full_name",
            "nick_name",
            "role",
            "batting_style",
            "bowling_style",
            "is_keeper",
            "is_captain",
            "team_id",
        ] {
            assert!(UPDATE_PLAYER.contains(column), "missing column {column}");
        }
    }

    #[test]
    fn test_roster_projection_shape() {
        assert!(SELECT_ROSTER.contains("LEFT JOIN teams"));
        assert!(SELECT_ROSTER.contains("ORDER BY p.player_id"));
        assert!(SELECT_ROSTER.contains("'—'"));
    }

    #[test]
    fn test_listings_are_ordered_by_name() {
        assert!(SELECT_TEAMS.contains("ORDER BY team_name"));
        assert!(SELECT_PLAYER_SUMMARIES.contains("ORDER BY full_name"));
    }

    #[test]
    fn test_cache_ttl_is_sixty_seconds() {
        assert_eq!(CACHE_TTL, Duration::from_secs(60));
    }
}
