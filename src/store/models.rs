//! Player and team records

use serde::Serialize;

/// A team reference row. Teams are read-only from this gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub team_id: i64,
    pub team_name: String,
    pub country: String,
}

/// Minimal id/name projection used to populate selection lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub player_id: i64,
    pub full_name: String,
}

/// A full player record.
///
/// `player_id` is externally assigned, never generated here. Optional text
/// fields are nullable in the store; keeper/captain default to false. A
/// present `team_id` must reference an existing team — the store enforces
/// that, not this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub player_id: i64,
    pub full_name: String,
    pub nick_name: Option<String>,
    pub role: Option<String>,
    pub batting_style: Option<String>,
    pub bowling_style: Option<String>,
    pub is_keeper: bool,
    pub is_captain: bool,
    pub team_id: Option<i64>,
}

/// One row of the roster view: players left-joined with teams, ordered by
/// player id. Missing fields arrive already replaced with the `—`
/// placeholder by the projection itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterRow {
    pub player_id: i64,
    pub full_name: String,
    pub nick_name: String,
    pub team_name: String,
    pub country: String,
    pub role: String,
    pub batting_style: String,
    pub bowling_style: String,
    pub is_keeper: bool,
    pub is_captain: bool,
    pub team_id: Option<i64>,
}

/// Outcome of an insert under the idempotent-insert policy: a duplicate id
/// is a defined no-op, not an error, and the existing row is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyExists,
}

impl InsertOutcome {
    pub(super) fn from_rows(rows: u64) -> Self {
        if rows == 0 {
            Self::AlreadyExists
        } else {
            Self::Inserted
        }
    }
}

/// Outcome of an update or delete keyed by player id. Touching an absent
/// id reports `NotFound` explicitly instead of pretending success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    NotFound,
}

impl MutationOutcome {
    pub(super) fn from_rows(rows: u64) -> Self {
        if rows == 0 {
            Self::NotFound
        } else {
            Self::Applied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_outcome_from_rows() {
        assert_eq!(InsertOutcome::from_rows(1), InsertOutcome::Inserted);
        assert_eq!(InsertOutcome::from_rows(0), InsertOutcome::AlreadyExists);
    }

    #[test]
    fn test_mutation_outcome_from_rows() {
        assert_eq!(MutationOutcome::from_rows(1), MutationOutcome::Applied);
        assert_eq!(MutationOutcome::from_rows(0), MutationOutcome::NotFound);
    }
}
