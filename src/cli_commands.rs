use clap::Subcommand;

#[derive(Subcommand, Debug)]
#[command(long_about = r#"Query catalogue commands

EXAMPLES:
    # List every catalogue question
    stumps queries list

    # Print the SQL behind a question
    stumps queries show "Q6. Count players by role"

    # Run a question against the store (label prefix is enough)
    stumps queries run Q6

    # Run and capture as CSV
    stumps queries run Q12 --format csv -o batting.csv"#)]
pub(crate) enum QueryCommands {
    /// List all catalogue questions in order
    List,

    /// Show the SQL behind one question
    Show {
        /// Full label or unambiguous prefix (e.g. "Q7")
        label: String,
    },

    /// Run one question and render the result
    Run {
        /// Full label or unambiguous prefix (e.g. "Q7")
        label: String,
    },
}

#[derive(Subcommand, Debug)]
#[command(long_about = r#"Player record commands

EXAMPLES:
    # Full roster with team context
    stumps players list

    # Cached id/name pairs
    stumps players summaries

    # One record
    stumps players get 42

    # Insert (duplicate ids are a reported no-op)
    stumps players add 42 --name "Virat Kohli" --role Batsman --team-id 2

    # Full-field update; omitted flags keep current values
    stumps players update 42 --nick "King Kohli" --captain true

    # Delete with confirmation (-y skips the prompt)
    stumps players remove 42"#)]
pub(crate) enum PlayerCommands {
    /// Roster view: players joined with their teams
    List,

    /// Cached id/name listing
    Summaries,

    /// Fetch one player by id
    Get {
        /// Player id
        id: i64,
    },

    /// Insert a player record
    Add {
        /// Player id (externally assigned)
        id: i64,

        /// Full name
        #[arg(long)]
        name: String,

        /// Nickname
        #[arg(long)]
        nick: Option<String>,

        /// Playing role, e.g. Batsman, Bowler, All-rounder
        #[arg(long)]
        role: Option<String>,

        /// Batting style, e.g. "Right-hand bat"
        #[arg(long)]
        batting_style: Option<String>,

        /// Bowling style, e.g. "Right-arm offbreak"
        #[arg(long)]
        bowling_style: Option<String>,

        /// Mark as wicket-keeper
        #[arg(long)]
        keeper: bool,

        /// Mark as captain
        #[arg(long)]
        captain: bool,

        /// Team id the player belongs to
        #[arg(long)]
        team_id: Option<i64>,
    },

    /// Update a player; unspecified flags keep the stored values
    Update {
        /// Player id
        id: i64,

        /// Full name
        #[arg(long)]
        name: Option<String>,

        /// Nickname (empty string clears it)
        #[arg(long)]
        nick: Option<String>,

        /// Playing role (empty string clears it)
        #[arg(long)]
        role: Option<String>,

        /// Batting style (empty string clears it)
        #[arg(long)]
        batting_style: Option<String>,

        /// Bowling style (empty string clears it)
        #[arg(long)]
        bowling_style: Option<String>,

        /// Wicket-keeper flag
        #[arg(long)]
        keeper: Option<bool>,

        /// Captain flag
        #[arg(long)]
        captain: Option<bool>,

        /// Team id the player belongs to
        #[arg(long)]
        team_id: Option<i64>,

        /// Detach the player from any team
        #[arg(long, conflicts_with = "team_id")]
        no_team: bool,
    },

    /// Delete a player by id
    Remove {
        /// Player id
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
#[command(long_about = r#"Live match commands

EXAMPLES:
    # Everything currently live, grouped by series
    stumps live matches

    # Only international matches
    stumps live matches --match-type International

    # Only one series, by name fragment
    stumps live matches --series "Asia Cup"

    # Full scorecard for a match id from the listing
    stumps live scorecard 118928

Requires RAPIDAPI_KEY in the environment."#)]
pub(crate) enum LiveCommands {
    /// List live matches grouped by series
    Matches {
        /// Keep only one feed group, e.g. International, League
        #[arg(long)]
        match_type: Option<String>,

        /// Keep only series whose name contains this text
        #[arg(long)]
        series: Option<String>,
    },

    /// Show the full scorecard for one match
    Scorecard {
        /// Match id, as shown by `live matches`
        match_id: i64,
    },
}

#[derive(Subcommand, Debug)]
#[command(long_about = r#"Player stats commands

EXAMPLES:
    # Find a player id
    stumps stats search "Virat Kohli"

    # Profile with ICC ranking cards
    stumps stats profile 1413

    # Career batting / bowling figures
    stumps stats batting 1413
    stumps stats bowling 1413

Requires RAPIDAPI_KEY in the environment."#)]
pub(crate) enum StatsCommands {
    /// Search players by name
    Search {
        /// Name or name fragment
        name: String,
    },

    /// Show a player profile and ICC rankings
    Profile {
        /// Player id, as shown by `stats search`
        id: String,
    },

    /// Show career batting figures
    Batting {
        /// Player id, as shown by `stats search`
        id: String,
    },

    /// Show career bowling figures
    Bowling {
        /// Player id, as shown by `stats search`
        id: String,
    },
}
