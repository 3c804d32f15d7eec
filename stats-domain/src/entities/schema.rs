// Schema application outcome

/// Version recorded in the schema_migrations ledger for the game stats schema.
pub const SCHEMA_VERSION: i64 = 1;
pub const SCHEMA_NAME: &str = "game_stats_schema";

/// Indexes kept on game_events, one per filtered column.
pub const GAME_EVENTS_INDEXES: [&str; 5] = [
    "idx_game_events_player_id",
    "idx_game_events_action_type",
    "idx_game_events_timestamp",
    "idx_game_events_level",
    "idx_game_events_map_name",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaOutcome {
    Applied,
    AlreadyApplied,
}

impl SchemaOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaOutcome::Applied => "applied",
            SchemaOutcome::AlreadyApplied => "already_applied",
        }
    }
}
