//! Game stats schema definitions using sea-query.
//!
//! The same table and index definitions render to PostgreSQL or SQLite DDL.
//! Every statement is guarded so replaying the list is harmless.

use sea_query::{
    ColumnDef, Expr, Iden, Index, IndexCreateStatement, PostgresQueryBuilder, Query,
    QueryStatementWriter, SchemaStatementBuilder, SqliteQueryBuilder, Table, TableCreateStatement,
};

use stats_domain::{
    DatabaseBackend, NewGameEvent, GAME_EVENTS_INDEXES, SCHEMA_NAME, SCHEMA_VERSION,
};

/// Append-only gameplay event log.
#[derive(Iden)]
pub enum GameEvents {
    Table,
    Id,
    PlayerId,
    PlayerName,
    ActionType,
    Points,
    Level,
    Weapon,
    MapName,
    Timestamp,
}

/// Per-player aggregate counters.
#[derive(Iden)]
pub enum PlayerStats {
    Table,
    PlayerId,
    PlayerName,
    TotalKills,
    TotalDeaths,
    TotalPoints,
    CurrentLevel,
    GamesPlayed,
    LastActivity,
}

/// Applied schema versions.
#[derive(Iden)]
pub enum SchemaMigrations {
    Table,
    Version,
    Name,
    AppliedAt,
}

const POSTGRES_COMMENTS: [(&str, &str); 6] = [
    (
        "comment_game_events",
        "COMMENT ON TABLE game_events IS 'Append-only log of gameplay events'",
    ),
    (
        "comment_game_events_action_type",
        "COMMENT ON COLUMN game_events.action_type IS 'Action type: kill, death, achievement, level_up, assist'",
    ),
    (
        "comment_game_events_points",
        "COMMENT ON COLUMN game_events.points IS 'Points gained or lost; negative on death'",
    ),
    (
        "comment_game_events_weapon",
        "COMMENT ON COLUMN game_events.weapon IS 'Weapon used; NULL for non-combat events'",
    ),
    (
        "comment_player_stats",
        "COMMENT ON TABLE player_stats IS 'Aggregated statistics, one row per player'",
    ),
    (
        "comment_player_stats_current_level",
        "COMMENT ON COLUMN player_stats.current_level IS 'Latest known player level'",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatementKind {
    Table,
    Index,
    Comment,
}

#[derive(Debug, Clone)]
pub struct SchemaStatement {
    pub label: &'static str,
    pub kind: SchemaStatementKind,
    pub sql: String,
}

fn build_schema<S: SchemaStatementBuilder>(stmt: &S, backend: DatabaseBackend) -> String {
    match backend {
        DatabaseBackend::Postgres => stmt.to_string(PostgresQueryBuilder),
        DatabaseBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
    }
}

fn build_query<Q: QueryStatementWriter>(stmt: &Q, backend: DatabaseBackend) -> String {
    match backend {
        DatabaseBackend::Postgres => stmt.to_string(PostgresQueryBuilder),
        DatabaseBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
    }
}

pub fn game_events_table() -> TableCreateStatement {
    Table::create()
        .table(GameEvents::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(GameEvents::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(GameEvents::PlayerId).string_len(50).not_null())
        .col(ColumnDef::new(GameEvents::PlayerName).string_len(100).not_null())
        .col(ColumnDef::new(GameEvents::ActionType).string_len(50).not_null())
        .col(ColumnDef::new(GameEvents::Points).integer().not_null())
        .col(ColumnDef::new(GameEvents::Level).integer().not_null())
        .col(ColumnDef::new(GameEvents::Weapon).string_len(50).null())
        .col(ColumnDef::new(GameEvents::MapName).string_len(50).null())
        .col(
            ColumnDef::new(GameEvents::Timestamp)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

pub fn player_stats_table() -> TableCreateStatement {
    Table::create()
        .table(PlayerStats::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(PlayerStats::PlayerId)
                .string_len(50)
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(PlayerStats::PlayerName).string_len(100).not_null())
        .col(counter(PlayerStats::TotalKills, 0))
        .col(counter(PlayerStats::TotalDeaths, 0))
        .col(counter(PlayerStats::TotalPoints, 0))
        .col(counter(PlayerStats::CurrentLevel, 1))
        .col(counter(PlayerStats::GamesPlayed, 0))
        .col(
            ColumnDef::new(PlayerStats::LastActivity)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

fn counter(column: PlayerStats, default: i32) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .not_null()
        .default(default)
        .to_owned()
}

pub fn schema_migrations_table() -> TableCreateStatement {
    Table::create()
        .table(SchemaMigrations::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(SchemaMigrations::Version)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(SchemaMigrations::Name).string_len(100).not_null())
        .col(
            ColumnDef::new(SchemaMigrations::AppliedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

pub fn game_events_indexes() -> Vec<IndexCreateStatement> {
    let columns = [
        GameEvents::PlayerId,
        GameEvents::ActionType,
        GameEvents::Timestamp,
        GameEvents::Level,
        GameEvents::MapName,
    ];
    GAME_EVENTS_INDEXES
        .iter()
        .zip(columns)
        .map(|(name, column)| {
            Index::create()
                .if_not_exists()
                .name(*name)
                .table(GameEvents::Table)
                .col(column)
                .to_owned()
        })
        .collect()
}

/// Ordered DDL for the game stats schema. SQLite has no `COMMENT ON`, so
/// comments are only emitted for PostgreSQL.
pub fn schema_statements(backend: DatabaseBackend) -> Vec<SchemaStatement> {
    let mut statements = vec![
        SchemaStatement {
            label: "game_events",
            kind: SchemaStatementKind::Table,
            sql: build_schema(&game_events_table(), backend),
        },
        SchemaStatement {
            label: "player_stats",
            kind: SchemaStatementKind::Table,
            sql: build_schema(&player_stats_table(), backend),
        },
    ];

    statements.extend(
        GAME_EVENTS_INDEXES
            .iter()
            .zip(game_events_indexes())
            .map(|(name, index)| SchemaStatement {
                label: *name,
                kind: SchemaStatementKind::Index,
                sql: build_schema(&index, backend),
            }),
    );

    if backend == DatabaseBackend::Postgres {
        statements.extend(POSTGRES_COMMENTS.iter().map(|(label, sql)| SchemaStatement {
            label: *label,
            kind: SchemaStatementKind::Comment,
            sql: String::from(*sql),
        }));
    }

    statements
}

pub fn ledger_table_sql(backend: DatabaseBackend) -> String {
    build_schema(&schema_migrations_table(), backend)
}

pub fn ledger_lookup_sql(backend: DatabaseBackend) -> String {
    let query = Query::select()
        .column(SchemaMigrations::Version)
        .from(SchemaMigrations::Table)
        .and_where(Expr::col(SchemaMigrations::Version).eq(SCHEMA_VERSION))
        .to_owned();
    build_query(&query, backend)
}

pub fn ledger_record_sql(backend: DatabaseBackend) -> String {
    let query = Query::insert()
        .into_table(SchemaMigrations::Table)
        .columns([SchemaMigrations::Version, SchemaMigrations::Name])
        .values_panic([SCHEMA_VERSION.into(), SCHEMA_NAME.into()])
        .to_owned();
    build_query(&query, backend)
}

/// INSERT for one event, returning the generated id.
pub fn insert_event_sql(backend: DatabaseBackend, event: &NewGameEvent) -> String {
    let query = Query::insert()
        .into_table(GameEvents::Table)
        .columns([
            GameEvents::PlayerId,
            GameEvents::PlayerName,
            GameEvents::ActionType,
            GameEvents::Points,
            GameEvents::Level,
            GameEvents::Weapon,
            GameEvents::MapName,
        ])
        .values_panic([
            event.player_id.as_str().into(),
            event.player_name.as_str().into(),
            event.action_type.as_str().into(),
            event.points.into(),
            event.level.into(),
            event.weapon.clone().into(),
            event.map_name.clone().into(),
        ])
        .returning_col(GameEvents::Id)
        .to_owned();
    build_query(&query, backend)
}
