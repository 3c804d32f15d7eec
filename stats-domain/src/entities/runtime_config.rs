// Runtime and database settings handed to the application layer

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
    Sqlite,
}

impl DatabaseBackend {
    pub fn from_url(url: &str) -> Self {
        if url.trim_start().starts_with("sqlite:") {
            DatabaseBackend::Sqlite
        } else {
            DatabaseBackend::Postgres
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseBackend::Postgres => "postgres",
            DatabaseBackend::Sqlite => "sqlite",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_interval_millis: u64,
    pub player_pool_size: usize,
    pub stats_every_events: u64,
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub backend: DatabaseBackend,
    pub max_connections: u32,
    pub connect_max_retries: u32,
    pub connect_retry_delay_seconds: u64,
}

impl DbConfig {
    /// Connection URL with the password masked, safe for log output.
    pub fn redacted_url(&self) -> String {
        redact_url(&self.url)
    }
}

fn redact_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let authority_start = scheme_end + 3;
    let rest = &url[authority_start..];
    let Some(at) = rest.find('@') else {
        return url.to_string();
    };
    let credentials = &rest[..at];
    let Some(colon) = credentials.find(':') else {
        return url.to_string();
    };
    format!(
        "{}{}:***{}",
        &url[..authority_start],
        &credentials[..colon],
        &rest[at..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_is_picked_from_url_scheme() {
        assert_eq!(
            DatabaseBackend::from_url("sqlite::memory:"),
            DatabaseBackend::Sqlite
        );
        assert_eq!(
            DatabaseBackend::from_url("postgres://gameuser@localhost/game_stats"),
            DatabaseBackend::Postgres
        );
    }

    #[test]
    fn redacted_url_masks_password_only() {
        assert_eq!(
            redact_url("postgres://gameuser:gamepass123@db:5432/game_stats"),
            "postgres://gameuser:***@db:5432/game_stats"
        );
        assert_eq!(
            redact_url("postgres://gameuser@db/game_stats"),
            "postgres://gameuser@db/game_stats"
        );
        assert_eq!(redact_url("sqlite::memory:"), "sqlite::memory:");
    }
}
