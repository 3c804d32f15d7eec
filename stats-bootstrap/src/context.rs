use anyhow::Result;
use tracing::info;

use stats_application::AppState;
use stats_infrastructure::{connect_repository, AppConfig};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config();

        let repo = connect_repository(&db_config).await?;
        repo.ping().await?;
        info!(
            backend = db_config.backend.as_str(),
            players = runtime_config.player_pool_size,
            "application context ready"
        );

        Ok(Self {
            state: AppState::new(runtime_config, repo),
        })
    }

    pub async fn shutdown(self) {
        self.state.event_repo.close().await;
        info!("database connection closed");
    }
}
