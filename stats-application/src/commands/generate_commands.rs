use std::future::Future;
use std::time::{Duration, Instant};

use chrono::Local;
use tracing::{error, info};

use crate::session::{format_event_line, SessionSummary};
use crate::{AppError, AppState};
use stats_domain::EventGenerator;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Stop after this many stored events; run until shutdown when unset.
    pub max_events: Option<u64>,
    pub interval: Duration,
    pub stats_every: u64,
}

impl GenerateOptions {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            max_events: None,
            interval: Duration::from_millis(state.config.event_interval_millis),
            stats_every: state.config.stats_every_events,
        }
    }
}

/// Generate and store events until `shutdown` resolves or `max_events`
/// events have been stored. Failed inserts are logged and skipped.
pub async fn run_generator<F>(
    state: &AppState,
    generator: &mut EventGenerator,
    options: GenerateOptions,
    shutdown: F,
) -> Result<SessionSummary, AppError>
where
    F: Future<Output = ()>,
{
    if options.stats_every == 0 {
        return Err(AppError::InvalidArgument(
            "stats_every must be greater than 0".to_string(),
        ));
    }
    tokio::pin!(shutdown);

    let started = Instant::now();
    let mut stored = 0u64;
    let mut failed = 0u64;
    info!(
        started_at = %Local::now().format("%Y-%m-%d %H:%M:%S"),
        players = generator.players().len(),
        interval_ms = options.interval.as_millis() as u64,
        max_events = ?options.max_events,
        "event generator started"
    );

    loop {
        if options.max_events.is_some_and(|max| stored >= max) {
            break;
        }

        let event = generator.generate();
        state.metrics.record_generated();
        let inserted = tokio::select! {
            _ = &mut shutdown => {
                info!("shutdown requested during insert, stopping generator");
                break;
            }
            result = state.event_repo.insert_event(&event) => result,
        };
        match inserted {
            Ok(event_id) => {
                stored += 1;
                state.metrics.record_inserted();
                info!(event_id = event_id.0, "{}", format_event_line(stored, &event));
                if stored % options.stats_every == 0 {
                    SessionSummary::capture(stored, failed, started.elapsed(), generator).log();
                }
            }
            Err(err) => {
                failed += 1;
                state.metrics.record_insert_error();
                error!(
                    player_id = %event.player_id,
                    action = event.action_type.as_str(),
                    "failed to insert event: {:#}",
                    err
                );
            }
        }

        if options.max_events.is_some_and(|max| stored >= max) {
            break;
        }
        tokio::select! {
            _ = &mut shutdown => {
                info!("shutdown requested, stopping generator");
                break;
            }
            _ = tokio::time::sleep(options.interval) => {}
        }
    }

    let summary = SessionSummary::capture(stored, failed, started.elapsed(), generator);
    summary.log();
    info!("event generator stopped");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::{state_with, MemoryEventRepository};

    fn options(max_events: Option<u64>) -> GenerateOptions {
        GenerateOptions {
            max_events,
            interval: Duration::from_millis(1),
            stats_every: 5,
        }
    }

    #[tokio::test]
    async fn stops_after_max_events() {
        let repo = Arc::new(MemoryEventRepository::default());
        let state = state_with(repo.clone());
        let mut generator = EventGenerator::seeded(5, 3).expect("generator");

        let summary = run_generator(
            &state,
            &mut generator,
            options(Some(12)),
            std::future::pending(),
        )
        .await
        .expect("run");

        assert_eq!(summary.events, 12);
        assert_eq!(summary.insert_errors, 0);
        assert_eq!(repo.events.lock().expect("lock").len(), 12);
        let snapshot = state.metrics.snapshot();
        assert_eq!(snapshot.events_generated, 12);
        assert_eq!(snapshot.events_inserted, 12);
    }

    #[tokio::test]
    async fn stored_events_come_from_the_player_pool() {
        let repo = Arc::new(MemoryEventRepository::default());
        let state = state_with(repo.clone());
        let mut generator = EventGenerator::seeded(3, 9).expect("generator");

        run_generator(&state, &mut generator, options(Some(30)), std::future::pending())
            .await
            .expect("run");

        let ids: Vec<String> = generator
            .players()
            .iter()
            .map(|player| player.player_id.to_string())
            .collect();
        for event in repo.events.lock().expect("lock").iter() {
            assert!(ids.contains(&event.player_id.to_string()));
            assert!(event.action_type.points_range().contains(&event.points));
        }
    }

    #[tokio::test]
    async fn failed_inserts_are_counted_and_shutdown_stops_the_loop() {
        let repo = Arc::new(MemoryEventRepository {
            fail_inserts: true,
            ..Default::default()
        });
        let state = state_with(repo.clone());
        let mut generator = EventGenerator::seeded(4, 1).expect("generator");

        let summary = run_generator(
            &state,
            &mut generator,
            options(Some(5)),
            tokio::time::sleep(Duration::from_millis(30)),
        )
        .await
        .expect("run");

        assert_eq!(summary.events, 0);
        assert!(summary.insert_errors > 0);
        assert_eq!(
            state.metrics.snapshot().insert_errors,
            summary.insert_errors
        );
        assert!(repo.events.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn shutdown_interrupts_a_stuck_insert() {
        let repo = Arc::new(MemoryEventRepository {
            hang_inserts: true,
            ..Default::default()
        });
        let state = state_with(repo.clone());
        let mut generator = EventGenerator::seeded(2, 8).expect("generator");

        let summary = tokio::time::timeout(
            Duration::from_secs(5),
            run_generator(
                &state,
                &mut generator,
                options(None),
                tokio::time::sleep(Duration::from_millis(20)),
            ),
        )
        .await
        .expect("generator must stop on shutdown")
        .expect("run");

        assert_eq!(summary.events, 0);
        assert_eq!(summary.insert_errors, 0);
        assert_eq!(state.metrics.snapshot().events_generated, 1);
    }

    #[tokio::test]
    async fn zero_stats_interval_is_rejected() {
        let state = state_with(Arc::new(MemoryEventRepository::default()));
        let mut generator = EventGenerator::seeded(2, 5).expect("generator");
        let options = GenerateOptions {
            stats_every: 0,
            ..options(Some(1))
        };
        let err = run_generator(&state, &mut generator, options, std::future::pending())
            .await
            .expect_err("reject");
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn options_follow_runtime_config() {
        let state = state_with(Arc::new(MemoryEventRepository::default()));
        let options = GenerateOptions::from_state(&state);
        assert_eq!(options.max_events, None);
        assert_eq!(options.interval, Duration::from_millis(1));
        assert_eq!(options.stats_every, 10);
    }
}
