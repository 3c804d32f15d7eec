use std::time::Duration;

use tracing::info;

use stats_domain::{EventGenerator, NewGameEvent};

pub const TOP_PLAYER_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStanding {
    pub rank: usize,
    pub player_name: String,
    pub level: i32,
    pub total_points: i64,
    pub kd_ratio: f64,
}

/// Progress of one generator run.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub events: u64,
    pub insert_errors: u64,
    pub elapsed: Duration,
    pub top_players: Vec<PlayerStanding>,
}

impl SessionSummary {
    pub fn capture(
        events: u64,
        insert_errors: u64,
        elapsed: Duration,
        generator: &EventGenerator,
    ) -> Self {
        let top_players = generator
            .top_players(TOP_PLAYER_COUNT)
            .into_iter()
            .enumerate()
            .map(|(index, player)| PlayerStanding {
                rank: index + 1,
                player_name: player.player_name.clone(),
                level: player.level,
                total_points: player.total_points,
                kd_ratio: player.kd_ratio(),
            })
            .collect();
        Self {
            events,
            insert_errors,
            elapsed,
            top_players,
        }
    }

    /// Events per second over the session; zero before any time has passed.
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.events as f64 / secs
        } else {
            0.0
        }
    }

    pub fn log(&self) {
        info!(
            events = self.events,
            insert_errors = self.insert_errors,
            elapsed_secs = %format!("{:.1}", self.elapsed.as_secs_f64()),
            events_per_sec = %format!("{:.2}", self.rate()),
            "session statistics"
        );
        for standing in &self.top_players {
            info!(
                rank = standing.rank,
                level = standing.level,
                points = standing.total_points,
                kd = %format!("{:.2}", standing.kd_ratio),
                "top player {}",
                standing.player_name
            );
        }
    }
}

/// One console line per stored event, e.g.
/// `#00042 | kill         | swift_falcon    | Lvl 12 |  +25 pts (AWP)`.
pub fn format_event_line(count: u64, event: &NewGameEvent) -> String {
    let weapon = event
        .weapon
        .as_deref()
        .map(|weapon| format!(" ({})", weapon))
        .unwrap_or_default();
    format!(
        "#{:05} | {:12} | {:15} | Lvl {:2} | {:+4} pts{}",
        count,
        event.action_type.as_str(),
        event.player_name,
        event.level,
        event.points,
        weapon
    )
}

#[cfg(test)]
mod tests {
    use stats_domain::{ActionType, PlayerId};

    use super::*;

    fn event(action_type: ActionType, points: i32, weapon: Option<&str>) -> NewGameEvent {
        NewGameEvent {
            player_id: PlayerId::from_index(1),
            player_name: "swift_falcon".to_string(),
            action_type,
            points,
            level: 12,
            weapon: weapon.map(ToString::to_string),
            map_name: Some("de_dust2".to_string()),
        }
    }

    #[test]
    fn event_line_pads_columns_and_shows_weapon() {
        let line = format_event_line(42, &event(ActionType::Kill, 25, Some("AWP")));
        assert_eq!(
            line,
            "#00042 | kill         | swift_falcon    | Lvl 12 |  +25 pts (AWP)"
        );
    }

    #[test]
    fn event_line_omits_missing_weapon_and_signs_losses() {
        let line = format_event_line(7, &event(ActionType::Death, -18, None));
        assert_eq!(
            line,
            "#00007 | death        | swift_falcon    | Lvl 12 |  -18 pts"
        );
    }

    #[test]
    fn rate_is_zero_without_elapsed_time() {
        let summary = SessionSummary {
            events: 10,
            insert_errors: 0,
            elapsed: Duration::ZERO,
            top_players: Vec::new(),
        };
        assert_eq!(summary.rate(), 0.0);

        let summary = SessionSummary {
            elapsed: Duration::from_secs(4),
            ..summary
        };
        assert!((summary.rate() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn capture_ranks_top_three_players() {
        let mut generator = EventGenerator::seeded(6, 11).expect("generator");
        for _ in 0..200 {
            generator.generate();
        }
        let summary = SessionSummary::capture(200, 0, Duration::from_secs(10), &generator);
        assert_eq!(summary.top_players.len(), TOP_PLAYER_COUNT);
        let ranks: Vec<usize> = summary.top_players.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert!(summary.top_players[0].total_points >= summary.top_players[1].total_points);
        assert!(summary.top_players[1].total_points >= summary.top_players[2].total_points);
    }
}
