// Simulated player entity
// A member of the generator's player pool with its in-session tallies

use crate::value_objects::PlayerId;

pub const MAX_LEVEL: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedPlayer {
    pub player_id: PlayerId,
    pub player_name: String,
    pub level: i32,
    pub total_points: i64,
    pub kills: u32,
    pub deaths: u32,
}

impl SimulatedPlayer {
    pub fn new(player_id: PlayerId, player_name: impl Into<String>, level: i32) -> Self {
        Self {
            player_id,
            player_name: player_name.into(),
            level,
            total_points: 0,
            kills: 0,
            deaths: 0,
        }
    }

    /// Kills per death; a player who never died reports raw kills.
    pub fn kd_ratio(&self) -> f64 {
        if self.deaths > 0 {
            f64::from(self.kills) / f64::from(self.deaths)
        } else {
            f64::from(self.kills)
        }
    }

    /// Returns true when the level actually changed.
    pub fn level_up(&mut self) -> bool {
        if self.level < MAX_LEVEL {
            self.level += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kd_ratio_divides_when_player_has_deaths() {
        let mut player = SimulatedPlayer::new(PlayerId::from_index(0), "alpha", 3);
        player.kills = 9;
        player.deaths = 4;
        assert!((player.kd_ratio() - 2.25).abs() < f64::EPSILON);
    }

    #[test]
    fn kd_ratio_falls_back_to_kills_without_deaths() {
        let mut player = SimulatedPlayer::new(PlayerId::from_index(1), "bravo", 3);
        player.kills = 7;
        assert!((player.kd_ratio() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn level_up_stops_at_cap() {
        let mut player = SimulatedPlayer::new(PlayerId::from_index(2), "charlie", MAX_LEVEL - 1);
        assert!(player.level_up());
        assert_eq!(player.level, MAX_LEVEL);
        assert!(!player.level_up());
        assert_eq!(player.level, MAX_LEVEL);
    }
}
