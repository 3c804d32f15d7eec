use anyhow::{anyhow, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::entities::{NewGameEvent, SimulatedPlayer};
use crate::services::catalog::{MAPS, NAME_ADJECTIVES, NAME_NOUNS, WEAPONS};
use crate::value_objects::{ActionType, PlayerId};

/// Chance that a non level_up event still bumps the player one level.
pub const LEVEL_UP_CHANCE: f64 = 0.05;
const STARTING_LEVELS: std::ops::RangeInclusive<i32> = 1..=50;

/// Simulates gameplay for a fixed pool of players.
#[derive(Debug)]
pub struct EventGenerator {
    players: Vec<SimulatedPlayer>,
    action_weights: WeightedIndex<u32>,
    rng: StdRng,
}

impl EventGenerator {
    pub fn new(pool_size: usize) -> Result<Self> {
        Self::with_rng(pool_size, StdRng::from_entropy())
    }

    pub fn seeded(pool_size: usize, seed: u64) -> Result<Self> {
        Self::with_rng(pool_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(pool_size: usize, mut rng: StdRng) -> Result<Self> {
        if pool_size == 0 {
            return Err(anyhow!("player pool must not be empty"));
        }
        let players = (0..pool_size)
            .map(|index| {
                let name = random_player_name(&mut rng);
                let level = rng.gen_range(STARTING_LEVELS);
                SimulatedPlayer::new(PlayerId::from_index(index), name, level)
            })
            .collect();
        let action_weights = WeightedIndex::new(ActionType::ALL.iter().map(ActionType::weight))
            .map_err(|err| anyhow!("invalid action weights: {}", err))?;
        Ok(Self {
            players,
            action_weights,
            rng,
        })
    }

    pub fn players(&self) -> &[SimulatedPlayer] {
        &self.players
    }

    /// Produce one event and fold it into the acting player's tallies.
    pub fn generate(&mut self) -> NewGameEvent {
        let index = self.rng.gen_range(0..self.players.len());
        let action_type = ActionType::ALL[self.action_weights.sample(&mut self.rng)];
        let points = self.rng.gen_range(action_type.points_range());
        let level_roll: f64 = self.rng.gen();
        let weapon = if action_type.is_combat() {
            WEAPONS.choose(&mut self.rng).map(|weapon| weapon.to_string())
        } else {
            None
        };
        let map_name = MAPS.choose(&mut self.rng).map(|map| map.to_string());

        let player = &mut self.players[index];
        player.total_points += i64::from(points);
        if action_type.counts_as_kill() {
            player.kills += 1;
        } else if action_type == ActionType::Death {
            player.deaths += 1;
        }
        if action_type == ActionType::LevelUp || level_roll < LEVEL_UP_CHANCE {
            player.level_up();
        }

        NewGameEvent {
            player_id: player.player_id.clone(),
            player_name: player.player_name.clone(),
            action_type,
            points,
            level: player.level,
            weapon,
            map_name,
        }
    }

    /// Highest scoring players first; ties keep pool order.
    pub fn top_players(&self, limit: usize) -> Vec<&SimulatedPlayer> {
        let mut ranked: Vec<&SimulatedPlayer> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.total_points.cmp(&a.total_points));
        ranked.truncate(limit);
        ranked
    }
}

fn random_player_name(rng: &mut StdRng) -> String {
    let adjective = NAME_ADJECTIVES.choose(rng).copied().unwrap_or("anon");
    let noun = NAME_NOUNS.choose(rng).copied().unwrap_or("player");
    format!("{}_{}{}", adjective, noun, rng.gen_range(1..100))
}
