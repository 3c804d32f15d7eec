// Action type value object

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Kill,
    Death,
    Headshot,
    Assist,
    Achievement,
    LevelUp,
    DefuseBomb,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action type: {0}")]
pub struct UnknownActionType(pub String);

impl ActionType {
    pub const ALL: [ActionType; 7] = [
        ActionType::Kill,
        ActionType::Death,
        ActionType::Headshot,
        ActionType::Assist,
        ActionType::Achievement,
        ActionType::LevelUp,
        ActionType::DefuseBomb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Kill => "kill",
            ActionType::Death => "death",
            ActionType::Headshot => "headshot",
            ActionType::Assist => "assist",
            ActionType::Achievement => "achievement",
            ActionType::LevelUp => "level_up",
            ActionType::DefuseBomb => "defuse_bomb",
        }
    }

    /// Relative selection weight used by the event generator.
    pub fn weight(&self) -> u32 {
        match self {
            ActionType::Kill => 35,
            ActionType::Death => 35,
            ActionType::Headshot => 10,
            ActionType::Assist => 8,
            ActionType::Achievement => 7,
            ActionType::LevelUp => 3,
            ActionType::DefuseBomb => 2,
        }
    }

    pub fn points_range(&self) -> RangeInclusive<i32> {
        match self {
            ActionType::Kill => 10..=30,
            ActionType::Death => -25..=-10,
            ActionType::Headshot => 40..=60,
            ActionType::Assist => 5..=15,
            ActionType::Achievement => 50..=150,
            ActionType::LevelUp => 100..=250,
            ActionType::DefuseBomb => 80..=120,
        }
    }

    /// Combat actions are the only ones that carry a weapon.
    pub fn is_combat(&self) -> bool {
        matches!(
            self,
            ActionType::Kill | ActionType::Headshot | ActionType::Death
        )
    }

    pub fn counts_as_kill(&self) -> bool {
        matches!(self, ActionType::Kill | ActionType::Headshot)
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = UnknownActionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ActionType::ALL
            .into_iter()
            .find(|action| action.as_str() == normalized)
            .ok_or_else(|| UnknownActionType(s.to_string()))
    }
}
