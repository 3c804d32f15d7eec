// Game event entity
// One row of the append-only game_events log, before the database assigns
// its id and timestamp

use crate::value_objects::{ActionType, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGameEvent {
    pub player_id: PlayerId,
    pub player_name: String,
    pub action_type: ActionType,
    pub points: i32,
    pub level: i32,
    pub weapon: Option<String>,
    pub map_name: Option<String>,
}
