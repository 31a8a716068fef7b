// Use-case level inputs/outputs for the game loop.

use crate::domain::{FoodSnapshot, SnakeSnapshot};
use uuid::Uuid;

/// Decoded intents flowing from the transport boundary into the world task.
#[derive(Debug, Clone)]
pub enum GameEvent {
    Join {
        player_id: Uuid,
        name: String,
    },
    Steer {
        player_id: Uuid,
        angle: f32,
        boost: bool,
    },
    Leave {
        player_id: Uuid,
    },
}

/// Point-in-time world state handed to the transport boundary once per tick.
#[derive(Debug, Clone)]
pub struct WorldUpdate {
    pub tick: u64,
    pub snakes: Vec<SnakeSnapshot>,
    pub food: Vec<FoodSnapshot>,
}
