// Wire protocol DTOs and conversions for public server messages.

use crate::domain::{FoodSnapshot, SnakeSnapshot, Vec2};
use crate::use_cases::WorldUpdate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Messages the server sends to connected clients over the WebSocket.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    // Assigned identity, sent once immediately after a Join is accepted.
    Init { id: Uuid },
    // Snapshot of the world for a given tick.
    WorldUpdate(WorldUpdateDto),
}

/// Messages the client sends to the server over the WebSocket.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    // Initial handshake carrying the display name.
    Join(JoinPayload),
    // Steering updates sent after a successful Join.
    Steer(SteerPayload),
}

#[derive(Debug, Clone, Deserialize)]
pub struct JoinPayload {
    #[serde(default)]
    pub name: String,
}

/// Per-intent steering payload: absolute heading plus the boost flag.
#[derive(Debug, Clone, Deserialize)]
pub struct SteerPayload {
    pub angle: f32,
    #[serde(default)]
    pub boost: bool,
}

/// Snapshot of the world sent to clients on each tick.
#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdateDto {
    pub tick: u64,
    pub snakes: Vec<SnakeDto>,
    pub food: Vec<FoodDto>,
}

impl From<WorldUpdate> for WorldUpdateDto {
    fn from(update: WorldUpdate) -> Self {
        Self {
            tick: update.tick,
            snakes: update.snakes.iter().map(SnakeDto::from).collect(),
            food: update.food.iter().map(FoodDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PointDto {
    pub x: f32,
    pub y: f32,
}

impl From<&Vec2> for PointDto {
    fn from(p: &Vec2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Flattened snake state for wire transmission in world updates.
#[derive(Debug, Clone, Serialize)]
pub struct SnakeDto {
    pub id: Uuid,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub heading: f32,
    pub score: f32,
    pub radius: f32,
    pub hue: f32,
    pub segments: Vec<PointDto>,
}

impl From<&SnakeSnapshot> for SnakeDto {
    fn from(s: &SnakeSnapshot) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            x: s.x,
            y: s.y,
            heading: s.heading,
            score: s.score,
            radius: s.radius,
            hue: s.hue,
            segments: s.segments.iter().map(PointDto::from).collect(),
        }
    }
}

/// Flattened food state for wire transmission in world updates.
#[derive(Debug, Clone, Serialize)]
pub struct FoodDto {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub hue: f32,
}

impl From<&FoodSnapshot> for FoodDto {
    fn from(f: &FoodSnapshot) -> Self {
        Self {
            id: f.id,
            x: f.x,
            y: f.y,
            size: f.size,
            hue: f.hue,
        }
    }
}
