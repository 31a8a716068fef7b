pub mod game;
pub mod types;

pub use types::{GameEvent, WorldUpdate};
