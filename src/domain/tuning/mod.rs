// Gameplay tuning values, kept apart from runtime/server configuration.

pub mod snake;
pub mod world;

pub use snake::SnakeTuning;
pub use world::WorldTuning;
