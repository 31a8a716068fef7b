// Domain layer: core simulation types and rules.

pub mod state;
pub mod systems;
pub mod tuning;

pub use state::{Food, FoodSnapshot, Snake, SnakeSnapshot, Vec2, World};
