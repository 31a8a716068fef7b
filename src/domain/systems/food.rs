use crate::domain::state::{Food, Snake, Vec2, World};
use crate::domain::tuning::{SnakeTuning, WorldTuning};
use rand::Rng;
use std::f32::consts::TAU;

/// Samples a point uniformly over the disk *area*. Taking the square root of the
/// radial sample avoids clustering items around the center.
pub fn sample_disk(rng: &mut impl Rng, radius: f32) -> Vec2 {
    let r = radius * rng.random::<f32>().sqrt();
    let theta = rng.random_range(0.0..TAU);
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Tops the food population up to the configured target.
pub fn replenish(world: &mut World, cfg: &WorldTuning, rng: &mut impl Rng) {
    while world.food.len() < cfg.target_food {
        let id = world.next_food_id();
        let pos = sample_disk(rng, cfg.boundary_radius);
        world.food.push(Food {
            id,
            x: pos.x,
            y: pos.y,
            size: rng.random_range(cfg.food_size_min..cfg.food_size_max),
            value: rng.random_range(cfg.food_value_min..cfg.food_value_max),
            hue: rng.random_range(0.0..360.0),
        });
    }
}

/// Removes every item within pickup reach of the snake's head and adds its value
/// to the score. A single pass over the set, so an item is consumed at most once.
pub fn consume(snake: &mut Snake, food: &mut Vec<Food>, snake_cfg: &SnakeTuning) {
    let head = snake.head();
    let reach = snake.radius(snake_cfg.radius_min, snake_cfg.radius_max);
    food.retain(|item| {
        let eaten = head.distance(item.position()) < reach + item.size;
        if eaten {
            snake.score += item.value;
        }
        !eaten
    });
}
