use crate::domain::state::{Food, World};
use crate::domain::systems::food::sample_disk;
use crate::domain::tuning::{SnakeTuning, WorldTuning};
use rand::Rng;
use std::f32::consts::TAU;
use tracing::info;

/// Head-vs-body collision pass over every ordered pair of distinct snakes.
///
/// Only the owner of the colliding head dies. When two snakes are mutually
/// inside each other's bodies on the same tick, iteration order over
/// `world.snakes` breaks the tie: the earlier one dies and respawns before the
/// later one is tested. That asymmetry is intentional.
pub fn resolve(
    world: &mut World,
    cfg: &WorldTuning,
    snake_cfg: &SnakeTuning,
    rng: &mut impl Rng,
) {
    let hit_sq = cfg.hit_radius * cfg.hit_radius;

    for i in 0..world.snakes.len() {
        let head = world.snakes[i].head();
        // First hit settles the pair; `any` short-circuits.
        let hit = world.snakes.iter().enumerate().any(|(j, other)| {
            j != i
                && other.segments.iter().any(|seg| {
                    let dx = seg.x - head.x;
                    let dy = seg.y - head.y;
                    dx * dx + dy * dy < hit_sq
                })
        });

        if hit {
            kill_and_respawn(world, i, cfg, snake_cfg, rng);
        }
    }
}

// Death effects: scatter food along the former body, then rebuild the snake
// fresh at a random point inside the safe sub-disk.
fn kill_and_respawn(
    world: &mut World,
    idx: usize,
    cfg: &WorldTuning,
    snake_cfg: &SnakeTuning,
    rng: &mut impl Rng,
) {
    let pre_death_score = world.snakes[idx].score;
    let drops = (pre_death_score as usize) / 2;

    info!(
        snake_id = %world.snakes[idx].id,
        score = pre_death_score,
        drops,
        "snake died"
    );

    // One drop per two body segments, each jittered off the segment position.
    for k in 0..drops {
        let anchor = {
            let s = &world.snakes[idx];
            s.segments.get(k * 2).copied().unwrap_or_else(|| s.head())
        };
        let jx = rng.random_range(-cfg.death_food_jitter..cfg.death_food_jitter);
        let jy = rng.random_range(-cfg.death_food_jitter..cfg.death_food_jitter);
        let id = world.next_food_id();
        world.food.push(Food {
            id,
            x: anchor.x + jx,
            y: anchor.y + jy,
            size: cfg.death_food_size,
            value: cfg.death_food_value,
            hue: cfg.death_food_hue,
        });
    }

    let spawn = sample_disk(rng, cfg.boundary_radius * cfg.safe_spawn_fraction);
    let snake = &mut world.snakes[idx];
    snake.score = snake_cfg.initial_score;
    snake.x = spawn.x;
    snake.y = spawn.y;
    snake.heading = rng.random_range(0.0..TAU);
    snake.boost = false;
    snake.collapse_segments(snake_cfg.initial_score as usize);
}
