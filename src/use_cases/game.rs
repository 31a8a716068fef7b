use super::types::{GameEvent, WorldUpdate};
use crate::domain::state::sanitize_name;
use crate::domain::systems::kinematics::KinematicsConfig;
use crate::domain::systems::{collision, food, kinematics};
use crate::domain::tuning::{SnakeTuning, WorldTuning};
use crate::domain::{FoodSnapshot, Snake, SnakeSnapshot, World};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::time::MissedTickBehavior;
use tracing::info;
use uuid::Uuid;

/// Applies one decoded intent to the world. Safe to call at any point between
/// ticks; intents for ids that already left are tolerated silently because the
/// disconnect race is expected, not an error.
pub fn apply_event(
    world: &mut World,
    ev: GameEvent,
    snake_cfg: &SnakeTuning,
    rng: &mut impl Rng,
) {
    match ev {
        GameEvent::Join { player_id, name } => {
            let snake = spawn_snake(player_id, &name, snake_cfg, rng);
            info!(snake_id = %player_id, name = %snake.name, "player joined");
            world.snakes.push(snake);
        }
        GameEvent::Steer {
            player_id,
            angle,
            boost,
        } => {
            if let Some(snake) = world.snake_mut(player_id) {
                snake.heading = angle;
                snake.boost = boost;
            }
        }
        GameEvent::Leave { player_id } => {
            info!(snake_id = %player_id, "player left");
            world.snakes.retain(|s| s.id != player_id);
        }
    }
}

// New snakes appear at the map center with a collapsed chain and a random
// heading; the chain pays out as they move.
fn spawn_snake(id: Uuid, name: &str, cfg: &SnakeTuning, rng: &mut impl Rng) -> Snake {
    let mut snake = Snake {
        id,
        name: sanitize_name(name),
        x: 0.0,
        y: 0.0,
        heading: rng.random_range(0.0..TAU),
        boost: false,
        base_speed: cfg.base_speed,
        score: cfg.initial_score,
        segments: Vec::new(),
        hue: rng.random_range(0.0..360.0),
    };
    snake.collapse_segments(cfg.initial_score as usize);
    snake
}

/// Advances the world by exactly one tick and returns the snapshot for the
/// transport boundary. Plain function, no timers, so tests can drive it with a
/// seeded rng.
///
/// Fixed order: food replenish, kinematics for every snake, consumption for
/// every snake, collision for every snake, snapshot assembly.
pub fn advance_tick(
    world: &mut World,
    tick: u64,
    snake_cfg: &SnakeTuning,
    world_cfg: &WorldTuning,
    rng: &mut impl Rng,
) -> WorldUpdate {
    food::replenish(world, world_cfg, rng);

    let kin = KinematicsConfig {
        boost_speed: snake_cfg.boost_speed,
        boost_drain: snake_cfg.boost_drain,
        boost_floor: snake_cfg.boost_floor,
        boundary_radius: world_cfg.boundary_radius,
        segment_spacing: snake_cfg.segment_spacing,
        spring_rate: snake_cfg.spring_rate,
    };
    for snake in &mut world.snakes {
        kinematics::tick_snake(snake, kin);
    }

    for i in 0..world.snakes.len() {
        food::consume(&mut world.snakes[i], &mut world.food, snake_cfg);
        // Growth from this tick's meals lands in the chain before the snapshot,
        // keeping len(segments) == floor(score) at every tick boundary.
        kinematics::resize_segments(&mut world.snakes[i]);
    }

    collision::resolve(world, world_cfg, snake_cfg, rng);

    WorldUpdate {
        tick,
        snakes: world
            .snakes
            .iter()
            .map(|s| SnakeSnapshot::capture(s, snake_cfg.radius_min, snake_cfg.radius_max))
            .collect(),
        food: world.food.iter().map(FoodSnapshot::from).collect(),
    }
}

/// The authoritative world loop. Sole writer of the world state: it drains
/// queued intents at each tick boundary, advances the simulation one step and
/// broadcasts the snapshot. Ticks never overlap; a missed deadline only delays
/// the next tick.
pub async fn world_task(
    mut input_rx: mpsc::Receiver<GameEvent>,
    world_tx: broadcast::Sender<WorldUpdate>,
    tick_interval: Duration,
) {
    let snake_cfg = SnakeTuning::default();
    let world_cfg = WorldTuning::default();
    let mut world = World::new();
    let mut rng = StdRng::from_os_rng();
    let mut tick: u64 = 0;

    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        // Everything queued before this point is visible to this tick; later
        // intents land no later than the next tick.
        while let Ok(ev) = input_rx.try_recv() {
            apply_event(&mut world, ev, &snake_cfg, &mut rng);
        }

        tick += 1;
        let update = advance_tick(&mut world, tick, &snake_cfg, &world_cfg, &mut rng);

        // Send errors only mean no client is connected right now.
        let _ = world_tx.send(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Food;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn no_food() -> WorldTuning {
        WorldTuning {
            target_food: 0,
            ..WorldTuning::default()
        }
    }

    #[test]
    fn join_spawns_a_sanitized_collapsed_snake_at_the_center() {
        let snake_cfg = SnakeTuning::default();
        let mut rng = seeded();
        let mut world = World::new();
        let id = Uuid::new_v4();

        apply_event(
            &mut world,
            GameEvent::Join {
                player_id: id,
                name: "Bob!!".into(),
            },
            &snake_cfg,
            &mut rng,
        );

        let snake = world.snake(id).expect("snake spawned");
        assert_eq!(snake.name, "Bob");
        assert_eq!(snake.score, 10.0);
        assert_eq!((snake.x, snake.y), (0.0, 0.0));
        assert_eq!(snake.segments.len(), 10);
        assert!(snake.segments.iter().all(|s| s.x == 0.0 && s.y == 0.0));
        assert!(!snake.boost);
    }

    #[test]
    fn first_tick_moves_the_head_and_leaves_the_slack_chain_behind() {
        let snake_cfg = SnakeTuning::default();
        let world_cfg = no_food();
        let mut rng = seeded();
        let mut world = World::new();
        let id = Uuid::new_v4();

        apply_event(
            &mut world,
            GameEvent::Join {
                player_id: id,
                name: "Bob!!".into(),
            },
            &snake_cfg,
            &mut rng,
        );
        apply_event(
            &mut world,
            GameEvent::Steer {
                player_id: id,
                angle: 0.0,
                boost: false,
            },
            &snake_cfg,
            &mut rng,
        );

        let update = advance_tick(&mut world, 1, &snake_cfg, &world_cfg, &mut rng);

        let snake = world.snake(id).unwrap();
        assert!((snake.x - snake_cfg.base_speed).abs() < 1e-5);
        assert!(snake.y.abs() < 1e-5);
        assert!(
            snake
                .segments
                .iter()
                .all(|s| (s.x * s.x + s.y * s.y).sqrt() < 1e-5)
        );

        assert_eq!(update.tick, 1);
        assert_eq!(update.snakes.len(), 1);
        assert_eq!(update.snakes[0].segments.len(), 10);
    }

    #[test]
    fn steer_after_disconnect_is_a_silent_no_op() {
        let snake_cfg = SnakeTuning::default();
        let mut rng = seeded();
        let mut world = World::new();
        let id = Uuid::new_v4();

        apply_event(
            &mut world,
            GameEvent::Join {
                player_id: id,
                name: "x".into(),
            },
            &snake_cfg,
            &mut rng,
        );
        apply_event(
            &mut world,
            GameEvent::Leave { player_id: id },
            &snake_cfg,
            &mut rng,
        );
        assert!(world.snakes.is_empty());

        // The race loser must not error or resurrect the snake.
        apply_event(
            &mut world,
            GameEvent::Steer {
                player_id: id,
                angle: 1.0,
                boost: true,
            },
            &snake_cfg,
            &mut rng,
        );
        assert!(world.snakes.is_empty());
    }

    #[test]
    fn segments_track_score_on_a_tick_with_consumption() {
        let snake_cfg = SnakeTuning::default();
        let world_cfg = no_food();
        let mut rng = seeded();
        let mut world = World::new();
        let id = Uuid::new_v4();

        apply_event(
            &mut world,
            GameEvent::Join {
                player_id: id,
                name: "eater".into(),
            },
            &snake_cfg,
            &mut rng,
        );
        apply_event(
            &mut world,
            GameEvent::Steer {
                player_id: id,
                angle: 0.0,
                boost: false,
            },
            &snake_cfg,
            &mut rng,
        );
        // One meal sitting exactly where the head lands after the move.
        world.food.push(Food {
            id: 1,
            x: snake_cfg.base_speed,
            y: 0.0,
            size: 2.0,
            value: 3.0,
            hue: 0.0,
        });

        let update = advance_tick(&mut world, 1, &snake_cfg, &world_cfg, &mut rng);

        let snake = world.snake(id).unwrap();
        assert!(world.food.is_empty());
        assert!((snake.score - 13.0).abs() < 1e-5);
        // The chain reflects the meal on the same tick it was eaten, in the
        // world and in the broadcast snapshot alike.
        assert_eq!(snake.segments.len(), 13);
        assert_eq!(update.snakes[0].segments.len(), 13);
    }

    #[test]
    fn invariants_hold_across_many_ticks() {
        let snake_cfg = SnakeTuning::default();
        let world_cfg = WorldTuning::default();
        let mut rng = seeded();
        let mut world = World::new();

        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        for id in &ids {
            apply_event(
                &mut world,
                GameEvent::Join {
                    player_id: *id,
                    name: "runner".into(),
                },
                &snake_cfg,
                &mut rng,
            );
        }

        for tick in 1..=300 {
            // Random steering with occasional boost to exercise drain paths.
            for id in &ids {
                let angle = rng.random_range(0.0..TAU);
                let boost = rng.random::<f32>() < 0.3;
                apply_event(
                    &mut world,
                    GameEvent::Steer {
                        player_id: *id,
                        angle,
                        boost,
                    },
                    &snake_cfg,
                    &mut rng,
                );
            }
            advance_tick(&mut world, tick, &snake_cfg, &world_cfg, &mut rng);

            for snake in &world.snakes {
                assert_eq!(snake.segments.len(), snake.score as usize);
                assert!(snake.score >= snake_cfg.initial_score);
                let dist = (snake.x * snake.x + snake.y * snake.y).sqrt();
                assert!(dist <= world_cfg.boundary_radius + 1e-3);
            }
        }
    }

    #[test]
    fn food_population_meets_target_after_every_tick() {
        let snake_cfg = SnakeTuning::default();
        let world_cfg = WorldTuning::default();
        let mut rng = seeded();
        let mut world = World::new();
        let id = Uuid::new_v4();

        apply_event(
            &mut world,
            GameEvent::Join {
                player_id: id,
                name: "eater".into(),
            },
            &snake_cfg,
            &mut rng,
        );

        for tick in 1..=50 {
            advance_tick(&mut world, tick, &snake_cfg, &world_cfg, &mut rng);
        }

        // Consumption during a tick may dip the count below target; the
        // replenish pass always restores it.
        food::replenish(&mut world, &world_cfg, &mut rng);
        assert!(world.food.len() >= world_cfg.target_food);
        assert!(world.snake(id).unwrap().score >= snake_cfg.initial_score);
    }
}
