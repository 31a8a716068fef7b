/// Gameplay tuning for the arena and its food economy.

#[derive(Debug, Clone, Copy)]
pub struct WorldTuning {
    /// Radius of the circular map; heads are clamped inside it every tick.
    pub boundary_radius: f32,

    /// The food economy tops the world up to this many items each tick.
    pub target_food: usize,

    /// Food visual size range, sampled uniformly.
    pub food_size_min: f32,
    pub food_size_max: f32,

    /// Food growth value range, sampled uniformly.
    pub food_value_min: f32,
    pub food_value_max: f32,

    /// Head-vs-segment distance below which a snake dies. Fixed, not
    /// score-derived.
    pub hit_radius: f32,

    /// Respawns land inside this fraction of the boundary radius.
    pub safe_spawn_fraction: f32,

    /// Death food drops are uniform: fixed size, value and hue.
    pub death_food_size: f32,
    pub death_food_value: f32,
    pub death_food_hue: f32,

    /// Random scatter applied to each death food drop position.
    pub death_food_jitter: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            boundary_radius: 400.0,
            target_food: 50,
            food_size_min: 2.0,
            food_size_max: 4.0,
            food_value_min: 0.5,
            food_value_max: 1.5,
            hit_radius: 8.0,
            safe_spawn_fraction: 0.5,
            death_food_size: 3.0,
            death_food_value: 1.0,
            death_food_hue: 0.0,
            death_food_jitter: 4.0,
        }
    }
}
