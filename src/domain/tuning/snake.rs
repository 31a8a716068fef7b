/// Gameplay tuning for player-controlled snakes.
///
/// Keep this separate from runtime/server configuration (tick rates, buffer sizes, etc.).

#[derive(Debug, Clone, Copy)]
pub struct SnakeTuning {
    /// Head speed in world units per tick without boost.
    pub base_speed: f32,

    /// Head speed in world units per tick while boosting.
    pub boost_speed: f32,

    /// Score assigned on join and restored on respawn. Also the lower bound
    /// the score can never fall under.
    pub initial_score: f32,

    /// Score drained per tick while boost is effective.
    pub boost_drain: f32,

    /// Boost stops costing mass (and stops working) at or below this score.
    pub boost_floor: f32,

    /// Target distance between consecutive body segments.
    pub segment_spacing: f32,

    /// Fraction of the spacing deviation corrected per tick; 1.0 would snap.
    pub spring_rate: f32,

    /// Clamp bounds for the score-derived render radius.
    pub radius_min: f32,
    pub radius_max: f32,
}

impl Default for SnakeTuning {
    fn default() -> Self {
        Self {
            base_speed: 2.0,
            boost_speed: 4.0,
            initial_score: 10.0,
            boost_drain: 0.1,
            boost_floor: 10.0,
            segment_spacing: 5.0,
            spring_rate: 0.45,
            radius_min: 5.0,
            radius_max: 30.0,
        }
    }
}
