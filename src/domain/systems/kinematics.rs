use crate::domain::state::{Snake, Vec2};
use tracing::warn;

#[derive(Debug, Clone, Copy)]
pub struct KinematicsConfig {
    pub boost_speed: f32,   // world units/tick
    pub boost_drain: f32,   // score/tick while boosting
    pub boost_floor: f32,   // boost is free and ineffective at or below this
    pub boundary_radius: f32,
    pub segment_spacing: f32,
    pub spring_rate: f32,
}

/// Advances one snake by one tick: boost accounting, head integration, boundary
/// containment, body resize and spring-follow relaxation.
pub fn tick_snake(s: &mut Snake, cfg: KinematicsConfig) {
    if !s.x.is_finite() || !s.y.is_finite() || !s.heading.is_finite() {
        // Defensive skip: one anomalous snake must not take the tick down.
        warn!(snake_id = %s.id, "non-finite kinematic state; skipping update");
        return;
    }

    // Boost only bites while the score sits above the floor, and it can never
    // drain the score below the floor.
    let boosting = s.boost && s.score > cfg.boost_floor;
    let speed = if boosting { cfg.boost_speed } else { s.base_speed };
    if boosting {
        s.score = (s.score - cfg.boost_drain).max(cfg.boost_floor);
    }

    s.x += speed * s.heading.cos();
    s.y += speed * s.heading.sin();

    clamp_to_boundary(s, cfg.boundary_radius);
    resize_segments(s);
    relax_segments(s, cfg.segment_spacing, cfg.spring_rate);
}

// Radial projection back onto the boundary circle; the angle from center is kept.
fn clamp_to_boundary(s: &mut Snake, boundary_radius: f32) {
    let dist = (s.x * s.x + s.y * s.y).sqrt();
    if dist > boundary_radius {
        let scale = boundary_radius / dist;
        s.x *= scale;
        s.y *= scale;
    }
}

/// Body length tracks floor(score): grow by duplicating the tail, shrink by
/// dropping tail entries. The chain is never left empty. Idempotent, so the
/// tick loop re-runs it after any pass that changes the score.
pub fn resize_segments(s: &mut Snake) {
    let target = (s.score.max(1.0) as usize).max(1);
    if s.segments.is_empty() {
        s.segments.push(s.head());
    }
    while s.segments.len() < target {
        let tail = *s.segments.last().unwrap_or(&Vec2::ZERO);
        s.segments.push(tail);
    }
    s.segments.truncate(target);
}

// Spring-follow: each segment chases the position ahead of it (the head for
// segment 0). The pull only engages once the link is stretched past the target
// spacing, so a collapsed chain pays out gradually as the head moves away.
fn relax_segments(s: &mut Snake, spacing: f32, spring_rate: f32) {
    let mut ahead = s.head();
    for seg in s.segments.iter_mut() {
        let dist = seg.distance(ahead);
        if dist > spacing {
            let pull = (dist - spacing) * spring_rate / dist;
            seg.x += (ahead.x - seg.x) * pull;
            seg.y += (ahead.y - seg.y) * pull;
        }
        ahead = *seg;
    }
}
