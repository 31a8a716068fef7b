// Domain-level simulation state and snapshot types.

use uuid::Uuid;

/// A 2D point in world space. Segments and food positions use this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Vec2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One player-controlled chain. The head position lives in `x`/`y`; the trailing
/// body is `segments`, head-to-tail order, `len == floor(score)` after every tick.
#[derive(Debug, Clone)]
pub struct Snake {
    pub id: Uuid,
    pub name: String,

    // Kinematic state.
    pub x: f32,
    pub y: f32,
    pub heading: f32, // radians
    pub boost: bool,
    pub base_speed: f32,

    // Growth state.
    pub score: f32,
    pub segments: Vec<Vec2>,

    // Render-only.
    pub hue: f32,
}

impl Snake {
    pub fn head(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Render radius derived from mass, also the food pickup reach.
    /// Monotonic in score and clamped to keep small/huge snakes renderable.
    pub fn radius(&self, radius_min: f32, radius_max: f32) -> f32 {
        (self.score * 0.5).clamp(radius_min, radius_max)
    }

    /// Rebuilds the body as a collapsed chain at the current head position.
    pub fn collapse_segments(&mut self, count: usize) {
        self.segments.clear();
        self.segments.resize(count.max(1), self.head());
    }
}

/// A single food item. `value` is added to a snake's score on consumption.
#[derive(Debug, Clone)]
pub struct Food {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub value: f32,
    pub hue: f32,
}

impl Food {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Canonical world state. The world task is the only writer; everything else
/// sees read-only snapshots.
#[derive(Debug, Default)]
pub struct World {
    // Join order; collision resolution iterates in this order on purpose.
    pub snakes: Vec<Snake>,
    pub food: Vec<Food>,
    next_food_id: u64,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snake(&self, id: Uuid) -> Option<&Snake> {
        self.snakes.iter().find(|s| s.id == id)
    }

    pub fn snake_mut(&mut self, id: Uuid) -> Option<&mut Snake> {
        self.snakes.iter_mut().find(|s| s.id == id)
    }

    /// Allocates a process-unique food id.
    pub fn next_food_id(&mut self) -> u64 {
        let id = self.next_food_id;
        self.next_food_id = self.next_food_id.wrapping_add(1);
        id
    }
}

pub const MAX_NAME_LEN: usize = 12;
pub const DEFAULT_NAME: &str = "Guest";

/// Display names are capped and stripped to alphanumerics and spaces before they
/// enter the world. Empty results fall back to the default name.
pub fn sanitize_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .take(MAX_NAME_LEN)
        .collect();
    let cleaned = cleaned.trim().to_string();
    if cleaned.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        cleaned
    }
}

/// Per-snake slice of a world snapshot.
#[derive(Debug, Clone)]
pub struct SnakeSnapshot {
    pub id: Uuid,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub heading: f32,
    pub score: f32,
    pub radius: f32,
    pub hue: f32,
    pub segments: Vec<Vec2>,
}

impl SnakeSnapshot {
    pub fn capture(s: &Snake, radius_min: f32, radius_max: f32) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            x: s.x,
            y: s.y,
            heading: s.heading,
            score: s.score,
            radius: s.radius(radius_min, radius_max),
            hue: s.hue,
            segments: s.segments.clone(),
        }
    }
}

/// Per-food slice of a world snapshot.
#[derive(Debug, Clone)]
pub struct FoodSnapshot {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub hue: f32,
}

impl From<&Food> for FoodSnapshot {
    fn from(f: &Food) -> Self {
        Self {
            id: f.id,
            x: f.x,
            y: f.y,
            size: f.size,
            hue: f.hue,
        }
    }
}
