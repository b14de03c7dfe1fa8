/// All simulation data types — pure data, no logic.

/// Reference to an externally-owned decoded sprite image.  The
/// simulation never looks inside it; the rendering layer resolves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageHandle(pub u32);

/// Geometry of one animation frame within a sprite sheet.  Frames are
/// laid out as a single horizontal strip, so a frame index plus the
/// cell width fully locates a source region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteSheet {
    pub image: ImageHandle,
    pub cell_width: f32,
    pub cell_height: f32,
}

/// The three sprite sheets, injected once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Assets {
    pub worm: SpriteSheet,
    pub ghost: SpriteSheet,
    pub spider: SpriteSheet,
}

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Per-kind motion state.  Worms crawl with the shared horizontal
/// drift alone; ghosts bob on a sine wave; spiders descend on a thread
/// and bounce at their descent limit.
#[derive(Clone, Debug, PartialEq)]
pub enum Behavior {
    Crawl,
    Bob {
        /// Sine phase, advanced a fixed step per update (not time-scaled).
        angle: f32,
        /// Bob amplitude, fixed per instance at spawn.
        curve: f32,
    },
    Descend {
        /// Vertical speed in px/ms; negated when the descent limit is crossed.
        speed_y: f32,
        /// y-threshold beyond which the vertical direction reverses.
        max_descent: f32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    /// Top-left corner of the bounding box.
    pub x: f32,
    pub y: f32,
    /// On-screen size — half the sprite cell size, fixed at construction.
    pub width: f32,
    pub height: f32,
    /// Leftward drift in px/ms (0 for spiders).
    pub speed_x: f32,
    pub sprite: SpriteSheet,
    /// Current animation column, always in `0..=max_frame`.
    pub frame: u32,
    pub max_frame: u32,
    /// Milliseconds accumulated toward the next frame advance.
    pub frame_timer: f32,
    pub frame_interval: f32,
    /// Terminal flag — the owner purges the enemy on its next tick.
    pub marked_for_removal: bool,
    pub behavior: Behavior,
}

// ── Master simulation state ───────────────────────────────────────────────────

/// The entire simulation state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub width: f32,
    pub height: f32,
    /// Live enemies in spawn order; also the draw order.
    pub enemies: Vec<Enemy>,
    /// Milliseconds accumulated toward the next spawn.
    pub spawn_timer: f32,
    pub spawn_interval: f32,
}
