/// Pure simulation functions.
///
/// Every public function takes an immutable reference to the current
/// `World` (and, where needed, an RNG handle) and returns a brand-new
/// value.  Side effects are limited to the injected RNG.

use rand::Rng;
use thiserror::Error;

use crate::entities::{Assets, Behavior, Enemy, ImageHandle, SpriteSheet, World};

// ── Canvas & cadence constants ───────────────────────────────────────────────

pub const CANVAS_WIDTH: f32 = 500.0;
pub const CANVAS_HEIGHT: f32 = 800.0;

/// Milliseconds between enemy spawns.
pub const SPAWN_INTERVAL: f32 = 500.0;

/// Milliseconds between animation-frame advances.
pub const FRAME_INTERVAL: f32 = 100.0;

/// Highest animation column — 6 frames total, `0..=5`.
pub const MAX_FRAME: u32 = 5;

/// Radians added to a ghost's bob phase each update.  Per-update, not
/// time-scaled: a ghost bobs at frame rate, whatever the frame rate is.
const BOB_STEP: f32 = 0.02;

// ── Errors ───────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum WorldError {
    /// Canvas dimensions must be positive, finite numbers.
    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build an empty world for the given canvas dimensions.
pub fn init_world(width: f32, height: f32) -> Result<World, WorldError> {
    if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
        return Err(WorldError::InvalidDimensions { width, height });
    }
    Ok(World {
        width,
        height,
        enemies: Vec::new(),
        spawn_timer: 0.0,
        spawn_interval: SPAWN_INTERVAL,
    })
}

/// Attach the fixed sheet geometry to three externally-decoded images.
pub fn init_assets(worm: ImageHandle, ghost: ImageHandle, spider: ImageHandle) -> Assets {
    Assets {
        worm: SpriteSheet { image: worm, cell_width: 229.0, cell_height: 171.0 },
        ghost: SpriteSheet { image: ghost, cell_width: 261.0, cell_height: 209.0 },
        spider: SpriteSheet { image: spider, cell_width: 310.0, cell_height: 175.0 },
    }
}

fn base_enemy(sprite: SpriteSheet, x: f32, y: f32, speed_x: f32, behavior: Behavior) -> Enemy {
    Enemy {
        x,
        y,
        width: sprite.cell_width / 2.0,
        height: sprite.cell_height / 2.0,
        speed_x,
        sprite,
        frame: 0,
        max_frame: MAX_FRAME,
        frame_timer: 0.0,
        frame_interval: FRAME_INTERVAL,
        marked_for_removal: false,
        behavior,
    }
}

/// Worm: enters at the right edge, pinned to the ground line.
pub fn spawn_worm(world: &World, assets: &Assets, rng: &mut impl Rng) -> Enemy {
    let sprite = assets.worm;
    let height = sprite.cell_height / 2.0;
    base_enemy(
        sprite,
        world.width,
        world.height - height,
        rng.gen_range(0.1..0.3),
        Behavior::Crawl,
    )
}

/// Ghost: enters at the right edge somewhere in the top 60% of the canvas.
pub fn spawn_ghost(world: &World, assets: &Assets, rng: &mut impl Rng) -> Enemy {
    let sprite = assets.ghost;
    base_enemy(
        sprite,
        world.width,
        rng.gen_range(0.0..world.height * 0.6),
        rng.gen_range(0.1..0.2),
        Behavior::Bob {
            angle: 0.0,
            curve: rng.gen_range(0.0..3.0),
        },
    )
}

/// Spider: drops in from above the top edge at a random column.
pub fn spawn_spider(world: &World, assets: &Assets, rng: &mut impl Rng) -> Enemy {
    let sprite = assets.spider;
    let height = sprite.cell_height / 2.0;
    base_enemy(
        sprite,
        rng.gen_range(0.0..world.width),
        -height,
        0.0,
        Behavior::Descend {
            speed_y: rng.gen_range(0.2..0.4),
            max_descent: rng.gen_range(0.0..world.height),
        },
    )
}

fn spawn_random(world: &World, assets: &Assets, rng: &mut impl Rng) -> Enemy {
    match rng.gen_range(0..3) {
        0 => spawn_worm(world, assets, rng),
        1 => spawn_ghost(world, assets, rng),
        _ => spawn_spider(world, assets, rng),
    }
}

// ── Per-enemy update ─────────────────────────────────────────────────────────

/// Advance one enemy by `delta_time` milliseconds.
///
/// The shared base step runs first (horizontal drift, off-screen-left
/// eviction, animation cadence), then the per-kind step.  Total over
/// all valid states — no failure modes.
pub fn update_enemy(enemy: &Enemy, delta_time: f32) -> Enemy {
    let mut e = enemy.clone();

    // Base step, shared by all kinds.  The off-screen-left rule also
    // runs for spiders, where speed_x = 0 keeps it unreachable.
    e.x -= e.speed_x * delta_time;
    if e.x < -e.width {
        e.marked_for_removal = true;
    }
    if e.frame_timer > e.frame_interval {
        e.frame = if e.frame < e.max_frame { e.frame + 1 } else { 0 };
        e.frame_timer = 0.0;
    } else {
        e.frame_timer += delta_time;
    }

    // Per-kind step, ordered after the base step.
    match &mut e.behavior {
        Behavior::Crawl => {}
        Behavior::Bob { angle, curve } => {
            e.y += angle.sin() * *curve;
            *angle += BOB_STEP;
        }
        Behavior::Descend { speed_y, max_descent } => {
            // Top eviction checks twice the height, giving the sprite
            // slack above the edge before it despawns.
            if e.y < -(e.height * 2.0) {
                e.marked_for_removal = true;
            }
            e.y += *speed_y * delta_time;
            // Checked after the move, so the spider may overshoot the
            // limit by one tick's motion before reversing.
            if e.y > *max_descent {
                *speed_y = -*speed_y;
            }
        }
    }

    e
}

// ── World tick ───────────────────────────────────────────────────────────────

/// Advance the whole simulation by `delta_time` milliseconds.
///
/// Order per tick: purge marked enemies, then spawn (at most one, even
/// across a large frame hitch — the timer resets to 0 rather than
/// carrying the surplus), then update every survivor including a
/// just-spawned one.  All randomness comes through `rng` so callers
/// control determinism (useful for tests with a seeded RNG).
pub fn tick(world: &World, delta_time: f32, assets: &Assets, rng: &mut impl Rng) -> World {
    let mut enemies: Vec<Enemy> = world
        .enemies
        .iter()
        .filter(|e| !e.marked_for_removal)
        .cloned()
        .collect();

    let mut spawn_timer = world.spawn_timer;
    if spawn_timer > world.spawn_interval {
        enemies.push(spawn_random(world, assets, rng));
        spawn_timer = 0.0;
    } else {
        spawn_timer += delta_time;
    }

    let enemies = enemies.iter().map(|e| update_enemy(e, delta_time)).collect();

    World {
        enemies,
        spawn_timer,
        ..world.clone()
    }
}
