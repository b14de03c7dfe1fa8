/// The drawing pass and the surface capability it draws through.
///
/// `Surface` is the crate's view of a 2-D immediate-mode canvas:
/// region clears, sprite-sheet blits, stroked paths, and a save/restore
/// stack for paint state.  The terminal binding lives in the binary;
/// tests substitute a recording implementation.

use crate::entities::{Behavior, Enemy, ImageHandle, World};

/// Opacity applied to ghosts for the duration of their sprite draw.
const GHOST_ALPHA: f32 = 0.5;

/// Pixels the spider's thread extends past the sprite's top edge.
const THREAD_REACH: f32 = 10.0;

/// An axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

pub trait Surface {
    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Blit the `src` region of `image` into the `dst` region.
    fn draw_image_region(&mut self, image: ImageHandle, src: Rect, dst: Rect);
    fn stroke_path(&mut self, points: &[(f32, f32)]);
    fn push_paint_state(&mut self);
    fn pop_paint_state(&mut self);
    fn set_alpha(&mut self, alpha: f32);
}

/// Draw every enemy in collection order.  No depth sort — draw order
/// is spawn order.
pub fn draw_world<S: Surface>(world: &World, surface: &mut S) {
    for enemy in &world.enemies {
        draw_enemy(enemy, surface);
    }
}

pub fn draw_enemy<S: Surface>(enemy: &Enemy, surface: &mut S) {
    match enemy.behavior {
        Behavior::Crawl => draw_sprite(enemy, surface),
        Behavior::Bob { .. } => {
            // Scoped opacity: pushed before the blit, popped after, so
            // the caller's paint state survives the detour.
            surface.push_paint_state();
            surface.set_alpha(GHOST_ALPHA);
            draw_sprite(enemy, surface);
            surface.pop_paint_state();
        }
        Behavior::Descend { .. } => {
            let cx = enemy.x + enemy.width / 2.0;
            surface.stroke_path(&[(cx, 0.0), (cx, enemy.y + THREAD_REACH)]);
            draw_sprite(enemy, surface);
        }
    }
}

fn draw_sprite<S: Surface>(enemy: &Enemy, surface: &mut S) {
    let src = Rect {
        x: enemy.frame as f32 * enemy.sprite.cell_width,
        y: 0.0,
        w: enemy.sprite.cell_width,
        h: enemy.sprite.cell_height,
    };
    let dst = Rect {
        x: enemy.x,
        y: enemy.y,
        w: enemy.width,
        h: enemy.height,
    };
    surface.draw_image_region(enemy.sprite.image, src, dst);
}
