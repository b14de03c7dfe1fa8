/// Terminal rendering layer — all terminal I/O lives here.
///
/// Implements the simulation's `Surface` capability on top of the
/// terminal cell grid: canvas pixels map onto character cells, each
/// sprite sheet onto a six-glyph animation strip, and alpha below 1.0
/// onto a faded colour.  No simulation logic is performed; this module
/// only translates draw calls into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use canvas_critters::compute::init_assets;
use canvas_critters::entities::{Assets, ImageHandle};
use canvas_critters::render::{Rect, Surface};

const C_THREAD: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

/// Six-frame glyph strip standing in for one sprite-sheet row.
struct SpriteArt {
    frames: [char; 6],
    color: Color,
    /// Colour used when the paint-state alpha is below 1.0.
    faded: Color,
}

const ART: [SpriteArt; 3] = [
    // worm
    SpriteArt {
        frames: ['∼', '≈', '∼', '≈', '∼', '≈'],
        color: Color::Green,
        faded: Color::DarkGreen,
    },
    // ghost
    SpriteArt {
        frames: ['○', '◌', '○', '◌', '○', '◌'],
        color: Color::White,
        faded: Color::DarkGrey,
    },
    // spider
    SpriteArt {
        frames: ['✳', '✱', '✳', '✱', '✳', '✱'],
        color: Color::Magenta,
        faded: Color::DarkMagenta,
    },
];

/// Image handles the terminal binding hands to the simulation: indices
/// into `ART`, standing in for externally-decoded sprite sheets.
pub fn load_assets() -> Assets {
    init_assets(ImageHandle(0), ImageHandle(1), ImageHandle(2))
}

// ── Terminal surface ──────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
struct Cell {
    glyph: char,
    color: Color,
}

pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    /// Canvas pixels per terminal column / row.
    px_per_col: f32,
    px_per_row: f32,
    cells: Vec<Option<Cell>>,
    alpha: f32,
    alpha_stack: Vec<f32>,
}

impl TerminalSurface {
    pub fn new(cols: u16, rows: u16, canvas_width: f32, canvas_height: f32) -> Self {
        // Reserve the last row for the quit hint.
        let grid_rows = rows.saturating_sub(1).max(1);
        TerminalSurface {
            cols,
            rows,
            px_per_col: canvas_width / cols.max(1) as f32,
            px_per_row: canvas_height / grid_rows as f32,
            cells: vec![None; cols as usize * grid_rows as usize],
            alpha: 1.0,
            alpha_stack: Vec::new(),
        }
    }

    fn grid_rows(&self) -> u16 {
        self.rows.saturating_sub(1).max(1)
    }

    /// Canvas point → cell coordinates, unclamped.
    fn to_cell(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x / self.px_per_col).floor() as i32,
            (y / self.px_per_row).floor() as i32,
        )
    }

    fn put(&mut self, col: i32, row: i32, glyph: char, color: Color) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.grid_rows() as i32 {
            return;
        }
        self.cells[row as usize * self.cols as usize + col as usize] =
            Some(Cell { glyph, color });
    }

    /// Flush the cell buffer to the terminal.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.queue(terminal::Clear(terminal::ClearType::All))?;

        for row in 0..self.grid_rows() {
            for col in 0..self.cols {
                let idx = row as usize * self.cols as usize + col as usize;
                if let Some(cell) = self.cells[idx] {
                    out.queue(cursor::MoveTo(col, row))?;
                    out.queue(style::SetForegroundColor(cell.color))?;
                    out.queue(Print(cell.glyph))?;
                }
            }
        }

        // Quit hint on the reserved last row.
        out.queue(cursor::MoveTo(1, self.rows.saturating_sub(1)))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print("Q : Quit"))?;

        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        out.flush()?;
        Ok(())
    }
}

impl Surface for TerminalSurface {
    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let (c0, r0) = self.to_cell(x, y);
        let (c1, r1) = self.to_cell(x + w, y + h);
        for row in r0.max(0)..r1.min(self.grid_rows() as i32) {
            for col in c0.max(0)..c1.min(self.cols as i32) {
                self.cells[row as usize * self.cols as usize + col as usize] = None;
            }
        }
    }

    fn draw_image_region(&mut self, image: ImageHandle, src: Rect, dst: Rect) {
        let art = &ART[image.0 as usize % ART.len()];
        let frame = (src.x / src.w).round() as usize % art.frames.len();
        let glyph = art.frames[frame];
        let color = if self.alpha < 1.0 { art.faded } else { art.color };

        let (c0, r0) = self.to_cell(dst.x, dst.y);
        let (c1, r1) = self.to_cell(dst.x + dst.w, dst.y + dst.h);
        for row in r0..=r1.max(r0) {
            for col in c0..=c1.max(c0) {
                self.put(col, row, glyph, color);
            }
        }
    }

    fn stroke_path(&mut self, points: &[(f32, f32)]) {
        for pair in points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            let (c0, r0) = self.to_cell(x0, y0);
            let (c1, r1) = self.to_cell(x1, y1);
            // Sprite threads are vertical; step the longer axis cell by cell.
            if (r1 - r0).abs() >= (c1 - c0).abs() {
                let (lo, hi) = if r0 <= r1 { (r0, r1) } else { (r1, r0) };
                for row in lo..=hi {
                    self.put(c0, row, '│', C_THREAD);
                }
            } else {
                let (lo, hi) = if c0 <= c1 { (c0, c1) } else { (c1, c0) };
                for col in lo..=hi {
                    self.put(col, r0, '─', C_THREAD);
                }
            }
        }
    }

    fn push_paint_state(&mut self) {
        self.alpha_stack.push(self.alpha);
    }

    fn pop_paint_state(&mut self) {
        if let Some(alpha) = self.alpha_stack.pop() {
            self.alpha = alpha;
        }
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }
}
