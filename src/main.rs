mod display;

use std::io::{stdout, BufWriter, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use canvas_critters::compute::{init_world, tick, CANVAS_HEIGHT, CANVAS_WIDTH};
use canvas_critters::render::{draw_world, Surface};

use display::TerminalSurface;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// Returns `true` when a quit key arrived.  The simulation takes no
/// input; this is only the cancellation check that lets the loop end
/// so the terminal can be restored.
fn quit_requested() -> std::io::Result<bool> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event::read()? {
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true);
                }
                _ => {}
            }
        }
    }
    Ok(false)
}

// ── Animation loop ────────────────────────────────────────────────────────────

/// Drive the simulation until a quit key arrives.
///
/// Each pass computes the delta time from a monotonic millisecond
/// clock, clears the surface, ticks the world, draws it, and paces the
/// frame.  `last_time` is seeded to 1 against an initial timestamp of
/// 0, so the very first frame sees a delta of -1; motion over one such
/// frame is negligible and every update is total over negative deltas.
fn animate<W: Write>(out: &mut W) -> std::io::Result<()> {
    let assets = display::load_assets();
    let (cols, rows) = terminal::size()?;
    let mut surface = TerminalSurface::new(cols, rows, CANVAS_WIDTH, CANVAS_HEIGHT);

    let mut world = init_world(CANVAS_WIDTH, CANVAS_HEIGHT)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let mut rng = thread_rng();

    let clock = Instant::now();
    let mut last_time: f32 = 1.0;
    let mut time_stamp: f32 = 0.0;

    loop {
        let frame_start = Instant::now();

        if quit_requested()? {
            return Ok(());
        }

        let delta_time = time_stamp - last_time;
        last_time = time_stamp;

        surface.clear_region(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
        world = tick(&world, delta_time, &assets, &mut rng);
        draw_world(&world, &mut surface);
        surface.present(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
        time_stamp = clock.elapsed().as_secs_f32() * 1000.0;
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let result = animate(&mut out);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
