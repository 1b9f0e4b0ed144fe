// What you SEE:
// • One fractal at a time, white on black, redrawn from scratch every frame.
// • SPACE cycles square → Sierpinski triangle → tree → Hilbert curve → square.
// • ESC quits. `--export DIR` skips the window and writes PNGs instead.

mod config;
mod draw;
mod error;
mod export;
mod fractal;
mod geometry;
mod logging;
mod primitive;
mod selector;
mod types;

use clap::Parser;
use config::Config;
use draw::{Drawer, draw_text_5x7};
use error::Error;
use fractal::Fractal;
use primitive::Primitive;
use selector::Selector;
use std::time::{Duration, Instant};
use types::{Color, FrameBuffer};

const BG: Color = Color::BLACK;
const FG: Color = Color::WHITE;

fn main() -> Result<(), Error> {
    let config = Config::parse();
    logging::init_logging(config.logging());

    let fractals = Fractal::all(config.canvas_size(), FG)?;

    if let Some(dir) = &config.export {
        let written = export::export_all(&fractals, config.width, config.height, BG, dir)?;
        log::info!("wrote {} images", written.len());
        return Ok(());
    }

    /* --- Window + reusable screen buffer --- */
    let mut drawer = Drawer::new("Fractals", config.width, config.height)?;
    let mut screen = FrameBuffer::new(config.width, config.height);
    let mut selector = Selector::starting_at(fractals, config.fractal)?;
    log::info!(
        "showing {} on a {}x{} canvas",
        selector.active().name(),
        config.width,
        config.height
    );

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Inputs */
        if drawer.space_pressed_once() {
            let next = selector.next();
            log::info!("switched to {}", next.name());
            if log::log_enabled!(log::Level::Debug) {
                let mut recorded: Vec<Primitive> = Vec::new();
                next.generate(&mut recorded)?;
                log::debug!("{} emits {} primitives per frame", next.name(), recorded.len());
            }
        }

        /* 2) Fresh canvas, then the whole fractal again */
        screen.clear(BG);
        selector.active().generate(&mut screen)?;

        /* 3) HUD */
        let hud = format!(
            "{}/{} {} | SPACE: NEXT  ESC: QUIT | {}",
            selector.index() + 1,
            selector.len(),
            selector.active().name(),
            hud_fps_text
        );
        draw_text_5x7(&mut screen, 8, 8, &hud, FG.to_pixel());

        /* 4) Present */
        drawer.present(&screen)?;

        /* 5) FPS counter (debug log + HUD once per second) */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            log::debug!("FPS: {:.1}", fps);
            hud_fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
