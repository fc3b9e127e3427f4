//! LESTER demo: a spinning flat-shaded cube
//!
//! Renders into a software framebuffer and presents it through macroquad.
//! Reads `lester.ron` from the working directory if there is one.

use std::rc::Rc;
use macroquad::prelude::*;
use lester::config::RenderConfig;
use lester::rasterizer::{Axis, Color, Framebuffer, FrameStats, Object, Renderer};

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const CONFIG_PATH: &str = "lester.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("LESTER v{}", VERSION),
        window_width: lester::rasterizer::WIDTH as i32,
        window_height: lester::rasterizer::HEIGHT as i32,
        window_resizable: true,
        ..Default::default()
    }
}

fn load_config() -> RenderConfig {
    if !std::path::Path::new(CONFIG_PATH).exists() {
        log::warn!("{} not found, using default render settings", CONFIG_PATH);
        return RenderConfig::default();
    }
    match RenderConfig::load(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring {}: {}", CONFIG_PATH, e);
            RenderConfig::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);
    // Default filter is "info" if RUST_LOG is not set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config();
    let mut renderer = match Renderer::new(&config) {
        Ok(r) => r,
        Err(e) => {
            log::error!("could not start renderer: {}", e);
            return;
        }
    };
    let mut fb = Framebuffer::new(config.width, config.height);

    let mut cube = match Object::cube(1.0, &Rc::new(Color::SKY)) {
        Ok(cube) => cube,
        Err(e) => {
            log::error!("could not build cube: {}", e);
            return;
        }
    };
    cube.translate(0.0, 0.0, 1.0);

    let mut frame: u64 = 0;
    let mut totals = FrameStats::default();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        cube.rotate_local(Axis::Y, 1.0);
        cube.rotate_local(Axis::X, 1.0);
        cube.rotate_local(Axis::Z, 1.0);

        fb.clear(config.clear_color);
        renderer.clear_depth();
        let stats = renderer.render_object(&cube, &mut fb);
        totals += stats;
        frame += 1;
        if frame % 360 == 0 {
            log::debug!("{} frames, last: {:?}, totals: {:?}", frame, stats, totals);
        }

        // Convert framebuffer to texture and scale to the window, keeping aspect
        let texture = Texture2D::from_rgba8(fb.width as u16, fb.height as u16, &fb.pixels);
        texture.set_filter(FilterMode::Nearest);

        let scale = (screen_width() / fb.width as f32).min(screen_height() / fb.height as f32);
        let (draw_w, draw_h) = (fb.width as f32 * scale, fb.height as f32 * scale);
        clear_background(BLACK);
        draw_texture_ex(
            &texture,
            (screen_width() - draw_w) / 2.0,
            (screen_height() - draw_h) / 2.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(Vec2::new(draw_w, draw_h)),
                ..Default::default()
            },
        );

        next_frame().await;
    }
}
