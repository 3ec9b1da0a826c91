//! FolioTerm desktop entry point.
//!
//! A portfolio dressed up as a terminal: commands type their responses out
//! character by character, `education` opens the certificate viewer beside
//! the scrollback, links open in the system browser. Escape fast-forwards
//! an animation or closes the viewer, F12 saves a screenshot.

mod app_state;
mod certart;
mod input;
mod render;
mod screenshot;

use std::time::Instant;

use anyhow::Result;

use app_state::AppState;
use folioterm_backend_sdl::SdlBackend;
use folioterm_core::backend::{InputBackend, TermBackend};
use folioterm_core::config::FolioConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = FolioConfig::load()?;
    log::info!(
        "Starting FolioTerm ({}x{})",
        config.screen_width,
        config.screen_height,
    );

    let mut backend = SdlBackend::new(
        &config.window_title,
        config.screen_width,
        config.screen_height,
    )?;
    backend.init(config.screen_width, config.screen_height)?;

    let mut state = AppState::new(config);
    state.cert_images = certart::load_certificate_images(&mut backend)?;
    log::info!("Generated {} certificate cards", state.cert_images.len());

    let mut last_frame = Instant::now();
    let mut screenshot_requested = false;

    'running: loop {
        let events = backend.poll_events();
        for event in &events {
            match input::handle_event(event, &mut state) {
                input::InputResult::Quit => break 'running,
                input::InputResult::Screenshot => screenshot_requested = true,
                input::InputResult::Continue => {},
            }
        }

        let dt = last_frame.elapsed().as_millis() as u32;
        last_frame = Instant::now();
        state.session.tick(dt);

        render::draw_frame(&mut backend, &state)?;

        // Capture before present so read_pixels sees the finished frame.
        if screenshot_requested {
            let (w, h) = (state.config.screen_width, state.config.screen_height);
            match screenshot::capture(&backend, w, h) {
                Ok(path) => log::info!("Screenshot saved to {}", path.display()),
                Err(e) => log::warn!("Screenshot failed: {e}"),
            }
            screenshot_requested = false;
        }

        backend.swap_buffers()?;
    }

    backend.shutdown()?;
    log::info!("FolioTerm shut down cleanly");
    Ok(())
}
