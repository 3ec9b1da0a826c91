//! Routes backend input events into the session and the widgets.

use folioterm_core::input::{InputEvent, Key};
use folioterm_core::ui::ClickTarget;

use crate::app_state::AppState;

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Screenshot,
    Quit,
}

/// Rows scrolled per mouse-wheel notch.
const SCROLL_ROWS_PER_NOTCH: i32 = 3;

/// Handle one input event against the whole application state.
pub fn handle_event(event: &InputEvent, state: &mut AppState) -> InputResult {
    match event {
        InputEvent::Quit => return InputResult::Quit,
        InputEvent::KeyPress(Key::Screenshot) => return InputResult::Screenshot,

        InputEvent::TextInput(ch) => state.session.insert_char(*ch),
        InputEvent::Backspace => state.session.backspace(),
        InputEvent::KeyPress(Key::Enter) => {
            state.session.submit();
            state.view.scroll_to_bottom();
        },
        InputEvent::KeyPress(Key::Tab) => state.session.complete(),
        InputEvent::KeyPress(Key::Up) => state.session.recall_previous(),
        InputEvent::KeyPress(Key::Down) => state.session.recall_next(),

        // Escape first interrupts an in-flight reveal, then closes the
        // viewer once the terminal is idle.
        InputEvent::KeyPress(Key::Escape) => {
            if state.session.is_busy() {
                state.session.skip_reveal();
            } else if state.session.viewer().is_visible() {
                state.session.viewer_mut().hide();
            }
        },

        InputEvent::Scroll { dy } => {
            let (term, _) = state.layout();
            state.view.scroll_by(
                &state.session,
                &state.theme,
                term.w,
                term.h,
                dy * SCROLL_ROWS_PER_NOTCH,
            );
        },
        InputEvent::PointerClick { x, y } => handle_click(state, *x, *y),

        InputEvent::FocusGained | InputEvent::FocusLost => {},
    }
    InputResult::Continue
}

/// Resolve a click through the viewer panel first, then the terminal.
fn handle_click(state: &mut AppState, px: i32, py: i32) {
    let (term, viewer_rect) = state.layout();
    let target = viewer_rect
        .and_then(|r| {
            state
                .panel
                .hit_test(state.session.viewer(), r.x, r.y, r.w, r.h, px, py)
        })
        .or_else(|| {
            state
                .view
                .hit_test(&state.session, &state.theme, term.x, term.y, term.w, term.h, px, py)
        });

    match target {
        Some(ClickTarget::Link { url }) => open_link(&url),
        Some(ClickTarget::Certificate { asset }) => {
            log::debug!("Selecting certificate: {asset}");
            state.session.viewer_mut().select(&asset);
        },
        Some(ClickTarget::ZoomIn) => state.session.viewer_mut().zoom_in(),
        Some(ClickTarget::ZoomOut) => state.session.viewer_mut().zoom_out(),
        None => {},
    }
}

fn open_link(url: &str) {
    match webbrowser::open(url) {
        Ok(()) => log::info!("Opened {url}"),
        Err(e) => log::warn!("Could not open {url}: {e}"),
    }
}
