//! Frame composition: the terminal, and the viewer panel beside it.

use folioterm_core::backend::TermBackend;
use folioterm_core::error::Result;
use folioterm_core::ui::DrawContext;

use crate::app_state::AppState;

/// Draw one complete frame into the backend's current buffer.
pub fn draw_frame(backend: &mut dyn TermBackend, state: &AppState) -> Result<()> {
    let (term, viewer) = state.layout();
    backend.clear(state.theme.background)?;

    let mut ctx = DrawContext::new(backend, &state.theme);
    state
        .view
        .draw(&mut ctx, &state.session, term.x, term.y, term.w, term.h)?;

    if let Some(v) = viewer {
        state.panel.draw(
            &mut ctx,
            state.session.viewer(),
            &state.cert_images,
            v.x,
            v.y,
            v.w,
            v.h,
        )?;
    }
    Ok(())
}
