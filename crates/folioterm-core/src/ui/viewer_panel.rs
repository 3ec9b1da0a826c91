//! Certificate viewer panel: zoom controls and the certificate image.
//!
//! The panel renders to the right of the terminal whenever the viewer is
//! visible. Until a certificate row is clicked it shows a placeholder; a
//! selected certificate is drawn fit-to-area and scaled by the viewer's
//! zoom factor. The Intern & Team Lead certificate always appears as a
//! split view next to its recommendation letter.

use std::collections::HashMap;

use folioterm_content::education;

use crate::backend::{GLYPH_HEIGHT, GLYPH_WIDTH, TextureId};
use crate::error::Result;
use crate::ui::ClickTarget;
use crate::ui::context::DrawContext;
use crate::viewer::CertificateViewer;

/// A loaded certificate texture with its pixel dimensions.
#[derive(Debug, Clone, Copy)]
pub struct CertImage {
    pub tex: TextureId,
    pub width: u32,
    pub height: u32,
}

/// Shown while the viewer is open but nothing is selected.
const PLACEHOLDER: &str = "Select a certificate to view";

const MARGIN: i32 = 8;
const BUTTON: i32 = 24;
const BUTTON_GAP: i32 = 8;

/// The certificate viewer widget. Stateless; zoom and selection live in
/// [`CertificateViewer`].
pub struct ViewerPanel;

impl ViewerPanel {
    pub fn new() -> Self {
        Self
    }

    /// Draw the panel into the given rectangle. No-op while hidden.
    pub fn draw(
        &self,
        ctx: &mut DrawContext<'_>,
        viewer: &CertificateViewer,
        images: &HashMap<String, CertImage>,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
    ) -> Result<()> {
        if !viewer.is_visible() {
            return Ok(());
        }
        let theme = ctx.theme;
        ctx.backend.fill_rect(x, y, w, h, theme.viewer_bg)?;
        ctx.backend
            .draw_line(x, y, x, y + h as i32, 1, theme.viewer_border)?;

        let Some(selected) = viewer.selected() else {
            let tw = ctx.measure(PLACEHOLDER) as i32;
            let px = x + (w as i32 - tw) / 2;
            let py = y + (h as i32 - (GLYPH_HEIGHT * theme.font_scale) as i32) / 2;
            return ctx.text(PLACEHOLDER, px, py, theme.viewer_placeholder);
        };
        let selected = selected.to_string();

        self.draw_zoom_buttons(ctx, x, y, w)?;

        let area_x = x + MARGIN;
        let area_y = y + MARGIN * 2 + BUTTON;
        let area_w = w as i32 - 2 * MARGIN;
        let area_h = h as i32 - (MARGIN * 3 + BUTTON);
        if area_w <= 0 || area_h <= 0 {
            return Ok(());
        }

        if viewer.is_dual() {
            let half_w = (area_w - BUTTON_GAP) / 2;
            if half_w <= 0 {
                return Ok(());
            }
            self.draw_certificate(
                ctx,
                images,
                education::INTERN_TEAM_LEAD,
                viewer.zoom(),
                area_x,
                area_y,
                half_w,
                area_h,
            )?;
            self.draw_certificate(
                ctx,
                images,
                education::INTERN_TEAM_LEAD_RECOMMENDATION,
                viewer.zoom(),
                area_x + half_w + BUTTON_GAP,
                area_y,
                half_w,
                area_h,
            )?;
        } else {
            self.draw_certificate(
                ctx,
                images,
                &selected,
                viewer.zoom(),
                area_x,
                area_y,
                area_w,
                area_h,
            )?;
        }
        Ok(())
    }

    /// Resolve a click inside the panel. Only the zoom buttons are hit,
    /// and only while a certificate is selected.
    pub fn hit_test(
        &self,
        viewer: &CertificateViewer,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        px: i32,
        py: i32,
    ) -> Option<ClickTarget> {
        if !viewer.is_visible() || viewer.selected().is_none() {
            return None;
        }
        if px < x || py < y || px >= x + w as i32 || py >= y + h as i32 {
            return None;
        }
        let (minus, plus) = zoom_button_rects(x, y, w);
        if contains(minus, px, py) {
            return Some(ClickTarget::ZoomOut);
        }
        if contains(plus, px, py) {
            return Some(ClickTarget::ZoomIn);
        }
        None
    }

    fn draw_zoom_buttons(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32) -> Result<()> {
        let theme = ctx.theme;
        let (minus, plus) = zoom_button_rects(x, y, w);
        for (rect, glyph) in [(minus, "-"), (plus, "+")] {
            let (bx, by, bw, bh) = rect;
            ctx.backend
                .fill_rect(bx, by, bw as u32, bh as u32, theme.zoom_button_bg)?;
            ctx.backend
                .stroke_rect(bx, by, bw as u32, bh as u32, 1, theme.viewer_border)?;
            let gx = bx + (bw - (GLYPH_WIDTH * theme.font_scale) as i32) / 2;
            let gy = by + (bh - (GLYPH_HEIGHT * theme.font_scale) as i32) / 2;
            ctx.text(glyph, gx, gy, theme.zoom_button_text)?;
        }
        Ok(())
    }

    /// Draw one certificate image fit into `area` and scaled by `zoom`,
    /// clipped so a zoomed-in image cannot spill out.
    #[allow(clippy::too_many_arguments)]
    fn draw_certificate(
        &self,
        ctx: &mut DrawContext<'_>,
        images: &HashMap<String, CertImage>,
        asset: &str,
        zoom: f32,
        area_x: i32,
        area_y: i32,
        area_w: i32,
        area_h: i32,
    ) -> Result<()> {
        let Some(img) = images.get(asset) else {
            // No texture loaded; show the asset's file name instead.
            let name = asset.rsplit('/').next().unwrap_or(asset);
            let theme = ctx.theme;
            ctx.backend.stroke_rect(
                area_x,
                area_y,
                area_w as u32,
                area_h as u32,
                1,
                theme.viewer_border,
            )?;
            let tw = ctx.measure(name) as i32;
            let px = area_x + (area_w - tw) / 2;
            let py = area_y + (area_h - (GLYPH_HEIGHT * theme.font_scale) as i32) / 2;
            return ctx.text(name, px, py, theme.viewer_placeholder);
        };

        let fit = (area_w as f32 / img.width as f32).min(area_h as f32 / img.height as f32);
        let scale = fit * zoom;
        let dw = ((img.width as f32 * scale) as u32).max(1);
        let dh = ((img.height as f32 * scale) as u32).max(1);
        let dx = area_x + (area_w - dw as i32) / 2;
        let dy = area_y + (area_h - dh as i32) / 2;

        ctx.backend
            .set_clip_rect(area_x, area_y, area_w as u32, area_h as u32)?;
        ctx.backend.blit(img.tex, dx, dy, dw, dh)?;
        ctx.backend.reset_clip_rect()?;
        Ok(())
    }
}

impl Default for ViewerPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Absolute zoom button rectangles: `-` then `+`, right-aligned along the
/// panel's top edge like the web viewer's controls.
fn zoom_button_rects(x: i32, y: i32, w: u32) -> ((i32, i32, i32, i32), (i32, i32, i32, i32)) {
    let plus_x = x + w as i32 - MARGIN - BUTTON;
    let minus_x = plus_x - BUTTON_GAP - BUTTON;
    (
        (minus_x, y + MARGIN, BUTTON, BUTTON),
        (plus_x, y + MARGIN, BUTTON, BUTTON),
    )
}

fn contains(rect: (i32, i32, i32, i32), px: i32, py: i32) -> bool {
    let (x, y, w, h) = rect;
    px >= x && px < x + w && py >= y && py < y + h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::ui::test_utils::{DrawCall, MockBackend};

    const PX: i32 = 600;
    const PW: u32 = 400;
    const PH: u32 = 600;

    fn draw_panel(
        backend: &mut MockBackend,
        viewer: &CertificateViewer,
        images: &HashMap<String, CertImage>,
    ) {
        let theme = Theme::default();
        let mut ctx = DrawContext::new(backend, &theme);
        ViewerPanel::new()
            .draw(&mut ctx, viewer, images, PX, 0, PW, PH)
            .unwrap();
    }

    fn one_image(asset: &str) -> HashMap<String, CertImage> {
        let mut map = HashMap::new();
        map.insert(
            asset.to_string(),
            CertImage {
                tex: TextureId(7),
                width: 100,
                height: 100,
            },
        );
        map
    }

    #[test]
    fn hidden_viewer_draws_nothing() {
        let viewer = CertificateViewer::new();
        let mut backend = MockBackend::new();
        draw_panel(&mut backend, &viewer, &HashMap::new());
        assert!(backend.calls.is_empty());
    }

    #[test]
    fn open_viewer_without_selection_shows_the_placeholder() {
        let mut viewer = CertificateViewer::new();
        viewer.show();
        let mut backend = MockBackend::new();
        draw_panel(&mut backend, &viewer, &HashMap::new());

        assert!(backend.has_text(PLACEHOLDER));
        assert_eq!(backend.blit_count(), 0);
        assert!(!backend.has_text("+"));
    }

    #[test]
    fn selected_certificate_blits_its_texture_with_zoom_controls() {
        let mut viewer = CertificateViewer::new();
        viewer.select("certificates/csharp-oop.jpg");
        let images = one_image("certificates/csharp-oop.jpg");
        let mut backend = MockBackend::new();
        draw_panel(&mut backend, &viewer, &images);

        assert_eq!(backend.blit_count(), 1);
        assert!(backend.has_text("+"));
        assert!(backend.has_text("-"));
        assert!(!backend.has_text(PLACEHOLDER));
    }

    #[test]
    fn dual_view_blits_both_intern_team_lead_images() {
        let mut viewer = CertificateViewer::new();
        viewer.select(education::INTERN_TEAM_LEAD);
        let mut images = one_image(education::INTERN_TEAM_LEAD);
        images.insert(
            education::INTERN_TEAM_LEAD_RECOMMENDATION.to_string(),
            CertImage {
                tex: TextureId(8),
                width: 80,
                height: 120,
            },
        );
        let mut backend = MockBackend::new();
        draw_panel(&mut backend, &viewer, &images);
        assert_eq!(backend.blit_count(), 2);
    }

    #[test]
    fn missing_texture_falls_back_to_the_file_name() {
        let mut viewer = CertificateViewer::new();
        viewer.select("certificates/csharp-oop.jpg");
        let mut backend = MockBackend::new();
        draw_panel(&mut backend, &viewer, &HashMap::new());

        assert_eq!(backend.blit_count(), 0);
        assert!(backend.has_text("csharp-oop.jpg"));
    }

    #[test]
    fn zoom_in_enlarges_the_blit() {
        let blit_size = |backend: &MockBackend| {
            backend
                .calls
                .iter()
                .find_map(|c| match c {
                    DrawCall::Blit { w, h, .. } => Some((*w, *h)),
                    _ => None,
                })
                .unwrap()
        };

        let mut viewer = CertificateViewer::new();
        viewer.select("certificates/csharp-oop.jpg");
        let images = one_image("certificates/csharp-oop.jpg");

        let mut backend = MockBackend::new();
        draw_panel(&mut backend, &viewer, &images);
        let (w1, h1) = blit_size(&backend);

        viewer.zoom_in();
        let mut backend = MockBackend::new();
        draw_panel(&mut backend, &viewer, &images);
        let (w2, h2) = blit_size(&backend);
        assert!(w2 > w1);
        assert!(h2 > h1);
    }

    #[test]
    fn hit_test_finds_the_zoom_buttons() {
        let panel = ViewerPanel::new();
        let mut viewer = CertificateViewer::new();
        viewer.select("certificates/csharp-oop.jpg");

        let (minus, plus) = zoom_button_rects(PX, 0, PW);
        let minus_center = (minus.0 + BUTTON / 2, minus.1 + BUTTON / 2);
        let plus_center = (plus.0 + BUTTON / 2, plus.1 + BUTTON / 2);

        assert_eq!(
            panel.hit_test(&viewer, PX, 0, PW, PH, minus_center.0, minus_center.1),
            Some(ClickTarget::ZoomOut)
        );
        assert_eq!(
            panel.hit_test(&viewer, PX, 0, PW, PH, plus_center.0, plus_center.1),
            Some(ClickTarget::ZoomIn)
        );
        assert_eq!(panel.hit_test(&viewer, PX, 0, PW, PH, PX + 10, 300), None);
    }

    #[test]
    fn hit_test_is_dead_without_a_selection() {
        let panel = ViewerPanel::new();
        let mut viewer = CertificateViewer::new();
        viewer.show();
        let (minus, _) = zoom_button_rects(PX, 0, PW);
        assert_eq!(
            panel.hit_test(
                &viewer,
                PX,
                0,
                PW,
                PH,
                minus.0 + BUTTON / 2,
                minus.1 + BUTTON / 2
            ),
            None
        );
    }
}
