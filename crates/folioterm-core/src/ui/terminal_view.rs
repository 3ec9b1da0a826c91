//! The scrolling terminal: scrollback, prompt, and click resolution.
//!
//! Rendering is grid-based: every character occupies one cell of
//! `glyph * font_scale` pixels. Lines soft-wrap at the column count and
//! hard-break on embedded newlines, so one scrollback entry usually spans
//! many visual rows. The view is anchored to the bottom; scrolling stores
//! how many rows the user has climbed, and an in-flight reveal pins the
//! view back to the bottom like the web terminal's auto-scroll.

use std::mem;

use crate::backend::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::error::Result;
use crate::richtext::Run;
use crate::scrollback::{Line, LineKind};
use crate::session::Session;
use crate::theme::Theme;
use crate::ui::ClickTarget;
use crate::ui::context::DrawContext;

/// Prompt glyph in front of the input, matching the web terminal.
const PROMPT: &str = "> ";

/// Visual style of a span, resolved to a color at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanStyle {
    Plain(LineKind),
    Link,
    Action,
    Prompt,
    PromptBusy,
    Input,
}

/// A horizontal fragment of one visual row: consecutive characters sharing
/// a style and click target.
#[derive(Debug, Clone, PartialEq)]
struct Span {
    text: String,
    style: SpanStyle,
    target: Option<ClickTarget>,
}

impl Span {
    fn cells(&self) -> usize {
        self.text.chars().count()
    }
}

/// One visual row of the terminal grid.
#[derive(Debug, Clone, Default, PartialEq)]
struct Row {
    spans: Vec<Span>,
}

/// The terminal widget. Holds only the scroll position; everything else is
/// read from the [`Session`] each frame.
pub struct TerminalView {
    /// Rows scrolled up from the bottom anchor.
    scroll_rows: usize,
}

impl TerminalView {
    pub fn new() -> Self {
        Self { scroll_rows: 0 }
    }

    /// Scroll by a row delta (positive = toward older rows). Ignored while
    /// a reveal pins the view to the bottom.
    pub fn scroll_by(&mut self, session: &Session, theme: &Theme, w: u32, h: u32, rows: i32) {
        if session.is_busy() {
            return;
        }
        let (cols, visible_rows) = grid_dimensions(theme, w, h);
        let (all_rows, _) = layout_rows(session, cols);
        let max_scroll = all_rows.len().saturating_sub(visible_rows);
        let next = self.scroll_rows as i64 + rows as i64;
        self.scroll_rows = next.clamp(0, max_scroll as i64) as usize;
    }

    /// Snap back to the newest rows.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_rows = 0;
    }

    /// Draw the terminal into the given rectangle.
    pub fn draw(
        &self,
        ctx: &mut DrawContext<'_>,
        session: &Session,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
    ) -> Result<()> {
        let theme = ctx.theme;
        let (cell_w, cell_h) = cell_size(theme);
        let (cols, visible_rows) = grid_dimensions(theme, w, h);
        let (rows, cursor) = layout_rows(session, cols);

        ctx.backend.fill_rect(x, y, w, h, theme.background)?;
        ctx.backend.set_clip_rect(x, y, w, h)?;

        let start = first_visible_row(session, &rows, visible_rows, self.scroll_rows);
        let glyph_h = (GLYPH_HEIGHT * theme.font_scale) as i32;
        let mut py = y + theme.padding;

        for (row_index, row) in rows.iter().enumerate().skip(start).take(visible_rows) {
            let mut px = x + theme.padding;
            for span in &row.spans {
                let color = span_color(theme, span.style);
                ctx.backend
                    .draw_text(&span.text, px, py, ctx.font_size(), color)?;
                let span_w = span.cells() as i32 * cell_w;
                if span.style == SpanStyle::Link {
                    let uy = py + glyph_h - 1;
                    ctx.backend.draw_line(px, uy, px + span_w, uy, 1, color)?;
                }
                px += span_w;
            }
            if let Some((cursor_row, cursor_col)) = cursor {
                if cursor_row == row_index {
                    let cx = x + theme.padding + cursor_col as i32 * cell_w;
                    ctx.backend
                        .fill_rect(cx, py, cell_w as u32, glyph_h as u32, theme.cursor_color)?;
                }
            }
            py += cell_h;
        }

        ctx.backend.reset_clip_rect()?;
        Ok(())
    }

    /// Resolve a pixel position to a click target, running the same layout
    /// as [`draw`](Self::draw).
    pub fn hit_test(
        &self,
        session: &Session,
        theme: &Theme,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        px: i32,
        py: i32,
    ) -> Option<ClickTarget> {
        let (cell_w, cell_h) = cell_size(theme);
        let (cols, visible_rows) = grid_dimensions(theme, w, h);
        let (rows, _) = layout_rows(session, cols);

        let rel_x = px - x - theme.padding;
        let rel_y = py - y - theme.padding;
        if rel_x < 0 || rel_y < 0 || px >= x + w as i32 || py >= y + h as i32 {
            return None;
        }
        let col = (rel_x / cell_w) as usize;
        let row_offset = (rel_y / cell_h) as usize;
        if row_offset >= visible_rows || col >= cols {
            return None;
        }

        let start = first_visible_row(session, &rows, visible_rows, self.scroll_rows);
        let row = rows.get(start + row_offset)?;

        let mut cell = 0;
        for span in &row.spans {
            let end = cell + span.cells();
            if col < end {
                return span.target.clone();
            }
            cell = end;
        }
        None
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

// --- grid geometry ---

fn cell_size(theme: &Theme) -> (i32, i32) {
    (
        (GLYPH_WIDTH * theme.font_scale) as i32,
        (GLYPH_HEIGHT * theme.font_scale) as i32 + theme.line_gap,
    )
}

fn grid_dimensions(theme: &Theme, w: u32, h: u32) -> (usize, usize) {
    let (cell_w, cell_h) = cell_size(theme);
    let cols = ((w as i32 - 2 * theme.padding) / cell_w).max(1) as usize;
    let rows = ((h as i32 - 2 * theme.padding) / cell_h).max(1) as usize;
    (cols, rows)
}

/// Index of the first row to draw: bottom-anchored, climbed by the scroll
/// offset unless a reveal holds the view at the bottom.
fn first_visible_row(
    session: &Session,
    rows: &[Row],
    visible_rows: usize,
    scroll_rows: usize,
) -> usize {
    let bottom_start = rows.len().saturating_sub(visible_rows);
    if session.is_busy() {
        return bottom_start;
    }
    bottom_start.saturating_sub(scroll_rows.min(bottom_start))
}

// --- row layout ---

/// Lay out every scrollback line plus the prompt into visual rows.
///
/// Returns the rows and, when the prompt is live, the cursor cell as
/// `(row index, column)`.
fn layout_rows(session: &Session, cols: usize) -> (Vec<Row>, Option<(usize, usize)>) {
    let mut rows = Vec::new();
    for line in session.scrollback().lines() {
        let visible = session.visible_chars(line);
        rows.extend(line_rows(line, visible, cols));
    }
    let cursor = append_prompt_rows(&mut rows, session, cols);
    (rows, cursor)
}

/// Wrap one scrollback line into rows, clipped to its reveal progress.
fn line_rows(line: &Line, visible: usize, cols: usize) -> Vec<Row> {
    if visible == 0 {
        return Vec::new();
    }
    let mut rows = Vec::new();
    let mut row = Row::default();
    let mut col = 0;
    let mut taken = 0;
    let mut consumed_before = 0;

    'runs: for run in line.rich.runs() {
        let run_len = run.char_len();
        // A run only becomes clickable once every one of its characters is
        // on screen; a half-revealed URL is not a link yet.
        let live = visible >= consumed_before + run_len;
        let target = if live { click_target(run) } else { None };
        let style = span_style(run, line.kind);

        for ch in run.label().chars() {
            if taken >= visible {
                break 'runs;
            }
            taken += 1;
            if ch == '\n' {
                rows.push(mem::take(&mut row));
                col = 0;
                continue;
            }
            if col == cols {
                rows.push(mem::take(&mut row));
                col = 0;
            }
            push_char(&mut row, ch, style, target.clone());
            col += 1;
        }
        consumed_before += run_len;
    }

    if !row.spans.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

/// Append the prompt row(s): `> ` plus the input, wrapped like any line.
fn append_prompt_rows(
    rows: &mut Vec<Row>,
    session: &Session,
    cols: usize,
) -> Option<(usize, usize)> {
    let prompt_style = if session.is_busy() {
        SpanStyle::PromptBusy
    } else {
        SpanStyle::Prompt
    };

    let mut row = Row::default();
    let mut col = 0;
    for ch in PROMPT.chars() {
        if col == cols {
            rows.push(mem::take(&mut row));
            col = 0;
        }
        push_char(&mut row, ch, prompt_style, None);
        col += 1;
    }
    for ch in session.input().chars() {
        if col == cols {
            rows.push(mem::take(&mut row));
            col = 0;
        }
        push_char(&mut row, ch, SpanStyle::Input, None);
        col += 1;
    }
    // The cursor occupies the cell after the input; wrap it too.
    if col == cols {
        rows.push(mem::take(&mut row));
        col = 0;
    }
    rows.push(row);

    if session.is_busy() {
        None
    } else {
        Some((rows.len() - 1, col))
    }
}

fn push_char(row: &mut Row, ch: char, style: SpanStyle, target: Option<ClickTarget>) {
    if let Some(last) = row.spans.last_mut() {
        if last.style == style && last.target == target {
            last.text.push(ch);
            return;
        }
    }
    row.spans.push(Span {
        text: ch.to_string(),
        style,
        target,
    });
}

fn span_style(run: &Run, kind: LineKind) -> SpanStyle {
    match run {
        Run::Text(_) => SpanStyle::Plain(kind),
        Run::Link { .. } => SpanStyle::Link,
        Run::Action { .. } => SpanStyle::Action,
    }
}

fn click_target(run: &Run) -> Option<ClickTarget> {
    match run {
        Run::Text(_) => None,
        Run::Link { url, .. } => Some(ClickTarget::Link { url: url.clone() }),
        Run::Action { cert, .. } => Some(ClickTarget::Certificate {
            asset: cert.clone(),
        }),
    }
}

fn span_color(theme: &Theme, style: SpanStyle) -> crate::backend::Color {
    match style {
        SpanStyle::Plain(LineKind::Banner) => theme.banner_color,
        SpanStyle::Plain(LineKind::Welcome) => theme.welcome_color,
        SpanStyle::Plain(LineKind::Echo) => theme.echo_color,
        SpanStyle::Plain(LineKind::Response) => theme.response_color,
        SpanStyle::Link => theme.link_color,
        SpanStyle::Action => theme.action_color,
        SpanStyle::Prompt => theme.prompt_color,
        SpanStyle::PromptBusy => theme.prompt_busy_color,
        SpanStyle::Input => theme.input_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::TermBackend;
    use crate::config::FolioConfig;
    use crate::ui::test_utils::{DrawCall, MockBackend};
    use folioterm_content::blocks;

    const W: u32 = 1200;
    const H: u32 = 2000;

    fn idle_session() -> Session {
        Session::new(&FolioConfig::default())
    }

    fn run_command(s: &mut Session, line: &str) {
        for ch in line.chars() {
            s.insert_char(ch);
        }
        s.submit();
        s.skip_reveal();
    }

    fn draw_into(backend: &mut MockBackend, session: &Session, view: &TerminalView, w: u32, h: u32) {
        let theme = Theme::default();
        let mut ctx = DrawContext::new(backend, &theme);
        view.draw(&mut ctx, session, 0, 0, w, h).unwrap();
    }

    /// Pixel position of the first drawn span containing `needle`.
    fn find_text(backend: &MockBackend, needle: &str) -> (i32, i32) {
        backend
            .text_positions()
            .iter()
            .find(|(t, ..)| t.contains(needle))
            .map(|(_, x, y, _)| (*x, *y))
            .unwrap_or_else(|| panic!("no span containing {needle:?}"))
    }

    #[test]
    fn fresh_session_shows_banner_welcome_and_prompt() {
        let s = idle_session();
        let view = TerminalView::new();
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, H);

        assert!(backend.has_text("####"));
        assert!(backend.has_text("B O R I S O V"));
        assert!(backend.has_text("Welcome to Bagriyan Borisov's Portfolio!"));
        assert!(backend.has_text("> "));
    }

    #[test]
    fn prompt_color_reflects_busy_state() {
        let theme = Theme::default();
        let mut s = idle_session();
        let view = TerminalView::new();

        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, H);
        assert_eq!(backend.text_color("> "), Some(theme.prompt_color));

        for ch in "help".chars() {
            s.insert_char(ch);
        }
        s.submit();
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, H);
        assert_eq!(backend.text_color("> "), Some(theme.prompt_busy_color));
    }

    #[test]
    fn typed_input_is_rendered_after_the_prompt() {
        let theme = Theme::default();
        let mut s = idle_session();
        for ch in "hel".chars() {
            s.insert_char(ch);
        }
        let view = TerminalView::new();
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, H);

        let (prompt_x, prompt_y) = find_text(&backend, "> ");
        let (input_x, input_y) = find_text(&backend, "hel");
        assert_eq!(prompt_y, input_y);
        let (cell_w, _) = cell_size(&theme);
        assert_eq!(input_x, prompt_x + 2 * cell_w);
    }

    #[test]
    fn cursor_block_is_drawn_only_when_idle() {
        let theme = Theme::default();
        let cursor_fills = |backend: &MockBackend| {
            backend
                .calls
                .iter()
                .filter(|c| matches!(c, DrawCall::FillRect { color, .. } if *color == theme.cursor_color))
                .count()
        };

        let mut s = idle_session();
        let view = TerminalView::new();
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, H);
        assert_eq!(cursor_fills(&backend), 1);

        for ch in "about".chars() {
            s.insert_char(ch);
        }
        s.submit();
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, H);
        assert_eq!(cursor_fills(&backend), 0);
    }

    #[test]
    fn no_span_overflows_the_column_width() {
        let mut s = idle_session();
        run_command(&mut s, "projects 2");
        let view = TerminalView::new();

        let theme = Theme::default();
        let (cell_w, _) = cell_size(&theme);
        let narrow = 400;
        let (cols, _) = grid_dimensions(&theme, narrow, H);
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, narrow, H);

        let right_edge = theme.padding + cols as i32 * cell_w;
        for (text, x, _, _) in backend.text_positions() {
            let w = text.chars().count() as i32 * cell_w;
            assert!(x + w <= right_edge, "{text:?} overflows at x={x}");
        }
    }

    #[test]
    fn partial_reveal_clips_the_echo() {
        let mut s = idle_session();
        for ch in "help".chars() {
            s.insert_char(ch);
        }
        s.submit();
        // 3 of the 6 echo chars at 5 ms each.
        s.tick(15);

        let view = TerminalView::new();
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, H);
        assert!(backend.has_text("$ h"));
        assert!(!backend.has_text("$ help"));
        assert!(!backend.has_text("Available commands"));
    }

    #[test]
    fn links_are_underlined() {
        let theme = Theme::default();
        let mut s = idle_session();
        run_command(&mut s, "contact");
        let view = TerminalView::new();
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, H);

        // The default draw_line renders through fill_rect with the link color.
        let underlines = backend
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { color, .. } if *color == theme.link_color))
            .count();
        assert_eq!(underlines, 3, "github, linkedin, and portfolio runs");
    }

    #[test]
    fn hit_test_resolves_a_revealed_link() {
        let mut s = idle_session();
        run_command(&mut s, "contact");
        let view = TerminalView::new();
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, H);

        let theme = Theme::default();
        let (px, py) = find_text(&backend, "github.com/BagriyanBorisov");
        let target = view.hit_test(&s, &theme, 0, 0, W, H, px + 1, py + 1);
        assert_eq!(
            target,
            Some(ClickTarget::Link {
                url: "https://github.com/BagriyanBorisov".to_string()
            })
        );
    }

    #[test]
    fn hit_test_resolves_a_certificate_row() {
        let mut s = idle_session();
        run_command(&mut s, "education");
        let view = TerminalView::new();
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, H);

        let theme = Theme::default();
        let (px, py) = find_text(&backend, "Intern & Team Lead Academy");
        let target = view.hit_test(&s, &theme, 0, 0, W, H, px + 1, py + 1);
        assert_eq!(
            target,
            Some(ClickTarget::Certificate {
                asset: "certificates/intern-team-lead.jpg".to_string()
            })
        );
    }

    #[test]
    fn hit_test_misses_plain_text_and_outside_pixels() {
        let s = idle_session();
        let view = TerminalView::new();
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, H);

        let theme = Theme::default();
        let (px, py) = find_text(&backend, "Welcome");
        assert_eq!(view.hit_test(&s, &theme, 0, 0, W, H, px + 1, py + 1), None);
        assert_eq!(view.hit_test(&s, &theme, 0, 0, W, H, -5, 10), None);
        assert_eq!(
            view.hit_test(&s, &theme, 0, 0, W, H, W as i32 + 5, 10),
            None
        );
    }

    #[test]
    fn half_revealed_link_is_not_clickable() {
        let mut s = idle_session();
        for ch in "contact".chars() {
            s.insert_char(ch);
        }
        s.submit();
        // Echo "$ contact" is 9 chars at 5 ms.
        s.tick(45);
        assert!(s.is_busy());

        // Reveal up to three characters into the github label.
        let flat = blocks::CONTACT;
        let link_start = flat.find("github.com/").unwrap();
        s.tick(15 * (link_start as u32 + 3));

        let view = TerminalView::new();
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, H);
        assert!(backend.has_text("git"));

        let theme = Theme::default();
        let (px, py) = find_text(&backend, "git");
        assert_eq!(view.hit_test(&s, &theme, 0, 0, W, H, px + 1, py + 1), None);
    }

    #[test]
    fn scrolling_climbs_to_older_rows_and_clamps() {
        let theme = Theme::default();
        let mut s = idle_session();
        for _ in 0..4 {
            run_command(&mut s, "about");
        }
        let short_h = 200;
        let mut view = TerminalView::new();

        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, short_h);
        assert!(backend.has_text("> "), "idle view is bottom-anchored");

        view.scroll_by(&s, &theme, W, short_h, 10_000);
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, short_h);
        assert!(backend.has_text("####"), "clamped at the banner");
        assert!(!backend.has_text("> "));

        view.scroll_to_bottom();
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, short_h);
        assert!(backend.has_text("> "));
    }

    #[test]
    fn reveal_pins_the_view_to_the_bottom() {
        let theme = Theme::default();
        let mut s = idle_session();
        for _ in 0..4 {
            run_command(&mut s, "about");
        }
        let short_h = 200;
        let mut view = TerminalView::new();
        view.scroll_by(&s, &theme, W, short_h, 10_000);

        for ch in "help".chars() {
            s.insert_char(ch);
        }
        s.submit();
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, short_h);
        assert!(backend.has_text("> "), "busy view snaps to the bottom");

        // Scroll input is ignored while busy.
        view.scroll_by(&s, &theme, W, short_h, 5);
        s.skip_reveal();
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, W, short_h);
        assert!(!backend.has_text("> "), "idle again, old offset restored");
    }

    #[test]
    fn wrapped_rows_reuse_the_click_target() {
        // A link that wraps across rows stays clickable on both halves.
        let theme = Theme::default();
        let mut s = idle_session();
        run_command(&mut s, "contact");
        let view = TerminalView::new();

        let narrow = 16 * 20 + 2 * theme.padding as u32; // 20 columns
        let mut backend = MockBackend::new();
        draw_into(&mut backend, &s, &view, narrow, H);

        let expected = ClickTarget::Link {
            url: "https://linkedin.com/in/bagriyan-borisov-a15a95224/".to_string(),
        };
        let mut halves = 0;
        for (_, px, py, _) in backend.text_positions() {
            if view.hit_test(&s, &theme, 0, 0, narrow, H, px + 1, py + 1)
                == Some(expected.clone())
            {
                halves += 1;
            }
        }
        assert!(halves >= 2, "link should wrap into at least two rows");
    }

    #[test]
    fn line_rows_handles_hard_breaks_and_blank_rows() {
        let mut s = idle_session();
        run_command(&mut s, "about");
        let line = &s.scrollback().lines()[3];
        let visible = s.visible_chars(line);

        let rows = line_rows(line, visible, 500);
        // Leading newline yields a blank first row.
        assert!(rows[0].spans.is_empty());
        assert!(rows.len() > 2);
    }

    #[test]
    fn pending_line_occupies_no_rows() {
        let mut s = idle_session();
        for ch in "about".chars() {
            s.insert_char(ch);
        }
        s.submit();
        // Echo still animating; response queued with nothing visible.
        let line = &s.scrollback().lines()[3];
        assert_eq!(s.visible_chars(line), 0);
        assert!(line_rows(line, 0, 80).is_empty());
    }
}
