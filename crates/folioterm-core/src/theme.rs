//! Terminal color palette and layout metrics.

use crate::backend::Color;

/// Colors and metrics for the terminal and the certificate viewer.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Window background.
    pub background: Color,
    /// ASCII-art banner color.
    pub banner_color: Color,
    /// Welcome line color.
    pub welcome_color: Color,
    /// `$ command` echo color.
    pub echo_color: Color,
    /// Response text color.
    pub response_color: Color,
    /// Hyperlink run color.
    pub link_color: Color,
    /// Certificate action run color.
    pub action_color: Color,
    /// Prompt glyph color when idle.
    pub prompt_color: Color,
    /// Prompt glyph color while a reveal is in flight.
    pub prompt_busy_color: Color,
    /// Typed input color.
    pub input_color: Color,
    /// Block cursor color.
    pub cursor_color: Color,
    /// Viewer panel background.
    pub viewer_bg: Color,
    /// Viewer panel border.
    pub viewer_border: Color,
    /// Viewer placeholder text color.
    pub viewer_placeholder: Color,
    /// Zoom button fill.
    pub zoom_button_bg: Color,
    /// Zoom button glyph color.
    pub zoom_button_text: Color,

    /// Glyph scale factor (1 = 8 px glyphs).
    pub font_scale: u32,
    /// Outer padding of the terminal area, pixels.
    pub padding: i32,
    /// Vertical gap between text rows, pixels.
    pub line_gap: i32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgb(30, 30, 30),
            banner_color: Color::rgb(86, 211, 100),
            welcome_color: Color::rgb(212, 212, 212),
            echo_color: Color::rgb(212, 212, 212),
            response_color: Color::rgb(190, 190, 190),
            link_color: Color::rgb(97, 175, 239),
            action_color: Color::rgb(86, 182, 194),
            prompt_color: Color::rgb(86, 211, 100),
            prompt_busy_color: Color::rgb(255, 191, 0),
            input_color: Color::WHITE,
            cursor_color: Color::rgb(212, 212, 212),
            viewer_bg: Color::rgb(24, 24, 24),
            viewer_border: Color::rgb(60, 60, 60),
            viewer_placeholder: Color::rgb(128, 128, 128),
            zoom_button_bg: Color::rgb(50, 50, 50),
            zoom_button_text: Color::rgb(220, 220, 220),
            font_scale: 2,
            padding: 12,
            line_gap: 4,
        }
    }
}
