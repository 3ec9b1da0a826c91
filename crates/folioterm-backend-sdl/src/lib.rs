//! SDL2 backend for FolioTerm.
//!
//! Implements `TermBackend` and `InputBackend` using SDL2 for desktop use.
//! Text is rendered from the shared 8x8 bitmap font at integer scales;
//! certificate images arrive as raw RGBA and become streaming textures.

use std::collections::HashMap;

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use folioterm_core::backend::{Color, InputBackend, TermBackend, TextureId};
use folioterm_core::error::{FolioError, Result};
use folioterm_core::input::{InputEvent, Key};
use folioterm_types::bitmap_font as font;

/// SDL2 rendering and input backend.
///
/// Supports solid-color rects, 8x8 bitmap text, and RGBA texture
/// loading/blitting.
///
/// # Safety
///
/// `textures` is declared before `texture_creator` so that Rust's drop order
/// (declaration order) destroys all textures before the creator they borrow
/// from. The `Texture<'static>` lifetime is erased via transmute in
/// `load_texture()` -- this is sound because the `TextureCreator` always
/// outlives the textures.
pub struct SdlBackend {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    textures: HashMap<u64, Texture<'static>>,
    texture_creator: TextureCreator<WindowContext>,
    next_texture_id: u64,
}

impl SdlBackend {
    /// Create a new SDL2 backend with a window.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl = sdl2::init().map_err(|e| FolioError::Backend(e.to_string()))?;
        let video = sdl
            .video()
            .map_err(|e| FolioError::Backend(e.to_string()))?;
        let window = video
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| FolioError::Backend(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| FolioError::Backend(e.to_string()))?;
        let texture_creator = canvas.texture_creator();
        let event_pump = sdl
            .event_pump()
            .map_err(|e| FolioError::Backend(e.to_string()))?;

        log::info!("SDL2 backend initialized: {width}x{height}");

        Ok(Self {
            canvas,
            event_pump,
            textures: HashMap::new(),
            texture_creator,
            next_texture_id: 1,
        })
    }

    /// Set the SDL draw color with optional blend mode.
    fn set_color(&mut self, color: Color) {
        if color.a < 255 {
            self.canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        } else {
            self.canvas.set_blend_mode(sdl2::render::BlendMode::None);
        }
        self.canvas.set_draw_color(sdl2::pixels::Color::RGBA(
            color.r, color.g, color.b, color.a,
        ));
    }
}

/// Integer scale for a font size hint; bitmap glyphs render at whole
/// multiples of the 8px cell.
fn font_scale(font_size: u16) -> u32 {
    if font_size as u32 >= font::GLYPH_HEIGHT {
        font_size as u32 / font::GLYPH_HEIGHT
    } else {
        1
    }
}

impl TermBackend for SdlBackend {
    fn init(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.canvas.set_draw_color(sdl2::pixels::Color::RGBA(
            color.r, color.g, color.b, color.a,
        ));
        self.canvas.clear();
        Ok(())
    }

    fn blit(&mut self, tex: TextureId, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        let texture = self
            .textures
            .get(&tex.0)
            .ok_or_else(|| FolioError::Backend(format!("texture not found: {}", tex.0)))?;
        self.canvas
            .copy(texture, None, Rect::new(x, y, w, h))
            .map_err(|e| FolioError::Backend(e.to_string()))?;
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.set_color(color);
        self.canvas
            .fill_rect(Rect::new(x, y, w, h))
            .map_err(|e| FolioError::Backend(e.to_string()))?;
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        let scale = font_scale(font_size) as i32;
        let glyph_w = (font::GLYPH_WIDTH as i32) * scale;
        self.canvas.set_draw_color(sdl2::pixels::Color::RGBA(
            color.r, color.g, color.b, color.a,
        ));

        let mut cx = x;
        for ch in text.chars() {
            let glyph_data = font::glyph(ch);
            for row in 0..font::GLYPH_HEIGHT as i32 {
                let bits = glyph_data[row as usize];
                for col in 0..font::GLYPH_WIDTH as i32 {
                    if bits & (0x80 >> col) != 0 {
                        let px = cx + col * scale;
                        let py = y + row * scale;
                        if scale == 1 {
                            let _ = self.canvas.draw_point(Point::new(px, py));
                        } else {
                            let _ = self.canvas.fill_rect(Rect::new(
                                px,
                                py,
                                scale as u32,
                                scale as u32,
                            ));
                        }
                    }
                }
            }
            cx += glyph_w;
        }
        Ok(())
    }

    fn swap_buffers(&mut self) -> Result<()> {
        self.canvas.present();
        Ok(())
    }

    fn load_texture(&mut self, width: u32, height: u32, rgba_data: &[u8]) -> Result<TextureId> {
        let expected = (width * height * 4) as usize;
        if rgba_data.len() != expected {
            return Err(FolioError::Backend(format!(
                "texture data size mismatch: expected {expected}, got {}",
                rgba_data.len()
            )));
        }

        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::ABGR8888, width, height)
            .map_err(|e| FolioError::Backend(e.to_string()))?;

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer[..expected].copy_from_slice(rgba_data);
            })
            .map_err(|e| FolioError::Backend(e.to_string()))?;

        texture.set_blend_mode(sdl2::render::BlendMode::Blend);

        // SAFETY: The texture borrows from self.texture_creator which lives in
        // the same struct. `textures` is declared before `texture_creator`, so
        // Rust drops textures first. The erased lifetime is therefore always
        // valid.
        let texture: Texture<'static> = unsafe { std::mem::transmute(texture) };

        let id = self.next_texture_id;
        self.next_texture_id += 1;
        self.textures.insert(id, texture);
        Ok(TextureId(id))
    }

    fn destroy_texture(&mut self, tex: TextureId) -> Result<()> {
        self.textures.remove(&tex.0);
        Ok(())
    }

    fn set_clip_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        self.canvas.set_clip_rect(Rect::new(x, y, w, h));
        Ok(())
    }

    fn reset_clip_rect(&mut self) -> Result<()> {
        self.canvas.set_clip_rect(None);
        Ok(())
    }

    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        text.chars().count() as u32 * font::GLYPH_WIDTH * font_scale(font_size)
    }

    fn read_pixels(&self, x: i32, y: i32, w: u32, h: u32) -> Result<Vec<u8>> {
        let rect = Rect::new(x, y, w, h);
        self.canvas
            .read_pixels(rect, PixelFormatEnum::ABGR8888)
            .map_err(|e| FolioError::Backend(e.to_string()))
    }

    fn shutdown(&mut self) -> Result<()> {
        log::info!("SDL2 backend shut down");
        Ok(())
    }

    // -------------------------------------------------------------------
    // Extended primitives (native overrides)
    // -------------------------------------------------------------------

    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        stroke_width: u16,
        color: Color,
    ) -> Result<()> {
        self.set_color(color);
        if stroke_width == 1 {
            let _ = self.canvas.draw_rect(Rect::new(x, y, w, h));
        } else {
            let sw = stroke_width as u32;
            let _ = self.canvas.fill_rect(Rect::new(x, y, w, sw));
            let _ = self
                .canvas
                .fill_rect(Rect::new(x, y + h as i32 - sw as i32, w, sw));
            let _ =
                self.canvas
                    .fill_rect(Rect::new(x, y + sw as i32, sw, h.saturating_sub(sw * 2)));
            let _ = self.canvas.fill_rect(Rect::new(
                x + w as i32 - sw as i32,
                y + sw as i32,
                sw,
                h.saturating_sub(sw * 2),
            ));
        }
        Ok(())
    }

    fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u16,
        color: Color,
    ) -> Result<()> {
        self.set_color(color);
        if width <= 1 {
            let _ = self
                .canvas
                .draw_line(Point::new(x1, y1), Point::new(x2, y2));
        } else {
            // Draw multiple parallel lines for thickness.
            let half = width as i32 / 2;
            let dx = (x2 - x1) as f32;
            let dy = (y2 - y1) as f32;
            let len = (dx * dx + dy * dy).sqrt().max(1.0);
            let nx = (-dy / len) as i32;
            let ny = (dx / len) as i32;
            for i in -half..=(width as i32 - half - 1) {
                let ox = nx * i;
                let oy = ny * i;
                let _ = self
                    .canvas
                    .draw_line(Point::new(x1 + ox, y1 + oy), Point::new(x2 + ox, y2 + oy));
            }
        }
        Ok(())
    }
}

impl InputBackend for SdlBackend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            if let Some(e) = map_sdl_event(event) {
                events.push(e);
            }
        }
        events
    }
}

/// Map an SDL2 event to a FolioTerm input event.
fn map_sdl_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(key), ..
        } => map_key_down(key),
        Event::MouseButtonDown { x, y, .. } => Some(InputEvent::PointerClick { x, y }),
        Event::MouseWheel { y, .. } if y != 0 => Some(InputEvent::Scroll { dy: y }),
        Event::Window {
            win_event: sdl2::event::WindowEvent::FocusGained,
            ..
        } => Some(InputEvent::FocusGained),
        Event::Window {
            win_event: sdl2::event::WindowEvent::FocusLost,
            ..
        } => Some(InputEvent::FocusLost),
        Event::TextInput { text, .. } => text.chars().next().map(InputEvent::TextInput),
        _ => None,
    }
}

fn map_key_down(key: Keycode) -> Option<InputEvent> {
    match key {
        Keycode::Return | Keycode::KpEnter => Some(InputEvent::KeyPress(Key::Enter)),
        Keycode::Tab => Some(InputEvent::KeyPress(Key::Tab)),
        Keycode::Up => Some(InputEvent::KeyPress(Key::Up)),
        Keycode::Down => Some(InputEvent::KeyPress(Key::Down)),
        Keycode::Escape => Some(InputEvent::KeyPress(Key::Escape)),
        Keycode::F12 => Some(InputEvent::KeyPress(Key::Screenshot)),
        Keycode::Backspace => Some(InputEvent::Backspace),
        _ => None,
    }
}
