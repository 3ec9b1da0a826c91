//! Procedural certificate cards.
//!
//! The portfolio ships no image assets; every certificate the viewer can
//! show is generated at startup as an RGBA diploma card and uploaded as a
//! texture. Each card gets an accent color from a rotating palette so the
//! table stays visually distinct.

use std::collections::HashMap;
use std::mem;

use folioterm_content::education;
use folioterm_core::backend::TermBackend;
use folioterm_core::bitmap_font;
use folioterm_core::error::Result;
use folioterm_core::ui::CertImage;

/// Width of a generated certificate card.
pub const CARD_W: u32 = 640;
/// Height of a generated certificate card.
pub const CARD_H: u32 = 480;

/// Course labels wrap at this many characters per line.
const WRAP_COLS: usize = 35;

const PAPER: (u8, u8, u8) = (246, 243, 233);
const INK: (u8, u8, u8) = (40, 40, 48);

/// Accent colors, cycled by certification index.
const ACCENTS: [(u8, u8, u8); 5] = [
    (86, 211, 100),
    (97, 175, 239),
    (229, 192, 123),
    (198, 120, 221),
    (224, 108, 117),
];

/// Generate and upload a card for every certification, plus the companion
/// recommendation letter shown beside the Intern & Team Lead certificate.
pub fn load_certificate_images(
    backend: &mut dyn TermBackend,
) -> Result<HashMap<String, CertImage>> {
    let mut images = HashMap::new();
    for (index, cert) in education::CERTIFICATIONS.iter().enumerate() {
        let pixels = generate_card(cert.label, cert.org, index);
        let tex = backend.load_texture(CARD_W, CARD_H, &pixels)?;
        images.insert(
            cert.asset.to_string(),
            CertImage {
                tex,
                width: CARD_W,
                height: CARD_H,
            },
        );
    }

    let pixels = generate_card(
        "Recommendation Letter",
        "SoftUni",
        education::CERTIFICATIONS.len(),
    );
    let tex = backend.load_texture(CARD_W, CARD_H, &pixels)?;
    images.insert(
        education::INTERN_TEAM_LEAD_RECOMMENDATION.to_string(),
        CertImage {
            tex,
            width: CARD_W,
            height: CARD_H,
        },
    );

    Ok(images)
}

/// Render one diploma card as RGBA bytes.
fn generate_card(label: &str, org: &str, index: usize) -> Vec<u8> {
    let accent = ACCENTS[index % ACCENTS.len()];
    let mut buf = vec![0u8; (CARD_W * CARD_H * 4) as usize];
    let (w, h) = (CARD_W as i32, CARD_H as i32);

    fill_rect_px(&mut buf, 0, 0, w, h, PAPER);

    // Double frame: a bold accent border with a thin ink line inside it.
    frame_px(&mut buf, 12, 12, w - 24, h - 24, 6, accent);
    frame_px(&mut buf, 26, 26, w - 52, h - 52, 2, INK);

    let title = "CERTIFICATE";
    let tx = (w - text_width(title, 3)) / 2;
    draw_text_px(&mut buf, title, tx, 64, 3, INK);
    fill_rect_px(&mut buf, (w - 240) / 2, 108, 240, 4, accent);

    // Course label, wrapped and centered.
    let mut y = 170;
    for line in wrap_words(label, WRAP_COLS) {
        let x = (w - text_width(&line, 2)) / 2;
        draw_text_px(&mut buf, &line, x, y, 2, INK);
        y += 24;
    }

    let ox = (w - text_width(org, 2)) / 2;
    draw_text_px(&mut buf, org, ox, y + 40, 2, accent);

    // Seal in the lower-right corner.
    let (cx, cy) = (w - 96, h - 96);
    fill_circle_px(&mut buf, cx, cy, 40, accent);
    fill_circle_px(&mut buf, cx, cy, 28, PAPER);
    fill_circle_px(&mut buf, cx, cy, 8, accent);

    buf
}

// --- pixel helpers ---

fn put(buf: &mut [u8], x: i32, y: i32, color: (u8, u8, u8)) {
    if x < 0 || y < 0 || x >= CARD_W as i32 || y >= CARD_H as i32 {
        return;
    }
    let offset = ((y as u32 * CARD_W + x as u32) * 4) as usize;
    buf[offset] = color.0;
    buf[offset + 1] = color.1;
    buf[offset + 2] = color.2;
    buf[offset + 3] = 255;
}

fn fill_rect_px(buf: &mut [u8], x: i32, y: i32, w: i32, h: i32, color: (u8, u8, u8)) {
    for py in y..y + h {
        for px in x..x + w {
            put(buf, px, py, color);
        }
    }
}

/// A hollow rectangle of the given border thickness.
fn frame_px(buf: &mut [u8], x: i32, y: i32, w: i32, h: i32, t: i32, color: (u8, u8, u8)) {
    fill_rect_px(buf, x, y, w, t, color);
    fill_rect_px(buf, x, y + h - t, w, t, color);
    fill_rect_px(buf, x, y, t, h, color);
    fill_rect_px(buf, x + w - t, y, t, h, color);
}

fn fill_circle_px(buf: &mut [u8], cx: i32, cy: i32, r: i32, color: (u8, u8, u8)) {
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put(buf, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Draw a string with the shared bitmap font at an integer scale.
fn draw_text_px(buf: &mut [u8], text: &str, x: i32, y: i32, scale: i32, color: (u8, u8, u8)) {
    let mut pen = x;
    for ch in text.chars() {
        let glyph_data = bitmap_font::glyph(ch);
        for row in 0..bitmap_font::GLYPH_HEIGHT as i32 {
            let bits = glyph_data[row as usize];
            for col in 0..bitmap_font::GLYPH_WIDTH as i32 {
                if bits & (0x80 >> col) != 0 {
                    fill_rect_px(buf, pen + col * scale, y + row * scale, scale, scale, color);
                }
            }
        }
        pen += bitmap_font::GLYPH_WIDTH as i32 * scale;
    }
}

fn text_width(text: &str, scale: i32) -> i32 {
    text.chars().count() as i32 * bitmap_font::GLYPH_WIDTH as i32 * scale
}

/// Greedy word wrap; a word longer than the limit gets its own line.
fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if line.chars().count() + 1 + word.chars().count() <= max_chars {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
