//! F12 screenshot capture: framebuffer to timestamped PNG.

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use folioterm_core::backend::TermBackend;

/// Screenshots land here, relative to the working directory.
pub const SCREENSHOT_DIR: &str = "screenshots";

/// Capture the backend's current frame and write it as a PNG.
///
/// Must be called after the frame is drawn but before it is presented, so
/// `read_pixels` sees the finished back buffer.
pub fn capture(backend: &dyn TermBackend, w: u32, h: u32) -> anyhow::Result<PathBuf> {
    let pixels = backend.read_pixels(0, 0, w, h)?;
    fs::create_dir_all(SCREENSHOT_DIR).with_context(|| format!("creating {SCREENSHOT_DIR}/"))?;
    let path = Path::new(SCREENSHOT_DIR).join(timestamp_name());
    save_png(&path, w, h, &pixels)?;
    Ok(path)
}

fn timestamp_name() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("folioterm-{secs}.png")
}

/// Save RGBA pixel data as a PNG file.
fn save_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> anyhow::Result<()> {
    let file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let writer = BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}
