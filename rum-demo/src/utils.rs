use std::path::Path;

use anyhow::{Context as _, Result};
use rum::ImageFormat;

pub struct Sprite {
    pub format: ImageFormat,
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub fn load_image(path: &Path) -> Result<Sprite> {
    let img = image::open(path)
        .with_context(|| format!("failed to load image {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();

    Ok(Sprite {
        format: ImageFormat::Rgba,
        pixels: img.into_raw(),
        width,
        height,
    })
}

/// Opaque RGB gradient: red grows to the right, green grows downwards.
pub fn gradient(width: u32, height: u32) -> Sprite {
    let ramp = |i: u32, n: u32| (i * 255 / n.saturating_sub(1).max(1)) as u8;

    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[ramp(x, width), ramp(y, height), 128]);
        }
    }

    Sprite {
        format: ImageFormat::Rgb,
        pixels,
        width,
        height,
    }
}
