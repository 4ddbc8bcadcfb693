use crate::error::Error;

/// Bytes per pixel of the framebuffer, which is always stored as RGBA8.
pub const BYTES_PER_PIXEL: usize = 4;

/// Layout of a source image handed to [`Framebuffer::copy_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ImageFormat {
    Rgb = 3,
    Rgba = 4,
}

impl ImageFormat {
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, ImageFormat::Rgba)
    }
}

impl TryFrom<u32> for ImageFormat {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(ImageFormat::Rgb),
            4 => Ok(ImageFormat::Rgba),
            n => Err(Error::UnsupportedFormat(n)),
        }
    }
}

/// CPU-side copy of the window contents.
///
/// The pixel store never changes size after creation; writes that fall outside of it are
/// clipped per pixel. Any write marks the buffer dirty until the renderer picks it up with
/// [`Framebuffer::take_dirty`].
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
    dirty: bool,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
            dirty: false,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 rows, top row first.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether the buffer had pending changes, and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Read a single pixel as `[r, g, b, a]`, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let mut px = [0; 4];
        px.copy_from_slice(&self.data[idx..idx + BYTES_PER_PIXEL]);
        Some(px)
    }

    /// Fill the whole buffer with one color.
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for px in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&rgba);
        }
        self.dirty = true;
    }

    /// Blit a `src_width` x `src_height` image with its top-left corner at `(dst_x, dst_y)`.
    ///
    /// Only the part of the image that lands inside the buffer is read and written. Sources
    /// without alpha are written fully opaque. If `pixels` is shorter than the image it
    /// describes, the missing tail is left unwritten.
    ///
    /// This always marks the buffer dirty, even when the whole image is clipped away.
    pub fn copy_image(
        &mut self,
        format: ImageFormat,
        pixels: &[u8],
        src_width: u64,
        src_height: u64,
        dst_x: i32,
        dst_y: i32,
    ) {
        self.dirty = true;

        let (x0, x1) = clip_span(dst_x, src_width, self.width);
        let (y0, y1) = clip_span(dst_y, src_height, self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let bpp = format.bytes_per_pixel();
        let span = (x1 - x0) as usize;
        let sx = (x0 - i64::from(dst_x)) as u64;

        for y in y0..y1 {
            let sy = (y - i64::from(dst_y)) as u64;
            let src_start = match source_offset(sx, sy, src_width, bpp) {
                Some(offset) if offset < pixels.len() => offset,
                _ => break,
            };
            let src_end = pixels.len().min(src_start.saturating_add(span * bpp));

            let dst_start = (y as usize * self.width as usize + x0 as usize) * BYTES_PER_PIXEL;
            let dst_row = &mut self.data[dst_start..dst_start + span * BYTES_PER_PIXEL];

            for (src, dst) in pixels[src_start..src_end]
                .chunks_exact(bpp)
                .zip(dst_row.chunks_exact_mut(BYTES_PER_PIXEL))
            {
                dst[..3].copy_from_slice(&src[..3]);
                dst[3] = if format.has_alpha() { src[3] } else { u8::MAX };
            }
        }
    }
}

/// Destination range covered by `len` pixels starting at `offset`, clipped to `[0, limit)`.
fn clip_span(offset: i32, len: u64, limit: u32) -> (i64, i64) {
    let start = i64::from(offset);
    let end = start.saturating_add(i64::try_from(len).unwrap_or(i64::MAX));
    (start.max(0), end.min(i64::from(limit)))
}

fn source_offset(sx: u64, sy: u64, src_width: u64, bpp: usize) -> Option<usize> {
    let index = sy.checked_mul(src_width)?.checked_add(sx)?;
    usize::try_from(index).ok()?.checked_mul(bpp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(format: ImageFormat, w: usize, h: usize, px: &[u8]) -> Vec<u8> {
        assert_eq!(px.len(), format.bytes_per_pixel());
        px.iter().copied().cycle().take(w * h * px.len()).collect()
    }

    fn written(fb: &Framebuffer) -> Vec<(u32, u32)> {
        let mut out = vec![];
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.pixel(x, y) != Some([0, 0, 0, 0]) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn new_buffer_is_zeroed_and_clean() {
        let fb = Framebuffer::new(8, 4);
        assert_eq!(fb.as_bytes().len(), 8 * 4 * 4);
        assert!(fb.as_bytes().iter().all(|b| *b == 0));
        assert!(!fb.is_dirty());
    }

    #[test]
    fn format_from_raw() {
        assert_eq!(ImageFormat::try_from(3u32).unwrap(), ImageFormat::Rgb);
        assert_eq!(ImageFormat::try_from(4u32).unwrap(), ImageFormat::Rgba);
        assert!(matches!(
            ImageFormat::try_from(2u32),
            Err(Error::UnsupportedFormat(2))
        ));
    }

    #[test]
    fn rgb_source_is_written_opaque() {
        let mut fb = Framebuffer::new(4, 4);
        let img = solid(ImageFormat::Rgb, 2, 2, &[10, 20, 30]);
        fb.copy_image(ImageFormat::Rgb, &img, 2, 2, 1, 1);

        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            assert_eq!(fb.pixel(x, y), Some([10, 20, 30, 255]));
        }
        assert_eq!(written(&fb).len(), 4);
    }

    #[test]
    fn rgba_source_keeps_alpha() {
        let mut fb = Framebuffer::new(4, 4);
        let img = solid(ImageFormat::Rgba, 1, 1, &[1, 2, 3, 77]);
        fb.copy_image(ImageFormat::Rgba, &img, 1, 1, 3, 0);
        assert_eq!(fb.pixel(3, 0), Some([1, 2, 3, 77]));
    }

    #[test]
    fn source_stride_follows_format() {
        let mut fb = Framebuffer::new(3, 2);
        #[rustfmt::skip]
        let img = [
            1, 1, 1,  2, 2, 2,  3, 3, 3,
            4, 4, 4,  5, 5, 5,  6, 6, 6,
        ];
        fb.copy_image(ImageFormat::Rgb, &img, 3, 2, 0, 0);

        assert_eq!(fb.pixel(2, 0), Some([3, 3, 3, 255]));
        assert_eq!(fb.pixel(0, 1), Some([4, 4, 4, 255]));
        assert_eq!(fb.pixel(2, 1), Some([6, 6, 6, 255]));
    }

    #[test]
    fn straddling_rectangle_writes_only_in_bounds_pixels() {
        let mut fb = Framebuffer::new(4, 3);
        // 3x3 image, each pixel tagged with its source column/row.
        let mut img = vec![];
        for sy in 0..3u8 {
            for sx in 0..3u8 {
                img.extend_from_slice(&[sx, sy, 100, 200]);
            }
        }
        fb.copy_image(ImageFormat::Rgba, &img, 3, 3, -1, 2);

        // Source columns 1..3 land on x 0..2, source row 0 lands on y 2.
        assert_eq!(written(&fb), vec![(0, 2), (1, 2)]);
        assert_eq!(fb.pixel(0, 2), Some([1, 0, 100, 200]));
        assert_eq!(fb.pixel(1, 2), Some([2, 0, 100, 200]));
    }

    #[test]
    fn right_and_bottom_edges_clip() {
        let mut fb = Framebuffer::new(4, 4);
        let img = solid(ImageFormat::Rgb, 3, 3, &[9, 9, 9]);
        fb.copy_image(ImageFormat::Rgb, &img, 3, 3, 2, 3);
        assert_eq!(written(&fb), vec![(2, 3), (3, 3)]);
    }

    #[test]
    fn fully_clipped_copy_still_marks_dirty() {
        let mut fb = Framebuffer::new(4, 4);
        let img = solid(ImageFormat::Rgb, 2, 2, &[1, 1, 1]);

        fb.copy_image(ImageFormat::Rgb, &img, 2, 2, 100, 100);
        assert!(fb.is_dirty());
        assert!(written(&fb).is_empty());

        fb.take_dirty();
        fb.copy_image(ImageFormat::Rgb, &img, 2, 2, -2, 0);
        assert!(fb.is_dirty());
        assert!(written(&fb).is_empty());
    }

    #[test]
    fn full_overwrite_replaces_everything() {
        let mut fb = Framebuffer::new(5, 3);
        fb.fill([7, 7, 7, 7]);
        let img = solid(ImageFormat::Rgba, 5, 3, &[1, 2, 3, 4]);
        fb.copy_image(ImageFormat::Rgba, &img, 5, 3, 0, 0);
        assert_eq!(fb.as_bytes(), img.as_slice());
    }

    #[test]
    fn short_source_leaves_tail_unwritten() {
        let mut fb = Framebuffer::new(4, 4);
        // Claims 2x2 but only carries three pixels.
        let img = solid(ImageFormat::Rgb, 3, 1, &[5, 5, 5]);
        fb.copy_image(ImageFormat::Rgb, &img, 2, 2, 0, 0);

        assert_eq!(written(&fb), vec![(0, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn huge_dimensions_do_not_overflow() {
        let mut fb = Framebuffer::new(2, 2);
        let img = solid(ImageFormat::Rgb, 1, 1, &[3, 3, 3]);
        fb.copy_image(ImageFormat::Rgb, &img, u64::MAX, u64::MAX, i32::MIN, i32::MIN);
        assert!(written(&fb).is_empty());

        fb.copy_image(ImageFormat::Rgb, &img, u64::MAX, 1, 0, 0);
        assert_eq!(written(&fb), vec![(0, 0)]);
    }

    #[test]
    fn take_dirty_clears_flag() {
        let mut fb = Framebuffer::new(1, 1);
        fb.fill([0, 0, 0, 255]);
        assert!(fb.take_dirty());
        assert!(!fb.take_dirty());
    }
}
