//! Frame abstraction for drawing primitives
//!
//! Provides a small, safe API over the pixel buffer so the table, menu and
//! status bar code never index the buffer directly.

use fontdue::Font;

use semicell::grid::Rect;

use super::GlyphCache;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color
/// with full opacity.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (r << 16) | (g << 8) | b
}

/// Clipping rectangle in pixel coordinates (inclusive start, exclusive end)
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Wrap a pixel buffer. A buffer shorter than `width * height` shrinks
    /// the frame height to fit.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 && buffer.len() < width * height {
            buffer.len() / width
        } else {
            height
        };
        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[cfg(test)]
    fn height(&self) -> usize {
        self.height
    }

    /// Constrain subsequent drawing to `rect`
    pub fn set_clip(&mut self, rect: Rect) {
        self.clip = Some(ClipRect {
            x0: rect.x.min(self.width),
            y0: rect.y.min(self.height),
            x1: (rect.x + rect.width).min(self.width),
            y1: (rect.y + rect.height).min(self.height),
        });
    }

    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    #[inline]
    fn min_x(&self) -> usize {
        self.clip.map_or(0, |c| c.x0)
    }

    #[inline]
    fn min_y(&self) -> usize {
        self.clip.map_or(0, |c| c.y0)
    }

    #[inline]
    fn max_x(&self) -> usize {
        self.clip.map_or(self.width, |c| c.x1)
    }

    #[inline]
    fn max_y(&self) -> usize {
        self.clip.map_or(self.height, |c| c.y1)
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle with a solid color
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        self.fill_rect_px(rect.x, rect.y, rect.width, rect.height, color);
    }

    /// Fill a rectangle specified by pixel coordinates
    pub fn fill_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let x0 = x.max(self.min_x());
        let y0 = y.max(self.min_y());
        let x1 = (x + w).min(self.max_x());
        let y1 = (y + h).min(self.max_y());

        for py in y0..y1 {
            let row_start = py * self.width;
            for px in x0..x1 {
                self.buffer[row_start + px] = color;
            }
        }
    }

    /// Draw an outline `thickness` pixels wide inside `rect`
    pub fn stroke_rect(&mut self, rect: Rect, thickness: usize, color: u32) {
        let Rect {
            x,
            y,
            width,
            height,
        } = rect;
        let t = thickness.min(width).min(height);
        self.fill_rect_px(x, y, width, t, color);
        self.fill_rect_px(x, (y + height).saturating_sub(t), width, t, color);
        self.fill_rect_px(x, y, t, height, color);
        self.fill_rect_px((x + width).saturating_sub(t), y, t, height, color);
    }

    /// Blend a pixel with alpha (respects the clip rect)
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32, alpha: f32) {
        if x < self.min_x() || x >= self.max_x() || y < self.min_y() || y >= self.max_y() {
            return;
        }
        let idx = y * self.width + x;
        self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
    }

    #[cfg(test)]
    fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }
}

/// Text rendering context wrapping the font and glyph cache
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    char_width: f32,
    line_height: usize,
}

impl<'a> TextPainter<'a> {
    pub fn new(
        font: &'a Font,
        glyph_cache: &'a mut GlyphCache,
        font_size: f32,
        ascent: f32,
        char_width: f32,
        line_height: usize,
    ) -> Self {
        Self {
            font,
            glyph_cache,
            font_size,
            ascent,
            char_width,
            line_height,
        }
    }

    #[inline]
    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    #[inline]
    pub fn line_height(&self) -> usize {
        self.line_height
    }

    /// Pixel width of `text` laid out on the monospace grid
    pub fn text_width(&self, text: &str) -> usize {
        (text.chars().count() as f32 * self.char_width).ceil() as usize
    }

    /// Draw text with its line box starting at `(x, y)`
    pub fn draw(&mut self, frame: &mut Frame, x: usize, y: usize, text: &str, color: u32) {
        let mut current_x = x as f32;
        let baseline = y as f32 + self.ascent;

        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let Some(&alpha) = bitmap.get(bitmap_y * metrics.width + bitmap_x) else {
                        continue;
                    };
                    if alpha == 0 {
                        continue;
                    }
                    let px = current_x as isize + bitmap_x as isize + metrics.xmin as isize;
                    let py = (glyph_top + bitmap_y as f32) as isize;
                    if px >= 0 && py >= 0 {
                        frame.blend_pixel(px as usize, py as usize, color, alpha as f32 / 255.0);
                    }
                }
            }

            current_x += metrics.advance_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_colors_extremes() {
        assert_eq!(blend_colors(0xFF000000, 0xFFFFFFFF, 1.0), 0xFFFFFFFF);
        assert_eq!(blend_colors(0xFF123456, 0xFFFFFFFF, 0.0), 0xFF123456);
    }

    #[test]
    fn test_fill_rect_is_clipped_to_frame() {
        let mut buffer = vec![0u32; 10 * 10];
        let mut frame = Frame::new(&mut buffer, 10, 10);
        frame.fill_rect_px(8, 8, 5, 5, 0xFFFF0000);
        assert_eq!(frame.get_pixel(9, 9), 0xFFFF0000);
        assert_eq!(frame.get_pixel(7, 7), 0);
    }

    #[test]
    fn test_short_buffer_shrinks_height() {
        let mut buffer = vec![0u32; 10 * 5];
        let frame = Frame::new(&mut buffer, 10, 10);
        assert_eq!(frame.height(), 5);
    }

    #[test]
    fn test_clip_limits_fill() {
        let mut buffer = vec![0u32; 20 * 20];
        let mut frame = Frame::new(&mut buffer, 20, 20);
        frame.set_clip(Rect::new(5, 5, 10, 10));
        frame.fill_rect_px(0, 0, 20, 20, 0xFFAA0000);
        assert_eq!(frame.get_pixel(7, 7), 0xFFAA0000);
        assert_eq!(frame.get_pixel(3, 3), 0);
        assert_eq!(frame.get_pixel(15, 15), 0);

        frame.clear_clip();
        frame.fill_rect_px(0, 0, 1, 1, 0xFFBB0000);
        assert_eq!(frame.get_pixel(0, 0), 0xFFBB0000);
    }

    #[test]
    fn test_stroke_rect_leaves_inside_untouched() {
        let mut buffer = vec![0u32; 10 * 10];
        let mut frame = Frame::new(&mut buffer, 10, 10);
        frame.stroke_rect(Rect::new(2, 2, 6, 6), 1, 0xFF00FF00);
        assert_eq!(frame.get_pixel(2, 2), 0xFF00FF00);
        assert_eq!(frame.get_pixel(7, 7), 0xFF00FF00);
        assert_eq!(frame.get_pixel(4, 4), 0);
    }

    #[test]
    fn test_blend_pixel_respects_clip() {
        let mut buffer = vec![0xFFFFFFFF_u32; 20 * 20];
        let mut frame = Frame::new(&mut buffer, 20, 20);
        frame.set_clip(Rect::new(5, 5, 10, 10));

        frame.blend_pixel(7, 7, 0xFF000000, 0.5);
        let r = (frame.get_pixel(7, 7) >> 16) & 0xFF;
        assert!(r > 100 && r < 160, "R channel: {}", r);

        frame.blend_pixel(3, 3, 0xFF000000, 0.5);
        assert_eq!(frame.get_pixel(3, 3), 0xFFFFFFFF);
    }
}
