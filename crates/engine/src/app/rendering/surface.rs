use super::font::{glyph_for, Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
use super::sprite::Sprite;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Drawing primitives over a borrowed RGBA frame buffer. All operations
/// clip against the buffer bounds and never write out of range.
pub struct Surface<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Surface<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, rect_width: i32, rect_height: i32, color: [u8; 4]) {
        let start_x = x.max(0);
        let start_y = y.max(0);
        let end_x = x.saturating_add(rect_width).min(self.width as i32);
        let end_y = y.saturating_add(rect_height).min(self.height as i32);
        if end_x <= start_x || end_y <= start_y {
            return;
        }

        for py in start_y..end_y {
            for px in start_x..end_x {
                self.put_pixel(px as usize, py as usize, color);
            }
        }
    }

    pub fn outline_rect(
        &mut self,
        x: i32,
        y: i32,
        rect_width: i32,
        rect_height: i32,
        color: [u8; 4],
    ) {
        if rect_width <= 1 || rect_height <= 1 {
            return;
        }
        self.fill_rect(x, y, rect_width, 1, color);
        self.fill_rect(x, y + rect_height - 1, rect_width, 1, color);
        self.fill_rect(x, y, 1, rect_height, color);
        self.fill_rect(x + rect_width - 1, y, 1, rect_height, color);
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: [u8; 4]) {
        if radius <= 0 {
            return;
        }
        for dy in -radius..=radius {
            let span = ((radius * radius - dy * dy) as f32).sqrt() as i32;
            self.fill_rect(cx - span, cy + dy, span * 2 + 1, 1, color);
        }
    }

    /// Copies a sprite onto the surface, skipping fully transparent
    /// pixels. Off-surface regions are clipped.
    pub fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) {
        for sy in 0..sprite.height() {
            let py = y + sy as i32;
            if py < 0 || py >= self.height as i32 {
                continue;
            }
            for sx in 0..sprite.width() {
                let px = x + sx as i32;
                if px < 0 || px >= self.width as i32 {
                    continue;
                }
                let color = sprite.pixel(sx, sy);
                if color[3] == 0 {
                    continue;
                }
                self.put_pixel(px as usize, py as usize, color);
            }
        }
    }

    pub fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        scale: i32,
        align: TextAlign,
        color: [u8; 4],
    ) {
        let scale = scale.max(1);
        let mut pen_x = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - Self::text_width(text, scale) / 2,
        };
        for ch in text.chars() {
            self.draw_glyph(glyph_for(ch), pen_x, y, scale, color);
            pen_x += (GLYPH_WIDTH + 1) * scale;
        }
    }

    pub fn text_width(text: &str, scale: i32) -> i32 {
        let glyphs = text.chars().count() as i32;
        if glyphs == 0 {
            return 0;
        }
        // Glyph cells plus one column of spacing between neighbours.
        (glyphs * (GLYPH_WIDTH + 1) - 1) * scale.max(1)
    }

    pub fn text_height(scale: i32) -> i32 {
        GLYPH_HEIGHT * scale.max(1)
    }

    fn draw_glyph(&mut self, glyph: Glyph, x: i32, y: i32, scale: i32, color: [u8; 4]) {
        for (row_index, row_bits) in glyph.rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if (row_bits & (1 << (GLYPH_WIDTH - 1 - col))) == 0 {
                    continue;
                }
                self.fill_rect(
                    x + col * scale,
                    y + row_index as i32 * scale,
                    scale,
                    scale,
                    color,
                );
            }
        }
    }

    fn put_pixel(&mut self, x: usize, y: usize, color: [u8; 4]) {
        let Some(pixel_offset) = y.checked_mul(self.width as usize).and_then(|row| {
            row.checked_add(x)
        }) else {
            return;
        };
        let Some(byte_offset) = pixel_offset.checked_mul(4) else {
            return;
        };
        let Some(end) = byte_offset.checked_add(4) else {
            return;
        };
        if end > self.frame.len() {
            return;
        }
        self.frame[byte_offset..end].copy_from_slice(&color);
    }
}
