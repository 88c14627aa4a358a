use crate::foundation::core::{Rect, Rgba};
use crate::foundation::error::{SceneError, SceneResult};

/// Tightly packed, row-major, premultiplied RGBA8 pixel storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// A fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; byte_len(width, height)],
        }
    }

    /// Buffer filled with `colour`.
    pub fn filled(width: u32, height: u32, colour: Rgba) -> Self {
        let mut out = Self::new(width, height);
        out.fill(colour);
        out
    }

    /// Wrap bytes that are already premultiplied.
    pub fn from_premul(width: u32, height: u32, data: Vec<u8>) -> SceneResult<Self> {
        if data.len() != byte_len(width, height) {
            return Err(SceneError::validation(format!(
                "pixel buffer expects {} bytes for {width}x{height}, got {}",
                byte_len(width, height),
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Premultiply straight RGBA8 bytes (as decoded from image files).
    pub fn from_straight(width: u32, height: u32, mut data: Vec<u8>) -> SceneResult<Self> {
        premultiply_rgba8_in_place(&mut data);
        Self::from_premul(width, height, data)
    }

    /// Decoded image converted to premultiplied RGBA8.
    pub fn from_image(img: &image::DynamicImage) -> SceneResult<Self> {
        let rgba = img.to_rgba8();
        let (w, h) = rgba.dimensions();
        Self::from_straight(w, h, rgba.into_raw())
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The whole buffer as a rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Raw premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw premultiplied bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }

    /// Premultiplied pixel at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let i = self.offset(x, y)?;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Write a premultiplied pixel; out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, px: [u8; 4]) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 4].copy_from_slice(&px);
        }
    }

    /// Fill every pixel with `colour`.
    pub fn fill(&mut self, colour: Rgba) {
        let px = colour.to_premul();
        for c in self.data.chunks_exact_mut(4) {
            c.copy_from_slice(&px);
        }
    }

    /// Fill the part of `rect` that lies inside the buffer.
    pub fn fill_rect(&mut self, colour: Rgba, rect: Rect) {
        let r = rect.intersect(self.rect());
        if r.is_empty() {
            return;
        }
        let px = colour.to_premul();
        for y in r.y..r.y2() {
            for x in r.x..r.x2() {
                self.set_pixel(x, y, px);
            }
        }
    }

    /// Copy out the part of `rect` that lies inside the buffer.
    pub fn sub_buffer(&self, rect: Rect) -> SceneResult<PixelBuffer> {
        let r = rect.intersect(self.rect());
        if r.is_empty() {
            return Err(SceneError::validation(format!(
                "sub_buffer rect {rect:?} does not overlap {}x{} buffer",
                self.width, self.height
            )));
        }
        let mut out = PixelBuffer::new(r.width as u32, r.height as u32);
        let row = (r.width as usize) * 4;
        for y in 0..r.height {
            let src = self.offset(r.x, r.y + y).unwrap_or(0);
            let dst = (y as usize) * row;
            out.data[dst..dst + row].copy_from_slice(&self.data[src..src + row]);
        }
        Ok(out)
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/pixels.rs"]
mod tests;
