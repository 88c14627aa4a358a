use crate::foundation::core::{Canvas, QuadCoords, Rect, Rgba};
use crate::foundation::error::SceneResult;
use crate::render::frame::FrameRGBA;
use crate::render::raster::{QuadParams, draw_quad};
use crate::surface::pixels::PixelBuffer;

/// The active framebuffer every render call ends up drawing into.
#[derive(Clone, Debug)]
pub struct Screen {
    pixels: PixelBuffer,
    draw_calls: u64,
}

impl Screen {
    /// Transparent screen of `canvas` size.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            pixels: PixelBuffer::new(canvas.width, canvas.height),
            draw_calls: 0,
        }
    }

    /// Screen dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.pixels.width(),
            height: self.pixels.height(),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Fill the whole screen.
    pub fn clear(&mut self, colour: Rgba) {
        self.pixels.fill(colour);
    }

    /// Framebuffer pixels.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Mutable framebuffer pixels.
    pub fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    /// Rasterize one quad of `src` onto the screen. Returns the number of pixels written.
    pub fn draw(
        &mut self,
        src: &PixelBuffer,
        src_quad: QuadCoords,
        dst_quad: QuadCoords,
        params: &QuadParams,
    ) -> usize {
        self.draw_calls += 1;
        draw_quad(&mut self.pixels, src, src_quad, dst_quad, params)
    }

    /// Number of quads submitted since creation or the last [`Screen::reset_draw_calls`].
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    /// Zero the draw-call counter.
    pub fn reset_draw_calls(&mut self) {
        self.draw_calls = 0;
    }

    /// Copy of the screen area under `rect`.
    pub fn snapshot(&self, rect: Rect) -> SceneResult<PixelBuffer> {
        self.pixels.sub_buffer(rect)
    }

    /// Premultiplied copy of the framebuffer.
    pub fn to_frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.pixels.width(),
            height: self.pixels.height(),
            data: self.pixels.data().to_vec(),
            premultiplied: true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/screen.rs"]
mod tests;
