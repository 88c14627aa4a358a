use std::fmt;

use crate::foundation::core::{QuadCoords, Rect};
use crate::foundation::error::SceneResult;
use crate::render::raster::QuadParams;
use crate::surface::pixels::PixelBuffer;
use crate::surface::screen::Screen;

/// Offscreen texture handle that can only be drawn to the screen.
pub trait Texture: fmt::Debug {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Draw `src` into `dst` on the screen with per-corner opacity.
    fn render_to_screen(
        &self,
        screen: &mut Screen,
        src: Rect,
        dst: Rect,
        opacity: [u8; 4],
    ) -> SceneResult<()>;

    /// Draw an arbitrary source quad onto an arbitrary screen quad.
    fn raw_render_quad(
        &self,
        screen: &mut Screen,
        src: QuadCoords,
        dst: QuadCoords,
        opacity: [u8; 4],
    ) -> SceneResult<()>;
}

/// Software texture holding a captured pixel buffer.
#[derive(Clone, Debug)]
pub struct PixelTexture {
    pixels: PixelBuffer,
}

impl PixelTexture {
    /// Texture over captured pixels.
    pub fn new(pixels: PixelBuffer) -> Self {
        Self { pixels }
    }

    /// Captured pixels.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }
}

impl Texture for PixelTexture {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn render_to_screen(
        &self,
        screen: &mut Screen,
        src: Rect,
        dst: Rect,
        opacity: [u8; 4],
    ) -> SceneResult<()> {
        self.raw_render_quad(screen, src.to_quad(), dst.to_quad(), opacity)
    }

    fn raw_render_quad(
        &self,
        screen: &mut Screen,
        src: QuadCoords,
        dst: QuadCoords,
        opacity: [u8; 4],
    ) -> SceneResult<()> {
        let params = QuadParams {
            opacity,
            ..QuadParams::default()
        };
        screen.draw(&self.pixels, src, dst, &params);
        Ok(())
    }
}
