use crate::foundation::core::{QuadCoords, Rect, Rgb, Rgba};
use crate::foundation::error::{SceneError, SceneResult};
use crate::object::data::GraphicsObjectOverride;
use crate::object::graphics_object::GraphicsObject;
use crate::surface::Surface;
use crate::surface::pixels::PixelBuffer;
use crate::surface::screen::Screen;
use crate::surface::texture::Texture;

const BACKEND: &str = "RenderToTextureSurface";

/// Surface backed by an offscreen texture.
///
/// Only the screen-drawing subset is available: plain and per-corner `render_to_screen`,
/// `raw_render_quad` and the size queries. Every other operation fails with
/// [`SceneError::Unsupported`].
#[derive(Debug)]
pub struct RenderToTextureSurface {
    texture: Box<dyn Texture>,
}

impl RenderToTextureSurface {
    /// Wrap `texture`.
    pub fn new(texture: Box<dyn Texture>) -> Self {
        Self { texture }
    }

    /// The backing texture.
    pub fn texture(&self) -> &dyn Texture {
        self.texture.as_ref()
    }
}

fn unsupported<T>(operation: &'static str) -> SceneResult<T> {
    Err(SceneError::unsupported(operation, BACKEND))
}

impl Surface for RenderToTextureSurface {
    fn width(&self) -> u32 {
        self.texture.width()
    }

    fn height(&self) -> u32 {
        self.texture.height()
    }

    fn blit_to_surface(
        &self,
        _dest: &mut dyn Surface,
        _src: Rect,
        _dst: Rect,
        _alpha: u8,
        _use_src_alpha: bool,
    ) -> SceneResult<()> {
        unsupported("blit_to_surface")
    }

    fn render_to_screen(
        &self,
        screen: &mut Screen,
        src: Rect,
        dst: Rect,
        opacity: u8,
    ) -> SceneResult<()> {
        self.texture.render_to_screen(screen, src, dst, [opacity; 4])
    }

    fn render_to_screen_corners(
        &self,
        screen: &mut Screen,
        src: Rect,
        dst: Rect,
        opacity: [u8; 4],
    ) -> SceneResult<()> {
        self.texture.render_to_screen(screen, src, dst, opacity)
    }

    fn render_to_screen_as_color_mask(
        &self,
        _screen: &mut Screen,
        _src: Rect,
        _dst: Rect,
        _colour: Rgba,
        _filter: i32,
    ) -> SceneResult<()> {
        unsupported("render_to_screen_as_color_mask")
    }

    fn raw_render_quad(
        &self,
        screen: &mut Screen,
        src: QuadCoords,
        dst: QuadCoords,
        opacity: [u8; 4],
    ) -> SceneResult<()> {
        self.texture.raw_render_quad(screen, src, dst, opacity)
    }

    fn render_to_screen_as_object(
        &self,
        _screen: &mut Screen,
        _obj: &GraphicsObject,
    ) -> SceneResult<()> {
        unsupported("render_to_screen_as_object")
    }

    fn render_to_screen_as_object_with(
        &self,
        _screen: &mut Screen,
        _obj: &GraphicsObject,
        _ov: &GraphicsObjectOverride,
    ) -> SceneResult<()> {
        unsupported("render_to_screen_as_object_with")
    }

    fn fill(&mut self, _colour: Rgba) -> SceneResult<()> {
        unsupported("fill")
    }

    fn fill_rect(&mut self, _colour: Rgba, _rect: Rect) -> SceneResult<()> {
        unsupported("fill_rect")
    }

    fn dc_pixel(&self, _x: i32, _y: i32) -> SceneResult<Rgb> {
        unsupported("dc_pixel")
    }

    fn pixels_mut(&mut self) -> SceneResult<&mut PixelBuffer> {
        unsupported("pixels_mut")
    }

    fn try_clone(&self) -> SceneResult<Box<dyn Surface>> {
        unsupported("try_clone")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/render_to_texture.rs"]
mod tests;
