//! Backend-agnostic drawable surfaces.
//!
//! A [`Surface`] is a pixel source that can be blitted onto other surfaces and drawn onto the
//! [`Screen`](screen::Screen). Backends that can not honour an operation for their resource kind
//! return [`SceneError::Unsupported`](crate::SceneError::Unsupported) rather than doing nothing.

use std::fmt;

use crate::foundation::core::{QuadCoords, Rect, Rgb, Rgba};
use crate::foundation::error::SceneResult;
use crate::object::data::GraphicsObjectOverride;
use crate::object::graphics_object::GraphicsObject;
use crate::surface::pixels::PixelBuffer;
use crate::surface::screen::Screen;

pub mod cache;
pub mod pixels;
pub mod render_to_texture;
pub mod screen;
pub mod software;
pub mod texture;

/// Drawable pixel region.
pub trait Surface: fmt::Debug {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Sub-image used for pattern `patt_no`. Surfaces without a pattern table use their whole
    /// area.
    fn region(&self, _patt_no: i32) -> Rect {
        Rect::from_size(self.width(), self.height())
    }

    /// Copy `src` of this surface into `dst` of `dest`, scaling to fit.
    ///
    /// With `use_src_alpha` the source is blended over the destination; otherwise source alpha is
    /// ignored and pixels are treated as opaque. `alpha` scales the whole copy.
    fn blit_to_surface(
        &self,
        dest: &mut dyn Surface,
        src: Rect,
        dst: Rect,
        alpha: u8,
        use_src_alpha: bool,
    ) -> SceneResult<()>;

    /// Draw `src` of this surface into `dst` on the screen at uniform opacity.
    fn render_to_screen(
        &self,
        screen: &mut Screen,
        src: Rect,
        dst: Rect,
        opacity: u8,
    ) -> SceneResult<()> {
        self.render_to_screen_corners(screen, src, dst, [opacity; 4])
    }

    /// Like [`Surface::render_to_screen`] with one opacity per corner (top-left, top-right,
    /// bottom-right, bottom-left).
    fn render_to_screen_corners(
        &self,
        screen: &mut Screen,
        src: Rect,
        dst: Rect,
        opacity: [u8; 4],
    ) -> SceneResult<()> {
        self.raw_render_quad(screen, src.to_quad(), dst.to_quad(), opacity)
    }

    /// Use this surface's alpha channel as coverage for a flat `colour`.
    ///
    /// `filter` selects the blend: `0` subtracts the mask colour, `1` adds it, anything else
    /// draws it normally.
    fn render_to_screen_as_color_mask(
        &self,
        screen: &mut Screen,
        src: Rect,
        dst: Rect,
        colour: Rgba,
        filter: i32,
    ) -> SceneResult<()>;

    /// Draw an arbitrary source quad onto an arbitrary screen quad.
    fn raw_render_quad(
        &self,
        screen: &mut Screen,
        src: QuadCoords,
        dst: QuadCoords,
        opacity: [u8; 4],
    ) -> SceneResult<()>;

    /// Draw this surface the way `obj` describes: placement, pattern, alpha, clip, colour
    /// filters and composite mode.
    fn render_to_screen_as_object(
        &self,
        screen: &mut Screen,
        obj: &GraphicsObject,
    ) -> SceneResult<()> {
        self.render_to_screen_as_object_with(screen, obj, &GraphicsObjectOverride::default())
    }

    /// Like [`Surface::render_to_screen_as_object`] with `ov` substituted.
    fn render_to_screen_as_object_with(
        &self,
        screen: &mut Screen,
        obj: &GraphicsObject,
        ov: &GraphicsObjectOverride,
    ) -> SceneResult<()>;

    /// Fill the whole surface.
    fn fill(&mut self, colour: Rgba) -> SceneResult<()>;

    /// Fill the part of `rect` inside the surface.
    fn fill_rect(&mut self, colour: Rgba, rect: Rect) -> SceneResult<()>;

    /// Straight colour of one pixel.
    fn dc_pixel(&self, x: i32, y: i32) -> SceneResult<Rgb>;

    /// Writable pixels, for use as a blit destination.
    fn pixels_mut(&mut self) -> SceneResult<&mut PixelBuffer>;

    /// Independent copy of this surface.
    fn try_clone(&self) -> SceneResult<Box<dyn Surface>>;
}
