use std::any::Any;

use crate::foundation::core::{QuadCoords, Rect};
use crate::foundation::error::SceneResult;
use crate::object::data::GraphicsObjectData;
use crate::object::graphics_object::GraphicsObject;
use crate::object::handle::ObjectHandle;
use crate::payload::scaled_size;
use crate::render::context::RenderContext;
use crate::surface::cache::SurfaceCache;

/// Draws a captured render-to-texture surface.
///
/// Only the texture-safe subset of the surface contract is used: per-corner `render_to_screen`
/// for upright placements and `raw_render_quad` for rotated or mirrored ones. Position, origin,
/// scale, rotation and alpha are honoured; colour filters and clipping are not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderTargetData {
    surface: String,
    owner: ObjectHandle,
}

impl RenderTargetData {
    /// Draw the render-to-texture surface registered as `surface`.
    pub fn new(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            owner: ObjectHandle::Detached,
        }
    }

    /// Name of the drawn surface.
    pub fn surface_name(&self) -> &str {
        &self.surface
    }
}

fn upright_rect(q: QuadCoords) -> Option<Rect> {
    let upright = q[1] == q[3] && q[0] == q[6] && q[2] > q[0] && q[5] > q[1];
    upright.then(|| Rect::from_corners(q[0], q[1], q[4], q[5]))
}

impl GraphicsObjectData for RenderTargetData {
    fn render(&self, ctx: &mut RenderContext<'_>, owner: &GraphicsObject) -> SceneResult<()> {
        let alpha = owner.alpha();
        if alpha == 0 {
            return Ok(());
        }
        let surfaces = ctx.surfaces;
        let surface = surfaces.get(&self.surface)?;
        let src = Rect::from_size(surface.width(), surface.height());
        let dst = owner.placement((0, 0)).map_rect(src.width, src.height);
        match upright_rect(dst) {
            Some(dst) => surface.render_to_screen_corners(ctx.screen, src, dst, [alpha; 4]),
            None => surface.raw_render_quad(ctx.screen, src.to_quad(), dst, [alpha; 4]),
        }
    }

    fn pixel_width(&self, surfaces: &SurfaceCache, owner: &GraphicsObject) -> SceneResult<i32> {
        let s = surfaces.get(&self.surface)?;
        Ok(scaled_size(Rect::from_size(s.width(), s.height()), owner).0)
    }

    fn pixel_height(&self, surfaces: &SurfaceCache, owner: &GraphicsObject) -> SceneResult<i32> {
        let s = surfaces.get(&self.surface)?;
        Ok(scaled_size(Rect::from_size(s.width(), s.height()), owner).1)
    }

    fn clone_box(&self) -> Box<dyn GraphicsObjectData> {
        Box::new(self.clone())
    }

    fn set_owned_by(&mut self, owner: ObjectHandle) {
        self.owner = owner;
    }

    fn owned_by(&self) -> ObjectHandle {
        self.owner
    }

    fn kind(&self) -> &'static str {
        "render_target"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/payload/render_target.rs"]
mod tests;
