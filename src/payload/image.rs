use std::any::Any;

use crate::foundation::error::SceneResult;
use crate::object::data::GraphicsObjectData;
use crate::object::graphics_object::GraphicsObject;
use crate::object::handle::ObjectHandle;
use crate::payload::scaled_size;
use crate::render::context::RenderContext;
use crate::surface::cache::SurfaceCache;

/// Still image, optionally cut into patterns, drawn with the owner's full object state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageData {
    surface: String,
    owner: ObjectHandle,
}

impl ImageData {
    /// Image drawn from the surface registered as `surface`.
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

impl GraphicsObjectData for ImageData {
    fn render(&self, ctx: &mut RenderContext<'_>, owner: &GraphicsObject) -> SceneResult<()> {
        let surfaces = ctx.surfaces;
        surfaces
            .get(&self.surface)?
            .render_to_screen_as_object(ctx.screen, owner)
    }

    fn pixel_width(&self, surfaces: &SurfaceCache, owner: &GraphicsObject) -> SceneResult<i32> {
        let region = surfaces.get(&self.surface)?.region(owner.patt_no());
        Ok(scaled_size(region, owner).0)
    }

    fn pixel_height(&self, surfaces: &SurfaceCache, owner: &GraphicsObject) -> SceneResult<i32> {
        let region = surfaces.get(&self.surface)?.region(owner.patt_no());
        Ok(scaled_size(region, owner).1)
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
        "image"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/payload/image.rs"]
mod tests;
