use std::any::Any;
use std::cell::RefCell;
use std::fmt;

use crate::foundation::error::{SceneError, SceneResult};
use crate::object::data::GraphicsObjectData;
use crate::object::graphics_object::GraphicsObject;
use crate::object::handle::ObjectHandle;
use crate::object::text::TextProperties;
use crate::payload::scaled_size;
use crate::render::context::RenderContext;
use crate::surface::Surface;
use crate::surface::cache::SurfaceCache;

/// Turns a text run into pixels. Font handling lives entirely behind this trait.
pub trait TextRenderer: fmt::Debug {
    /// Render `text` styled by `props` into a new surface.
    fn rasterize(&self, text: &str, props: &TextProperties) -> SceneResult<Box<dyn Surface>>;
}

#[derive(Debug)]
struct Rasterized {
    props: TextProperties,
    surface: Box<dyn Surface>,
}

/// Draws the owner's text, rasterized on demand and kept until the text or its style changes.
#[derive(Debug, Default)]
pub struct TextData {
    cache: RefCell<Option<Rasterized>>,
    owner: ObjectHandle,
}

impl Clone for TextData {
    /// The rasterized surface is not shared; copies rasterize again on first use.
    fn clone(&self) -> Self {
        Self {
            cache: RefCell::new(None),
            owner: self.owner,
        }
    }
}

impl TextData {
    /// Payload with nothing rasterized yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a rasterized surface is currently held.
    pub fn is_cached(&self) -> bool {
        self.cache.borrow().is_some()
    }

    /// Run `f` on the rasterized text of `owner`. Returns `None` for empty text.
    fn with_surface<R>(
        &self,
        surfaces: &SurfaceCache,
        owner: &GraphicsObject,
        f: impl FnOnce(&dyn Surface) -> SceneResult<R>,
    ) -> SceneResult<Option<R>> {
        let Some(props) = owner.text_properties().filter(|p| !p.value.is_empty()) else {
            return Ok(None);
        };
        let mut cache = self.cache.borrow_mut();
        let stale = cache.as_ref().is_none_or(|c| c.props != *props);
        if stale {
            let renderer = surfaces
                .text_renderer()
                .ok_or_else(|| SceneError::unsupported("rasterize_text", "SurfaceCache"))?;
            tracing::debug!(owner = %self.owner, len = props.value.len(), "rasterizing text");
            *cache = Some(Rasterized {
                props: props.clone(),
                surface: renderer.rasterize(&props.value, props)?,
            });
        }
        match cache.as_ref() {
            Some(r) => f(r.surface.as_ref()).map(Some),
            None => Ok(None),
        }
    }
}

impl GraphicsObjectData for TextData {
    fn render(&self, ctx: &mut RenderContext<'_>, owner: &GraphicsObject) -> SceneResult<()> {
        let surfaces = ctx.surfaces;
        let screen = &mut *ctx.screen;
        self.with_surface(surfaces, owner, |s| {
            s.render_to_screen_as_object(screen, owner)
        })?;
        Ok(())
    }

    fn pixel_width(&self, surfaces: &SurfaceCache, owner: &GraphicsObject) -> SceneResult<i32> {
        let size = self.with_surface(surfaces, owner, |s| {
            Ok(scaled_size(s.region(owner.patt_no()), owner))
        })?;
        Ok(size.map_or(0, |(w, _)| w))
    }

    fn pixel_height(&self, surfaces: &SurfaceCache, owner: &GraphicsObject) -> SceneResult<i32> {
        let size = self.with_surface(surfaces, owner, |s| {
            Ok(scaled_size(s.region(owner.patt_no()), owner))
        })?;
        Ok(size.map_or(0, |(_, h)| h))
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
        "text"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/payload/text.rs"]
mod tests;
