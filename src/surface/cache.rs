use std::collections::HashMap;
use std::path::Path;

use crate::foundation::core::Rect;
use crate::foundation::error::{SceneError, SceneResult};
use crate::payload::text::TextRenderer;
use crate::surface::Surface;
use crate::surface::software::SoftwareSurface;

/// Named surfaces owned by the graphics subsystem.
///
/// Payloads refer to surfaces by name and resolve them here on every call.
#[derive(Debug, Default)]
pub struct SurfaceCache {
    surfaces: HashMap<String, Box<dyn Surface>>,
    text_renderer: Option<Box<dyn TextRenderer>>,
}

impl SurfaceCache {
    /// Empty cache without a text renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `surface` under `name`, returning the surface it replaces.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        surface: Box<dyn Surface>,
    ) -> Option<Box<dyn Surface>> {
        self.surfaces.insert(name.into(), surface)
    }

    /// Surface registered as `name`, or [`SceneError::Asset`].
    pub fn get(&self, name: &str) -> SceneResult<&dyn Surface> {
        self.surfaces
            .get(name)
            .map(|s| s.as_ref())
            .ok_or_else(|| missing(name))
    }

    /// Mutable surface registered as `name`.
    pub fn get_mut(&mut self, name: &str) -> SceneResult<&mut (dyn Surface + 'static)> {
        self.surfaces
            .get_mut(name)
            .map(|s| s.as_mut())
            .ok_or_else(|| missing(name))
    }

    /// Unregister `name`.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Surface>> {
        self.surfaces.remove(name)
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.surfaces.contains_key(name)
    }

    /// Number of registered surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Whether no surface is registered.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Decode an image file and register it under `name`.
    #[tracing::instrument(skip(self))]
    pub fn load_image(&mut self, name: &str, path: &Path) -> SceneResult<()> {
        let surface = SoftwareSurface::load(path)?;
        tracing::debug!(
            width = surface.pixels().width(),
            height = surface.pixels().height(),
            "loaded image surface"
        );
        self.insert(name, Box::new(surface));
        Ok(())
    }

    /// Blit between two registered surfaces.
    pub fn blit(
        &mut self,
        src: &str,
        dest: &str,
        src_rect: Rect,
        dst_rect: Rect,
        alpha: u8,
        use_src_alpha: bool,
    ) -> SceneResult<()> {
        if src == dest {
            return Err(SceneError::validation(format!(
                "surface '{src}' can not be blitted onto itself"
            )));
        }
        let mut target = self.surfaces.remove(dest).ok_or_else(|| missing(dest))?;
        let res = self.get(src).and_then(|s| {
            s.blit_to_surface(target.as_mut(), src_rect, dst_rect, alpha, use_src_alpha)
        });
        self.surfaces.insert(dest.to_owned(), target);
        res
    }

    /// Install the renderer text payloads rasterize through.
    pub fn set_text_renderer(&mut self, renderer: Box<dyn TextRenderer>) {
        self.text_renderer = Some(renderer);
    }

    /// Installed text renderer, if any.
    pub fn text_renderer(&self) -> Option<&dyn TextRenderer> {
        self.text_renderer.as_deref()
    }
}

fn missing(name: &str) -> SceneError {
    SceneError::asset(format!("no surface named '{name}'"))
}

#[cfg(test)]
#[path = "../../tests/unit/surface/cache.rs"]
mod tests;
