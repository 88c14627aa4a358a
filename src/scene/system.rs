use std::path::Path;

use anyhow::Context;

use crate::foundation::core::Rect;
use crate::foundation::error::SceneResult;
use crate::object::graphics_object::GraphicsObject;
use crate::object::handle::LayerKind;
use crate::render::context::{RenderContext, TickContext};
use crate::render::frame::FrameRGBA;
use crate::scene::config::{GraphicsConfig, RenderErrorPolicy};
use crate::scene::layer::ObjectLayer;
use crate::surface::cache::SurfaceCache;
use crate::surface::render_to_texture::RenderToTextureSurface;
use crate::surface::screen::Screen;
use crate::surface::texture::PixelTexture;

/// Counters for one pass over the object layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Objects whose payload ran successfully.
    pub ok: usize,
    /// Objects whose payload failed and were skipped.
    pub failed: usize,
}

/// Owns the screen, the surfaces and both object layers, and drives the per-frame cycle.
#[derive(Debug)]
pub struct GraphicsSystem {
    config: GraphicsConfig,
    screen: Screen,
    surfaces: SurfaceCache,
    background: ObjectLayer,
    foreground: ObjectLayer,
    frames_rendered: u64,
}

impl GraphicsSystem {
    /// Build an empty system from `config`.
    pub fn new(config: GraphicsConfig) -> SceneResult<Self> {
        config.validate()?;
        let screen = Screen::new(config.canvas()?);
        let slots = config.objects_per_layer;
        Ok(Self {
            screen,
            surfaces: SurfaceCache::new(),
            background: ObjectLayer::new(LayerKind::Background, slots),
            foreground: ObjectLayer::new(LayerKind::Foreground, slots),
            frames_rendered: 0,
            config,
        })
    }

    /// Active settings.
    pub fn config(&self) -> &GraphicsConfig {
        &self.config
    }

    /// The framebuffer.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Registered surfaces.
    pub fn surfaces(&self) -> &SurfaceCache {
        &self.surfaces
    }

    /// Mutable surface registry.
    pub fn surfaces_mut(&mut self) -> &mut SurfaceCache {
        &mut self.surfaces
    }

    /// One object layer.
    pub fn layer(&self, kind: LayerKind) -> &ObjectLayer {
        match kind {
            LayerKind::Background => &self.background,
            LayerKind::Foreground => &self.foreground,
        }
    }

    /// One mutable object layer.
    pub fn layer_mut(&mut self, kind: LayerKind) -> &mut ObjectLayer {
        match kind {
            LayerKind::Background => &mut self.background,
            LayerKind::Foreground => &mut self.foreground,
        }
    }

    /// Object at `index` of layer `kind`.
    pub fn object(&self, kind: LayerKind, index: usize) -> SceneResult<&GraphicsObject> {
        self.layer(kind).get(index)
    }

    /// Mutable object at `index` of layer `kind`.
    pub fn object_mut(
        &mut self,
        kind: LayerKind,
        index: usize,
    ) -> SceneResult<&mut GraphicsObject> {
        self.layer_mut(kind).get_mut(index)
    }

    /// Number of completed `render_frame` calls.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Advance every object's payload by `elapsed_ms`, background first, in slot order.
    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self, elapsed_ms: u32) -> SceneResult<PassStats> {
        let policy = self.config.render_errors;
        let ctx = TickContext::new(&self.surfaces, elapsed_ms);
        let mut stats = PassStats::default();
        for layer in [&mut self.background, &mut self.foreground] {
            for (_, obj) in layer.iter_mut() {
                if !obj.has_object_data() {
                    continue;
                }
                let res = obj.execute(&ctx);
                tally(&mut stats, policy, obj, "execute", res)?;
            }
        }
        Ok(stats)
    }

    /// Clear the screen and draw background then foreground objects in painter's order.
    #[tracing::instrument(skip(self), fields(frame = self.frames_rendered))]
    pub fn render_frame(&mut self) -> SceneResult<PassStats> {
        let policy = self.config.render_errors;
        self.screen.clear(self.config.clear_colour());
        self.screen.reset_draw_calls();

        let mut ctx = RenderContext::new(&self.surfaces, &mut self.screen);
        let mut stats = PassStats::default();
        for layer in [&self.background, &self.foreground] {
            for (_, obj) in layer.iter() {
                if !obj.visible() || !obj.has_object_data() {
                    continue;
                }
                let res = obj.render(&mut ctx);
                tally(&mut stats, policy, obj, "render", res)?;
            }
        }
        self.frames_rendered += 1;
        tracing::debug!(
            drawn = stats.ok,
            failed = stats.failed,
            quads = self.screen.draw_calls(),
            "frame rendered"
        );
        Ok(stats)
    }

    /// Snapshot `rect` of the screen into a render-to-texture surface registered as `name`.
    #[tracing::instrument(skip(self))]
    pub fn capture_screen(&mut self, name: &str, rect: Rect) -> SceneResult<()> {
        let pixels = self.screen.snapshot(rect)?;
        let texture = PixelTexture::new(pixels);
        self.surfaces
            .insert(name, Box::new(RenderToTextureSurface::new(Box::new(texture))));
        Ok(())
    }

    /// Read back the current screen contents.
    pub fn frame(&self) -> FrameRGBA {
        self.screen.to_frame()
    }

    /// Write the current screen contents as a PNG.
    pub fn save_png(&self, path: &Path) -> SceneResult<()> {
        let frame = self.frame();
        image::save_buffer_with_format(
            path,
            &frame.to_straight(),
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

fn tally(
    stats: &mut PassStats,
    policy: RenderErrorPolicy,
    obj: &GraphicsObject,
    pass: &'static str,
    res: SceneResult<()>,
) -> SceneResult<()> {
    match res {
        Ok(()) => {
            stats.ok += 1;
            Ok(())
        }
        Err(e) if policy == RenderErrorPolicy::Skip => {
            let kind = obj.object_data_ptr().map_or("none", |d| d.kind());
            tracing::warn!(object = %obj.handle(), kind, pass, error = %e, "skipping object");
            stats.failed += 1;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/system.rs"]
mod tests;
