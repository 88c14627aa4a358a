use std::path::Path;

use anyhow::Context;

use crate::foundation::core::{QuadCoords, Rect, Rgb, Rgba, unpremul};
use crate::foundation::error::{SceneError, SceneResult};
use crate::object::data::GraphicsObjectOverride;
use crate::object::graphics_object::GraphicsObject;
use crate::render::composite::CompositeMode;
use crate::render::object::ObjectDraw;
use crate::render::raster::{QuadParams, Sample, draw_quad};
use crate::surface::Surface;
use crate::surface::pixels::PixelBuffer;
use crate::surface::screen::Screen;

/// In-memory surface implementing the whole [`Surface`] contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoftwareSurface {
    pixels: PixelBuffer,
    regions: Vec<Rect>,
}

impl SoftwareSurface {
    /// Transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_pixels(PixelBuffer::new(width, height))
    }

    /// Surface filled with `colour`.
    pub fn solid(width: u32, height: u32, colour: Rgba) -> Self {
        Self::from_pixels(PixelBuffer::filled(width, height, colour))
    }

    /// Surface over existing pixels, without a pattern table.
    pub fn from_pixels(pixels: PixelBuffer) -> Self {
        Self {
            pixels,
            regions: Vec::new(),
        }
    }

    /// Decode an image file (any format the `image` crate reads).
    pub fn load(path: &Path) -> SceneResult<Self> {
        let img = image::open(path)
            .with_context(|| format!("decode image {}", path.display()))
            .map_err(|e| SceneError::asset(format!("{e:#}")))?;
        Ok(Self::from_pixels(PixelBuffer::from_image(&img)?))
    }

    /// Replace the pattern table.
    pub fn with_regions(mut self, regions: Vec<Rect>) -> Self {
        self.regions = regions;
        self
    }

    /// Pattern table of equally sized cells, row-major.
    pub fn with_grid(self, cols: u32, rows: u32) -> SceneResult<Self> {
        if cols == 0 || rows == 0 {
            return Err(SceneError::validation("pattern grid needs at least one cell"));
        }
        let cw = (self.pixels.width() / cols) as i32;
        let ch = (self.pixels.height() / rows) as i32;
        let regions = (0..rows as i32)
            .flat_map(|r| (0..cols as i32).map(move |c| Rect::new(c * cw, r * ch, cw, ch)))
            .collect();
        Ok(self.with_regions(regions))
    }

    /// Pattern table.
    pub fn regions(&self) -> &[Rect] {
        &self.regions
    }

    /// Surface pixels.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }
}

impl Surface for SoftwareSurface {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Falls back to the whole surface when `patt_no` has no entry in the pattern table.
    fn region(&self, patt_no: i32) -> Rect {
        usize::try_from(patt_no)
            .ok()
            .and_then(|i| self.regions.get(i).copied())
            .unwrap_or_else(|| self.pixels.rect())
    }

    fn blit_to_surface(
        &self,
        dest: &mut dyn Surface,
        src: Rect,
        dst: Rect,
        alpha: u8,
        use_src_alpha: bool,
    ) -> SceneResult<()> {
        let target = dest.pixels_mut()?;
        let params = QuadParams {
            sample: if use_src_alpha {
                Sample::Image
            } else {
                Sample::Opaque
            },
            ..QuadParams::with_opacity(alpha)
        };
        draw_quad(target, &self.pixels, src.to_quad(), dst.to_quad(), &params);
        Ok(())
    }

    fn render_to_screen_as_color_mask(
        &self,
        screen: &mut Screen,
        src: Rect,
        dst: Rect,
        colour: Rgba,
        filter: i32,
    ) -> SceneResult<()> {
        let mode = match filter {
            0 => CompositeMode::Subtractive,
            1 => CompositeMode::Additive,
            other => {
                tracing::warn!(filter = other, "unknown colour mask filter, drawing as normal");
                CompositeMode::Normal
            }
        };
        let params = QuadParams {
            mode,
            sample: Sample::ColourMask(colour),
            ..QuadParams::default()
        };
        screen.draw(&self.pixels, src.to_quad(), dst.to_quad(), &params);
        Ok(())
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

    fn render_to_screen_as_object_with(
        &self,
        screen: &mut Screen,
        obj: &GraphicsObject,
        ov: &GraphicsObjectOverride,
    ) -> SceneResult<()> {
        let Some(draw) = ObjectDraw::resolve(obj, ov, |p| self.region(p)) else {
            return Ok(());
        };
        screen.draw(&self.pixels, draw.src.to_quad(), draw.dst, &draw.params);
        Ok(())
    }

    fn fill(&mut self, colour: Rgba) -> SceneResult<()> {
        self.pixels.fill(colour);
        Ok(())
    }

    fn fill_rect(&mut self, colour: Rgba, rect: Rect) -> SceneResult<()> {
        self.pixels.fill_rect(colour, rect);
        Ok(())
    }

    fn dc_pixel(&self, x: i32, y: i32) -> SceneResult<Rgb> {
        self.pixels.pixel(x, y).map(unpremul).ok_or_else(|| {
            SceneError::validation(format!(
                "pixel ({x}, {y}) outside {}x{} surface",
                self.pixels.width(),
                self.pixels.height()
            ))
        })
    }

    fn pixels_mut(&mut self) -> SceneResult<&mut PixelBuffer> {
        Ok(&mut self.pixels)
    }

    fn try_clone(&self) -> SceneResult<Box<dyn Surface>> {
        Ok(Box::new(self.clone()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/software.rs"]
mod tests;
