use crate::foundation::core::{QuadCoords, Rect};
use crate::object::data::GraphicsObjectOverride;
use crate::object::graphics_object::GraphicsObject;
use crate::render::composite::{ColourFilter, CompositeMode};
use crate::render::raster::{QuadParams, Sample};

/// Geometry and compositing state for drawing one surface region on behalf of an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectDraw {
    /// Source region in surface pixels.
    pub src: Rect,
    /// Destination corners on screen.
    pub dst: QuadCoords,
    /// Rasterizer parameters.
    pub params: QuadParams,
}

impl ObjectDraw {
    /// Resolve what `obj` (with `ov` applied) draws; `None` when nothing would be visible.
    ///
    /// `region` maps a pattern index to the surface's sub-image.
    pub fn resolve(
        obj: &GraphicsObject,
        ov: &GraphicsObjectOverride,
        region: impl FnOnce(i32) -> Rect,
    ) -> Option<Self> {
        let patt_no = ov.patt_no.unwrap_or(obj.patt_no());
        let src = ov.src_rect.unwrap_or_else(|| region(patt_no));
        if src.is_empty() {
            return None;
        }
        let alpha = ov.alpha.unwrap_or(obj.alpha());
        if alpha == 0 {
            return None;
        }
        let dst = obj
            .placement(ov.dest_offset.unwrap_or((0, 0)))
            .map_rect(src.width, src.height);
        let params = QuadParams {
            opacity: [alpha; 4],
            mode: CompositeMode::from_raw_or_normal(obj.composite_mode()),
            clip: obj.clip().as_rect(),
            filter: ColourFilter::from_object(obj),
            sample: Sample::Image,
        };
        Some(Self { src, dst, params })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/object.rs"]
mod tests;
