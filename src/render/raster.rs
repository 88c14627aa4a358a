use kurbo::{Affine, Point};

use crate::foundation::core::{QuadCoords, Rect, Rgba, unpremul};
use crate::foundation::math::{bilerp_corners, mul_div255_u8};
use crate::render::composite::{ColourFilter, CompositeMode, composite};
use crate::surface::pixels::PixelBuffer;

/// How source texels turn into the colour that gets composited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sample {
    /// Source colour and alpha as stored.
    #[default]
    Image,
    /// Source colour with alpha forced to opaque.
    Opaque,
    /// Source alpha used as coverage for a flat colour.
    ColourMask(Rgba),
}

/// Per-draw parameters for [`draw_quad`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuadParams {
    /// Opacity at each corner (top-left, top-right, bottom-right, bottom-left).
    pub opacity: [u8; 4],
    /// Blend with the destination.
    pub mode: CompositeMode,
    /// Destination-space clip rectangle.
    pub clip: Option<Rect>,
    /// Colour adjustments applied to each texel.
    pub filter: ColourFilter,
    /// How texels are read.
    pub sample: Sample,
}

impl Default for QuadParams {
    fn default() -> Self {
        Self {
            opacity: [255; 4],
            mode: CompositeMode::Normal,
            clip: None,
            filter: ColourFilter::default(),
            sample: Sample::Image,
        }
    }
}

impl QuadParams {
    /// Default parameters with a uniform opacity.
    pub fn with_opacity(opacity: u8) -> Self {
        Self {
            opacity: [opacity; 4],
            ..Self::default()
        }
    }
}

/// Draw the `src_quad` region of `src` into the `dst_quad` region of `dst`.
///
/// Both quads are treated as parallelograms spanned by corners 0, 1 and 3, so the mapping is
/// affine (rotation, scale, skew, flips). Sampling is nearest-neighbour at pixel centres and
/// corner opacities are interpolated bilinearly. Returns the number of destination pixels
/// written.
pub fn draw_quad(
    dst: &mut PixelBuffer,
    src: &PixelBuffer,
    src_quad: QuadCoords,
    dst_quad: QuadCoords,
    params: &QuadParams,
) -> usize {
    let dst_map = parallelogram(dst_quad);
    if dst_map.determinant().abs() < 1e-9 {
        return 0;
    }
    let to_unit = dst_map.inverse();
    let src_map = parallelogram(src_quad);

    let mut bounds = dst.rect().intersect(quad_bounds(dst_quad));
    if let Some(clip) = params.clip {
        bounds = bounds.intersect(clip);
    }
    if bounds.is_empty() {
        return 0;
    }

    let mut written = 0;
    for py in bounds.y..bounds.y2() {
        for px in bounds.x..bounds.x2() {
            let uv = to_unit * Point::new(f64::from(px) + 0.5, f64::from(py) + 0.5);
            if !(0.0..1.0).contains(&uv.x) || !(0.0..1.0).contains(&uv.y) {
                continue;
            }
            let sp = src_map * uv;
            let Some(texel) = src.pixel(sp.x.floor() as i32, sp.y.floor() as i32) else {
                continue;
            };
            let colour = shade(texel, params);
            let opacity = bilerp_corners(params.opacity, uv.x, uv.y);
            let Some(under) = dst.pixel(px, py) else {
                continue;
            };
            dst.set_pixel(px, py, composite(under, colour, opacity, params.mode));
            written += 1;
        }
    }
    written
}

fn shade(texel: [u8; 4], params: &QuadParams) -> [u8; 4] {
    match params.sample {
        Sample::Image => params.filter.apply(texel),
        Sample::Opaque => {
            let rgb = unpremul(texel);
            params
                .filter
                .apply(Rgba::new(rgb.r, rgb.g, rgb.b, 255).to_premul())
        }
        Sample::ColourMask(c) => {
            let a = mul_div255_u8(u16::from(c.a), u16::from(texel[3]));
            Rgba::new(c.r, c.g, c.b, a).to_premul()
        }
    }
}

/// Affine map from the unit square onto the parallelogram through corners 0, 1 and 3.
fn parallelogram(q: QuadCoords) -> Affine {
    let q = q.map(f64::from);
    Affine::new([
        q[2] - q[0],
        q[3] - q[1],
        q[6] - q[0],
        q[7] - q[1],
        q[0],
        q[1],
    ])
}

fn quad_bounds(q: QuadCoords) -> Rect {
    let xs = [q[0], q[2], q[4], q[6]];
    let ys = [q[1], q[3], q[5], q[7]];
    let (x1, x2) = (xs.iter().min(), xs.iter().max());
    let (y1, y2) = (ys.iter().min(), ys.iter().max());
    match (x1, x2, y1, y2) {
        (Some(&x1), Some(&x2), Some(&y1), Some(&y2)) => Rect::from_corners(x1, y1, x2, y2),
        _ => Rect::default(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
