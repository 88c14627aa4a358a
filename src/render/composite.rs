use crate::foundation::core::{Rgb, Rgba, unpremul};
use crate::foundation::math::mul_div255_u8;
use crate::object::graphics_object::GraphicsObject;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// How a source pixel combines with the destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompositeMode {
    /// Porter-Duff source-over.
    #[default]
    Normal,
    /// Destination colour plus source colour.
    Additive,
    /// Destination colour minus source colour.
    Subtractive,
}

impl CompositeMode {
    /// Interpret a script-level composite selector.
    pub fn from_raw(mode: i32) -> Option<Self> {
        match mode {
            0 => Some(Self::Normal),
            1 => Some(Self::Additive),
            2 => Some(Self::Subtractive),
            _ => None,
        }
    }

    /// Like [`CompositeMode::from_raw`], falling back to `Normal` for unknown selectors.
    pub fn from_raw_or_normal(mode: i32) -> Self {
        Self::from_raw(mode).unwrap_or_else(|| {
            tracing::warn!(mode, "unknown composite mode, drawing as normal");
            Self::Normal
        })
    }
}

/// Source-over `src` onto `dst`, scaled by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: u8) -> PremulRgba8 {
    if opacity == 0 || src[3] == 0 {
        return dst;
    }

    let op = u16::from(opacity);
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Add `src` colour to `dst`, scaled by `opacity`.
pub fn add(dst: PremulRgba8, src: PremulRgba8, opacity: u8) -> PremulRgba8 {
    arith(dst, src, opacity, |d, s| d.saturating_add(s))
}

/// Subtract `src` colour from `dst`, scaled by `opacity`.
pub fn subtract(dst: PremulRgba8, src: PremulRgba8, opacity: u8) -> PremulRgba8 {
    arith(dst, src, opacity, |d, s| d.saturating_sub(s))
}

fn arith(
    dst: PremulRgba8,
    src: PremulRgba8,
    opacity: u8,
    op_fn: impl Fn(u8, u8) -> u8,
) -> PremulRgba8 {
    if opacity == 0 || src[3] == 0 {
        return dst;
    }
    let op = u16::from(opacity);
    let sa = mul_div255(u16::from(src[3]), op);
    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));
    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        // Premultiplied channels can not exceed alpha.
        out[i] = op_fn(dst[i], sc).min(out[3]);
    }
    out
}

/// Blend `src` onto `dst` with `mode`.
pub fn composite(
    dst: PremulRgba8,
    src: PremulRgba8,
    opacity: u8,
    mode: CompositeMode,
) -> PremulRgba8 {
    match mode {
        CompositeMode::Normal => over(dst, src, opacity),
        CompositeMode::Additive => add(dst, src, opacity),
        CompositeMode::Subtractive => subtract(dst, src, opacity),
    }
}

/// Per-pixel colour adjustments an object applies to its source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColourFilter {
    /// Multiplicative tint.
    pub tint: Rgb,
    /// Overlay colour.
    pub colour: Rgb,
    /// Overlay strength.
    pub colour_level: u8,
    /// Greyscale.
    pub mono: bool,
    /// Invert colours.
    pub invert: bool,
    /// Brightness offset.
    pub light: i32,
}

impl Default for ColourFilter {
    fn default() -> Self {
        Self {
            tint: Rgb::WHITE,
            colour: Rgb::BLACK,
            colour_level: 0,
            mono: false,
            invert: false,
            light: 0,
        }
    }
}

impl ColourFilter {
    /// Filter described by `obj`'s colour state.
    pub fn from_object(obj: &GraphicsObject) -> Self {
        Self {
            tint: obj.tint(),
            colour: obj.colour(),
            colour_level: obj.colour_level(),
            mono: obj.mono(),
            invert: obj.invert(),
            light: obj.light(),
        }
    }

    /// Whether applying the filter changes nothing.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Apply mono, invert, light, tint and colour overlay, in that order.
    pub fn apply(&self, px: PremulRgba8) -> PremulRgba8 {
        if px[3] == 0 || self.is_identity() {
            return px;
        }
        let Rgb { r, g, b } = unpremul(px);
        let mut c = [r, g, b];

        if self.mono {
            let l = ((u32::from(c[0]) * 77 + u32::from(c[1]) * 151 + u32::from(c[2]) * 28) >> 8)
                as u8;
            c = [l, l, l];
        }
        if self.invert {
            c = c.map(|v| 255 - v);
        }
        if self.light != 0 {
            c = c.map(|v| i32::from(v).saturating_add(self.light).clamp(0, 255) as u8);
        }
        let tint = [self.tint.r, self.tint.g, self.tint.b];
        let colour = [self.colour.r, self.colour.g, self.colour.b];
        let level = i32::from(self.colour_level);
        for i in 0..3 {
            c[i] = mul_div255(u16::from(c[i]), u16::from(tint[i]));
            if level > 0 {
                let from = i32::from(c[i]);
                let to = i32::from(colour[i]);
                c[i] = (from + (to - from) * level / 255).clamp(0, 255) as u8;
            }
        }

        Rgba::new(c[0], c[1], c[2], px[3]).to_premul()
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    mul_div255_u8(x, y)
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
