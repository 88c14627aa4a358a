pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Scale a percentage-sized length (100 = unscaled).
pub(crate) fn scale_percent(len: i32, percent: i32) -> i32 {
    ((i64::from(len) * i64::from(percent)) / 100) as i32
}

/// Bilinear interpolation of four corner values at `(u, v)` in the unit square.
///
/// Corner order follows quads: top-left, top-right, bottom-right, bottom-left.
pub(crate) fn bilerp_corners(c: [u8; 4], u: f64, v: f64) -> u8 {
    let [tl, tr, br, bl] = c.map(f64::from);
    let top = tl + (tr - tl) * u;
    let bottom = bl + (br - bl) * u;
    (top + (bottom - top) * v).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
