/// A rendered frame as RGBA8 pixels.
///
/// Frames read back from the screen are **premultiplied alpha**. The `premultiplied` flag makes
/// this explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha bytes, converting if needed.
    pub fn to_straight(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let rgb = crate::foundation::core::unpremul([px[0], px[1], px[2], px[3]]);
            px[0] = rgb.r;
            px[1] = rgb.g;
            px[2] = rgb.b;
        }
        out
    }
}
