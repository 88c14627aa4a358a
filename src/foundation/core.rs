use crate::foundation::error::{SceneError, SceneResult};

pub use kurbo::{Affine, Point, Vec2};

/// Largest coordinate magnitude used for clip rectangles.
pub const COORD_LIMIT: i32 = 1 << 30;

/// Integer pixel rectangle, half-open on the right and bottom edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from two corners, `(x1, y1)` inclusive and `(x2, y2)` exclusive.
    ///
    /// Sizes saturate at `i32::MAX`.
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2.saturating_sub(x1),
            height: y2.saturating_sub(y1),
        }
    }

    /// Rectangle at the origin with the given size.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    /// Exclusive right edge, saturating at `i32::MAX`.
    pub fn x2(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at `i32::MAX`.
    pub fn y2(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the rectangle covers no pixels.
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether pixel `(x, y)` lies inside.
    pub fn contains(self, x: i32, y: i32) -> bool {
        self.x <= x && x < self.x2() && self.y <= y && y < self.y2()
    }

    /// Overlap of two rectangles; empty when they do not overlap.
    pub fn intersect(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.x2().min(other.x2());
        let y2 = self.y2().min(other.y2());
        Rect::from_corners(x1, y1, x2.max(x1), y2.max(y1))
    }

    /// Corner coordinates in quad order: top-left, top-right, bottom-right, bottom-left.
    pub fn to_quad(self) -> QuadCoords {
        let (x1, y1, x2, y2) = (self.x, self.y, self.x2(), self.y2());
        [x1, y1, x2, y1, x2, y2, x1, y2]
    }
}

/// Four corners as `[x0, y0, x1, y1, x2, y2, x3, y3]`, ordered top-left, top-right,
/// bottom-right, bottom-left.
pub type QuadCoords = [i32; 8];

/// Object clip region. `x2 < x1` (or `y2 < y1`) means "no clipping".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ClipRect {
    /// Left edge (inclusive).
    pub x1: i32,
    /// Top edge (inclusive).
    pub y1: i32,
    /// Right edge (exclusive).
    pub x2: i32,
    /// Bottom edge (exclusive).
    pub y2: i32,
}

impl ClipRect {
    /// The "no clipping" value objects start with.
    pub const UNCLIPPED: ClipRect = ClipRect {
        x1: 0,
        y1: 0,
        x2: -1,
        y2: -1,
    };

    /// Create a clip from its corners.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Whether this clip disables clipping.
    pub fn is_unclipped(self) -> bool {
        self.x2 < self.x1 || self.y2 < self.y1
    }

    /// The clip as a screen rectangle, or `None` when unclipped.
    ///
    /// Corners are clamped to `±COORD_LIMIT`.
    pub fn as_rect(self) -> Option<Rect> {
        if self.is_unclipped() {
            return None;
        }
        let c = |v: i32| v.clamp(-COORD_LIMIT, COORD_LIMIT);
        Some(Rect::from_corners(
            c(self.x1),
            c(self.y1),
            c(self.x2),
            c(self.y2),
        ))
    }
}

impl Default for ClipRect {
    fn default() -> Self {
        Self::UNCLIPPED
    }
}

/// Straight RGB8 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Opaque white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Straight (non-premultiplied) RGBA8 colour, as scripts specify it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a colour from `[r, g, b, a]`.
    pub fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }

    /// Premultiplied RGBA8 bytes for storage in a pixel buffer.
    pub fn to_premul(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

/// Unpremultiply a stored pixel back into straight colour.
pub fn unpremul(px: [u8; 4]) -> Rgb {
    let a = u16::from(px[3]);
    if a == 0 {
        return Rgb::BLACK;
    }
    let un = |c: u8| -> u8 { ((u16::from(c) * 255 + a / 2) / a).min(255) as u8 };
    Rgb::new(un(px[0]), un(px[1]), un(px[2]))
}

/// Pixel dimensions of the active screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a canvas; both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> SceneResult<Self> {
        if width == 0 || height == 0 {
            return Err(SceneError::validation("canvas dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// The whole canvas as a rectangle.
    pub fn rect(self) -> Rect {
        Rect::from_size(self.width, self.height)
    }
}

/// Placement of a source image on screen.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform2D {
    /// Where the source origin lands on screen.
    pub translate: Vec2,
    /// Clockwise rotation in radians.
    pub rotation_rad: f64,
    /// Per-axis scale factor.
    pub scale: Vec2,  // default (1,1)
    /// Pivot for rotation and scale, in source space.
    pub anchor: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_rad: 0.0,
            scale: Vec2::new(1.0, 1.0),
            anchor: Vec2::ZERO,
        }
    }
}

impl Transform2D {
    /// The transform as a `kurbo` affine.
    pub fn to_affine(self) -> Affine {
        let t_translate = Affine::translate(self.translate);
        let t_anchor = Affine::translate(self.anchor);
        let t_unanchor = Affine::translate(-self.anchor);
        let t_rotate = Affine::rotate(self.rotation_rad);
        let t_scale = Affine::scale_non_uniform(self.scale.x, self.scale.y);

        // T(translate) * T(anchor) * R(rot) * S(scale) * T(-anchor)
        t_translate * t_anchor * t_rotate * t_scale * t_unanchor
    }

    /// Map a source rectangle's corners to integer screen coordinates in quad order.
    pub fn map_rect(self, width: i32, height: i32) -> QuadCoords {
        let a = self.to_affine();
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(f64::from(width), 0.0),
            Point::new(f64::from(width), f64::from(height)),
            Point::new(0.0, f64::from(height)),
        ];
        let mut out = [0i32; 8];
        for (i, p) in corners.into_iter().enumerate() {
            let q = a * p;
            out[i * 2] = q.x.round() as i32;
            out[i * 2 + 1] = q.y.round() as i32;
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
