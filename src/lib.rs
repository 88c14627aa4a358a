//! vn-scene is the scene-graph and surface-rendering core of a visual-novel style 2D engine.
//!
//! It manages on-screen graphics objects (sprites, text blocks, animations), each with its own
//! transform, compositing and clipping state, and draws them through a backend-agnostic
//! [`Surface`] contract.
//!
//! # Frame cycle
//!
//! 1. **Mutate**: a driver (script interpreter, scene file) changes [`GraphicsObject`] state.
//! 2. **Tick**: [`GraphicsSystem::tick`] advances every payload once.
//! 3. **Render**: [`GraphicsSystem::render_frame`] draws background then foreground objects in
//!    slot order onto the [`Screen`].
//! 4. **Read back** (optional): [`GraphicsSystem::frame`] / [`GraphicsSystem::save_png`].
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Value semantics**: copying an object deep-copies its payload; payloads are never shared.
//! - **Explicit capability gaps**: surfaces that can not perform an operation return
//!   [`SceneError::Unsupported`] instead of silently doing nothing.
//! - **Premultiplied RGBA8** in every pixel buffer; straight colour only at API edges.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod object;
mod payload;
mod render;
mod scene;
mod surface;

pub use foundation::core::{
    Affine, Canvas, ClipRect, Point, QuadCoords, Rect, Rgb, Rgba, Transform2D, Vec2, unpremul,
};
pub use foundation::error::{SceneError, SceneResult};
pub use object::data::{GraphicsObjectData, GraphicsObjectOverride};
pub use object::graphics_object::{ADJUSTMENT_SLOTS, GraphicsObject, ObjectParams};
pub use object::handle::{LayerKind, ObjectHandle};
pub use object::text::{
    DEFAULT_TEXT_COLOUR, DEFAULT_TEXT_SHADOW_COLOUR, DEFAULT_TEXT_SIZE, DEFAULT_TEXT_VERTICAL,
    DEFAULT_TEXT_XSPACE, DEFAULT_TEXT_YSPACE, TextProperties,
};
pub use payload::animation::{AfterAnimation, AnimationData, AnimationFrame};
pub use payload::image::ImageData;
pub use payload::render_target::RenderTargetData;
pub use payload::text::{TextData, TextRenderer};
pub use render::composite::{
    ColourFilter, CompositeMode, PremulRgba8, add, composite, over, subtract,
};
pub use render::context::{RenderContext, TickContext};
pub use render::frame::FrameRGBA;
pub use render::object::ObjectDraw;
pub use render::raster::{QuadParams, Sample, draw_quad};
pub use scene::config::{GraphicsConfig, RenderErrorPolicy};
pub use scene::def::{DataDef, ObjectDef, SceneDef, SurfaceDef, SurfaceSource};
pub use scene::layer::ObjectLayer;
pub use scene::system::{GraphicsSystem, PassStats};
pub use surface::Surface;
pub use surface::cache::SurfaceCache;
pub use surface::pixels::PixelBuffer;
pub use surface::render_to_texture::RenderToTextureSurface;
pub use surface::screen::Screen;
pub use surface::software::SoftwareSurface;
pub use surface::texture::{PixelTexture, Texture};
