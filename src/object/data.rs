use std::any::Any;
use std::fmt;

use crate::foundation::core::Rect;
use crate::foundation::error::SceneResult;
use crate::object::graphics_object::GraphicsObject;
use crate::object::handle::ObjectHandle;
use crate::render::context::{RenderContext, TickContext};
use crate::surface::cache::SurfaceCache;

/// Renderable payload owned by exactly one [`GraphicsObject`].
///
/// Implementors hold resource *names* and resolve them through the [`SurfaceCache`] on every
/// call; surfaces themselves stay owned by the graphics subsystem.
pub trait GraphicsObjectData: fmt::Debug {
    /// Draw this payload using `owner`'s transform and compositing state.
    fn render(&self, ctx: &mut RenderContext<'_>, owner: &GraphicsObject) -> SceneResult<()>;

    /// Advance internal time state by one tick.
    fn execute(&mut self, _ctx: &TickContext<'_>) -> SceneResult<()> {
        Ok(())
    }

    /// On-screen width in pixels, with `owner`'s scale percentages applied.
    fn pixel_width(&self, surfaces: &SurfaceCache, owner: &GraphicsObject) -> SceneResult<i32>;

    /// On-screen height in pixels, with `owner`'s scale percentages applied.
    fn pixel_height(&self, surfaces: &SurfaceCache, owner: &GraphicsObject) -> SceneResult<i32>;

    /// Deep copy used when the owning object is copied.
    fn clone_box(&self) -> Box<dyn GraphicsObjectData>;

    /// Point the owner back-reference at `owner`.
    fn set_owned_by(&mut self, owner: ObjectHandle);

    /// Current owner back-reference.
    fn owned_by(&self) -> ObjectHandle;

    /// Short payload kind name used in logs.
    fn kind(&self) -> &'static str;

    /// Downcast support for callers that need the concrete payload.
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast support.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl Clone for Box<dyn GraphicsObjectData> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Parameters a payload may substitute when rendering an object, without mutating it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphicsObjectOverride {
    /// Pattern to draw instead of the object's.
    pub patt_no: Option<i32>,
    /// Opacity to use instead of the object's.
    pub alpha: Option<u8>,
    /// Explicit source rectangle, bypassing pattern lookup.
    pub src_rect: Option<Rect>,
    /// Extra screen offset added to the object's position.
    pub dest_offset: Option<(i32, i32)>,
}

impl GraphicsObjectOverride {
    /// Substitute the pattern index.
    pub fn with_patt_no(mut self, patt_no: i32) -> Self {
        self.patt_no = Some(patt_no);
        self
    }

    /// Substitute the opacity.
    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Substitute the source rectangle.
    pub fn with_src_rect(mut self, rect: Rect) -> Self {
        self.src_rect = Some(rect);
        self
    }

    /// Shift the destination.
    pub fn with_dest_offset(mut self, dx: i32, dy: i32) -> Self {
        self.dest_offset = Some((dx, dy));
        self
    }
}
