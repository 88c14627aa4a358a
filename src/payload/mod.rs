//! Concrete [`GraphicsObjectData`](crate::GraphicsObjectData) payloads.

use crate::foundation::core::Rect;
use crate::foundation::math::scale_percent;
use crate::object::graphics_object::GraphicsObject;

pub mod animation;
pub mod image;
pub mod render_target;
pub mod text;

/// On-screen size of `region` once `owner`'s scale percentages are applied.
pub(crate) fn scaled_size(region: Rect, owner: &GraphicsObject) -> (i32, i32) {
    (
        scale_percent(region.width, owner.width()),
        scale_percent(region.height, owner.height()),
    )
}
