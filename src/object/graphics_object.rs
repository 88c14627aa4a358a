use crate::foundation::core::{ClipRect, Rgb, Transform2D, Vec2};
use crate::foundation::error::{SceneError, SceneResult};
use crate::object::data::GraphicsObjectData;
use crate::object::handle::ObjectHandle;
use crate::object::text::{
    DEFAULT_TEXT_COLOUR, DEFAULT_TEXT_SHADOW_COLOUR, DEFAULT_TEXT_SIZE, DEFAULT_TEXT_VERTICAL,
    DEFAULT_TEXT_XSPACE, DEFAULT_TEXT_YSPACE, TextProperties,
};
use crate::render::context::{RenderContext, TickContext};
use crate::surface::cache::SurfaceCache;

/// Number of additive position adjustment slots per axis.
pub const ADJUSTMENT_SLOTS: usize = 8;

/// Plain transform, compositing and clipping state of a [`GraphicsObject`].
///
/// Kept separate from the payload so state can be compared and snapshotted field-for-field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectParams {
    /// Drawn only when set.
    pub visible: bool,
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
    /// Additive horizontal offsets.
    pub adjust_x: [i32; ADJUSTMENT_SLOTS],
    /// Additive vertical offsets.
    pub adjust_y: [i32; ADJUSTMENT_SLOTS],
    /// Which vertical adjustment channel scripts write to.
    pub adjust_vert_operates_on: i32,
    /// Horizontal pivot in source pixels.
    pub origin_x: i32,
    /// Vertical pivot in source pixels.
    pub origin_y: i32,
    /// Extra horizontal pivot offset for repeated copies.
    pub rep_origin_x: i32,
    /// Extra vertical pivot offset for repeated copies.
    pub rep_origin_y: i32,
    /// Horizontal scale in percent (100 = unscaled).
    pub width: i32,
    /// Vertical scale in percent (100 = unscaled).
    pub height: i32,
    /// Tenths of a degree, clockwise in screen space.
    pub rotation: i32,
    /// Pattern (sprite-sheet cell) index.
    pub patt_no: i32,
    /// Whole-object opacity.
    pub alpha: u8,
    /// Screen-space clip.
    pub clip: ClipRect,
    /// Draw in greyscale.
    pub mono: bool,
    /// Invert colours.
    pub invert: bool,
    /// Brightness offset added to every channel.
    pub light: i32,
    /// Multiplicative tint; white is identity.
    pub tint: Rgb,
    /// Overlay colour.
    pub colour: Rgb,
    /// Overlay strength; 0 disables it.
    pub colour_level: u8,
    /// 0 normal, 1 additive, 2 subtractive.
    pub composite_mode: i32,
    /// Horizontal scroll rate.
    pub scroll_rate_x: i32,
    /// Vertical scroll rate.
    pub scroll_rate_y: i32,
    /// Whether the object takes part in wipe copies.
    pub wipe_copy: bool,
}

impl Default for ObjectParams {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0,
            y: 0,
            adjust_x: [0; ADJUSTMENT_SLOTS],
            adjust_y: [0; ADJUSTMENT_SLOTS],
            adjust_vert_operates_on: 0,
            origin_x: 0,
            origin_y: 0,
            rep_origin_x: 0,
            rep_origin_y: 0,
            width: 100,
            height: 100,
            rotation: 0,
            patt_no: 0,
            alpha: 255,
            clip: ClipRect::UNCLIPPED,
            mono: false,
            invert: false,
            light: 0,
            tint: Rgb::WHITE,
            colour: Rgb::BLACK,
            colour_level: 0,
            composite_mode: 0,
            scroll_rate_x: 0,
            scroll_rate_y: 0,
            wipe_copy: false,
        }
    }
}

/// A scene-graph node: mutable state plus an optional, exclusively owned payload.
///
/// Copies are deep: text properties are duplicated and the payload is cloned through
/// [`GraphicsObjectData::clone_box`], so no two objects ever share payload state.
#[derive(Debug, Default)]
pub struct GraphicsObject {
    params: ObjectParams,
    text: Option<Box<TextProperties>>,
    data: Option<Box<dyn GraphicsObjectData>>,
    handle: ObjectHandle,
}

impl Clone for GraphicsObject {
    /// A detached deep copy. Storing it in a layer re-points its payload.
    fn clone(&self) -> Self {
        let mut data = self.data.clone();
        if let Some(d) = data.as_mut() {
            d.set_owned_by(ObjectHandle::Detached);
        }
        Self {
            params: self.params.clone(),
            text: self.text.clone(),
            data,
            handle: ObjectHandle::Detached,
        }
    }

    /// Assignment: copy `source`'s state and payload into `self`, keeping `self`'s identity.
    fn clone_from(&mut self, source: &Self) {
        self.params.clone_from(&source.params);
        self.text.clone_from(&source.text);
        self.data = source.data.clone();
        if let Some(d) = self.data.as_mut() {
            d.set_owned_by(self.handle);
        }
    }
}

impl GraphicsObject {
    /// Default, invisible object with no payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain state.
    pub fn params(&self) -> &ObjectParams {
        &self.params
    }

    /// Mutable plain state.
    pub fn params_mut(&mut self) -> &mut ObjectParams {
        &mut self.params
    }

    /// Slot this object lives in.
    pub fn handle(&self) -> ObjectHandle {
        self.handle
    }

    /// Record the slot this object now lives in and re-point the payload at it.
    pub fn attach(&mut self, handle: ObjectHandle) {
        self.handle = handle;
        if let Some(d) = self.data.as_mut() {
            d.set_owned_by(handle);
        }
    }

    // --- payload -----------------------------------------------------------------------------

    /// Take ownership of `data`, dropping any previous payload.
    pub fn set_object_data(&mut self, mut data: Box<dyn GraphicsObjectData>) {
        data.set_owned_by(self.handle);
        self.data = Some(data);
    }

    /// Whether a payload is attached.
    pub fn has_object_data(&self) -> bool {
        self.data.is_some()
    }

    /// The payload, or [`SceneError::NullData`].
    pub fn object_data(&self) -> SceneResult<&dyn GraphicsObjectData> {
        self.data
            .as_deref()
            .ok_or(SceneError::NullData("object_data"))
    }

    /// Mutable payload, or [`SceneError::NullData`].
    pub fn object_data_mut(&mut self) -> SceneResult<&mut (dyn GraphicsObjectData + 'static)> {
        self.data
            .as_deref_mut()
            .ok_or(SceneError::NullData("object_data_mut"))
    }

    /// Non-failing accessor for callers that tolerate a missing payload.
    pub fn object_data_ptr(&self) -> Option<&dyn GraphicsObjectData> {
        self.data.as_deref()
    }

    /// Payload width in screen pixels; `0` without a payload.
    pub fn pixel_width(&self, surfaces: &SurfaceCache) -> SceneResult<i32> {
        match self.data.as_deref() {
            Some(d) => d.pixel_width(surfaces, self),
            None => Ok(0),
        }
    }

    /// Payload height in screen pixels; `0` without a payload.
    pub fn pixel_height(&self, surfaces: &SurfaceCache) -> SceneResult<i32> {
        match self.data.as_deref() {
            Some(d) => d.pixel_height(surfaces, self),
            None => Ok(0),
        }
    }

    /// Draw through the payload. Invisible or empty objects draw nothing.
    pub fn render(&self, ctx: &mut RenderContext<'_>) -> SceneResult<()> {
        match self.data.as_deref() {
            Some(d) if self.params.visible => d.render(ctx, self),
            _ => Ok(()),
        }
    }

    /// Advance the payload by one tick. No-op without a payload.
    pub fn execute(&mut self, ctx: &TickContext<'_>) -> SceneResult<()> {
        match self.data.as_deref_mut() {
            Some(d) => d.execute(ctx),
            None => Ok(()),
        }
    }

    /// Drop the payload; all other state is kept.
    pub fn delete_object(&mut self) {
        self.data = None;
    }

    /// Reset state, text and payload to a freshly constructed object. Identity is kept.
    pub fn clear_object(&mut self) {
        self.params = ObjectParams::default();
        self.text = None;
        self.data = None;
    }

    // --- placement ---------------------------------------------------------------------------

    /// Sum of the horizontal adjustment slots, wrapping on overflow.
    pub fn x_adjustment_sum(&self) -> i32 {
        self.params.adjust_x.iter().fold(0, |acc, &v| acc.wrapping_add(v))
    }

    /// Sum of the vertical adjustment slots, wrapping on overflow.
    pub fn y_adjustment_sum(&self) -> i32 {
        self.params.adjust_y.iter().fold(0, |acc, &v| acc.wrapping_add(v))
    }

    /// Horizontal adjustment in `slot`.
    pub fn x_adjustment(&self, slot: usize) -> SceneResult<i32> {
        self.params
            .adjust_x
            .get(slot)
            .copied()
            .ok_or_else(|| bad_slot(slot))
    }

    /// Vertical adjustment in `slot`.
    pub fn y_adjustment(&self, slot: usize) -> SceneResult<i32> {
        self.params
            .adjust_y
            .get(slot)
            .copied()
            .ok_or_else(|| bad_slot(slot))
    }

    /// Set the horizontal adjustment in `slot`.
    pub fn set_x_adjustment(&mut self, slot: usize, value: i32) -> SceneResult<()> {
        let v = self
            .params
            .adjust_x
            .get_mut(slot)
            .ok_or_else(|| bad_slot(slot))?;
        *v = value;
        Ok(())
    }

    /// Set the vertical adjustment in `slot`.
    pub fn set_y_adjustment(&mut self, slot: usize, value: i32) -> SceneResult<()> {
        let v = self
            .params
            .adjust_y
            .get_mut(slot)
            .ok_or_else(|| bad_slot(slot))?;
        *v = value;
        Ok(())
    }

    /// Zero every adjustment slot.
    pub fn reset_adjustments(&mut self) {
        self.params.adjust_x = [0; ADJUSTMENT_SLOTS];
        self.params.adjust_y = [0; ADJUSTMENT_SLOTS];
    }

    /// Source-to-screen transform for an image drawn by this object.
    ///
    /// The object's position plus adjustment sums (plus `offset`) is where the origin lands;
    /// scaling and rotation pivot around the origin. The repetition origin shifts the origin
    /// for tiled copies.
    pub fn placement(&self, offset: (i32, i32)) -> Transform2D {
        let p = &self.params;
        let sum = |vals: &[i32]| vals.iter().map(|&v| f64::from(v)).sum::<f64>();
        let anchor = Vec2::new(
            f64::from(p.origin_x) + f64::from(p.rep_origin_x),
            f64::from(p.origin_y) + f64::from(p.rep_origin_y),
        );
        let pos = Vec2::new(
            f64::from(p.x) + sum(&p.adjust_x) + f64::from(offset.0),
            f64::from(p.y) + sum(&p.adjust_y) + f64::from(offset.1),
        );
        Transform2D {
            translate: pos - anchor,
            rotation_rad: (f64::from(p.rotation) / 10.0).to_radians(),
            scale: Vec2::new(f64::from(p.width) / 100.0, f64::from(p.height) / 100.0),
            anchor,
        }
    }

    // --- text --------------------------------------------------------------------------------

    /// Whether text properties have been allocated.
    pub fn has_text_properties(&self) -> bool {
        self.text.is_some()
    }

    /// Text properties, if any text has been written.
    pub fn text_properties(&self) -> Option<&TextProperties> {
        self.text.as_deref()
    }

    fn text_properties_mut(&mut self) -> &mut TextProperties {
        self.text.get_or_insert_with(Box::default)
    }

    /// Set the text, allocating text properties if needed.
    pub fn set_text_text(&mut self, utf8: impl Into<String>) {
        self.text_properties_mut().value = utf8.into();
    }

    /// Set text styling, allocating text properties if needed.
    pub fn set_text_ops(
        &mut self,
        size: i32,
        x_space: i32,
        y_space: i32,
        vertical: bool,
        colour: i32,
        shadow_colour: i32,
    ) {
        let t = self.text_properties_mut();
        t.size = size;
        t.x_space = x_space;
        t.y_space = y_space;
        t.vertical = vertical;
        t.colour = colour;
        t.shadow_colour = shadow_colour;
    }

    /// Text value, empty by default.
    pub fn text_text(&self) -> &str {
        self.text.as_deref().map_or("", |t| t.value.as_str())
    }

    /// Font size.
    pub fn text_size(&self) -> i32 {
        self.text.as_deref().map_or(DEFAULT_TEXT_SIZE, |t| t.size)
    }

    /// Extra horizontal spacing between glyphs.
    pub fn text_x_space(&self) -> i32 {
        self.text.as_deref().map_or(DEFAULT_TEXT_XSPACE, |t| t.x_space)
    }

    /// Extra vertical spacing between lines.
    pub fn text_y_space(&self) -> i32 {
        self.text.as_deref().map_or(DEFAULT_TEXT_YSPACE, |t| t.y_space)
    }

    /// Whether text runs top to bottom.
    pub fn text_vertical(&self) -> bool {
        self.text
            .as_deref()
            .map_or(DEFAULT_TEXT_VERTICAL, |t| t.vertical)
    }

    /// Text colour palette index.
    pub fn text_colour(&self) -> i32 {
        self.text.as_deref().map_or(DEFAULT_TEXT_COLOUR, |t| t.colour)
    }

    /// Shadow colour palette index.
    pub fn text_shadow_colour(&self) -> i32 {
        self.text
            .as_deref()
            .map_or(DEFAULT_TEXT_SHADOW_COLOUR, |t| t.shadow_colour)
    }

    // --- plain state -------------------------------------------------------------------------

    /// Whether the object is drawn.
    pub fn visible(&self) -> bool {
        self.params.visible
    }

    /// Show or hide the object.
    pub fn set_visible(&mut self, visible: bool) {
        self.params.visible = visible;
    }

    /// Horizontal position.
    pub fn x(&self) -> i32 {
        self.params.x
    }

    /// Set the horizontal position.
    pub fn set_x(&mut self, x: i32) {
        self.params.x = x;
    }

    /// Vertical position.
    pub fn y(&self) -> i32 {
        self.params.y
    }

    /// Set the vertical position.
    pub fn set_y(&mut self, y: i32) {
        self.params.y = y;
    }

    /// Selected vertical adjustment channel.
    pub fn adjust_vert_operates_on(&self) -> i32 {
        self.params.adjust_vert_operates_on
    }

    /// Select the vertical adjustment channel.
    pub fn set_adjust_vert_operates_on(&mut self, channel: i32) {
        self.params.adjust_vert_operates_on = channel;
    }

    /// Pivot in source pixels.
    pub fn origin(&self) -> (i32, i32) {
        (self.params.origin_x, self.params.origin_y)
    }

    /// Set the pivot.
    pub fn set_origin(&mut self, x: i32, y: i32) {
        self.params.origin_x = x;
        self.params.origin_y = y;
    }

    /// Repetition pivot offset.
    pub fn rep_origin(&self) -> (i32, i32) {
        (self.params.rep_origin_x, self.params.rep_origin_y)
    }

    /// Set the repetition pivot offset.
    pub fn set_rep_origin(&mut self, x: i32, y: i32) {
        self.params.rep_origin_x = x;
        self.params.rep_origin_y = y;
    }

    /// Horizontal scale percentage.
    pub fn width(&self) -> i32 {
        self.params.width
    }

    /// Set the horizontal scale percentage.
    pub fn set_width(&mut self, percent: i32) {
        self.params.width = percent;
    }

    /// Vertical scale percentage.
    pub fn height(&self) -> i32 {
        self.params.height
    }

    /// Set the vertical scale percentage.
    pub fn set_height(&mut self, percent: i32) {
        self.params.height = percent;
    }

    /// Rotation in tenths of a degree.
    pub fn rotation(&self) -> i32 {
        self.params.rotation
    }

    /// Set the rotation in tenths of a degree.
    pub fn set_rotation(&mut self, tenths_of_degree: i32) {
        self.params.rotation = tenths_of_degree;
    }

    /// Pattern index.
    pub fn patt_no(&self) -> i32 {
        self.params.patt_no
    }

    /// Set the pattern index.
    pub fn set_patt_no(&mut self, patt_no: i32) {
        self.params.patt_no = patt_no;
    }

    /// Whole-object opacity.
    pub fn alpha(&self) -> u8 {
        self.params.alpha
    }

    /// Set the opacity.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.params.alpha = alpha;
    }

    /// Clip rectangle.
    pub fn clip(&self) -> ClipRect {
        self.params.clip
    }

    /// Set the clip rectangle.
    pub fn set_clip(&mut self, clip: ClipRect) {
        self.params.clip = clip;
    }

    /// Disable clipping.
    pub fn clear_clip(&mut self) {
        self.params.clip = ClipRect::UNCLIPPED;
    }

    /// Whether clipping is enabled.
    pub fn has_clip(&self) -> bool {
        !self.params.clip.is_unclipped()
    }

    /// Whether greyscale is on.
    pub fn mono(&self) -> bool {
        self.params.mono
    }

    /// Toggle greyscale.
    pub fn set_mono(&mut self, mono: bool) {
        self.params.mono = mono;
    }

    /// Whether colour inversion is on.
    pub fn invert(&self) -> bool {
        self.params.invert
    }

    /// Toggle colour inversion.
    pub fn set_invert(&mut self, invert: bool) {
        self.params.invert = invert;
    }

    /// Brightness offset.
    pub fn light(&self) -> i32 {
        self.params.light
    }

    /// Set the brightness offset.
    pub fn set_light(&mut self, light: i32) {
        self.params.light = light;
    }

    /// Multiplicative tint.
    pub fn tint(&self) -> Rgb {
        self.params.tint
    }

    /// Set the tint.
    pub fn set_tint(&mut self, tint: Rgb) {
        self.params.tint = tint;
    }

    /// Overlay colour.
    pub fn colour(&self) -> Rgb {
        self.params.colour
    }

    /// Overlay strength.
    pub fn colour_level(&self) -> u8 {
        self.params.colour_level
    }

    /// Set the overlay colour and strength.
    pub fn set_colour(&mut self, colour: Rgb, level: u8) {
        self.params.colour = colour;
        self.params.colour_level = level;
    }

    /// Raw composite mode selector.
    pub fn composite_mode(&self) -> i32 {
        self.params.composite_mode
    }

    /// Set the raw composite mode selector.
    pub fn set_composite_mode(&mut self, mode: i32) {
        self.params.composite_mode = mode;
    }

    /// Scroll rate per axis.
    pub fn scroll_rate(&self) -> (i32, i32) {
        (self.params.scroll_rate_x, self.params.scroll_rate_y)
    }

    /// Set the scroll rate per axis.
    pub fn set_scroll_rate(&mut self, x: i32, y: i32) {
        self.params.scroll_rate_x = x;
        self.params.scroll_rate_y = y;
    }

    /// Wipe-copy flag.
    pub fn wipe_copy(&self) -> bool {
        self.params.wipe_copy
    }

    /// Set the wipe-copy flag.
    pub fn set_wipe_copy(&mut self, wipe_copy: bool) {
        self.params.wipe_copy = wipe_copy;
    }
}

fn bad_slot(slot: usize) -> SceneError {
    SceneError::validation(format!(
        "adjustment slot {slot} out of range (0..{ADJUSTMENT_SLOTS})"
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/object/graphics_object.rs"]
mod tests;
