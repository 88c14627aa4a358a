use std::any::Any;

use crate::foundation::error::{SceneError, SceneResult};
use crate::object::data::{GraphicsObjectData, GraphicsObjectOverride};
use crate::object::graphics_object::GraphicsObject;
use crate::object::handle::ObjectHandle;
use crate::payload::scaled_size;
use crate::render::context::{RenderContext, TickContext};
use crate::surface::cache::SurfaceCache;

/// What an animation does once its last frame has been shown for its full duration.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AfterAnimation {
    /// Start again from the first frame.
    #[default]
    Loop,
    /// Stop on the last frame.
    Hold,
    /// Stop and draw nothing.
    Hide,
}

/// One pattern shown for a fixed time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AnimationFrame {
    /// Pattern shown.
    pub patt_no: i32,
    /// How long the pattern stays up.
    pub duration_ms: u32,
}

impl AnimationFrame {
    /// Frame showing `patt_no` for `duration_ms`.
    pub fn new(patt_no: i32, duration_ms: u32) -> Self {
        Self {
            patt_no,
            duration_ms,
        }
    }
}

/// Frame sequence over the patterns of one surface, advanced by `execute`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationData {
    surface: String,
    frames: Vec<AnimationFrame>,
    after: AfterAnimation,
    current: usize,
    elapsed_in_frame: u32,
    playing: bool,
    hidden: bool,
    owner: ObjectHandle,
}

impl AnimationData {
    /// Animation over the patterns of `surface`. Needs at least one frame and no zero durations.
    pub fn new(
        surface: impl Into<String>,
        frames: Vec<AnimationFrame>,
        after: AfterAnimation,
    ) -> SceneResult<Self> {
        if frames.is_empty() {
            return Err(SceneError::validation("animation needs at least one frame"));
        }
        if let Some(i) = frames.iter().position(|f| f.duration_ms == 0) {
            return Err(SceneError::validation(format!(
                "animation frame {i} has zero duration"
            )));
        }
        Ok(Self {
            surface: surface.into(),
            frames,
            after,
            current: 0,
            elapsed_in_frame: 0,
            playing: true,
            hidden: false,
            owner: ObjectHandle::Detached,
        })
    }

    /// Name of the surface the patterns come from.
    pub fn surface_name(&self) -> &str {
        &self.surface
    }

    /// Frame sequence.
    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    /// Behaviour after the last frame.
    pub fn after(&self) -> AfterAnimation {
        self.after
    }

    /// Index of the frame currently shown.
    pub fn current_frame(&self) -> usize {
        self.current
    }

    /// Pattern of the frame currently shown.
    pub fn current_patt_no(&self) -> i32 {
        self.frames[self.current].patt_no
    }

    /// Whether ticks still advance the animation.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether a [`AfterAnimation::Hide`] animation has run to completion.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Restart from the first frame.
    pub fn rewind(&mut self) {
        self.current = 0;
        self.elapsed_in_frame = 0;
        self.playing = true;
        self.hidden = false;
    }

    fn finish(&mut self) {
        self.playing = false;
        self.elapsed_in_frame = 0;
        self.hidden = self.after == AfterAnimation::Hide;
    }

    fn current_size(
        &self,
        surfaces: &SurfaceCache,
        owner: &GraphicsObject,
    ) -> SceneResult<(i32, i32)> {
        if self.hidden {
            return Ok((0, 0));
        }
        let region = surfaces.get(&self.surface)?.region(self.current_patt_no());
        Ok(scaled_size(region, owner))
    }
}

impl GraphicsObjectData for AnimationData {
    fn render(&self, ctx: &mut RenderContext<'_>, owner: &GraphicsObject) -> SceneResult<()> {
        if self.hidden {
            return Ok(());
        }
        let surfaces = ctx.surfaces;
        let ov = GraphicsObjectOverride::default().with_patt_no(self.current_patt_no());
        surfaces
            .get(&self.surface)?
            .render_to_screen_as_object_with(ctx.screen, owner, &ov)
    }

    fn execute(&mut self, ctx: &TickContext<'_>) -> SceneResult<()> {
        if !self.playing {
            return Ok(());
        }
        self.elapsed_in_frame = self.elapsed_in_frame.saturating_add(ctx.elapsed_ms);
        if self.after == AfterAnimation::Loop {
            // Whole cycles land back on the same frame and offset.
            let cycle: u64 = self.frames.iter().map(|f| u64::from(f.duration_ms)).sum();
            if u64::from(self.elapsed_in_frame) >= cycle {
                self.elapsed_in_frame = (u64::from(self.elapsed_in_frame) % cycle) as u32;
            }
        }
        while self.playing && self.elapsed_in_frame >= self.frames[self.current].duration_ms {
            self.elapsed_in_frame -= self.frames[self.current].duration_ms;
            if self.current + 1 < self.frames.len() {
                self.current += 1;
            } else if self.after == AfterAnimation::Loop {
                self.current = 0;
            } else {
                self.finish();
            }
        }
        tracing::trace!(
            frame = self.current,
            playing = self.playing,
            owner = %self.owner,
            "animation advanced"
        );
        Ok(())
    }

    fn pixel_width(&self, surfaces: &SurfaceCache, owner: &GraphicsObject) -> SceneResult<i32> {
        Ok(self.current_size(surfaces, owner)?.0)
    }

    fn pixel_height(&self, surfaces: &SurfaceCache, owner: &GraphicsObject) -> SceneResult<i32> {
        Ok(self.current_size(surfaces, owner)?.1)
    }

    fn clone_box(&self) -> Box<dyn GraphicsObjectData> {
        Box::new(self.clone())
    }

    fn set_owned_by(&mut self, owner: ObjectHandle) {
        self.owner = owner;
    }

    fn owned_by(&self) -> ObjectHandle {
        self.owner
    }

    fn kind(&self) -> &'static str {
        "animation"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/payload/animation.rs"]
mod tests;
