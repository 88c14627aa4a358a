use crate::foundation::core::{Canvas, Rgba};
use crate::foundation::error::{SceneError, SceneResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// What the frame cycle does when one object fails to render or tick.
pub enum RenderErrorPolicy {
    /// Stop and return the first error.
    Abort,
    /// Log the failing object and carry on with the rest.
    #[default]
    Skip,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Settings for a [`crate::GraphicsSystem`].
pub struct GraphicsConfig {
    /// Screen width in pixels.
    pub screen_width: u32,
    /// Screen height in pixels.
    pub screen_height: u32,
    /// Number of object slots in each layer.
    pub objects_per_layer: u32,
    /// Straight RGBA8 colour the screen is cleared to before each frame.
    pub clear_rgba: [u8; 4],
    /// What to do when one object fails.
    pub render_errors: RenderErrorPolicy,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            objects_per_layer: 256,
            clear_rgba: [0, 0, 0, 255],
            render_errors: RenderErrorPolicy::Skip,
        }
    }
}

impl GraphicsConfig {
    /// Set the screen size.
    pub fn with_screen(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Set the number of slots per layer.
    pub fn with_objects_per_layer(mut self, n: u32) -> Self {
        self.objects_per_layer = n;
        self
    }

    /// Set the clear colour (straight RGBA8).
    pub fn with_clear_rgba(mut self, rgba: [u8; 4]) -> Self {
        self.clear_rgba = rgba;
        self
    }

    /// Set the render error policy.
    pub fn with_render_errors(mut self, policy: RenderErrorPolicy) -> Self {
        self.render_errors = policy;
        self
    }

    /// Screen dimensions, validated.
    pub fn canvas(&self) -> SceneResult<Canvas> {
        Canvas::new(self.screen_width, self.screen_height)
    }

    /// Clear colour.
    pub fn clear_colour(&self) -> Rgba {
        Rgba::from_array(self.clear_rgba)
    }

    /// Check screen size and slot count.
    pub fn validate(&self) -> SceneResult<()> {
        self.canvas()?;
        if self.objects_per_layer == 0 {
            return Err(SceneError::validation("objects_per_layer must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
