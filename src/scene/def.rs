use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::core::{ClipRect, Rect, Rgb, Rgba};
use crate::foundation::error::{SceneError, SceneResult};
use crate::object::graphics_object::GraphicsObject;
use crate::object::handle::LayerKind;
use crate::payload::animation::{AfterAnimation, AnimationData, AnimationFrame};
use crate::payload::image::ImageData;
use crate::payload::render_target::RenderTargetData;
use crate::payload::text::TextData;
use crate::scene::config::GraphicsConfig;
use crate::scene::system::GraphicsSystem;
use crate::surface::software::SoftwareSurface;

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// JSON description of a scene: settings, named surfaces and initial object state.
pub struct SceneDef {
    /// System settings.
    #[serde(default)]
    pub config: GraphicsConfig,
    /// Surfaces keyed by the name payloads refer to them by.
    #[serde(default)]
    pub surfaces: BTreeMap<String, SurfaceDef>,
    /// Initial object state, one entry per populated slot.
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Where a surface's pixels come from, plus its optional pattern table.
pub struct SurfaceDef {
    /// Pixel source.
    #[serde(flatten)]
    pub source: SurfaceSource,
    /// Explicit pattern regions. Takes precedence over `grid`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<Rect>,
    /// Uniform `[columns, rows]` pattern grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<[u32; 2]>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Pixel source of a [`SurfaceDef`].
pub enum SurfaceSource {
    /// Image file, relative to the scene file's directory.
    Image(PathBuf),
    /// Flat colour.
    Solid {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
        /// Straight RGBA8.
        rgba: [u8; 4],
    },
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Payload attached to an object.
pub enum DataDef {
    /// [`ImageData`].
    Image {
        /// Surface name.
        surface: String,
    },
    /// [`AnimationData`].
    Animation {
        /// Surface name.
        surface: String,
        /// Frame sequence.
        frames: Vec<AnimationFrame>,
        /// Behaviour after the last frame.
        #[serde(default)]
        after: AfterAnimation,
    },
    /// [`TextData`] drawing the object's own text.
    Text,
    /// [`RenderTargetData`].
    RenderTarget {
        /// Name the captured surface is registered under.
        surface: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Initial state of one object slot.
pub struct ObjectDef {
    /// Target layer.
    pub layer: LayerKind,
    /// Slot index inside the layer.
    pub index: u32,
    /// Defaults to `true`, unlike a fresh object.
    pub visible: bool,
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
    /// Pivot `[x, y]` in source pixels.
    pub origin: [i32; 2],
    /// Horizontal scale percentage.
    pub width: i32,
    /// Vertical scale percentage.
    pub height: i32,
    /// Tenths of a degree.
    pub rotation: i32,
    /// Pattern index.
    pub patt_no: i32,
    /// Opacity.
    pub alpha: u8,
    /// `[x1, y1, x2, y2]`, right and bottom edges exclusive.
    pub clip: Option<[i32; 4]>,
    /// Multiplicative tint.
    pub tint: [u8; 3],
    /// Overlay colour plus overlay level.
    pub colour: Option<[u8; 4]>,
    /// Greyscale.
    pub mono: bool,
    /// Invert colours.
    pub invert: bool,
    /// Brightness offset.
    pub light: i32,
    /// 0 normal, 1 additive, 2 subtractive.
    pub composite_mode: i32,
    /// Object text.
    pub text: Option<String>,
    /// Font size for `text`.
    pub text_size: Option<i32>,
    /// Payload.
    pub data: Option<DataDef>,
}

impl Default for ObjectDef {
    fn default() -> Self {
        Self {
            layer: LayerKind::Foreground,
            index: 0,
            visible: true,
            x: 0,
            y: 0,
            origin: [0, 0],
            width: 100,
            height: 100,
            rotation: 0,
            patt_no: 0,
            alpha: 255,
            clip: None,
            tint: [255, 255, 255],
            colour: None,
            mono: false,
            invert: false,
            light: 0,
            composite_mode: 0,
            text: None,
            text_size: None,
            data: None,
        }
    }
}

impl ObjectDef {
    /// Build a detached object carrying this definition's state and payload.
    pub fn to_object(&self) -> SceneResult<GraphicsObject> {
        let mut obj = GraphicsObject::new();
        obj.set_visible(self.visible);
        obj.set_x(self.x);
        obj.set_y(self.y);
        obj.set_origin(self.origin[0], self.origin[1]);
        obj.set_width(self.width);
        obj.set_height(self.height);
        obj.set_rotation(self.rotation);
        obj.set_patt_no(self.patt_no);
        obj.set_alpha(self.alpha);
        if let Some([x1, y1, x2, y2]) = self.clip {
            obj.set_clip(ClipRect::new(x1, y1, x2, y2));
        }
        let [r, g, b] = self.tint;
        obj.set_tint(Rgb::new(r, g, b));
        if let Some([r, g, b, level]) = self.colour {
            obj.set_colour(Rgb::new(r, g, b), level);
        }
        obj.set_mono(self.mono);
        obj.set_invert(self.invert);
        obj.set_light(self.light);
        obj.set_composite_mode(self.composite_mode);
        if let Some(text) = &self.text {
            obj.set_text_text(text.as_str());
        }
        if let Some(size) = self.text_size {
            obj.set_text_ops(
                size,
                obj.text_x_space(),
                obj.text_y_space(),
                obj.text_vertical(),
                obj.text_colour(),
                obj.text_shadow_colour(),
            );
        }
        match &self.data {
            None => {}
            Some(DataDef::Image { surface }) => {
                obj.set_object_data(Box::new(ImageData::new(surface.as_str())));
            }
            Some(DataDef::Animation {
                surface,
                frames,
                after,
            }) => {
                let anim = AnimationData::new(surface.as_str(), frames.clone(), *after)?;
                obj.set_object_data(Box::new(anim));
            }
            Some(DataDef::Text) => obj.set_object_data(Box::new(TextData::new())),
            Some(DataDef::RenderTarget { surface }) => {
                obj.set_object_data(Box::new(RenderTargetData::new(surface.as_str())));
            }
        }
        Ok(obj)
    }
}

impl SurfaceDef {
    /// Materialize the surface; image paths resolve against `base_dir`.
    pub fn build(&self, base_dir: &Path) -> SceneResult<SoftwareSurface> {
        let surface = match &self.source {
            SurfaceSource::Image(path) => SoftwareSurface::load(&base_dir.join(path))?,
            SurfaceSource::Solid {
                width,
                height,
                rgba,
            } => {
                if *width == 0 || *height == 0 {
                    return Err(SceneError::validation("solid surface must be at least 1x1"));
                }
                SoftwareSurface::solid(*width, *height, Rgba::from_array(*rgba))
            }
        };
        if !self.regions.is_empty() {
            return Ok(surface.with_regions(self.regions.clone()));
        }
        match self.grid {
            Some([cols, rows]) => surface.with_grid(cols, rows),
            None => Ok(surface),
        }
    }
}

impl SceneDef {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SceneResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SceneError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SceneError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check settings, slot indices and surface references.
    pub fn validate(&self) -> SceneResult<()> {
        self.config.validate()?;
        let slots = self.config.objects_per_layer;
        for (i, obj) in self.objects.iter().enumerate() {
            if obj.index >= slots {
                return Err(SceneError::validation(format!(
                    "objects[{i}] index {} exceeds objects_per_layer {slots}",
                    obj.index
                )));
            }
            // Render targets name surfaces that are captured at run time.
            let surface = match &obj.data {
                Some(DataDef::Image { surface }) | Some(DataDef::Animation { surface, .. }) => {
                    surface
                }
                _ => continue,
            };
            if !self.surfaces.contains_key(surface) {
                return Err(SceneError::validation(format!(
                    "objects[{i}] refers to unknown surface '{surface}'"
                )));
            }
        }
        Ok(())
    }

    /// Validate, load every surface and populate the object layers.
    #[tracing::instrument(skip(self))]
    pub fn build(&self, base_dir: &Path) -> SceneResult<GraphicsSystem> {
        self.validate()?;
        let mut system = GraphicsSystem::new(self.config.clone())?;
        for (name, def) in &self.surfaces {
            let surface = def.build(base_dir)?;
            system.surfaces_mut().insert(name.as_str(), Box::new(surface));
        }
        for def in &self.objects {
            let obj = def.to_object()?;
            system
                .layer_mut(def.layer)
                .set(def.index as usize, obj)?;
        }
        tracing::info!(
            surfaces = self.surfaces.len(),
            objects = self.objects.len(),
            "scene built"
        );
        Ok(system)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/def.rs"]
mod tests;
