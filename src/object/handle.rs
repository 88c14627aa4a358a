use std::fmt;

/// Which object table a slot belongs to.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Drawn first, behind everything else.
    Background,
    /// Drawn on top of the background layer.
    #[default]
    Foreground,
}

/// Non-owning identity of the slot a [`crate::GraphicsObject`] lives in.
///
/// Payloads keep one of these as their owner back-reference. It carries no lifetime or ownership
/// meaning and goes stale as soon as the object is moved elsewhere, which is why owners re-point
/// it on every attach and assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ObjectHandle {
    /// Not stored in any layer (fresh objects and copies in flight).
    #[default]
    Detached,
    /// Slot `index` of `layer`.
    Slot {
        /// Owning layer.
        layer: LayerKind,
        /// Index inside the layer.
        index: u32,
    },
}

impl ObjectHandle {
    /// Handle for slot `index` of `layer`.
    pub fn slot(layer: LayerKind, index: u32) -> Self {
        Self::Slot { layer, index }
    }

    /// Whether this handle names no slot.
    pub fn is_detached(self) -> bool {
        matches!(self, Self::Detached)
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detached => f.write_str("detached"),
            Self::Slot { layer, index } => write!(f, "{layer:?}[{index}]"),
        }
    }
}
