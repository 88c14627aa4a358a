/// Font size used until text properties are set.
pub const DEFAULT_TEXT_SIZE: i32 = 14;
/// Default horizontal glyph spacing.
pub const DEFAULT_TEXT_XSPACE: i32 = 0;
/// Default line spacing.
pub const DEFAULT_TEXT_YSPACE: i32 = 0;
/// Default writing direction (horizontal).
pub const DEFAULT_TEXT_VERTICAL: bool = false;
/// Default text colour index.
pub const DEFAULT_TEXT_COLOUR: i32 = 0;
/// Default shadow colour index.
pub const DEFAULT_TEXT_SHADOW_COLOUR: i32 = 0;

/// Text styling attached to an object the first time text is written to it.
///
/// Colours are palette indices resolved by the text renderer, not RGB values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextProperties {
    /// UTF-8 text.
    pub value: String,
    /// Font size.
    pub size: i32,
    /// Extra horizontal spacing between glyphs.
    pub x_space: i32,
    /// Extra spacing between lines.
    pub y_space: i32,
    /// Top-to-bottom writing.
    pub vertical: bool,
    /// Text colour index.
    pub colour: i32,
    /// Shadow colour index.
    pub shadow_colour: i32,
}

impl Default for TextProperties {
    fn default() -> Self {
        Self {
            value: String::new(),
            size: DEFAULT_TEXT_SIZE,
            x_space: DEFAULT_TEXT_XSPACE,
            y_space: DEFAULT_TEXT_YSPACE,
            vertical: DEFAULT_TEXT_VERTICAL,
            colour: DEFAULT_TEXT_COLOUR,
            shadow_colour: DEFAULT_TEXT_SHADOW_COLOUR,
        }
    }
}
