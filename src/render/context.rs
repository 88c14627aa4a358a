use crate::surface::cache::SurfaceCache;
use crate::surface::screen::Screen;

/// Resources threaded through a render call: where to look surfaces up and where to draw.
pub struct RenderContext<'a> {
    /// Surface lookup.
    pub surfaces: &'a SurfaceCache,
    /// Draw target.
    pub screen: &'a mut Screen,
}

impl<'a> RenderContext<'a> {
    /// Bundle a surface cache and a screen.
    pub fn new(surfaces: &'a SurfaceCache, screen: &'a mut Screen) -> Self {
        Self { surfaces, screen }
    }
}

/// Resources threaded through a per-frame `execute` call.
#[derive(Clone, Copy)]
pub struct TickContext<'a> {
    /// Surface lookup.
    pub surfaces: &'a SurfaceCache,
    /// Milliseconds since the previous tick.
    pub elapsed_ms: u32,
}

impl<'a> TickContext<'a> {
    /// Bundle a surface cache and the tick length.
    pub fn new(surfaces: &'a SurfaceCache, elapsed_ms: u32) -> Self {
        Self {
            surfaces,
            elapsed_ms,
        }
    }
}
