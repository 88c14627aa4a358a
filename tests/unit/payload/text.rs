use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::foundation::core::{Canvas, Rgba};
use crate::surface::screen::Screen;
use crate::surface::software::SoftwareSurface;

/// Four pixels per character, one row per point of text size.
#[derive(Debug)]
struct BlockRenderer {
    calls: Rc<Cell<usize>>,
}

impl TextRenderer for BlockRenderer {
    fn rasterize(&self, text: &str, props: &TextProperties) -> SceneResult<Box<dyn Surface>> {
        self.calls.set(self.calls.get() + 1);
        let w = text.chars().count() as u32 * 4;
        Ok(Box::new(SoftwareSurface::solid(
            w,
            props.size as u32,
            Rgba::new(255, 255, 255, 255),
        )))
    }
}

fn cache_with_renderer() -> (SurfaceCache, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let mut cache = SurfaceCache::new();
    cache.set_text_renderer(Box::new(BlockRenderer {
        calls: calls.clone(),
    }));
    (cache, calls)
}

fn text_object(text: &str) -> GraphicsObject {
    let mut obj = GraphicsObject::new();
    obj.set_visible(true);
    obj.set_text_text(text);
    obj.set_object_data(Box::new(TextData::new()));
    obj
}

#[test]
fn empty_text_draws_nothing() {
    let (cache, calls) = cache_with_renderer();
    let mut obj = GraphicsObject::new();
    obj.set_visible(true);
    obj.set_object_data(Box::new(TextData::new()));
    let mut screen = Screen::new(Canvas::new(8, 8).unwrap());
    obj.render(&mut RenderContext::new(&cache, &mut screen))
        .unwrap();
    assert_eq!(calls.get(), 0);
    assert_eq!(screen.draw_calls(), 0);
    assert_eq!(obj.pixel_width(&cache).unwrap(), 0);
}

#[test]
fn missing_renderer_is_unsupported() {
    let cache = SurfaceCache::new();
    let obj = text_object("hi");
    let mut screen = Screen::new(Canvas::new(8, 8).unwrap());
    let err = obj
        .render(&mut RenderContext::new(&cache, &mut screen))
        .unwrap_err();
    assert_eq!(err.unsupported_operation(), Some("rasterize_text"));
}

#[test]
fn rasterizes_once_until_text_changes() {
    let (cache, calls) = cache_with_renderer();
    let mut obj = text_object("ab");
    obj.set_text_ops(2, 0, 0, false, 0, 0);
    let mut screen = Screen::new(Canvas::new(16, 16).unwrap());

    obj.render(&mut RenderContext::new(&cache, &mut screen))
        .unwrap();
    obj.render(&mut RenderContext::new(&cache, &mut screen))
        .unwrap();
    assert_eq!(calls.get(), 1);
    assert_eq!(screen.pixels().pixel(7, 1), Some([255, 255, 255, 255]));
    assert_eq!(screen.pixels().pixel(8, 1), Some([0, 0, 0, 0]));

    obj.set_text_text("abc");
    assert_eq!(obj.pixel_width(&cache).unwrap(), 12);
    assert_eq!(obj.pixel_height(&cache).unwrap(), 2);
    assert_eq!(calls.get(), 2);
}

#[test]
fn copies_do_not_share_rasterized_text() {
    let (cache, calls) = cache_with_renderer();
    let obj = text_object("x");
    assert_eq!(obj.pixel_width(&cache).unwrap(), 4);

    let data = obj
        .object_data()
        .unwrap()
        .as_any()
        .downcast_ref::<TextData>()
        .unwrap();
    assert!(data.is_cached());

    let copy = obj.clone();
    let copied = copy
        .object_data()
        .unwrap()
        .as_any()
        .downcast_ref::<TextData>()
        .unwrap();
    assert!(!copied.is_cached());
    assert_eq!(copy.pixel_width(&cache).unwrap(), 4);
    assert_eq!(calls.get(), 2);
}
