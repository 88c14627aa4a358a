use super::*;
use crate::foundation::core::{Canvas, Rgba};
use crate::foundation::error::SceneError;
use crate::surface::screen::Screen;
use crate::surface::software::SoftwareSurface;

const RED: Rgba = Rgba::new(255, 0, 0, 255);

fn cache() -> SurfaceCache {
    let mut cache = SurfaceCache::new();
    let sheet = SoftwareSurface::solid(4, 2, RED).with_grid(2, 1).unwrap();
    cache.insert("sheet", Box::new(sheet));
    cache
}

#[test]
fn renders_through_owner_state() {
    let cache = cache();
    let mut screen = Screen::new(Canvas::new(4, 4).unwrap());
    let mut obj = GraphicsObject::new();
    obj.set_visible(true);
    obj.set_x(2);
    obj.set_y(2);
    obj.set_object_data(Box::new(ImageData::new("sheet")));

    obj.render(&mut RenderContext::new(&cache, &mut screen))
        .unwrap();
    assert_eq!(screen.pixels().pixel(3, 3), Some([255, 0, 0, 255]));
    assert_eq!(screen.pixels().pixel(1, 1), Some([0, 0, 0, 0]));
}

#[test]
fn size_is_pattern_region_scaled() {
    let cache = cache();
    let mut obj = GraphicsObject::new();
    obj.set_object_data(Box::new(ImageData::new("sheet")));
    assert_eq!(obj.pixel_width(&cache).unwrap(), 2);
    assert_eq!(obj.pixel_height(&cache).unwrap(), 2);

    obj.set_width(250);
    obj.set_height(50);
    assert_eq!(obj.pixel_width(&cache).unwrap(), 5);
    assert_eq!(obj.pixel_height(&cache).unwrap(), 1);
}

#[test]
fn missing_surface_is_asset_error() {
    let cache = SurfaceCache::new();
    let mut screen = Screen::new(Canvas::new(1, 1).unwrap());
    let mut obj = GraphicsObject::new();
    obj.set_visible(true);
    obj.set_object_data(Box::new(ImageData::new("gone")));

    let err = obj
        .render(&mut RenderContext::new(&cache, &mut screen))
        .unwrap_err();
    assert!(matches!(err, SceneError::Asset(_)));
    assert!(obj.pixel_width(&cache).is_err());
}

#[test]
fn downcasts_to_concrete_payload() {
    let mut obj = GraphicsObject::new();
    obj.set_object_data(Box::new(ImageData::new("sheet")));
    let data = obj.object_data().unwrap();
    assert_eq!(data.kind(), "image");
    let image = data.as_any().downcast_ref::<ImageData>().unwrap();
    assert_eq!(image.surface_name(), "sheet");
}
