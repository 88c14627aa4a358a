use super::*;
use crate::foundation::core::ClipRect;

fn region(_: i32) -> Rect {
    Rect::new(0, 0, 10, 20)
}

#[test]
fn default_object_draws_region_at_position() {
    let mut obj = GraphicsObject::new();
    obj.set_x(5);
    obj.set_y(7);
    let d = ObjectDraw::resolve(&obj, &GraphicsObjectOverride::default(), region).unwrap();
    assert_eq!(d.src, Rect::new(0, 0, 10, 20));
    assert_eq!(d.dst, Rect::new(5, 7, 10, 20).to_quad());
    assert_eq!(d.params.opacity, [255; 4]);
    assert_eq!(d.params.clip, None);
    assert_eq!(d.params.mode, CompositeMode::Normal);
}

#[test]
fn adjustments_origin_and_scale_move_the_quad() {
    let mut obj = GraphicsObject::new();
    obj.set_x(100);
    obj.set_y(100);
    obj.set_x_adjustment(0, 3).unwrap();
    obj.set_x_adjustment(5, 2).unwrap();
    obj.set_y_adjustment(7, -10).unwrap();
    obj.set_origin(5, 10);
    obj.set_width(200);
    obj.set_height(50);
    let d = ObjectDraw::resolve(&obj, &GraphicsObjectOverride::default(), region).unwrap();
    // Origin (5, 10) lands on (105, 90); the 10x20 image becomes 20x10 around it.
    assert_eq!(d.dst, Rect::new(95, 85, 20, 10).to_quad());
}

#[test]
fn override_substitutes_without_touching_object() {
    let mut obj = GraphicsObject::new();
    obj.set_alpha(200);
    obj.set_clip(ClipRect::new(0, 0, 4, 4));
    let ov = GraphicsObjectOverride::default()
        .with_alpha(10)
        .with_src_rect(Rect::new(2, 2, 3, 3))
        .with_dest_offset(1, 1);
    let d = ObjectDraw::resolve(&obj, &ov, region).unwrap();
    assert_eq!(d.src, Rect::new(2, 2, 3, 3));
    assert_eq!(d.dst, Rect::new(1, 1, 3, 3).to_quad());
    assert_eq!(d.params.opacity, [10; 4]);
    assert_eq!(d.params.clip, Some(Rect::new(0, 0, 4, 4)));
    assert_eq!(obj.alpha(), 200);
}

#[test]
fn pattern_override_selects_region() {
    let obj = GraphicsObject::new();
    let ov = GraphicsObjectOverride::default().with_patt_no(3);
    let d = ObjectDraw::resolve(&obj, &ov, |p| Rect::new(p * 10, 0, 10, 10)).unwrap();
    assert_eq!(d.src, Rect::new(30, 0, 10, 10));
}

#[test]
fn transparent_or_empty_draws_nothing() {
    let mut obj = GraphicsObject::new();
    obj.set_alpha(0);
    assert!(ObjectDraw::resolve(&obj, &GraphicsObjectOverride::default(), region).is_none());

    let obj = GraphicsObject::new();
    assert!(
        ObjectDraw::resolve(&obj, &GraphicsObjectOverride::default(), |_| Rect::default())
            .is_none()
    );
}
