use super::*;

#[test]
fn rect_intersection_is_clamped_to_overlap() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, -5, 10, 10);
    assert_eq!(a.intersect(b), Rect::new(5, 0, 5, 5));

    let disjoint = a.intersect(Rect::new(20, 20, 2, 2));
    assert!(disjoint.is_empty());
}

#[test]
fn rect_quad_order_is_clockwise_from_top_left() {
    let q = Rect::new(1, 2, 3, 4).to_quad();
    assert_eq!(q, [1, 2, 4, 2, 4, 6, 1, 6]);
}

#[test]
fn default_clip_is_unclipped() {
    let c = ClipRect::default();
    assert!(c.is_unclipped());
    assert_eq!(c.x2, -1);
    assert_eq!(c.as_rect(), None);

    let c = ClipRect::new(10, 10, 50, 50);
    assert!(!c.is_unclipped());
    assert_eq!(c.as_rect(), Some(Rect::new(10, 10, 40, 40)));
}

#[test]
fn rect_edges_saturate_instead_of_overflowing() {
    let r = Rect::new(i32::MAX - 1, 0, 10, 10);
    assert_eq!(r.x2(), i32::MAX);
    assert_eq!(Rect::new(0, i32::MIN, 5, -5).y2(), i32::MIN);

    let wide = Rect::from_corners(i32::MIN, 0, i32::MAX, 1);
    assert_eq!(wide.width, i32::MAX);
    assert_eq!(wide.height, 1);

    assert!(r.intersect(Rect::new(0, 0, 8, 8)).is_empty());
}

#[test]
fn extreme_clip_is_clamped_to_coordinate_limit() {
    let c = ClipRect::new(i32::MIN, 0, i32::MAX, 4);
    assert_eq!(
        c.as_rect(),
        Some(Rect::from_corners(-COORD_LIMIT, 0, COORD_LIMIT, 4))
    );
    let r = c.as_rect().unwrap();
    assert_eq!(r.intersect(Rect::new(0, 0, 8, 8)), Rect::new(0, 0, 8, 4));
}

#[test]
fn premul_and_unpremul_agree_on_opaque_and_transparent() {
    let opaque = Rgba::new(12, 200, 99, 255);
    assert_eq!(opaque.to_premul(), [12, 200, 99, 255]);
    assert_eq!(unpremul(opaque.to_premul()), Rgb::new(12, 200, 99));

    assert_eq!(Rgba::new(255, 255, 255, 0).to_premul(), [0, 0, 0, 0]);
    assert_eq!(unpremul([0, 0, 0, 0]), Rgb::BLACK);
}

#[test]
fn canvas_rejects_zero_size() {
    assert!(Canvas::new(0, 10).is_err());
    assert_eq!(Canvas::new(4, 3).unwrap().rect(), Rect::new(0, 0, 4, 3));
}

#[test]
fn transform_to_affine_identity_and_translation() {
    let t = Transform2D::default();
    assert_eq!(t.to_affine(), Affine::IDENTITY);

    let t = Transform2D {
        translate: Vec2::new(10.0, -2.5),
        ..Transform2D::default()
    };
    assert_eq!(t.to_affine(), Affine::translate(Vec2::new(10.0, -2.5)));
}

#[test]
fn map_rect_scales_about_anchor() {
    let t = Transform2D {
        translate: Vec2::new(20.0, 20.0),
        scale: Vec2::new(2.0, 2.0),
        anchor: Vec2::new(5.0, 5.0),
        ..Transform2D::default()
    };
    // The anchor stays fixed at translate + anchor.
    assert_eq!(t.map_rect(10, 10), [15, 15, 35, 15, 35, 35, 15, 35]);
}
