use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 255), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 255), src);
}

#[test]
fn over_dst_transparent_returns_scaled_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src, 255), src);
}

#[test]
fn additive_saturates() {
    let dst = [200, 10, 0, 255];
    let src = [100, 10, 0, 255];
    assert_eq!(add(dst, src, 255), [255, 20, 0, 255]);
}

#[test]
fn subtractive_floors_at_zero() {
    let dst = [50, 100, 255, 255];
    let src = [100, 10, 0, 255];
    assert_eq!(subtract(dst, src, 255), [0, 90, 255, 255]);
}

#[test]
fn composite_dispatches_on_mode() {
    let dst = [100, 100, 100, 255];
    let src = [100, 100, 100, 255];
    assert_eq!(composite(dst, src, 255, CompositeMode::Normal), src);
    assert_eq!(
        composite(dst, src, 255, CompositeMode::Additive),
        [200, 200, 200, 255]
    );
    assert_eq!(
        composite(dst, src, 255, CompositeMode::Subtractive),
        [0, 0, 0, 255]
    );
}

#[test]
fn unknown_composite_mode_falls_back_to_normal() {
    assert_eq!(CompositeMode::from_raw(7), None);
    assert_eq!(CompositeMode::from_raw_or_normal(7), CompositeMode::Normal);
    assert_eq!(CompositeMode::from_raw(1), Some(CompositeMode::Additive));
}

#[test]
fn default_filter_is_identity() {
    let f = ColourFilter::default();
    assert!(f.is_identity());
    assert_eq!(f.apply([10, 20, 30, 255]), [10, 20, 30, 255]);
}

#[test]
fn invert_and_mono_filters() {
    let f = ColourFilter {
        invert: true,
        ..ColourFilter::default()
    };
    assert_eq!(f.apply([0, 255, 10, 255]), [255, 0, 245, 255]);

    let f = ColourFilter {
        mono: true,
        ..ColourFilter::default()
    };
    let out = f.apply([255, 255, 255, 255]);
    assert_eq!(out, [255, 255, 255, 255]);
    let out = f.apply([255, 0, 0, 255]);
    assert_eq!(out[0], out[1]);
    assert_eq!(out[1], out[2]);
}

#[test]
fn tint_and_full_colour_overlay() {
    let f = ColourFilter {
        tint: Rgb::new(255, 0, 255),
        ..ColourFilter::default()
    };
    assert_eq!(f.apply([200, 200, 200, 255]), [200, 0, 200, 255]);

    let f = ColourFilter {
        colour: Rgb::new(0, 0, 255),
        colour_level: 255,
        ..ColourFilter::default()
    };
    assert_eq!(f.apply([200, 200, 200, 255]), [0, 0, 255, 255]);
}

#[test]
fn filter_keeps_transparent_pixels() {
    let f = ColourFilter {
        light: 100,
        ..ColourFilter::default()
    };
    assert_eq!(f.apply([0, 0, 0, 0]), [0, 0, 0, 0]);
    assert_eq!(f.apply([0, 0, 0, 255]), [100, 100, 100, 255]);
}

#[test]
fn extreme_light_clamps_channels() {
    let bright = ColourFilter {
        light: i32::MAX,
        ..ColourFilter::default()
    };
    assert_eq!(bright.apply([10, 20, 30, 255]), [255, 255, 255, 255]);

    let dark = ColourFilter {
        light: i32::MIN,
        ..ColourFilter::default()
    };
    assert_eq!(dark.apply([10, 20, 30, 255]), [0, 0, 0, 255]);
}
