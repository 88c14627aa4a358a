use super::*;

fn solid(w: u32, h: u32, c: Rgba) -> PixelBuffer {
    PixelBuffer::filled(w, h, c)
}

#[test]
fn axis_aligned_copy_writes_exact_area() {
    let src = solid(4, 4, Rgba::new(255, 0, 0, 255));
    let mut dst = PixelBuffer::new(10, 10);
    let n = draw_quad(
        &mut dst,
        &src,
        Rect::new(0, 0, 4, 4).to_quad(),
        Rect::new(3, 2, 4, 4).to_quad(),
        &QuadParams::default(),
    );
    assert_eq!(n, 16);
    assert_eq!(dst.pixel(3, 2), Some([255, 0, 0, 255]));
    assert_eq!(dst.pixel(6, 5), Some([255, 0, 0, 255]));
    assert_eq!(dst.pixel(7, 5), Some([0, 0, 0, 0]));
    assert_eq!(dst.pixel(2, 2), Some([0, 0, 0, 0]));
}

#[test]
fn upscale_samples_nearest() {
    let mut src = PixelBuffer::new(2, 1);
    src.set_pixel(0, 0, [255, 0, 0, 255]);
    src.set_pixel(1, 0, [0, 0, 255, 255]);
    let mut dst = PixelBuffer::new(4, 2);
    draw_quad(
        &mut dst,
        &src,
        Rect::new(0, 0, 2, 1).to_quad(),
        Rect::new(0, 0, 4, 2).to_quad(),
        &QuadParams::default(),
    );
    assert_eq!(dst.pixel(1, 1), Some([255, 0, 0, 255]));
    assert_eq!(dst.pixel(2, 0), Some([0, 0, 255, 255]));
}

#[test]
fn clip_limits_written_pixels() {
    let src = solid(4, 4, Rgba::new(0, 255, 0, 255));
    let mut dst = PixelBuffer::new(8, 8);
    let params = QuadParams {
        clip: Some(Rect::new(0, 0, 2, 2)),
        ..QuadParams::default()
    };
    let n = draw_quad(
        &mut dst,
        &src,
        Rect::new(0, 0, 4, 4).to_quad(),
        Rect::new(0, 0, 4, 4).to_quad(),
        &params,
    );
    assert_eq!(n, 4);
    assert_eq!(dst.pixel(2, 2), Some([0, 0, 0, 0]));
}

#[test]
fn degenerate_quad_draws_nothing() {
    let src = solid(4, 4, Rgba::new(0, 255, 0, 255));
    let mut dst = PixelBuffer::new(8, 8);
    let n = draw_quad(
        &mut dst,
        &src,
        Rect::new(0, 0, 4, 4).to_quad(),
        [0, 0, 4, 0, 4, 0, 0, 0],
        &QuadParams::default(),
    );
    assert_eq!(n, 0);
}

#[test]
fn horizontal_flip_mirrors_source() {
    let mut src = PixelBuffer::new(2, 1);
    src.set_pixel(0, 0, [255, 0, 0, 255]);
    src.set_pixel(1, 0, [0, 0, 255, 255]);
    let mut dst = PixelBuffer::new(2, 1);
    draw_quad(
        &mut dst,
        &src,
        Rect::new(0, 0, 2, 1).to_quad(),
        [2, 0, 0, 0, 0, 1, 2, 1],
        &QuadParams::default(),
    );
    assert_eq!(dst.pixel(0, 0), Some([0, 0, 255, 255]));
    assert_eq!(dst.pixel(1, 0), Some([255, 0, 0, 255]));
}

#[test]
fn corner_opacity_fades_across_quad() {
    let src = solid(8, 1, Rgba::new(255, 255, 255, 255));
    let mut dst = PixelBuffer::new(8, 1);
    let params = QuadParams {
        opacity: [0, 255, 255, 0],
        ..QuadParams::default()
    };
    draw_quad(
        &mut dst,
        &src,
        Rect::new(0, 0, 8, 1).to_quad(),
        Rect::new(0, 0, 8, 1).to_quad(),
        &params,
    );
    let left = dst.pixel(0, 0).unwrap()[3];
    let right = dst.pixel(7, 0).unwrap()[3];
    assert!(left < 32, "left alpha {left}");
    assert!(right > 224, "right alpha {right}");
}

#[test]
fn colour_mask_uses_source_alpha_as_coverage() {
    let mut src = PixelBuffer::new(2, 1);
    src.set_pixel(0, 0, [0, 0, 0, 255]);
    let mut dst = PixelBuffer::new(2, 1);
    let params = QuadParams {
        sample: Sample::ColourMask(Rgba::new(0, 255, 0, 255)),
        ..QuadParams::default()
    };
    draw_quad(
        &mut dst,
        &src,
        Rect::new(0, 0, 2, 1).to_quad(),
        Rect::new(0, 0, 2, 1).to_quad(),
        &params,
    );
    assert_eq!(dst.pixel(0, 0), Some([0, 255, 0, 255]));
    assert_eq!(dst.pixel(1, 0), Some([0, 0, 0, 0]));
}
