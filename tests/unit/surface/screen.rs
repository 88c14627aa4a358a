use super::*;

#[test]
fn new_screen_is_transparent_and_sized() {
    let screen = Screen::new(Canvas::new(4, 3).unwrap());
    assert_eq!((screen.width(), screen.height()), (4, 3));
    assert_eq!(screen.pixels().pixel(3, 2), Some([0, 0, 0, 0]));
    assert_eq!(screen.canvas(), Canvas::new(4, 3).unwrap());
}

#[test]
fn frame_readback_is_premultiplied_copy() {
    let mut screen = Screen::new(Canvas::new(2, 2).unwrap());
    screen.clear(Rgba::new(255, 0, 0, 255));
    let frame = screen.to_frame();
    assert!(frame.premultiplied);
    assert_eq!((frame.width, frame.height), (2, 2));
    assert_eq!(frame.data.len(), 16);
    assert_eq!(&frame.data[0..4], &[255, 0, 0, 255]);
}

#[test]
fn draw_counts_submitted_quads() {
    let mut screen = Screen::new(Canvas::new(4, 4).unwrap());
    let src = PixelBuffer::filled(1, 1, Rgba::new(0, 0, 255, 255));
    // Entirely off-screen still counts as a submitted quad.
    let n = screen.draw(
        &src,
        Rect::new(0, 0, 1, 1).to_quad(),
        Rect::new(10, 10, 1, 1).to_quad(),
        &QuadParams::default(),
    );
    assert_eq!(n, 0);
    let n = screen.draw(
        &src,
        Rect::new(0, 0, 1, 1).to_quad(),
        Rect::new(1, 1, 2, 2).to_quad(),
        &QuadParams::default(),
    );
    assert_eq!(n, 4);
    assert_eq!(screen.draw_calls(), 2);
    screen.reset_draw_calls();
    assert_eq!(screen.draw_calls(), 0);
}

#[test]
fn snapshot_copies_area() {
    let mut screen = Screen::new(Canvas::new(4, 4).unwrap());
    screen
        .pixels_mut()
        .fill_rect(Rgba::new(0, 255, 0, 255), Rect::new(2, 2, 2, 2));
    let snap = screen.snapshot(Rect::new(2, 2, 2, 2)).unwrap();
    assert_eq!((snap.width(), snap.height()), (2, 2));
    assert_eq!(snap.pixel(1, 1), Some([0, 255, 0, 255]));
}
