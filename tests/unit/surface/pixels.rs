use super::*;
use crate::render::frame::FrameRGBA;

#[test]
fn from_premul_rejects_wrong_length() {
    assert!(PixelBuffer::from_premul(2, 2, vec![0; 15]).is_err());
    assert!(PixelBuffer::from_premul(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn from_straight_premultiplies() {
    let buf = PixelBuffer::from_straight(1, 1, vec![200, 100, 50, 0]).unwrap();
    assert_eq!(buf.pixel(0, 0), Some([0, 0, 0, 0]));

    let buf = PixelBuffer::from_straight(1, 1, vec![255, 255, 255, 128]).unwrap();
    assert_eq!(buf.pixel(0, 0), Some([128, 128, 128, 128]));
}

#[test]
fn fill_rect_is_clamped_to_bounds() {
    let mut buf = PixelBuffer::new(4, 4);
    buf.fill_rect(Rgba::new(255, 0, 0, 255), Rect::new(2, 2, 10, 10));
    assert_eq!(buf.pixel(1, 1), Some([0, 0, 0, 0]));
    assert_eq!(buf.pixel(2, 2), Some([255, 0, 0, 255]));
    assert_eq!(buf.pixel(3, 3), Some([255, 0, 0, 255]));
    assert_eq!(buf.pixel(4, 4), None);
}

#[test]
fn sub_buffer_copies_rows() {
    let mut buf = PixelBuffer::new(3, 3);
    buf.set_pixel(1, 1, [1, 2, 3, 4]);
    buf.set_pixel(2, 2, [5, 6, 7, 8]);
    let sub = buf.sub_buffer(Rect::new(1, 1, 5, 5)).unwrap();
    assert_eq!((sub.width(), sub.height()), (2, 2));
    assert_eq!(sub.pixel(0, 0), Some([1, 2, 3, 4]));
    assert_eq!(sub.pixel(1, 1), Some([5, 6, 7, 8]));

    assert!(buf.sub_buffer(Rect::new(10, 10, 2, 2)).is_err());
}

#[test]
fn readback_frame_unpremultiplies_half_alpha() {
    let buf = PixelBuffer::from_straight(2, 1, vec![10, 20, 30, 255, 200, 100, 0, 128]).unwrap();
    let frame = FrameRGBA {
        width: buf.width(),
        height: buf.height(),
        data: buf.data().to_vec(),
        premultiplied: true,
    };
    let straight = frame.to_straight();
    assert_eq!(&straight[..4], &[10, 20, 30, 255]);
    assert_eq!(straight[7], 128);
    assert!(straight[4].abs_diff(200) <= 2);
    assert!(straight[5].abs_diff(100) <= 2);
    assert_eq!(straight[6], 0);
}
