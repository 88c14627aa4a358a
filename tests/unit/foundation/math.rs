use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn scale_percent_is_identity_at_100() {
    assert_eq!(scale_percent(37, 100), 37);
    assert_eq!(scale_percent(40, 50), 20);
    assert_eq!(scale_percent(40, 0), 0);
    assert_eq!(scale_percent(-40, 150), -60);
}

#[test]
fn bilerp_hits_corners_and_center() {
    let c = [0, 255, 255, 0];
    assert_eq!(bilerp_corners(c, 0.0, 0.0), 0);
    assert_eq!(bilerp_corners(c, 1.0, 0.0), 255);
    assert_eq!(bilerp_corners(c, 1.0, 1.0), 255);
    assert_eq!(bilerp_corners(c, 0.0, 1.0), 0);
    assert_eq!(bilerp_corners([255; 4], 0.3, 0.7), 255);
    assert_eq!(bilerp_corners(c, 0.5, 0.5), 128);
}
