use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(2, 5).unwrap();
    assert!(!r.contains(1));
    assert!(r.contains(2));
    assert!(r.contains(4));
    assert!(!r.contains(5));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(3, 2).is_err());
    assert!(FrameRange::new(3, 3).unwrap().is_empty());
}

#[test]
fn shape_sample_count_and_overflow() {
    assert_eq!(FrameShape::new(2, 3, 4).sample_count().unwrap(), 24);
    assert!(
        FrameShape::new(u32::MAX, u32::MAX, u32::MAX)
            .sample_count()
            .is_err()
    );
}

#[test]
fn shape_display_and_extent() {
    let a = FrameShape::new(4, 8, 3);
    assert_eq!(a.to_string(), "4x8x3");
    assert!(a.same_extent(a.with_channels(1)));
    assert!(!a.same_extent(FrameShape::new(8, 4, 3)));
}

#[test]
fn integer_samples_round_and_clamp() {
    assert_eq!(u8::from_f32(127.5), 128);
    assert_eq!(u8::from_f32(-3.0), 0);
    assert_eq!(u8::from_f32(300.0), 255);
    assert_eq!(u16::from_f32(70000.0), u16::MAX);
    assert_eq!(f32::OPAQUE, 1.0);
    assert_eq!(u8::OPAQUE, 255);
}
