use super::*;
use crate::foundation::core::FrameShape;
use crate::sequence::frame::Frame;

const SHAPE: FrameShape = FrameShape {
    height: 1,
    width: 1,
    channels: 1,
};

fn seq(values: &[u8]) -> FrameSequence<u8> {
    FrameSequence::new(
        SHAPE,
        values
            .iter()
            .map(|&v| Frame::filled(SHAPE, v).unwrap())
            .collect(),
    )
    .unwrap()
}

fn tags(s: &FrameSequence<u8>) -> Vec<u8> {
    s.iter().map(|f| f.data()[0]).collect()
}

#[test]
fn start_middle_end_in_order() {
    let main = seq(&[0, 1, 2, 3, 4]);
    let start = seq(&[100, 101]);
    let end = seq(&[200]);
    let out = compose(
        &main,
        SpliceCounts::new(2, 1),
        Some(Cow::Borrowed(&start)),
        Some(Cow::Borrowed(&end)),
    )
    .unwrap();
    assert_eq!(tags(&out), vec![100, 101, 2, 3, 200]);
}

#[test]
fn noop_returns_main_borrowed() {
    let main = seq(&[0, 1, 2]);
    let out = compose(&main, SpliceCounts::default(), None, None).unwrap();
    assert!(matches!(out, Cow::Borrowed(m) if std::ptr::eq(m, &main)));
}

#[test]
fn single_block_is_returned_directly() {
    let main = seq(&[9]);
    let start = seq(&[100]);
    let out = compose(&main, SpliceCounts::new(1, 0), Some(Cow::Borrowed(&start)), None).unwrap();
    assert!(matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, &start)));
}

#[test]
fn empty_middle_joins_blocks() {
    let main = seq(&[0, 1, 2, 3]);
    let start = seq(&[100, 101]);
    let end = seq(&[200, 201]);
    let out = compose(
        &main,
        SpliceCounts::new(2, 2),
        Some(Cow::Borrowed(&start)),
        Some(Cow::Borrowed(&end)),
    )
    .unwrap();
    assert_eq!(tags(&out), vec![100, 101, 200, 201]);
}

#[test]
fn block_length_must_match_counts() {
    let main = seq(&[0, 1, 2]);
    let start = seq(&[100, 101]);
    let err = compose(&main, SpliceCounts::new(1, 0), Some(Cow::Borrowed(&start)), None);
    assert!(err.is_err());
    assert!(compose(&main, SpliceCounts::new(0, 1), None, None).is_err());
}

#[test]
fn block_shape_must_match_main() {
    let main = seq(&[0, 1, 2]);
    let wide = FrameShape::new(1, 2, 1);
    let start =
        FrameSequence::new(wide, vec![Frame::filled(wide, 1u8).unwrap()]).unwrap();
    let err = compose(&main, SpliceCounts::new(1, 0), Some(Cow::Borrowed(&start)), None)
        .unwrap_err();
    assert!(matches!(err, SpliceError::Shape(_)));
}

#[test]
fn output_length_law() {
    let main = seq(&[0, 1, 2, 3, 4, 5]);
    for s in 0..=6usize {
        for e in 0..=(6 - s) {
            let start = seq(&vec![100; s]);
            let end = seq(&vec![200; e]);
            let out = compose(
                &main,
                SpliceCounts::new(s, e),
                (s > 0).then(|| Cow::Borrowed(&start)),
                (e > 0).then(|| Cow::Borrowed(&end)),
            )
            .unwrap();
            assert_eq!(out.len(), s + e + (6 - s - e));
        }
    }
}
