use super::*;
use crate::sequence::frame::Frame;

fn seq(shape: FrameShape, values: &[u8]) -> FrameSequence<u8> {
    FrameSequence::new(
        shape,
        values
            .iter()
            .map(|&v| Frame::filled(shape, v).unwrap())
            .collect(),
    )
    .unwrap()
}

fn tags(s: &FrameSequence<u8>) -> Vec<u8> {
    s.iter().map(|f| f.data()[0]).collect()
}

#[test]
fn params_default_to_one_each() {
    assert_eq!(SpliceParams::default(), SpliceParams::new(1, 1));
}

#[test]
fn params_reject_out_of_range() {
    assert!(SpliceParams::new(MAX_REPLACE_FRAMES, 0).validate().is_ok());
    assert!(SpliceParams::new(MAX_REPLACE_FRAMES + 1, 0).validate().is_err());
    assert!(SpliceParams::new(0, MAX_REPLACE_FRAMES + 1).validate().is_err());
    assert!(FrameSplicer::new(SpliceParams::new(20_000, 1)).is_err());
}

#[test]
fn params_deserialize_with_defaults() {
    let p: SpliceParams = serde_json::from_str(r#"{ "end_frames": 4 }"#).unwrap();
    assert_eq!(p, SpliceParams::new(1, 4));
    assert!(serde_json::from_str::<SpliceParams>(r#"{ "start_frames": -1 }"#).is_err());
    assert!(serde_json::from_str::<SpliceParams>(r#"{ "frames": 1 }"#).is_err());
}

#[test]
fn plan_reports_middle_and_length() {
    let plan = plan_splice(5, SpliceParams::new(4, 4)).unwrap();
    assert_eq!(plan.counts, SpliceCounts::new(2, 2));
    assert_eq!(plan.middle, FrameRange { start: 2, end: 3 });
    assert_eq!(plan.output_len, 5);
    assert!(plan_splice(0, SpliceParams::new(1, 1)).is_err());
}

#[test]
fn noop_borrows_main() {
    let shape = FrameShape::new(2, 2, 3);
    let main = seq(shape, &[0, 1, 2, 3]);
    let other = seq(FrameShape::new(1, 1, 2), &[9]);
    // unused donors are never reconciled, so their layout does not matter
    let out = replace_first_last_frames(&main, &other, &other, SpliceParams::new(0, 0)).unwrap();
    assert!(matches!(out, Cow::Borrowed(m) if std::ptr::eq(m, &main)));
}

#[test]
fn donors_are_reconciled_before_splicing() {
    let shape = FrameShape::new(2, 2, 4);
    let main = seq(shape, &[0, 1, 2, 3, 4, 5]);
    let start = seq(FrameShape::new(4, 4, 3), &[100]);
    let end = seq(FrameShape::new(1, 1, 1), &[200, 201, 202]);
    let out = replace_first_last_frames(&main, &start, &end, SpliceParams::new(2, 2)).unwrap();
    assert_eq!(out.shape(), shape);
    assert_eq!(tags(&out), vec![100, 100, 2, 3, 200, 201]);
    assert_eq!(out.frames()[0].pixel(1, 1).unwrap(), &[100, 100, 100, 255]);
    assert_eq!(out.frames()[5].pixel(0, 0).unwrap(), &[201, 201, 201, 255]);
}

#[test]
fn unsupported_donor_layout_is_an_error() {
    let main = seq(FrameShape::new(2, 2, 3), &[0, 1, 2]);
    let bad = seq(FrameShape::new(2, 2, 2), &[1]);
    let good = seq(FrameShape::new(2, 2, 3), &[1]);
    let err = replace_first_last_frames(&main, &bad, &good, SpliceParams::new(1, 1)).unwrap_err();
    assert!(matches!(err, SpliceError::UnsupportedChannels { from: 2, to: 3 }));
}

#[test]
fn empty_main_is_rejected() {
    let shape = FrameShape::new(1, 1, 3);
    let main = FrameSequence::<u8>::empty(shape);
    let donor = seq(shape, &[1]);
    assert!(replace_first_last_frames(&main, &donor, &donor, SpliceParams::new(0, 0)).is_err());
}

#[test]
fn splicer_matches_free_function() {
    let shape = FrameShape::new(1, 1, 3);
    let main = seq(shape, &[0, 1, 2, 3, 4]);
    let start = seq(shape, &[50, 51, 52]);
    let end = seq(shape, &[60]);
    let splicer = FrameSplicer::new(SpliceParams::new(3, 1)).unwrap();
    let a = splicer.splice(&main, &start, &end).unwrap();
    let b = replace_first_last_frames(&main, &start, &end, splicer.params()).unwrap();
    assert_eq!(*a, *b);
    assert_eq!(tags(&a), vec![50, 51, 52, 3, 60]);
    assert_eq!(splicer.plan(5).unwrap().output_len, 5);
}
