//! framesplice replaces the leading and trailing frames of an image sequence with frames
//! taken from two donor sequences.
//!
//! # Pipeline overview
//!
//! 1. **Plan**: `(main length, SpliceParams) -> SpliceCounts`. Over-requests are scaled down
//!    so the counts always fit the main sequence.
//! 2. **Reconcile**: donors are resampled (bilinear, half-pixel centers) and converted to the
//!    main sequence's channel layout.
//! 3. **Supply**: each donor is truncated, repeated or tiled to exactly the planned count.
//! 4. **Compose**: `start block + untouched middle of main + end block`.
//!
//! Every step is pure. Outputs borrow their inputs (`Cow::Borrowed`) whenever no new frames
//! are needed, and frames share pixel storage, so repetition and slicing never copy pixels.
//!
//! ```
//! use framesplice::{Frame, FrameSequence, FrameShape, SpliceParams, replace_first_last_frames};
//!
//! let shape = FrameShape::new(2, 2, 3);
//! let seq = |v: u8, n: usize| {
//!     FrameSequence::new(shape, vec![Frame::filled(shape, v).unwrap(); n]).unwrap()
//! };
//! let (main, intro, outro) = (seq(0, 10), seq(1, 1), seq(2, 5));
//!
//! let out = replace_first_last_frames(&main, &intro, &outro, SpliceParams::new(2, 2)).unwrap();
//! assert_eq!(out.len(), 10);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod io;
mod node;
mod reconcile;
mod sequence;
mod splice;

pub use foundation::core::{FrameRange, FrameShape, Sample};
pub use foundation::error::{SpliceError, SpliceResult};
pub use io::image_dir::{frame_from_image, frame_to_image, load_sequence, save_sequence};
pub use io::job::{JobReport, SpliceJob, run_job};
pub use node::descriptor::{InputKind, NodeDescriptor, NodeInput, NodeOutput};
pub use reconcile::channels::ChannelConversion;
pub use reconcile::dimensions::reconcile;
pub use reconcile::resample::resample_bilinear;
pub use sequence::frame::Frame;
pub use sequence::sequence::FrameSequence;
pub use splice::compose::compose;
pub use splice::counts::{SpliceCounts, adjust_counts};
pub use splice::pipeline::{
    FrameSplicer, MAX_REPLACE_FRAMES, SpliceParams, SplicePlan, plan_splice,
    replace_first_last_frames,
};
pub use splice::supply::supply_frames;
