use std::borrow::Cow;

use rayon::prelude::*;

use crate::foundation::core::{FrameShape, Sample};
use crate::foundation::error::SpliceResult;
use crate::reconcile::channels::ChannelConversion;
use crate::reconcile::resample::resample_bilinear;
use crate::sequence::frame::Frame;
use crate::sequence::sequence::FrameSequence;

/// Adapt `donor` so every frame has the `target` shape.
///
/// A donor that already conforms is returned borrowed. Otherwise frames are resampled
/// to the target extent first and then converted to the target channel layout; frame
/// count never changes. Unsupported channel pairs fail before any pixel work is done.
#[tracing::instrument(skip(donor), fields(frames = donor.len(), from = %donor.shape()))]
pub fn reconcile<S: Sample>(
    donor: &FrameSequence<S>,
    target: FrameShape,
) -> SpliceResult<Cow<'_, FrameSequence<S>>> {
    let from = donor.shape();
    if from == target {
        tracing::debug!("donor already conforms");
        return Ok(Cow::Borrowed(donor));
    }

    let conversion = ChannelConversion::plan(from.channels, target.channels)?;
    let resize = !from.same_extent(target);
    tracing::debug!(?conversion, resize, "reconciling donor frames");

    let frames = donor
        .frames()
        .par_iter()
        .map(|f| conform_frame(f, target, resize, conversion))
        .collect::<SpliceResult<Vec<_>>>()?;

    Ok(Cow::Owned(FrameSequence::new(target, frames)?))
}

fn conform_frame<S: Sample>(
    frame: &Frame<S>,
    target: FrameShape,
    resize: bool,
    conversion: ChannelConversion,
) -> SpliceResult<Frame<S>> {
    if resize {
        let resized = resample_bilinear(frame, target.height, target.width)?;
        conversion.apply(&resized)
    } else {
        conversion.apply(frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reconcile/dimensions.rs"]
mod tests;
