use std::borrow::Cow;

use crate::foundation::core::{FrameRange, FrameShape, Sample};
use crate::foundation::error::{SpliceError, SpliceResult};
use crate::reconcile::dimensions::reconcile;
use crate::sequence::sequence::FrameSequence;
use crate::splice::compose::compose;
use crate::splice::counts::{SpliceCounts, adjust_counts};
use crate::splice::supply::supply_frames;

/// Largest accepted value for either replacement count.
pub const MAX_REPLACE_FRAMES: u32 = 10_000;

/// Requested replacement counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpliceParams {
    /// Leading frames to take from the start donor.
    pub start_frames: u32,
    /// Trailing frames to take from the end donor.
    pub end_frames: u32,
}

impl Default for SpliceParams {
    fn default() -> Self {
        Self {
            start_frames: 1,
            end_frames: 1,
        }
    }
}

impl SpliceParams {
    /// Create params from `(start_frames, end_frames)`.
    pub fn new(start_frames: u32, end_frames: u32) -> Self {
        Self {
            start_frames,
            end_frames,
        }
    }

    /// Reject counts above [`MAX_REPLACE_FRAMES`].
    pub fn validate(self) -> SpliceResult<()> {
        for (name, v) in [("start_frames", self.start_frames), ("end_frames", self.end_frames)] {
            if v > MAX_REPLACE_FRAMES {
                return Err(SpliceError::validation(format!(
                    "{name} must be in [0, {MAX_REPLACE_FRAMES}], got {v}"
                )));
            }
        }
        Ok(())
    }
}

/// Frame bookkeeping for one splice, computed without touching pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SplicePlan {
    /// Main sequence length.
    pub total: usize,
    /// Counts as requested by the caller.
    pub requested: SpliceParams,
    /// Counts actually used.
    pub counts: SpliceCounts,
    /// Main frames kept between the replaced blocks.
    pub middle: FrameRange,
    /// Length of the spliced sequence.
    pub output_len: usize,
}

/// Validate `params` and fit them to a main sequence of `total` frames.
pub fn plan_splice(total: usize, params: SpliceParams) -> SpliceResult<SplicePlan> {
    params.validate()?;
    let counts = adjust_counts(
        total,
        params.start_frames as usize,
        params.end_frames as usize,
    )?;
    Ok(SplicePlan {
        total,
        requested: params,
        counts,
        middle: counts.middle(total),
        output_len: counts.output_len(total),
    })
}

/// Replace the leading and trailing frames of `main` with frames from `start` and `end`.
///
/// Donors are adapted to `main`'s frame shape, stretched or cut to the fitted counts and
/// spliced around the untouched middle of `main`. Inputs are never mutated; the result
/// borrows `main` when nothing is replaced.
#[tracing::instrument(
    skip(main, start, end),
    fields(main = main.len(), start_donor = start.len(), end_donor = end.len())
)]
pub fn replace_first_last_frames<'a, S: Sample>(
    main: &'a FrameSequence<S>,
    start: &'a FrameSequence<S>,
    end: &'a FrameSequence<S>,
    params: SpliceParams,
) -> SpliceResult<Cow<'a, FrameSequence<S>>> {
    let plan = plan_splice(main.len(), params)?;
    if plan.counts.is_noop() {
        tracing::debug!("no frames requested; main returned unchanged");
        return Ok(Cow::Borrowed(main));
    }

    let target = main.shape();
    let start_block = prepare_block(start, target, plan.counts.start)?;
    let end_block = prepare_block(end, target, plan.counts.end)?;
    let out = compose(main, plan.counts, start_block, end_block)?;

    tracing::debug!(counts = ?plan.counts, frames = out.len(), "spliced sequence");
    Ok(out)
}

fn prepare_block<S: Sample>(
    donor: &FrameSequence<S>,
    target: FrameShape,
    count: usize,
) -> SpliceResult<Option<Cow<'_, FrameSequence<S>>>> {
    if count == 0 {
        return Ok(None);
    }
    match reconcile(donor, target)? {
        Cow::Borrowed(d) => supply_frames(d, count),
        Cow::Owned(d) if d.len() == count => Ok(Some(Cow::Owned(d))),
        Cow::Owned(d) => Ok(supply_frames(&d, count)?.map(|b| Cow::Owned(b.into_owned()))),
    }
}

/// Splice entry point holding validated parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSplicer {
    params: SpliceParams,
}

impl FrameSplicer {
    /// Validate `params` and build a splicer.
    pub fn new(params: SpliceParams) -> SpliceResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Parameters this splicer applies.
    pub fn params(&self) -> SpliceParams {
        self.params
    }

    /// Plan a splice for a main sequence of `total` frames.
    pub fn plan(&self, total: usize) -> SpliceResult<SplicePlan> {
        plan_splice(total, self.params)
    }

    /// Run the splice; see [`replace_first_last_frames`].
    pub fn splice<'a, S: Sample>(
        &self,
        main: &'a FrameSequence<S>,
        start: &'a FrameSequence<S>,
        end: &'a FrameSequence<S>,
    ) -> SpliceResult<Cow<'a, FrameSequence<S>>> {
        replace_first_last_frames(main, start, end, self.params)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/splice/pipeline.rs"]
mod tests;
