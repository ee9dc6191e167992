use crate::foundation::core::FrameRange;
use crate::foundation::error::{SpliceError, SpliceResult};

/// Replacement counts that fit the main sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpliceCounts {
    /// Leading frames replaced from the start donor.
    pub start: usize,
    /// Trailing frames replaced from the end donor.
    pub end: usize,
}

impl SpliceCounts {
    /// Create counts from `(start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Return `true` when nothing is replaced.
    pub fn is_noop(self) -> bool {
        self.start == 0 && self.end == 0
    }

    /// Main-sequence frames kept between the two replaced blocks.
    ///
    /// Empty when the blocks meet or overlap.
    pub fn middle(self, total: usize) -> FrameRange {
        let start = self.start.min(total);
        let end = total.saturating_sub(self.end).max(start);
        FrameRange { start, end }
    }

    /// Length of the spliced output for a main sequence of `total` frames.
    pub fn output_len(self, total: usize) -> usize {
        self.start + self.middle(total).len_frames() + self.end
    }
}

/// Fit the requested start/end counts into a main sequence of `total` frames.
///
/// Requests that fit are returned as-is. Over-requests on a single frame give the frame
/// to the start donor when it asked for anything. Otherwise both counts are scaled by
/// `total / (start + end)` (floored), then trimmed one frame at a time from the larger
/// side (the end side on ties) until at least one main frame survives.
pub fn adjust_counts(
    total: usize,
    requested_start: usize,
    requested_end: usize,
) -> SpliceResult<SpliceCounts> {
    if total == 0 {
        return Err(SpliceError::validation("main sequence has no frames"));
    }
    if requested_start == 0 && requested_end == 0 {
        return Ok(SpliceCounts::default());
    }

    let requested = requested_start as u128 + requested_end as u128;
    if requested <= total as u128 {
        return Ok(SpliceCounts::new(requested_start, requested_end));
    }

    if total == 1 {
        let counts = if requested_start > 0 {
            SpliceCounts::new(1, 0)
        } else {
            SpliceCounts::new(0, 1)
        };
        tracing::debug!(?counts, "single-frame main sequence");
        return Ok(counts);
    }

    // floor(requested * total / sum) without going through floats
    let scale = |n: usize| (n as u128 * total as u128 / requested) as usize;
    let mut start = scale(requested_start);
    let mut end = scale(requested_end);

    while start + end >= total {
        if start > end {
            start = start.saturating_sub(1);
        } else {
            end = end.saturating_sub(1);
        }
    }

    if start + end >= total {
        start = total / 2;
        end = total - start;
    }

    let counts = SpliceCounts::new(start, end);
    tracing::debug!(
        total,
        requested_start,
        requested_end,
        ?counts,
        "scaled down over-requested counts"
    );
    Ok(counts)
}

#[cfg(test)]
#[path = "../../tests/unit/splice/counts.rs"]
mod tests;
