use std::borrow::Cow;

use crate::foundation::core::Sample;
use crate::foundation::error::{SpliceError, SpliceResult};
use crate::sequence::sequence::FrameSequence;
use crate::splice::counts::SpliceCounts;

/// Assemble `start_block + main[counts.start .. len - counts.end] + end_block`.
///
/// Blocks must already match the main sequence's shape and carry exactly `counts.start`
/// and `counts.end` frames. When only one part is present it is returned without copying;
/// when no part is present `main` is returned unchanged.
pub fn compose<'a, S: Sample>(
    main: &'a FrameSequence<S>,
    counts: SpliceCounts,
    start_block: Option<Cow<'a, FrameSequence<S>>>,
    end_block: Option<Cow<'a, FrameSequence<S>>>,
) -> SpliceResult<Cow<'a, FrameSequence<S>>> {
    check_block("start", start_block.as_deref(), counts.start, main)?;
    check_block("end", end_block.as_deref(), counts.end, main)?;

    let range = counts.middle(main.len());
    let middle = if range.is_empty() {
        None
    } else if range.len_frames() == main.len() {
        Some(Cow::Borrowed(main))
    } else {
        Some(Cow::Owned(main.slice(range)?))
    };

    let mut parts: Vec<Cow<'a, FrameSequence<S>>> =
        [start_block, middle, end_block].into_iter().flatten().collect();

    if parts.len() > 1 {
        let refs: Vec<&FrameSequence<S>> = parts.iter().map(|p| &**p).collect();
        return Ok(Cow::Owned(FrameSequence::concat(&refs)?));
    }
    if parts.is_empty() {
        tracing::debug!("no parts to compose; returning main unchanged");
    }
    Ok(parts.pop().unwrap_or(Cow::Borrowed(main)))
}

fn check_block<S: Sample>(
    side: &str,
    block: Option<&FrameSequence<S>>,
    expected: usize,
    main: &FrameSequence<S>,
) -> SpliceResult<()> {
    let len = block.map_or(0, FrameSequence::len);
    if len != expected {
        return Err(SpliceError::validation(format!(
            "{side} block has {len} frames, expected {expected}"
        )));
    }
    if let Some(b) = block
        && b.shape() != main.shape()
    {
        return Err(SpliceError::shape(format!(
            "{side} block frames are {}, main frames are {}",
            b.shape(),
            main.shape()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/splice/compose.rs"]
mod tests;
