use std::borrow::Cow;

use crate::foundation::core::Sample;
use crate::foundation::error::{SpliceError, SpliceResult};
use crate::sequence::sequence::FrameSequence;

/// Produce exactly `count` frames from `donor`.
///
/// - `count == 0` yields `None`.
/// - A donor of exactly `count` frames is returned borrowed.
/// - A single-frame donor is repeated `count` times.
/// - A longer donor is truncated to its first `count` frames.
/// - A shorter donor is tiled whole, in order, and the last cycle is cut to a prefix.
pub fn supply_frames<S: Sample>(
    donor: &FrameSequence<S>,
    count: usize,
) -> SpliceResult<Option<Cow<'_, FrameSequence<S>>>> {
    if count == 0 {
        return Ok(None);
    }

    let available = donor.len();
    if available == 0 {
        return Err(SpliceError::validation(format!(
            "donor sequence is empty but {count} frames were requested"
        )));
    }

    let block = if available == count {
        Cow::Borrowed(donor)
    } else if available == 1 {
        Cow::Owned(donor.repeat(count))
    } else if available > count {
        Cow::Owned(donor.prefix(count))
    } else {
        let cycles = count / available;
        let remainder = count % available;
        let tiled = donor.repeat(cycles);
        if remainder == 0 {
            Cow::Owned(tiled)
        } else {
            Cow::Owned(FrameSequence::concat(&[&tiled, &donor.prefix(remainder)])?)
        }
    };

    Ok(Some(block))
}

#[cfg(test)]
#[path = "../../tests/unit/splice/supply.rs"]
mod tests;
