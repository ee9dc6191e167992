use crate::foundation::core::{FrameRange, FrameShape, Sample};
use crate::foundation::error::{SpliceError, SpliceResult};
use crate::sequence::frame::Frame;

/// Ordered frames sharing one [`FrameShape`].
///
/// An empty sequence still carries its shape so it can take part in shape checks.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSequence<S: Sample> {
    shape: FrameShape,
    frames: Vec<Frame<S>>,
}

impl<S: Sample> FrameSequence<S> {
    /// Create a sequence, checking every frame against `shape`.
    pub fn new(shape: FrameShape, frames: Vec<Frame<S>>) -> SpliceResult<Self> {
        if let Some((idx, f)) = frames.iter().enumerate().find(|(_, f)| f.shape() != shape) {
            return Err(SpliceError::shape(format!(
                "frame {idx} has shape {}, sequence expects {shape}",
                f.shape()
            )));
        }
        Ok(Self { shape, frames })
    }

    /// Create a sequence whose shape is taken from the first frame.
    pub fn from_frames(frames: Vec<Frame<S>>) -> SpliceResult<Self> {
        let shape = frames
            .first()
            .map(Frame::shape)
            .ok_or_else(|| SpliceError::validation("cannot infer shape of an empty sequence"))?;
        Self::new(shape, frames)
    }

    /// An empty sequence of the given shape.
    pub fn empty(shape: FrameShape) -> Self {
        Self {
            shape,
            frames: Vec::new(),
        }
    }

    /// Per-frame shape.
    pub fn shape(&self) -> FrameShape {
        self.shape
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` when the sequence has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Borrow the frames in order.
    pub fn frames(&self) -> &[Frame<S>] {
        &self.frames
    }

    /// Iterate over frames in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Frame<S>> {
        self.frames.iter()
    }

    /// Frames at indices `[range.start, range.end)`.
    pub fn slice(&self, range: FrameRange) -> SpliceResult<Self> {
        let frames = self.frames.get(range.start..range.end).ok_or_else(|| {
            SpliceError::validation(format!(
                "slice [{}, {}) out of bounds for {} frames",
                range.start,
                range.end,
                self.len()
            ))
        })?;
        Ok(Self {
            shape: self.shape,
            frames: frames.to_vec(),
        })
    }

    /// The first `count` frames (all of them when `count >= len`).
    pub fn prefix(&self, count: usize) -> Self {
        Self {
            shape: self.shape,
            frames: self.frames[..count.min(self.len())].to_vec(),
        }
    }

    /// The whole sequence `times` times back to back, frame order preserved per copy.
    pub fn repeat(&self, times: usize) -> Self {
        Self {
            shape: self.shape,
            frames: std::iter::repeat_n(&self.frames, times)
                .flatten()
                .cloned()
                .collect(),
        }
    }

    /// Concatenate `parts` along the frame axis.
    pub fn concat(parts: &[&Self]) -> SpliceResult<Self> {
        let first = parts
            .first()
            .ok_or_else(|| SpliceError::validation("concat needs at least one sequence"))?;
        let shape = first.shape;
        if let Some(bad) = parts.iter().find(|p| p.shape != shape) {
            return Err(SpliceError::shape(format!(
                "cannot concatenate {} frames onto {shape} frames",
                bad.shape
            )));
        }
        let total = parts.iter().map(|p| p.len()).sum();
        let mut frames = Vec::with_capacity(total);
        for p in parts {
            frames.extend_from_slice(&p.frames);
        }
        Ok(Self { shape, frames })
    }
}

impl<'a, S: Sample> IntoIterator for &'a FrameSequence<S> {
    type Item = &'a Frame<S>;
    type IntoIter = std::slice::Iter<'a, Frame<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/sequence.rs"]
mod tests;
