use std::sync::Arc;

use crate::foundation::core::{FrameShape, Sample};
use crate::foundation::error::{SpliceError, SpliceResult};

/// One image: interleaved row-major `height x width x channels` samples.
///
/// Sample storage is shared, so cloning a frame (and therefore repeating or slicing a
/// sequence) never copies pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<S: Sample> {
    shape: FrameShape,
    data: Arc<[S]>,
}

impl<S: Sample> Frame<S> {
    /// Wrap `data`, which must hold exactly `shape.sample_count()` samples.
    pub fn new(shape: FrameShape, data: Vec<S>) -> SpliceResult<Self> {
        let expected = shape.sample_count()?;
        if data.len() != expected {
            return Err(SpliceError::shape(format!(
                "frame {shape} expects {expected} samples, got {}",
                data.len()
            )));
        }
        Ok(Self {
            shape,
            data: data.into(),
        })
    }

    /// A frame with every sample set to `value`.
    pub fn filled(shape: FrameShape, value: S) -> SpliceResult<Self> {
        let n = shape.sample_count()?;
        Self::new(shape, vec![value; n])
    }

    /// Build a frame by evaluating `f(y, x, channel)` for every sample.
    pub fn from_fn(shape: FrameShape, mut f: impl FnMut(u32, u32, u32) -> S) -> SpliceResult<Self> {
        let mut data = Vec::with_capacity(shape.sample_count()?);
        for y in 0..shape.height {
            for x in 0..shape.width {
                for c in 0..shape.channels {
                    data.push(f(y, x, c));
                }
            }
        }
        Self::new(shape, data)
    }

    /// Shape of this frame.
    pub fn shape(&self) -> FrameShape {
        self.shape
    }

    /// Raw interleaved samples.
    pub fn data(&self) -> &[S] {
        &self.data
    }

    /// Samples of the pixel at row `y`, column `x`.
    pub fn pixel(&self, y: u32, x: u32) -> Option<&[S]> {
        if y >= self.shape.height || x >= self.shape.width {
            return None;
        }
        let c = self.shape.channels as usize;
        let start = (y as usize * self.shape.width as usize + x as usize) * c;
        self.data.get(start..start + c)
    }

    /// Return `true` when both frames point at the same sample storage.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Keep the first `channels` channels of every pixel.
    pub fn take_channels(&self, channels: u32) -> SpliceResult<Self> {
        if channels == 0 || channels > self.shape.channels {
            return Err(SpliceError::shape(format!(
                "cannot keep {channels} of {} channels",
                self.shape.channels
            )));
        }
        let keep = channels as usize;
        let data = self
            .data
            .chunks_exact(self.shape.channels as usize)
            .flat_map(|px| px[..keep].iter().copied())
            .collect();
        Self::new(self.shape.with_channels(channels), data)
    }

    /// Append one channel holding `value` to every pixel.
    pub fn append_channel(&self, value: S) -> SpliceResult<Self> {
        let c = self.shape.channels as usize;
        let mut data = Vec::with_capacity(self.shape.pixel_count()? * (c + 1));
        for px in self.data.chunks_exact(c.max(1)) {
            data.extend_from_slice(px);
            data.push(value);
        }
        Self::new(self.shape.with_channels(self.shape.channels + 1), data)
    }

    /// Repeat the single channel of a one-channel frame `times` times.
    pub fn replicate_channel(&self, times: u32) -> SpliceResult<Self> {
        if self.shape.channels != 1 {
            return Err(SpliceError::shape(format!(
                "channel replication needs a single-channel frame, got {}",
                self.shape.channels
            )));
        }
        if times == 0 {
            return Err(SpliceError::shape("channel replication count must be > 0"));
        }
        let data = self
            .data
            .iter()
            .flat_map(|&v| std::iter::repeat_n(v, times as usize))
            .collect();
        Self::new(self.shape.with_channels(times), data)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/frame.rs"]
mod tests;
