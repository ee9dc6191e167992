use std::fmt::Debug;

use crate::foundation::error::{SpliceError, SpliceResult};

/// Per-frame shape: rows, columns and interleaved channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameShape {
    /// Frame height in pixels.
    pub height: u32,
    /// Frame width in pixels.
    pub width: u32,
    /// Samples per pixel.
    pub channels: u32,
}

impl FrameShape {
    /// Create a shape from `(height, width, channels)`.
    pub fn new(height: u32, width: u32, channels: u32) -> Self {
        Self {
            height,
            width,
            channels,
        }
    }

    /// Number of pixels in one frame.
    pub fn pixel_count(self) -> SpliceResult<usize> {
        (self.height as usize)
            .checked_mul(self.width as usize)
            .ok_or_else(|| SpliceError::shape(format!("{self} pixel count overflows")))
    }

    /// Number of samples in one frame (`height * width * channels`).
    pub fn sample_count(self) -> SpliceResult<usize> {
        self.pixel_count()?
            .checked_mul(self.channels as usize)
            .ok_or_else(|| SpliceError::shape(format!("{self} sample count overflows")))
    }

    /// Return `true` when height and width match, ignoring channels.
    pub fn same_extent(self, other: Self) -> bool {
        self.height == other.height && self.width == other.width
    }

    /// Same extent with a different channel count.
    pub fn with_channels(self, channels: u32) -> Self {
        Self { channels, ..self }
    }
}

impl std::fmt::Display for FrameShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.height, self.width, self.channels)
    }
}

/// Half-open frame range `[start, end)` over sequence indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: usize,
    /// Exclusive range end.
    pub end: usize,
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: usize, end: usize) -> SpliceResult<Self> {
        if start > end {
            return Err(SpliceError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Return `true` when the range has no frames.
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// Return `true` when `idx` is inside `[start, end)`.
    pub fn contains(self, idx: usize) -> bool {
        self.start <= idx && idx < self.end
    }
}

/// Numeric sample stored in a frame.
///
/// Resampling happens in `f32`; integer samples round to nearest and clamp on the way back.
pub trait Sample: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Fully opaque alpha value for this sample type.
    const OPAQUE: Self;

    /// Widen to `f32` for interpolation.
    fn to_f32(self) -> f32;

    /// Narrow an interpolated value back into the sample domain.
    fn from_f32(v: f32) -> Self;
}

impl Sample for u8 {
    const OPAQUE: Self = u8::MAX;

    fn to_f32(self) -> f32 {
        f32::from(self)
    }

    fn from_f32(v: f32) -> Self {
        v.round().clamp(0.0, 255.0) as u8
    }
}

impl Sample for u16 {
    const OPAQUE: Self = u16::MAX;

    fn to_f32(self) -> f32 {
        f32::from(self)
    }

    fn from_f32(v: f32) -> Self {
        v.round().clamp(0.0, 65535.0) as u16
    }
}

impl Sample for f32 {
    const OPAQUE: Self = 1.0;

    fn to_f32(self) -> f32 {
        self
    }

    fn from_f32(v: f32) -> Self {
        v
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
