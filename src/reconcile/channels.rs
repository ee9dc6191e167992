use crate::foundation::core::Sample;
use crate::foundation::error::{SpliceError, SpliceResult};
use crate::sequence::frame::Frame;

/// Supported conversions between donor and target channel layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelConversion {
    /// Layouts already match.
    Keep,
    /// RGBA to RGB: drop the fourth channel.
    DropAlpha,
    /// RGB to RGBA: append an opaque alpha channel.
    AddOpaqueAlpha,
    /// Gray to RGB: replicate the single channel three times.
    GrayToRgb,
    /// Gray to RGBA: replicate to RGB, then append an opaque alpha channel.
    GrayToRgba,
}

impl ChannelConversion {
    /// Pick the conversion from `from` channels to `to` channels.
    ///
    /// Any pair outside the enumerated cases is an
    /// [`SpliceError::UnsupportedChannels`] error.
    pub fn plan(from: u32, to: u32) -> SpliceResult<Self> {
        match (from, to) {
            (a, b) if a == b => Ok(Self::Keep),
            (4, 3) => Ok(Self::DropAlpha),
            (3, 4) => Ok(Self::AddOpaqueAlpha),
            (1, 3) => Ok(Self::GrayToRgb),
            (1, 4) => Ok(Self::GrayToRgba),
            _ => Err(SpliceError::UnsupportedChannels { from, to }),
        }
    }

    /// Apply the conversion to one frame.
    pub fn apply<S: Sample>(self, frame: &Frame<S>) -> SpliceResult<Frame<S>> {
        match self {
            Self::Keep => Ok(frame.clone()),
            Self::DropAlpha => frame.take_channels(3),
            Self::AddOpaqueAlpha => frame.append_channel(S::OPAQUE),
            Self::GrayToRgb => frame.replicate_channel(3),
            Self::GrayToRgba => frame.replicate_channel(3)?.append_channel(S::OPAQUE),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reconcile/channels.rs"]
mod tests;
