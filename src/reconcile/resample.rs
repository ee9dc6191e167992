use crate::foundation::core::{FrameShape, Sample};
use crate::foundation::error::{SpliceError, SpliceResult};
use crate::sequence::frame::Frame;

/// Source taps for one output coordinate along an axis.
#[derive(Clone, Copy, Debug)]
struct Tap {
    i0: usize,
    i1: usize,
    frac: f32,
}

/// Resample `frame` to `height x width` with bilinear interpolation.
///
/// Pixel centers are sampled at half-pixel offsets (`align_corners = false`): output
/// coordinate `o` maps to source `(o + 0.5) * in / out - 0.5`, clamped at zero, and
/// neighbours past the last row or column are clamped to the edge. The channel count
/// is preserved.
pub fn resample_bilinear<S: Sample>(
    frame: &Frame<S>,
    height: u32,
    width: u32,
) -> SpliceResult<Frame<S>> {
    let src = frame.shape();
    if src.height == height && src.width == width {
        return Ok(frame.clone());
    }
    if src.height == 0 || src.width == 0 || height == 0 || width == 0 {
        return Err(SpliceError::shape(format!(
            "cannot resample {src} frame to {height}x{width}"
        )));
    }

    let out_shape = FrameShape::new(height, width, src.channels);
    let rows = axis_taps(src.height, height);
    let cols = axis_taps(src.width, width);
    let c = src.channels as usize;
    let in_w = src.width as usize;
    let data = frame.data();
    let at = |y: usize, x: usize, ch: usize| data[(y * in_w + x) * c + ch].to_f32();

    let mut out = Vec::with_capacity(out_shape.sample_count()?);
    for ty in &rows {
        for tx in &cols {
            for ch in 0..c {
                let top = at(ty.i0, tx.i0, ch) * (1.0 - tx.frac) + at(ty.i0, tx.i1, ch) * tx.frac;
                let bottom =
                    at(ty.i1, tx.i0, ch) * (1.0 - tx.frac) + at(ty.i1, tx.i1, ch) * tx.frac;
                out.push(S::from_f32(top * (1.0 - ty.frac) + bottom * ty.frac));
            }
        }
    }

    Frame::new(out_shape, out)
}

fn axis_taps(in_len: u32, out_len: u32) -> Vec<Tap> {
    let scale = in_len as f32 / out_len as f32;
    let last = in_len as usize - 1;
    (0..out_len)
        .map(|o| {
            let pos = ((o as f32 + 0.5) * scale - 0.5).max(0.0);
            let i0 = (pos.floor() as usize).min(last);
            Tap {
                i0,
                i1: (i0 + 1).min(last),
                frac: pos - i0 as f32,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/reconcile/resample.rs"]
mod tests;
