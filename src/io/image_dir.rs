use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::DynamicImage;

use crate::foundation::core::FrameShape;
use crate::foundation::error::{SpliceError, SpliceResult};
use crate::sequence::frame::Frame;
use crate::sequence::sequence::FrameSequence;

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "tga", "webp", "pnm", "qoi",
];

/// Convert a decoded image into an 8-bit frame.
///
/// 8-bit gray, RGB and RGBA keep their channel count; any other color type (gray+alpha
/// included) is converted to RGBA when it has alpha and to RGB otherwise.
pub fn frame_from_image(img: DynamicImage) -> SpliceResult<Frame<u8>> {
    let (channels, width, height, raw) = match img {
        DynamicImage::ImageLuma8(b) => (1, b.width(), b.height(), b.into_raw()),
        DynamicImage::ImageRgb8(b) => (3, b.width(), b.height(), b.into_raw()),
        DynamicImage::ImageRgba8(b) => (4, b.width(), b.height(), b.into_raw()),
        other if other.color().has_alpha() => {
            let b = other.to_rgba8();
            (4, b.width(), b.height(), b.into_raw())
        }
        other => {
            let b = other.to_rgb8();
            (3, b.width(), b.height(), b.into_raw())
        }
    };
    Frame::new(FrameShape::new(height, width, channels), raw)
}

/// Convert an 8-bit frame with 1 to 4 channels back into an image.
pub fn frame_to_image(frame: &Frame<u8>) -> SpliceResult<DynamicImage> {
    let shape = frame.shape();
    let (w, h) = (shape.width, shape.height);
    let raw = frame.data().to_vec();
    let img = match shape.channels {
        1 => image::GrayImage::from_raw(w, h, raw).map(DynamicImage::ImageLuma8),
        2 => image::GrayAlphaImage::from_raw(w, h, raw).map(DynamicImage::ImageLumaA8),
        3 => image::RgbImage::from_raw(w, h, raw).map(DynamicImage::ImageRgb8),
        4 => image::RgbaImage::from_raw(w, h, raw).map(DynamicImage::ImageRgba8),
        c => {
            return Err(SpliceError::shape(format!(
                "cannot encode a {c}-channel frame as an image"
            )));
        }
    };
    img.ok_or_else(|| SpliceError::shape(format!("frame buffer does not fit {shape}")))
}

/// Load a sequence from a single image file or a directory of images.
///
/// Directory entries are filtered by image extension and ordered by file name.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_sequence(path: &Path) -> SpliceResult<FrameSequence<u8>> {
    let files = if path.is_dir() {
        list_image_files(path)?
    } else {
        vec![path.to_path_buf()]
    };
    if files.is_empty() {
        return Err(SpliceError::validation(format!(
            "no image files found in '{}'",
            path.display()
        )));
    }

    let mut frames = Vec::with_capacity(files.len());
    for file in &files {
        let img = image::open(file).with_context(|| format!("decode frame '{}'", file.display()))?;
        frames.push(frame_from_image(img)?);
    }
    let seq = FrameSequence::from_frames(frames)?;
    tracing::debug!(frames = seq.len(), shape = %seq.shape(), "loaded sequence");
    Ok(seq)
}

/// Write every frame of `seq` into `dir` as `frame_00000.png`, `frame_00001.png`, ...
///
/// Returns the written paths in frame order.
#[tracing::instrument(skip_all, fields(frames = seq.len(), dir = %dir.display()))]
pub fn save_sequence(seq: &FrameSequence<u8>, dir: &Path) -> SpliceResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;

    let digits = seq.len().saturating_sub(1).to_string().len().max(5);
    let mut written = Vec::with_capacity(seq.len());
    for (idx, frame) in seq.iter().enumerate() {
        let path = dir.join(format!("frame_{idx:0digits$}.png"));
        frame_to_image(frame)?
            .save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

fn list_image_files(dir: &Path) -> SpliceResult<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read directory '{}'", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && has_image_extension(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

#[cfg(test)]
#[path = "../../tests/unit/io/image_dir.rs"]
mod tests;
