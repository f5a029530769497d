//! Image decoding and tensor preparation
//!
//! Turns raw uploaded bytes into the fixed-shape normalized tensor the
//! classifier expects: `[1, 128, 128, 3]`, f32, values in `[0, 1]`.
//! Pure function of its input; nothing is retained between requests.

use image::imageops::FilterType;
use ndarray::Array4;

use crate::utils::error::{InferenceError, Result};
use crate::IMAGE_SIZE;

/// Decode uploaded bytes into a normalized `[1, 128, 128, 3]` tensor.
///
/// Any parseable image is forced to 3-channel RGB (grayscale and alpha
/// variants included), resized (not cropped) to 128x128 with Lanczos3
/// resampling, and normalized by dividing 8-bit channel values by 255.
pub fn decode(bytes: &[u8]) -> Result<Array4<f32>> {
    if bytes.is_empty() {
        return Err(InferenceError::ImageDecode("empty upload".to_string()));
    }

    let img = image::load_from_memory(bytes)
        .map_err(|e| InferenceError::ImageDecode(e.to_string()))?;

    let resized = img.resize_exact(IMAGE_SIZE, IMAGE_SIZE, FilterType::Lanczos3);
    let rgb = resized.to_rgb8();

    let size = IMAGE_SIZE as usize;
    let mut tensor = Array4::<f32>::zeros((1, size, size, 3));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        for c in 0..3 {
            tensor[[0, y as usize, x as usize, c]] = pixel[c] as f32 / 255.0;
        }
    }

    Ok(tensor)
}
