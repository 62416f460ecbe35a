//! Streak-camera image preview.
//!
//! The streak image is stored as a flat pixel array next to two scalar
//! datasets holding its height and width. The preview reshapes it row-major,
//! median-filters it, maps it through viridis and writes a PNG.

mod colormap;
mod filter;

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbImage};
use ndarray::Array2;

use crate::constants::{
    DEFAULT_FIGURE_SIZE, DEFAULT_MEDIAN_KERNEL, STREAK_DATA_PATH, STREAK_HEIGHT_PATH,
    STREAK_WIDTH_PATH,
};
use crate::data::Container;
use crate::error::{InspectError, Result};

pub use colormap::{Normalize, viridis};
pub use filter::median_filter;

/// How the preview is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Median filter window size (odd)
    pub kernel: usize,
    /// Output size in pixels (width, height). The image is stretched to
    /// fill it; `None` keeps one pixel per element.
    pub figure_size: Option<(u32, u32)>,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            kernel: DEFAULT_MEDIAN_KERNEL,
            figure_size: Some(DEFAULT_FIGURE_SIZE),
        }
    }
}

/// Reshape a flat row-major pixel array into `height × width`.
pub fn reshape(values: Vec<f64>, height: usize, width: usize) -> Result<Array2<f64>> {
    let mismatch = |actual: usize| InspectError::ShapeMismatch {
        height,
        width,
        expected: height.saturating_mul(width),
        actual,
    };

    match height.checked_mul(width) {
        Some(expected) if expected == values.len() => {}
        _ => return Err(mismatch(values.len())),
    }

    let actual = values.len();
    Array2::from_shape_vec((height, width), values).map_err(|_| mismatch(actual))
}

/// Read one image dimension stored as a one-element dataset.
fn read_dimension(container: &dyn Container, path: &str) -> Result<usize> {
    let value = container.read_scalar(path)?;

    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Ok(value as usize)
    } else {
        Err(InspectError::InvalidImage {
            message: format!("{} = {} is not a valid image dimension", path, value),
        })
    }
}

/// Read the streak image datasets and reshape them into a matrix.
pub fn load_streak_image(container: &dyn Container) -> Result<Array2<f64>> {
    let data = container.read_values(STREAK_DATA_PATH)?;
    let height = read_dimension(container, STREAK_HEIGHT_PATH)?;
    let width = read_dimension(container, STREAK_WIDTH_PATH)?;

    log::debug!(
        "Streak image: {} values, {}x{} declared",
        data.len(),
        height,
        width
    );

    reshape(data, height, width)
}

/// Colour-map a matrix into an RGB image (row 0 at the top).
pub fn colorize(image: &Array2<f64>) -> Result<RgbImage> {
    let (rows, cols) = image.dim();
    if rows == 0 || cols == 0 {
        return Err(InspectError::InvalidImage {
            message: format!("{}x{} image has no pixels", rows, cols),
        });
    }

    let too_large = || InspectError::InvalidImage {
        message: format!("{}x{} exceeds the PNG size limit", rows, cols),
    };
    let width = u32::try_from(cols).map_err(|_| too_large())?;
    let height = u32::try_from(rows).map_err(|_| too_large())?;

    let norm = Normalize::from_values(image.iter());

    Ok(RgbImage::from_fn(width, height, |x, y| {
        viridis(norm.apply(image[[y as usize, x as usize]]))
    }))
}

/// Filter, colour-map and scale a streak image.
pub fn render(image: &Array2<f64>, options: &PreviewOptions) -> Result<RgbImage> {
    let filtered = median_filter(image, options.kernel)?;
    let rgb = colorize(&filtered)?;

    Ok(match options.figure_size {
        Some((width, height)) if (width, height) != rgb.dimensions() => {
            imageops::resize(&rgb, width, height, FilterType::Nearest)
        }
        _ => rgb,
    })
}

/// Render a streak image and write it as PNG.
pub fn write_preview(image: &Array2<f64>, options: &PreviewOptions, path: &Path) -> Result<()> {
    let rgb = render(image, options)?;
    rgb.save_with_format(path, ImageFormat::Png)?;

    log::info!(
        "Wrote {}x{} preview to {}",
        rgb.width(),
        rgb.height(),
        path.display()
    );

    Ok(())
}
