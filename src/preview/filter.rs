//! 2-D median filtering.

use ndarray::{Array2, Zip};

use crate::error::{InspectError, Result};

/// Median filter with a square `kernel × kernel` window.
///
/// Pixels outside the image count as zero, so corners and edges are pulled
/// toward zero the same way SciPy's `medfilt` does.
pub fn median_filter(image: &Array2<f64>, kernel: usize) -> Result<Array2<f64>> {
    if kernel == 0 || kernel % 2 == 0 {
        return Err(InspectError::InvalidKernel { size: kernel });
    }

    let (rows, cols) = image.dim();
    if rows == 0 || cols == 0 {
        return Ok(image.clone());
    }

    let half = kernel / 2;
    let padded = Array2::from_shape_fn((rows + 2 * half, cols + 2 * half), |(r, c)| {
        let inside = (half..half + rows).contains(&r) && (half..half + cols).contains(&c);
        if inside {
            image[[r - half, c - half]]
        } else {
            0.0
        }
    });

    let mut filtered = Array2::<f64>::zeros((rows, cols));
    let mut window = Vec::with_capacity(kernel * kernel);
    let middle = kernel * kernel / 2;

    Zip::from(&mut filtered)
        .and(padded.windows((kernel, kernel)))
        .for_each(|out, neighbourhood| {
            window.clear();
            window.extend(neighbourhood.iter().copied());
            let (_, median, _) = window.select_nth_unstable_by(middle, f64::total_cmp);
            *out = *median;
        });

    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_rejects_even_kernel() {
        let image = Array2::<f64>::zeros((3, 3));
        assert!(matches!(
            median_filter(&image, 2),
            Err(InspectError::InvalidKernel { size: 2 })
        ));
        assert!(median_filter(&image, 0).is_err());
    }

    #[test]
    fn test_kernel_one_is_identity() {
        let image = array![[1.0, 5.0], [3.0, 2.0]];
        assert_eq!(median_filter(&image, 1).unwrap(), image);
    }

    #[test]
    fn test_removes_salt_noise() {
        let image = array![
            [1.0, 1.0, 1.0, 1.0],
            [1.0, 9.0, 1.0, 1.0],
            [1.0, 1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0, 1.0],
        ];

        let filtered = median_filter(&image, 3).unwrap();

        assert_eq!(filtered[[1, 1]], 1.0);
        assert_eq!(filtered[[2, 2]], 1.0);
    }

    #[test]
    fn test_zero_padded_corners() {
        // Corner window holds 4 ones and 5 padded zeros.
        let image = Array2::<f64>::ones((3, 3));
        let filtered = median_filter(&image, 3).unwrap();

        assert_eq!(filtered[[0, 0]], 0.0);
        // Edge window holds 6 ones and 3 zeros.
        assert_eq!(filtered[[0, 1]], 1.0);
        assert_eq!(filtered[[1, 1]], 1.0);
    }

    #[test]
    fn test_matches_scipy_reference() {
        // scipy.signal.medfilt(np.arange(6).reshape(2, 3))
        let image = array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]];
        let filtered = median_filter(&image, 3).unwrap();

        assert_eq!(filtered, array![[0.0, 1.0, 0.0], [0.0, 1.0, 0.0]]);
    }

    #[test]
    fn test_wide_kernel_pads_every_side() {
        // 5x5 window over a 1x3 image: at most 3 of 25 cells are data.
        let image = array![[7.0, 8.0, 9.0]];
        let filtered = median_filter(&image, 5).unwrap();

        assert_eq!(filtered, array![[0.0, 0.0, 0.0]]);
    }

    #[test]
    fn test_padding_keeps_interior_values() {
        let image = Array2::from_shape_fn((5, 5), |(r, c)| (r * 5 + c) as f64);
        let filtered = median_filter(&image, 3).unwrap();

        // Interior windows never touch the padding.
        assert_eq!(filtered[[2, 2]], 12.0);
        assert_eq!(filtered[[1, 3]], 8.0);
    }

    #[test]
    fn test_empty_image() {
        let image = Array2::<f64>::zeros((0, 4));
        assert_eq!(median_filter(&image, 3).unwrap().dim(), (0, 4));
    }
}
