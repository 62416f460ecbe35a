//! Viridis colormap.

use image::Rgb;

/// Viridis sampled at ten evenly spaced points, interpolated linearly
/// between them.
const VIRIDIS: [[u8; 3]; 10] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3E, 0x4A, 0x89],
    [0x31, 0x68, 0x8E],
    [0x26, 0x82, 0x8E],
    [0x1F, 0x9E, 0x89],
    [0x35, 0xB7, 0x79],
    [0x6D, 0xCD, 0x59],
    [0xB4, 0xDE, 0x2C],
    [0xFD, 0xE7, 0x25],
];

/// Map `t` in `0.0..=1.0` to a colour. Values outside the range are
/// clamped; NaN maps to the low end.
pub fn viridis(t: f64) -> Rgb<u8> {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - lower as f64;

    let a = VIRIDIS[lower];
    let b = VIRIDIS[lower + 1];
    let mix = |i: usize| (f64::from(a[i]) + (f64::from(b[i]) - f64::from(a[i])) * frac).round() as u8;

    Rgb([mix(0), mix(1), mix(2)])
}

/// Linear normalization onto `0.0..=1.0` using the finite data range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    min: f64,
    max: f64,
}

impl Normalize {
    /// Range spanned by the finite values.
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        if min > max {
            Self { min: 0.0, max: 0.0 }
        } else {
            Self { min, max }
        }
    }

    /// Scale a value; a flat range maps everything to zero.
    pub fn apply(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 {
            (value - self.min) / span
        } else {
            0.0
        }
    }
}
