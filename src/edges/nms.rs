//! Non-maximum suppression and threshold classification.
//!
//! Each pixel is compared with its two neighbours along the gradient,
//! quantized to 0°, 45°, 90° or 135°. On the axis-aligned sectors a pixel must
//! be strictly greater than the preceding neighbour and at least equal to the
//! following one, so a two-pixel plateau keeps exactly one pixel. Diagonal
//! sectors require a strict maximum. Neighbours outside the image count as 0.
use super::grad::Grad;
use crate::image::ImageView;

const TAN_22_5_DEG: f32 = 0.414_213_56;

/// Classification of a pixel after suppression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeClass {
    Suppressed,
    Weak,
    Strong,
}

/// Suppress non-maxima and classify the survivors against `(low, high)`:
/// magnitude `> high` is strong, `> low` is weak.
pub fn classify_maxima(grad: &Grad, low: f32, high: f32) -> Vec<EdgeClass> {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut classes = vec![EdgeClass::Suppressed; w * h];
    if w == 0 || h == 0 {
        return classes;
    }

    let mag_at = |x: isize, y: isize| -> f32 {
        if x < 0 || y < 0 || x >= w as isize || y >= h as isize {
            0.0
        } else {
            grad.mag.get(x as usize, y as usize)
        }
    };

    for y in 0..h {
        let mag_row = grad.mag.row(y);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let yi = y as isize;

        for x in 0..w {
            let mag = mag_row[x];
            if mag <= low {
                continue;
            }
            let xi = x as isize;

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();

            let is_max = if abs_gy < abs_gx * TAN_22_5_DEG {
                mag > mag_at(xi - 1, yi) && mag >= mag_at(xi + 1, yi)
            } else if abs_gx < abs_gy * TAN_22_5_DEG {
                mag > mag_at(xi, yi - 1) && mag >= mag_at(xi, yi + 1)
            } else if (gx >= 0.0) == (gy >= 0.0) {
                // gradient points along the main diagonal
                mag > mag_at(xi - 1, yi - 1) && mag > mag_at(xi + 1, yi + 1)
            } else {
                mag > mag_at(xi + 1, yi - 1) && mag > mag_at(xi - 1, yi + 1)
            };
            if !is_max {
                continue;
            }

            classes[y * w + x] = if mag > high {
                EdgeClass::Strong
            } else {
                EdgeClass::Weak
            };
        }
    }

    classes
}
