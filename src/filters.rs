//! Small convolution filters shared by the edge and sharpness stages.
//!
//! Borders are reflected without repeating the outermost sample
//! (`gfedcb|abcdefgh|gfedcba`).
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Normalised 5-tap Gaussian `[1, 4, 6, 4, 1] / 16` (5×5 when applied along
/// both axes).
pub const GAUSSIAN_5TAP: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Index of sample `i` in a line of `n` samples under reflect-101 borders.
#[inline]
fn reflect_101(mut i: isize, n: usize) -> usize {
    let n = n as isize;
    if n == 1 {
        return 0;
    }
    loop {
        if i < 0 {
            i = -i;
        } else if i >= n {
            i = 2 * (n - 1) - i;
        } else {
            return i as usize;
        }
    }
}

/// Convolve `src` with the symmetric kernel `taps` horizontally, then
/// vertically.
pub fn apply_separable(taps: &[f32], src: &ImageF32) -> ImageF32 {
    let radius = (taps.len() / 2) as isize;
    let (w, h) = (src.w, src.h);
    let mut horiz = ImageF32::new(w, h);
    if src.is_empty() {
        return horiz;
    }

    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = horiz.row_mut(y);
        for (x, dst) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = reflect_101(x as isize + k as isize - radius, w);
                acc += tap * src_row[sx];
            }
            *dst = acc;
        }
    }

    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        let dst_row = out.row_mut(y);
        for (k, &tap) in taps.iter().enumerate() {
            let sy = reflect_101(y as isize + k as isize - radius, h);
            for (dst, &v) in dst_row.iter_mut().zip(horiz.row(sy)) {
                *dst += tap * v;
            }
        }
    }
    out
}

/// 4-neighbour discrete Laplacian `[[0, 1, 0], [1, -4, 1], [0, 1, 0]]`.
pub fn laplacian(src: &ImageF32) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    let mut out = ImageF32::new(w, h);
    if src.is_empty() {
        return out;
    }
    for y in 0..h {
        let yi = y as isize;
        let up = src.row(reflect_101(yi - 1, h));
        let mid = src.row(y);
        let down = src.row(reflect_101(yi + 1, h));
        let dst = out.row_mut(y);
        for x in 0..w {
            let xi = x as isize;
            let left = mid[reflect_101(xi - 1, w)];
            let right = mid[reflect_101(xi + 1, w)];
            dst[x] = up[x] + down[x] + left + right - 4.0 * mid[x];
        }
    }
    out
}
