//! Borrowed 8-bit raster input and its luminance conversion.
//!
//! Luminance follows BT.601 (`0.299 R + 0.587 G + 0.114 B`) in 14-bit fixed
//! point, so gray levels come out as exact integers on the 0..=255 scale.
use super::buffers::{ImageF32, ImageU8};
use super::traits::ImageViewMut;
use crate::error::{QualityError, Result};

const LUMA_SHIFT: u32 = 14;
const LUMA_R: u32 = 4899; // round(0.299 * 2^14)
const LUMA_G: u32 = 9617; // round(0.587 * 2^14)
const LUMA_B: u32 = 1868; // round(0.114 * 2^14)

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Gray,
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Gray => 1,
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// Decoded image owned by the caller; the metrics only read it.
#[derive(Clone, Debug)]
pub struct RasterImage<'a> {
    pub w: usize,
    pub h: usize,
    /// Bytes between the starts of consecutive rows.
    pub stride: usize,
    pub format: PixelFormat,
    pub data: &'a [u8],
}

impl<'a> RasterImage<'a> {
    pub fn new(w: usize, h: usize, format: PixelFormat, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w * format.channels(),
            format,
            data,
        }
    }

    pub fn gray(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self::new(w, h, PixelFormat::Gray, data)
    }

    pub fn rgb(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self::new(w, h, PixelFormat::Rgb, data)
    }

    /// Check that the raster has a non-zero area and that `data` covers every row.
    pub fn validate(&self) -> Result<()> {
        if self.w == 0 || self.h == 0 {
            return Err(QualityError::InvalidImage(format!(
                "zero-area raster {}x{}",
                self.w, self.h
            )));
        }
        let row_bytes = self.w * self.format.channels();
        if self.stride < row_bytes {
            return Err(QualityError::InvalidImage(format!(
                "stride {} shorter than a row of {} bytes",
                self.stride, row_bytes
            )));
        }
        let needed = self.stride * (self.h - 1) + row_bytes;
        if self.data.len() < needed {
            return Err(QualityError::InvalidImage(format!(
                "buffer holds {} bytes, {}x{} {:?} needs {}",
                self.data.len(),
                self.w,
                self.h,
                self.format,
                needed
            )));
        }
        Ok(())
    }

    fn row_bytes(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * self.format.channels()]
    }
}

impl<'a> From<ImageU8<'a>> for RasterImage<'a> {
    fn from(view: ImageU8<'a>) -> Self {
        Self {
            w: view.w,
            h: view.h,
            stride: view.stride,
            format: PixelFormat::Gray,
            data: view.data,
        }
    }
}

#[inline]
fn luma(r: u8, g: u8, b: u8) -> f32 {
    let acc = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;
    ((acc + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as f32
}

/// Validate `raster` and convert it to single-channel luminance.
pub fn to_luminance(raster: &RasterImage<'_>) -> Result<ImageF32> {
    raster.validate()?;
    let mut out = ImageF32::new(raster.w, raster.h);
    let channels = raster.format.channels();
    for y in 0..raster.h {
        let src = raster.row_bytes(y);
        let dst = out.row_mut(y);
        match raster.format {
            PixelFormat::Gray => {
                for (d, &px) in dst.iter_mut().zip(src) {
                    *d = px as f32;
                }
            }
            PixelFormat::Rgb | PixelFormat::Rgba => {
                for (d, px) in dst.iter_mut().zip(src.chunks_exact(channels)) {
                    *d = luma(px[0], px[1], px[2]);
                }
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_area_is_invalid() {
        let raster = RasterImage::gray(0, 10, &[]);
        let err = to_luminance(&raster).unwrap_err();
        assert!(err.is_invalid_image(), "unexpected error {err}");
    }

    #[test]
    fn short_buffer_is_invalid() {
        let data = [0u8; 5];
        let raster = RasterImage::rgb(2, 1, &data);
        assert!(raster.validate().is_err());
    }

    #[test]
    fn primaries_follow_bt601_weights() {
        let data = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let raster = RasterImage::rgb(4, 1, &data);
        let gray = to_luminance(&raster).expect("valid raster");
        assert_eq!(gray.data, vec![76.0, 150.0, 29.0, 255.0]);
    }

    #[test]
    fn rgba_ignores_alpha() {
        let data = [10, 20, 30, 0, 10, 20, 30, 255];
        let raster = RasterImage::new(2, 1, PixelFormat::Rgba, &data);
        let gray = to_luminance(&raster).expect("valid raster");
        assert_eq!(gray.get(0, 0), gray.get(1, 0));
    }

    #[test]
    fn gray_view_converts_without_copying_padding() {
        let data = [5u8, 6, 0, 7, 8, 0];
        let view = ImageU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        };
        assert_eq!(view.get(1, 1), 8);
        let gray = to_luminance(&RasterImage::from(view)).expect("valid raster");
        assert_eq!(gray.data, vec![5.0, 6.0, 7.0, 8.0]);

        let packed = ImageU8::packed(3, 2, &data);
        let gray = to_luminance(&packed.into()).expect("valid raster");
        assert_eq!(gray.get(2, 1), 0.0);
    }
}
