//! I/O helpers for decoded rasters, edge maps and JSON.
//!
//! - `load_raster`: decode a PNG/JPEG/etc. into an owned gray/RGB/RGBA buffer,
//!   upright according to its EXIF orientation.
//! - `save_edge_map_png`: write an `EdgeMap` as a black/white PNG.
//! - `save_grayscale_u8`: write an 8-bit gray buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::raster::{PixelFormat, RasterImage};
use crate::edges::EdgeMap;
use crate::error::{QualityError, Result};
use image::{DynamicImage, GrayImage, ImageDecoder, ImageReader, ImageResult};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned decoded image, borrowed as a `RasterImage` for assessment.
#[derive(Clone, Debug)]
pub struct OwnedRaster {
    width: usize,
    height: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl OwnedRaster {
    pub fn new(width: usize, height: usize, format: PixelFormat, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            format,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_view(&self) -> RasterImage<'_> {
        RasterImage::new(self.width, self.height, self.format, &self.data)
    }
}

impl From<DynamicImage> for OwnedRaster {
    fn from(img: DynamicImage) -> Self {
        let (w, h) = (img.width() as usize, img.height() as usize);
        match img {
            DynamicImage::ImageLuma8(gray) => Self::new(w, h, PixelFormat::Gray, gray.into_raw()),
            DynamicImage::ImageRgba8(rgba) => Self::new(w, h, PixelFormat::Rgba, rgba.into_raw()),
            other if other.color().has_color() => {
                Self::new(w, h, PixelFormat::Rgb, other.into_rgb8().into_raw())
            }
            other => Self::new(w, h, PixelFormat::Gray, other.into_luma8().into_raw()),
        }
    }
}

/// Load an image from disk, keeping gray sources single-channel.
///
/// The EXIF orientation tag is applied, so rotated phone photos are analysed
/// the way they are displayed.
pub fn load_raster(path: &Path) -> Result<OwnedRaster> {
    let img = decode_upright(path).map_err(|source| QualityError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(OwnedRaster::from(img))
}

fn decode_upright(path: &Path) -> ImageResult<DynamicImage> {
    let mut decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);
    Ok(img)
}

/// Save an edge map as a PNG with edges in white.
pub fn save_edge_map_png(edges: &EdgeMap, path: &Path) -> Result<(), String> {
    let data = edges
        .as_slice()
        .iter()
        .map(|&set| if set { 255u8 } else { 0u8 })
        .collect();
    save_grayscale_u8(edges.width(), edges.height(), data, path)
}

/// Save a tightly packed 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(
    width: usize,
    height: usize,
    data: Vec<u8>,
    path: &Path,
) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(width as u32, height as u32, data)
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
