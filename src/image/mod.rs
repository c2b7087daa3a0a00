//! Image buffers and views used by the quality metrics.
//!
//! - `RasterImage`: borrowed 8-bit input in gray, RGB or RGBA layout.
//! - `ImageU8`: borrowed 8-bit grayscale view.
//! - `ImageF32`: owned float buffer for intermediate responses.
pub mod buffers;
pub mod io;
pub mod raster;
pub mod traits;

pub use self::buffers::{ImageF32, ImageU8};
pub use self::raster::{to_luminance, PixelFormat, RasterImage};
pub use self::traits::{ImageView, ImageViewMut, Rows};
