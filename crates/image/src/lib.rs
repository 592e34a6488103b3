//! Frame buffers for the motion game.
//!
//! An `Image` is a size, a byte buffer and the `PixelFormat` describing it.
//! Camera frames arrive as YUYV or MJPEG, are converted to `Rgb8` once, then
//! mirrored, annotated and encoded back to JPEG for the browser.

mod convert;
pub use convert::*;

pub mod draw;

mod error;
pub use error::*;

mod image;
pub use image::*;

mod jpeg;
pub use jpeg::*;

mod pixelformat;
pub use pixelformat::*;
