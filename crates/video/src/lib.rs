//! Camera capture for the motion game.
//!
//! `VideoIn` owns a capture device on a blocking worker thread and hands
//! frames to async code through a bounded channel. The V4L2 backend is
//! behind the `v4l2` feature; tests plug in their own `VideoInDevice`.

pub mod error;
pub use error::VideoError;

mod videoframe;
pub use videoframe::*;

mod videoin;
pub use videoin::*;
