//! YOLO-pose on ONNX Runtime.
//!
//! The model takes a 640x640 letterboxed NCHW frame and returns `[1, 56, N]`
//! candidates: box center and size, person confidence, then 17 keypoints as
//! (x, y, visibility) triples, all in model pixels.

mod estimator;
pub use estimator::YoloPose;

mod postprocess;
pub use postprocess::postprocess;

mod preprocess;
pub use preprocess::{TARGET_SIZE, preprocess};

use base::Vec2;

/// How a source frame was fitted into the model input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    /// Model pixels per source pixel.
    pub scale: f32,
    /// Offset of the picture inside the model input.
    pub pad: Vec2<f32>,
}

impl Letterbox {
    /// Map a point in model pixels back to source pixels.
    pub fn unmap(&self, point: Vec2<f32>) -> Vec2<f32> {
        (point - self.pad) * self.scale.recip()
    }
}
