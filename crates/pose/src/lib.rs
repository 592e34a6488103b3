//! Body landmarks for the motion game.
//!
//! A `PoseSource` turns an RGB frame into a `Landmarks` set (17 COCO body
//! points in normalized image coordinates), or `None` when nobody is in
//! view. `YoloPose` is the ONNX-backed source used by the game.

mod error;
pub use error::PoseError;

mod landmark;
pub use landmark::*;

pub mod skeleton;

mod source;
pub use source::*;

#[cfg(feature = "onnx")]
pub mod yolo;

#[cfg(feature = "onnx")]
pub use yolo::YoloPose;
