use std::fmt;

#[derive(Debug)]
pub enum PoseError {
    Image(image::ImageError),
    Shape { expected: String, got: String },
    ModelLoad(String),
    Backend(String),
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoseError::Image(err) => write!(f, "image error: {err}"),
            PoseError::Shape { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            PoseError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            PoseError::Backend(msg) => write!(f, "backend error: {msg}"),
        }
    }
}

impl std::error::Error for PoseError {}

impl From<image::ImageError> for PoseError {
    fn from(err: image::ImageError) -> Self {
        PoseError::Image(err)
    }
}

impl From<base::TensorError> for PoseError {
    fn from(err: base::TensorError) -> Self {
        PoseError::Backend(format!("tensor: {err}"))
    }
}
