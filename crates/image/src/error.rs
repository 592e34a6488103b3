use {crate::PixelFormat, std::fmt};

#[derive(Debug)]
pub enum ImageError {
    Decode(String),
    Encode(String),
    Format { expected: PixelFormat, got: PixelFormat },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Decode(msg) => write!(f, "decode error: {msg}"),
            ImageError::Encode(msg) => write!(f, "encode error: {msg}"),
            ImageError::Format { expected, got } => {
                write!(f, "expected {expected:?} image, got {got:?}")
            }
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}
