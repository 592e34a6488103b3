use crate::ImageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb8,
    Yuyv,
    Jpeg,
}

impl PixelFormat {
    /// Map a V4L2 fourcc to a supported format.
    pub fn from_fourcc(fourcc: &[u8; 4]) -> Option<Self> {
        match fourcc {
            b"RGB3" => Some(PixelFormat::Rgb8),
            b"YUYV" => Some(PixelFormat::Yuyv),
            b"MJPG" => Some(PixelFormat::Jpeg),
            _ => None,
        }
    }

    pub fn as_fourcc(&self) -> &'static [u8; 4] {
        match self {
            PixelFormat::Rgb8 => b"RGB3",
            PixelFormat::Yuyv => b"YUYV",
            PixelFormat::Jpeg => b"MJPG",
        }
    }

    /// Bytes per pixel for uncompressed formats.
    pub fn bytes_per_pixel(&self) -> Option<usize> {
        match self {
            PixelFormat::Rgb8 => Some(3),
            PixelFormat::Yuyv => Some(2),
            PixelFormat::Jpeg => None,
        }
    }

    pub fn ensure(&self, expected: PixelFormat) -> Result<(), ImageError> {
        if *self != expected {
            return Err(ImageError::Format {
                expected,
                got: *self,
            });
        }
        Ok(())
    }
}
