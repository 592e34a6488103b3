use {crate::VideoError, image::Image};

/// One captured frame, still in the device's pixel format.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    pub image: Image,
    // counts frames delivered since the device was opened
    pub sequence: u64,
}

impl VideoFrame {
    pub fn to_rgb(&self) -> Result<Image, VideoError> {
        Ok(self.image.to_rgb()?)
    }
}
