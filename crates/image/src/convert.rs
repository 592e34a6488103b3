use {crate::*, base::Vec2};

// BT.601 YUV to RGB for a single pixel (fixed point, shift 8)
fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = y as i32;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    let r = (y + ((359 * v) >> 8)).clamp(0, 255) as u8;
    let g = (y - ((88 * u + 183 * v) >> 8)).clamp(0, 255) as u8;
    let b = (y + ((454 * u) >> 8)).clamp(0, 255) as u8;
    [r, g, b]
}

/// Packed YUYV 4:2:2 to RGB.
pub fn yuyv_to_rgb(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(size.area() * 3);
    for chunk in data.chunks_exact(4) {
        rgb.extend_from_slice(&yuv_to_rgb(chunk[0], chunk[1], chunk[3]));
        rgb.extend_from_slice(&yuv_to_rgb(chunk[2], chunk[1], chunk[3]));
    }
    rgb
}

pub fn jpeg_to_rgb(image: &Image) -> Result<Image, ImageError> {
    image.format.ensure(PixelFormat::Jpeg)?;
    let decoded = crates_image::load_from_memory(&image.data)
        .map_err(|e| ImageError::Decode(format!("failed to decode JPEG: {}", e)))?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Image::new(
        Vec2::new(width as usize, height as usize),
        rgb.into_raw(),
        PixelFormat::Rgb8,
    ))
}

impl Image {
    /// Convert any supported format to `Rgb8`.
    pub fn to_rgb(&self) -> Result<Image, ImageError> {
        match self.format {
            PixelFormat::Rgb8 => {
                self.validate()?;
                Ok(self.clone())
            }
            PixelFormat::Yuyv => {
                self.validate()?;
                Ok(Image::new(
                    self.size,
                    yuyv_to_rgb(self.size, &self.data),
                    PixelFormat::Rgb8,
                ))
            }
            PixelFormat::Jpeg => jpeg_to_rgb(self),
        }
    }
}
