use {crate::*, base::Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// Black `Rgb8` image.
    pub fn black(size: Vec2<usize>) -> Self {
        Self::new(size, vec![0; size.area() * 3], PixelFormat::Rgb8)
    }

    /// Check that an uncompressed buffer matches its size.
    pub fn validate(&self) -> Result<(), ImageError> {
        if let Some(bpp) = self.format.bytes_per_pixel() {
            let expected = self.size.area() * bpp;
            if self.data.len() != expected {
                return Err(ImageError::Decode(format!(
                    "{:?} frame of {}x{} needs {} bytes, got {}",
                    self.format,
                    self.size.x,
                    self.size.y,
                    expected,
                    self.data.len()
                )));
            }
        }
        Ok(())
    }

    /// Flip an `Rgb8` image left to right in place, so the player sees
    /// themselves as in a mirror.
    pub fn mirror(&mut self) -> Result<(), ImageError> {
        self.format.ensure(PixelFormat::Rgb8)?;
        self.validate()?;
        let width = self.size.x;
        for row in self.data.chunks_exact_mut(width * 3) {
            for x in 0..width / 2 {
                let left = x * 3;
                let right = (width - 1 - x) * 3;
                for c in 0..3 {
                    row.swap(left + c, right + c);
                }
            }
        }
        Ok(())
    }

    /// RGB triple at a pixel, if the image is `Rgb8` and the pixel exists.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if self.format != PixelFormat::Rgb8 || x >= self.size.x || y >= self.size.y {
            return None;
        }
        let i = (y * self.size.x + x) * 3;
        self.data.get(i..i + 3).map(|p| [p[0], p[1], p[2]])
    }
}
