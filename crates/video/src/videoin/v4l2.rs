use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat},
    v4l::{
        Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

const BUFFER_COUNT: u32 = 4;

pub(crate) struct V4l2 {
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
    format: PixelFormat,
}

impl V4l2 {
    pub fn new() -> Self {
        Self {
            stream: None,
            size: Vec2::new(0, 0),
            format: PixelFormat::Yuyv,
        }
    }
}

impl VideoInDevice for V4l2 {
    fn open(&mut self, config: &VideoInConfig) -> Result<VideoInConfig, VideoError> {
        self.stream.take();

        let device = match &config.path {
            Some(path) => Device::with_path(path)?,
            None => Device::new(config.index)?,
        };
        let current = Capture::format(&device)?;

        let size = config
            .size
            .unwrap_or(Vec2::new(current.width as usize, current.height as usize));
        let fourcc = match config.format {
            Some(format) => FourCC::new(format.as_fourcc()),
            None => current.fourcc,
        };

        // the driver may adjust both size and format
        let actual = Capture::set_format(
            &device,
            &Format::new(size.x as u32, size.y as u32, fourcc),
        )?;
        self.size = Vec2::new(actual.width as usize, actual.height as usize);
        self.format = PixelFormat::from_fourcc(&actual.fourcc.repr).ok_or_else(|| {
            VideoError::Device(format!("unsupported pixel format: {}", actual.fourcc))
        })?;

        let frame_rate = match config.frame_rate {
            Some(frame_rate) => frame_rate,
            None => {
                let params = Capture::params(&device)?;
                params.interval.denominator as f32 / params.interval.numerator as f32
            }
        };
        let params = Capture::set_params(
            &device,
            &v4l::video::capture::Parameters::with_fps(frame_rate as u32),
        )?;
        let frame_rate = params.interval.denominator as f32 / params.interval.numerator as f32;

        self.stream = Some(
            MmapStream::with_buffers(&device, Type::VideoCapture, BUFFER_COUNT)
                .map_err(|error| VideoError::Stream(error.to_string()))?,
        );

        Ok(VideoInConfig {
            path: config.path.clone(),
            index: config.index,
            size: Some(self.size),
            format: Some(self.format),
            frame_rate: Some(frame_rate),
        })
    }

    fn close(&mut self) {
        self.stream.take();
    }

    fn blocking_capture(&mut self) -> Result<VideoFrame, VideoError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| VideoError::Stream("no stream".to_string()))?;
        let (data, metadata) =
            CaptureStream::next(stream).map_err(|error| VideoError::Stream(error.to_string()))?;
        // drivers may hand out padded buffers for raw formats
        let data = match self.format.bytes_per_pixel() {
            Some(bpp) => &data[..data.len().min(self.size.area() * bpp)],
            None => data,
        };
        Ok(VideoFrame {
            image: Image::new(self.size, data.to_vec(), self.format),
            sequence: metadata.sequence as u64,
        })
    }
}
