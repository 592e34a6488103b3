use {
    crate::{Landmarks, PoseError},
    image::Image,
    std::sync::{Arc, Mutex},
};

/// Anything that can find a person's landmarks in an `Rgb8` frame.
pub trait PoseSource {
    /// Landmarks of the most confident person, `None` when nobody is found.
    fn detect(&mut self, image: &Image) -> Result<Option<Landmarks>, PoseError>;
}

impl<P: PoseSource + ?Sized> PoseSource for Box<P> {
    fn detect(&mut self, image: &Image) -> Result<Option<Landmarks>, PoseError> {
        (**self).detect(image)
    }
}

/// One pose source shared by the frame producer and every stream.
pub type SharedPoseSource = Arc<Mutex<dyn PoseSource + Send>>;

pub fn shared(source: impl PoseSource + Send + 'static) -> SharedPoseSource {
    Arc::new(Mutex::new(source))
}

/// Run `detect` on a shared source. Blocks while another caller holds it.
pub fn detect_shared(
    source: &SharedPoseSource,
    image: &Image,
) -> Result<Option<Landmarks>, PoseError> {
    source
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .detect(image)
}
