use {
    crate::FrameSlot,
    game::Game,
    image::Image,
    pose::{SharedPoseSource, detect_shared},
    std::sync::Arc,
    tokio::task::spawn_blocking,
    video::{VideoError, VideoFrame, VideoIn},
};

/// Turn a camera frame into the mirrored `Rgb8` image the player sees.
pub fn prepare_frame(frame: &VideoFrame) -> Result<Image, VideoError> {
    let mut image = frame.to_rgb()?;
    image.mirror()?;
    Ok(image)
}

/// Reads the camera and keeps the frame slot fresh.
///
/// Until the game has resting ankle heights, every frame also goes through
/// pose detection so the first person seen can be latched.
pub struct Producer {
    videoin: VideoIn,
    slot: FrameSlot,
    pose: SharedPoseSource,
    game: Game,
}

impl Producer {
    pub fn new(videoin: VideoIn, slot: FrameSlot, pose: SharedPoseSource, game: Game) -> Self {
        Self {
            videoin,
            slot,
            pose,
            game,
        }
    }

    /// Run until the camera stops. Dropping the returned future (or
    /// aborting its task) releases the camera and closes the slot.
    pub async fn run(mut self) {
        loop {
            let frame = match self.videoin.capture().await {
                Ok(frame) => frame,
                Err(error) => {
                    log::info!("camera stopped: {}", error);
                    break;
                }
            };

            let image = match prepare_frame(&frame) {
                Ok(image) => Arc::new(image),
                Err(error) => {
                    log::warn!("dropping frame {}: {}", frame.sequence, error);
                    continue;
                }
            };
            self.slot.publish(Arc::clone(&image));

            if self.game.needs_ankle_latch() {
                self.latch_ankles(image).await;
            }
        }
    }

    async fn latch_ankles(&self, image: Arc<Image>) {
        let pose = Arc::clone(&self.pose);
        match spawn_blocking(move || detect_shared(&pose, &image)).await {
            Ok(Ok(Some(landmarks))) => {
                if self.game.latch_ankles(&landmarks) {
                    log::info!("player found, resting ankle heights recorded");
                }
            }
            Ok(Ok(None)) => {}
            Ok(Err(error)) => log::warn!("pose detection failed: {}", error),
            Err(error) => log::warn!("pose detection task failed: {}", error),
        }
    }
}
