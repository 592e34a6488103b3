use {
    crate::{FrameReceiver, JPEG_QUALITY},
    axum::body::Bytes,
    futures_util::stream::{self, Stream},
    game::{ClockEvent, Game},
    image::{Image, encode_jpeg},
    pose::{SharedPoseSource, detect_shared, skeleton::draw_skeleton},
    std::{convert::Infallible, sync::Arc, time::Instant},
    tokio::task::spawn_blocking,
};

/// Multipart boundary of `/video_feed`.
pub const BOUNDARY: &str = "frame";

/// Landmarks below this confidence are not drawn.
const DRAW_THRESHOLD: f32 = 0.5;

/// Outcome of rendering one frame.
#[derive(Debug)]
pub enum Cycle {
    /// A complete multipart part, ready to send.
    Part(Vec<u8>),
    /// The frame could not be used.
    Skip,
    GameOver,
}

/// Wrap a JPEG in its multipart part.
pub fn multipart_part(jpeg: &[u8]) -> Vec<u8> {
    let header = format!("--{}\r\nContent-Type: image/jpeg\r\n\r\n", BOUNDARY);
    let mut part = Vec::with_capacity(header.len() + jpeg.len() + 2);
    part.extend_from_slice(header.as_bytes());
    part.extend_from_slice(jpeg);
    part.extend_from_slice(b"\r\n");
    part
}

/// Render one frame: detect the player, draw the skeleton, score the
/// active command, tick the clock and encode. Blocking.
pub fn render_frame(image: &Image, pose: &SharedPoseSource, game: &Game, now: Instant) -> Cycle {
    let mut image = image.clone();
    let landmarks = match detect_shared(pose, &image) {
        Ok(landmarks) => landmarks,
        Err(error) => {
            log::warn!("pose detection failed: {}", error);
            return Cycle::Skip;
        }
    };
    if let Some(landmarks) = &landmarks {
        draw_skeleton(&mut image, landmarks, DRAW_THRESHOLD);
    }

    if game.update(landmarks.as_ref(), now) == ClockEvent::GameOver {
        return Cycle::GameOver;
    }

    match encode_jpeg(&image, JPEG_QUALITY) {
        Ok(jpeg) => Cycle::Part(multipart_part(&jpeg)),
        Err(error) => {
            log::warn!("jpeg encoding failed: {}", error);
            Cycle::Skip
        }
    }
}

/// Drives one `/video_feed` connection.
pub struct Renderer {
    frames: FrameReceiver,
    pose: SharedPoseSource,
    game: Game,
}

impl Renderer {
    pub fn new(frames: FrameReceiver, pose: SharedPoseSource, game: Game) -> Self {
        Self {
            frames,
            pose,
            game,
        }
    }

    /// Next multipart part. `None` when the game is over or the producer
    /// has gone away.
    pub async fn next_part(&mut self) -> Option<Vec<u8>> {
        loop {
            let image = self.frames.next().await?;
            let pose = Arc::clone(&self.pose);
            let game = self.game.clone();
            let cycle =
                spawn_blocking(move || render_frame(&image, &pose, &game, Instant::now())).await;
            match cycle {
                Ok(Cycle::Part(part)) => return Some(part),
                Ok(Cycle::Skip) => continue,
                Ok(Cycle::GameOver) => {
                    log::info!("game over, closing video stream");
                    return None;
                }
                Err(error) => {
                    log::warn!("render task failed: {}", error);
                    continue;
                }
            }
        }
    }

    pub fn into_stream(self) -> impl Stream<Item = Result<Bytes, Infallible>> + Send {
        stream::unfold(self, |mut renderer| async move {
            let part = renderer.next_part().await?;
            Some((Ok(Bytes::from(part)), renderer))
        })
    }
}
