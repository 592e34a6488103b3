use {
    crate::*,
    base::Vec2,
    image::PixelFormat,
    std::{
        path::PathBuf,
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
    },
    tokio::{
        sync::{mpsc, oneshot},
        task::{JoinHandle, spawn_blocking},
    },
};

#[cfg(feature = "v4l2")]
mod v4l2;

// capacity of the video input channel
const CHANNEL_CAPACITY: usize = 4;

/// Requested capture settings. `None` fields keep the device's current value.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoInConfig {
    /// Device node; when unset the device at `index` is used.
    pub path: Option<PathBuf>,
    pub index: usize,
    pub size: Option<Vec2<usize>>,
    pub format: Option<PixelFormat>,
    pub frame_rate: Option<f32>,
}

impl Default for VideoInConfig {
    fn default() -> Self {
        Self {
            path: None,
            index: 0,
            size: None,
            format: None,
            frame_rate: None,
        }
    }
}

/// A capture backend. All three calls happen on the same worker thread.
pub trait VideoInDevice: Send {
    /// Open the device and return the configuration it actually accepted.
    fn open(&mut self, config: &VideoInConfig) -> Result<VideoInConfig, VideoError>;
    fn close(&mut self);
    fn blocking_capture(&mut self) -> Result<VideoFrame, VideoError>;
}

/// Owns one camera for as long as it lives.
///
/// Capturing runs on tokio's blocking pool. When the device stops
/// delivering frames the worker closes it and ends; `capture` then
/// reports a stream error. There is no reconnect.
pub struct VideoIn {
    receiver: mpsc::Receiver<VideoFrame>,
    cancel: Arc<AtomicBool>,
    config: VideoInConfig,
    _worker: JoinHandle<()>,
}

impl VideoIn {
    /// Open a V4L2 camera.
    #[cfg(feature = "v4l2")]
    pub async fn open(config: VideoInConfig) -> Result<Self, VideoError> {
        Self::with_device(Box::new(v4l2::V4l2::new()), config).await
    }

    /// Start capturing from any backend.
    pub async fn with_device(
        mut device: Box<dyn VideoInDevice>,
        config: VideoInConfig,
    ) -> Result<Self, VideoError> {
        let (sender, receiver) = mpsc::channel::<VideoFrame>(CHANNEL_CAPACITY);
        let cancel = Arc::new(AtomicBool::new(false));

        // the device is opened on the worker thread, some backends care
        // which thread they are driven from
        let (init_tx, init_rx) = oneshot::channel::<Result<VideoInConfig, VideoError>>();

        let join_handle = spawn_blocking({
            let cancel = Arc::clone(&cancel);
            move || {
                match device.open(&config) {
                    Ok(config) => {
                        let _ = init_tx.send(Ok(config));
                    }
                    Err(error) => {
                        let _ = init_tx.send(Err(error));
                        return;
                    }
                }

                log::info!("video worker: starting capture loop");
                while !cancel.load(Ordering::Relaxed) {
                    match device.blocking_capture() {
                        Ok(frame) => {
                            if sender.blocking_send(frame).is_err() {
                                log::debug!("video worker: receiver dropped");
                                break;
                            }
                        }
                        Err(error) => {
                            log::info!("video worker: capture failed, stopping: {}", error);
                            break;
                        }
                    }
                }
                device.close();
                log::info!("video worker: device closed");
            }
        });

        let config = init_rx
            .await
            .map_err(|_| VideoError::Device("worker thread died during init".to_string()))??;

        log::info!(
            "video input opened: {:?} {:?} @ {:?} fps",
            config.size,
            config.format,
            config.frame_rate
        );

        Ok(Self {
            receiver,
            cancel,
            config,
            _worker: join_handle,
        })
    }

    /// Configuration negotiated with the device.
    pub fn config(&self) -> &VideoInConfig {
        &self.config
    }

    pub async fn capture(&mut self) -> Result<VideoFrame, VideoError> {
        match self.receiver.recv().await {
            Some(frame) => Ok(frame),
            None => Err(VideoError::Stream("video input channel closed".to_string())),
        }
    }
}

impl Drop for VideoIn {
    fn drop(&mut self) {
        // the worker notices either the flag or the closed channel after
        // its current capture and releases the device
        self.cancel.store(true, Ordering::Relaxed);
        self.receiver.close();
    }
}
