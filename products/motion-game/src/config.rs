use {
    game::GameConfig,
    image::PixelFormat,
    std::{fmt, net::SocketAddr, path::PathBuf, time::Duration},
    video::VideoInConfig,
};

pub const ADDR_VAR: &str = "MOTION_GAME_ADDR";
pub const MODEL_VAR: &str = "MOTION_GAME_MODEL";
pub const CAMERA_VAR: &str = "MOTION_GAME_CAMERA";
pub const DURATION_VAR: &str = "MOTION_GAME_DURATION";
pub const RESTART_DURATION_VAR: &str = "MOTION_GAME_RESTART_DURATION";
pub const COMMAND_TIMEOUT_VAR: &str = "MOTION_GAME_COMMAND_TIMEOUT";
pub const LOG_DIR_VAR: &str = "MOTION_GAME_LOG_DIR";
pub const NO_BROWSER_VAR: &str = "MOTION_GAME_NO_BROWSER";
pub const CONFIDENCE_VAR: &str = "MOTION_GAME_CONFIDENCE";

const DEFAULT_MODEL: &str = "models/yolov8n-pose.onnx";
const DEFAULT_CONFIDENCE: f32 = 0.5;

/// Requested camera resolution.
pub const CAMERA_WIDTH: usize = 320;
pub const CAMERA_HEIGHT: usize = 240;
pub const CAMERA_FRAME_RATE: f32 = 30.0;

/// JPEG quality of the streamed frames.
pub const JPEG_QUALITY: u8 = 70;

#[derive(Debug, PartialEq)]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}={:?}: {}", self.var, self.value, self.reason)
    }
}

impl std::error::Error for ConfigError {}

/// Which camera to open.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraSelector {
    Index(usize),
    Path(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub model: PathBuf,
    /// Minimum person score for a detection to count.
    pub confidence: f32,
    pub camera: CameraSelector,
    pub game: GameConfig,
    pub log_dir: Option<PathBuf>,
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            model: PathBuf::from(DEFAULT_MODEL),
            confidence: DEFAULT_CONFIDENCE,
            camera: CameraSelector::Index(0),
            game: GameConfig::default(),
            log_dir: None,
            open_browser: true,
        }
    }
}

fn parse_secs(var: &'static str, value: String) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        Ok(_) => Err(ConfigError {
            var,
            value,
            reason: "must be at least one second".to_string(),
        }),
        Err(error) => Err(ConfigError {
            var,
            reason: error.to_string(),
            value,
        }),
    }
}

impl Config {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a configuration from the defaults and whatever `lookup`
    /// returns for each `MOTION_GAME_*` variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.trim().parse().map_err(|e: std::net::AddrParseError| ConfigError {
                var: ADDR_VAR,
                reason: e.to_string(),
                value,
            })?;
        }
        if let Some(value) = lookup(MODEL_VAR) {
            config.model = PathBuf::from(value);
        }
        if let Some(value) = lookup(CONFIDENCE_VAR) {
            config.confidence = match value.trim().parse::<f32>() {
                Ok(confidence) if (0.0..=1.0).contains(&confidence) => confidence,
                Ok(_) => {
                    return Err(ConfigError {
                        var: CONFIDENCE_VAR,
                        value,
                        reason: "must be between 0 and 1".to_string(),
                    });
                }
                Err(error) => {
                    return Err(ConfigError {
                        var: CONFIDENCE_VAR,
                        reason: error.to_string(),
                        value,
                    });
                }
            };
        }
        if let Some(value) = lookup(CAMERA_VAR) {
            let value = value.trim().to_string();
            config.camera = match value.parse::<usize>() {
                Ok(index) => CameraSelector::Index(index),
                Err(_) if !value.is_empty() => CameraSelector::Path(PathBuf::from(value)),
                Err(_) => {
                    return Err(ConfigError {
                        var: CAMERA_VAR,
                        value,
                        reason: "expected a device index or path".to_string(),
                    });
                }
            };
        }
        if let Some(value) = lookup(DURATION_VAR) {
            config.game.duration = parse_secs(DURATION_VAR, value)?;
        }
        if let Some(value) = lookup(RESTART_DURATION_VAR) {
            config.game.restart_duration = parse_secs(RESTART_DURATION_VAR, value)?;
        }
        if let Some(value) = lookup(COMMAND_TIMEOUT_VAR) {
            config.game.command_timeout = parse_secs(COMMAND_TIMEOUT_VAR, value)?;
        }
        if let Some(value) = lookup(LOG_DIR_VAR) {
            if !value.is_empty() {
                config.log_dir = Some(PathBuf::from(value));
            }
        }
        if let Some(value) = lookup(NO_BROWSER_VAR) {
            config.open_browser = matches!(value.trim(), "" | "0" | "false");
        }

        Ok(config)
    }

    /// Camera request for `VideoIn`.
    pub fn video_in(&self) -> VideoInConfig {
        let (path, index) = match &self.camera {
            CameraSelector::Index(index) => (None, *index),
            CameraSelector::Path(path) => (Some(path.clone()), 0),
        };
        VideoInConfig {
            path,
            index,
            size: Some(base::Vec2::new(CAMERA_WIDTH, CAMERA_HEIGHT)),
            format: Some(PixelFormat::Yuyv),
            frame_rate: Some(CAMERA_FRAME_RATE),
        }
    }

    /// Address the browser is pointed at. Unspecified and loopback binds
    /// are shown as `localhost`.
    pub fn browser_url(&self) -> String {
        let ip = self.addr.ip();
        if ip.is_loopback() || ip.is_unspecified() {
            format!("http://localhost:{}", self.addr.port())
        } else {
            format!("http://{}", self.addr)
        }
    }
}

