use {
    crate::{ClockEvent, GameData, GameState},
    pose::Landmarks,
    rand::{SeedableRng, rngs::StdRng},
    std::{
        sync::{Arc, Mutex, MutexGuard},
        time::{Duration, Instant},
    },
};

/// Round lengths and the per-command timeout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Length of the first round.
    pub duration: Duration,
    /// Length of every round started by `reset`.
    pub restart_duration: Duration,
    pub command_timeout: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(60),
            restart_duration: Duration::from_secs(40),
            command_timeout: Duration::from_secs(5),
        }
    }
}

/// Shared handle on the game, cloned into the producer, every stream and
/// the HTTP handlers. All access goes through one lock.
#[derive(Clone)]
pub struct Game {
    state: Arc<Mutex<GameState>>,
    config: GameConfig,
}

impl Game {
    pub fn new(config: GameConfig, now: Instant) -> Self {
        Self::with_rng(config, now, StdRng::from_entropy())
    }

    pub fn with_rng(config: GameConfig, now: Instant, rng: StdRng) -> Self {
        let state = GameState::new(now, config.duration, config.command_timeout, rng);
        log::info!("game started: {}", state.command());
        Self {
            state: Arc::new(Mutex::new(state)),
            config,
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn needs_ankle_latch(&self) -> bool {
        self.lock().ankles().is_none()
    }

    pub fn latch_ankles(&self, landmarks: &Landmarks) -> bool {
        self.lock().latch_ankles(landmarks)
    }

    pub fn evaluate(&self, landmarks: &Landmarks, now: Instant) -> bool {
        self.lock().evaluate(landmarks, now)
    }

    pub fn tick(&self, now: Instant) -> ClockEvent {
        self.lock().tick(now)
    }

    /// One render cycle: evaluate the pose if there is one, then tick.
    pub fn update(&self, landmarks: Option<&Landmarks>, now: Instant) -> ClockEvent {
        let mut state = self.lock();
        if let Some(landmarks) = landmarks {
            state.evaluate(landmarks, now);
        }
        state.tick(now)
    }

    pub fn poll(&self, now: Instant) -> GameData {
        self.lock().poll(now)
    }

    pub fn is_over(&self) -> bool {
        self.lock().is_over()
    }

    /// Start a new round of `restart_duration`.
    pub fn reset(&self, now: Instant) {
        let mut state = self.lock();
        state.restart(now, self.config.restart_duration);
        log::info!("game restarted: {}", state.command());
    }
}
