use {
    crate::{AnkleLatch, Command},
    pose::Landmarks,
    rand::rngs::StdRng,
    serde::Serialize,
    std::time::{Duration, Instant},
};

/// What the game clock did on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    Running,
    /// The command timed out and a new one was drawn.
    CommandChanged(Command),
    GameOver,
}

/// Snapshot handed to the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameData {
    pub command: Command,
    pub score: u32,
    /// Whole seconds left, never negative.
    pub remaining_time: u64,
    /// True once per scoring event.
    pub success: bool,
    pub game_over: bool,
}

/// One round of the game.
pub struct GameState {
    command: Command,
    score: u32,
    command_started: Instant,
    command_timeout: Duration,
    started: Instant,
    duration: Duration,
    success: bool,
    ankles: Option<AnkleLatch>,
    game_over: bool,
    rng: StdRng,
}

impl GameState {
    pub fn new(now: Instant, duration: Duration, command_timeout: Duration, mut rng: StdRng) -> Self {
        let command = Command::random(&mut rng);
        Self {
            command,
            score: 0,
            command_started: now,
            command_timeout,
            started: now,
            duration,
            success: false,
            ankles: None,
            game_over: false,
            rng,
        }
    }

    /// Start a fresh round lasting `duration`. The score, ankle latch and
    /// game over flag are cleared and a new command is drawn.
    pub fn restart(&mut self, now: Instant, duration: Duration) {
        self.command = Command::random(&mut self.rng);
        self.score = 0;
        self.command_started = now;
        self.started = now;
        self.duration = duration;
        self.success = false;
        self.ankles = None;
        self.game_over = false;
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn ankles(&self) -> Option<AnkleLatch> {
        self.ankles
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Latch the resting ankle heights. Only the first call after a
    /// (re)start has an effect; returns whether it latched.
    pub fn latch_ankles(&mut self, landmarks: &Landmarks) -> bool {
        if self.ankles.is_some() {
            return false;
        }
        let latch = AnkleLatch::from_landmarks(landmarks);
        log::debug!("ankles latched at {:.3} / {:.3}", latch.left, latch.right);
        self.ankles = Some(latch);
        true
    }

    /// Score the active command if the pose performs it. Returns whether
    /// a point was scored.
    pub fn evaluate(&mut self, landmarks: &Landmarks, now: Instant) -> bool {
        if self.game_over || !self.command.is_satisfied(landmarks, self.ankles.as_ref()) {
            return false;
        }
        self.score += 1;
        self.success = true;
        log::info!("{} done, score {}", self.command, self.score);
        self.next_command(now);
        true
    }

    /// Advance the clocks: rotate a timed out command, then end the game
    /// once its duration has elapsed.
    pub fn tick(&mut self, now: Instant) -> ClockEvent {
        if self.game_over {
            return ClockEvent::GameOver;
        }
        let mut event = ClockEvent::Running;
        if now.saturating_duration_since(self.command_started) > self.command_timeout {
            log::debug!("{} timed out", self.command);
            self.next_command(now);
            event = ClockEvent::CommandChanged(self.command);
        }
        if self.check_over(now) {
            return ClockEvent::GameOver;
        }
        event
    }

    /// Read the state for the page and clear the success flag.
    pub fn poll(&mut self, now: Instant) -> GameData {
        self.check_over(now);
        let elapsed = now.saturating_duration_since(self.started);
        let data = GameData {
            command: self.command,
            score: self.score,
            remaining_time: self.duration.saturating_sub(elapsed).as_secs(),
            success: self.success,
            game_over: self.game_over,
        };
        self.success = false;
        data
    }

    fn check_over(&mut self, now: Instant) -> bool {
        if !self.game_over && now.saturating_duration_since(self.started) > self.duration {
            log::info!("game over, final score {}", self.score);
            self.game_over = true;
        }
        self.game_over
    }

    fn next_command(&mut self, now: Instant) {
        self.command = Command::random(&mut self.rng);
        self.command_started = now;
    }
}
