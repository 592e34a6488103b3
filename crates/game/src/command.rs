use {
    pose::{LandmarkId, Landmarks},
    rand::Rng,
    serde::Serialize,
    std::fmt,
};

/// Horizontal margin a shoulder must pass its hip by to count as leaning.
pub const LEAN_MARGIN: f32 = 0.05;

/// How far both ankles must rise above their resting height to count as a jump.
pub const JUMP_HEIGHT: f32 = 0.1;

/// Resting ankle heights, captured from the first detected person.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnkleLatch {
    pub left: f32,
    pub right: f32,
}

impl AnkleLatch {
    pub fn from_landmarks(landmarks: &Landmarks) -> Self {
        Self {
            left: landmarks.y(LandmarkId::LeftAnkle),
            right: landmarks.y(LandmarkId::RightAnkle),
        }
    }
}

/// A physical instruction shown to the player. Serialized as its French
/// label, which is what the page displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Command {
    #[serde(rename = "Lever les mains")]
    RaiseHands,
    #[serde(rename = "Se pencher à gauche")]
    LeanLeft,
    #[serde(rename = "Se pencher à droite")]
    LeanRight,
    /// Each ankle must rise `JUMP_HEIGHT` above its own latched resting
    /// height, so a lower right ankle does not count against the left one.
    #[serde(rename = "Sauter")]
    Jump,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::RaiseHands,
        Command::LeanLeft,
        Command::LeanRight,
        Command::Jump,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Command::RaiseHands => "Lever les mains",
            Command::LeanLeft => "Se pencher à gauche",
            Command::LeanRight => "Se pencher à droite",
            Command::Jump => "Sauter",
        }
    }

    /// Uniform draw over all commands. The previous command may come again.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Whether the pose performs this command. Coordinates are normalized
    /// with y growing downward, so "higher" means a smaller y.
    pub fn is_satisfied(&self, landmarks: &Landmarks, ankles: Option<&AnkleLatch>) -> bool {
        use LandmarkId::*;
        match self {
            Command::RaiseHands => {
                let nose = landmarks.y(Nose);
                landmarks.y(LeftWrist) < nose && landmarks.y(RightWrist) < nose
            }
            Command::LeanLeft => landmarks.x(LeftShoulder) < landmarks.x(LeftHip) - LEAN_MARGIN,
            Command::LeanRight => {
                landmarks.x(RightShoulder) > landmarks.x(RightHip) + LEAN_MARGIN
            }
            Command::Jump => match ankles {
                Some(rest) => {
                    landmarks.y(LeftAnkle) < rest.left - JUMP_HEIGHT
                        && landmarks.y(RightAnkle) < rest.right - JUMP_HEIGHT
                }
                None => false,
            },
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
