use base::Vec2;

/// Number of body landmarks in a set (COCO layout).
pub const LANDMARK_COUNT: usize = 17;

/// COCO body landmark indices. Left and right are the person's own sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkId {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl LandmarkId {
    pub const ALL: [LandmarkId; LANDMARK_COUNT] = [
        LandmarkId::Nose,
        LandmarkId::LeftEye,
        LandmarkId::RightEye,
        LandmarkId::LeftEar,
        LandmarkId::RightEar,
        LandmarkId::LeftShoulder,
        LandmarkId::RightShoulder,
        LandmarkId::LeftElbow,
        LandmarkId::RightElbow,
        LandmarkId::LeftWrist,
        LandmarkId::RightWrist,
        LandmarkId::LeftHip,
        LandmarkId::RightHip,
        LandmarkId::LeftKnee,
        LandmarkId::RightKnee,
        LandmarkId::LeftAnkle,
        LandmarkId::RightAnkle,
    ];
}

impl From<LandmarkId> for usize {
    fn from(id: LandmarkId) -> usize {
        id as usize
    }
}

impl TryFrom<usize> for LandmarkId {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        LandmarkId::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "invalid landmark index: {}, must be below {}",
                value, LANDMARK_COUNT
            )
        })
    }
}

/// A body point in normalized image coordinates: x grows rightward, y
/// grows downward, both in [0, 1] when the point is inside the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub position: Vec2<f32>,
    pub confidence: f32,
}

impl Default for Landmark {
    fn default() -> Self {
        Self {
            position: Vec2::zero(),
            confidence: 0.0,
        }
    }
}

/// The landmarks of one detected person in one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Landmarks {
    points: [Landmark; LANDMARK_COUNT],
}

impl Landmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    pub fn get(&self, id: LandmarkId) -> &Landmark {
        &self.points[usize::from(id)]
    }

    pub fn x(&self, id: LandmarkId) -> f32 {
        self.get(id).position.x
    }

    pub fn y(&self, id: LandmarkId) -> f32 {
        self.get(id).position.y
    }

    pub fn set(&mut self, id: LandmarkId, landmark: Landmark) {
        self.points[usize::from(id)] = landmark;
    }

    /// Builder form of `set` with full confidence.
    pub fn with(mut self, id: LandmarkId, x: f32, y: f32) -> Self {
        self.set(
            id,
            Landmark {
                position: Vec2::new(x, y),
                confidence: 1.0,
            },
        );
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (LandmarkId, &Landmark)> {
        LandmarkId::ALL.iter().copied().zip(self.points.iter())
    }
}
