use {
    base::Vec2,
    image::{Image, PixelFormat},
    pose::{
        LANDMARK_COUNT, Landmark, LandmarkId, Landmarks, PoseError, PoseSource, detect_shared,
        shared,
    },
};

#[test]
fn test_landmark_id_round_trips_index() {
    for (index, id) in LandmarkId::ALL.iter().enumerate() {
        assert_eq!(usize::from(*id), index);
        assert_eq!(LandmarkId::try_from(index), Ok(*id));
    }
    assert!(LandmarkId::try_from(LANDMARK_COUNT).is_err());
}

#[test]
fn test_with_sets_position_and_confidence() {
    let landmarks = Landmarks::default().with(LandmarkId::LeftWrist, 0.25, 0.75);
    let wrist = landmarks.get(LandmarkId::LeftWrist);
    assert_eq!(wrist.position, Vec2::new(0.25, 0.75));
    assert_eq!(wrist.confidence, 1.0);
    assert_eq!(landmarks.x(LandmarkId::LeftWrist), 0.25);
    assert_eq!(landmarks.y(LandmarkId::LeftWrist), 0.75);
    assert_eq!(landmarks.get(LandmarkId::RightWrist).confidence, 0.0);
}

#[test]
fn test_iter_visits_every_landmark_in_order() {
    let mut points = [Landmark::default(); LANDMARK_COUNT];
    for (i, point) in points.iter_mut().enumerate() {
        point.confidence = i as f32;
    }
    let landmarks = Landmarks::new(points);
    let ids: Vec<_> = landmarks.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, LandmarkId::ALL.to_vec());
    assert_eq!(
        landmarks.get(LandmarkId::RightAnkle).confidence,
        (LANDMARK_COUNT - 1) as f32
    );
}

struct Counting {
    calls: usize,
}

impl PoseSource for Counting {
    fn detect(&mut self, _image: &Image) -> Result<Option<Landmarks>, PoseError> {
        self.calls += 1;
        if self.calls % 2 == 0 {
            Ok(Some(Landmarks::default()))
        } else {
            Ok(None)
        }
    }
}

#[test]
fn test_shared_source_keeps_state_between_calls() {
    let source = shared(Counting { calls: 0 });
    let image = Image::black(Vec2::new(4, 4));
    assert_eq!(image.format, PixelFormat::Rgb8);
    assert!(detect_shared(&source, &image).unwrap().is_none());
    assert!(detect_shared(&source, &image).unwrap().is_some());
    assert!(detect_shared(&source, &image).unwrap().is_none());
}
