use {
    crate::{LandmarkId, Landmarks},
    image::{
        Image,
        draw::{Color, draw_filled_circle, draw_line},
    },
};

const CONNECTION_COLOR: Color = [255, 0, 0];
const LANDMARK_COLOR: Color = [0, 255, 0];
const THICKNESS: i32 = 2;
const RADIUS: i32 = 2;

/// Bone segments of the COCO body layout.
pub const CONNECTIONS: [(LandmarkId, LandmarkId); 18] = {
    use LandmarkId::*;
    [
        (Nose, LeftEye),
        (Nose, RightEye),
        (LeftEye, LeftEar),
        (RightEye, RightEar),
        (LeftShoulder, RightShoulder),
        (LeftShoulder, LeftHip),
        (RightShoulder, RightHip),
        (LeftHip, RightHip),
        (LeftShoulder, LeftElbow),
        (RightShoulder, RightElbow),
        (LeftElbow, LeftWrist),
        (RightElbow, RightWrist),
        (LeftHip, LeftKnee),
        (RightHip, RightKnee),
        (LeftKnee, LeftAnkle),
        (RightKnee, RightAnkle),
        (Nose, LeftShoulder),
        (Nose, RightShoulder),
    ]
};

fn to_pixel(image: &Image, landmarks: &Landmarks, id: LandmarkId) -> (i32, i32) {
    let position = landmarks.get(id).position;
    (
        (position.x * image.size.x as f32).round() as i32,
        (position.y * image.size.y as f32).round() as i32,
    )
}

/// Overlay bones and joints on an `Rgb8` frame. Landmarks below
/// `threshold` confidence are left out together with their bones.
pub fn draw_skeleton(image: &mut Image, landmarks: &Landmarks, threshold: f32) {
    for (a, b) in CONNECTIONS {
        if landmarks.get(a).confidence >= threshold && landmarks.get(b).confidence >= threshold {
            let from = to_pixel(image, landmarks, a);
            let to = to_pixel(image, landmarks, b);
            draw_line(image, from, to, THICKNESS, CONNECTION_COLOR);
        }
    }
    for (id, landmark) in landmarks.iter() {
        if landmark.confidence >= threshold {
            let (x, y) = to_pixel(image, landmarks, id);
            draw_filled_circle(image, x, y, RADIUS, LANDMARK_COLOR);
        }
    }
}
