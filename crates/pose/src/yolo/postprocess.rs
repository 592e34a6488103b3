use {
    super::Letterbox,
    crate::{LANDMARK_COUNT, Landmark, Landmarks, PoseError},
    base::{Tensor, Vec2},
};

const CHANNELS: usize = 5 + LANDMARK_COUNT * 3;

/// Pick the most confident person in a `[1, 56, N]` output.
///
/// Candidates below `conf_threshold` are ignored. Keypoints are mapped back
/// through the letterbox and normalized by `source_size`.
pub fn postprocess(
    output: &Tensor<f32>,
    letterbox: &Letterbox,
    source_size: Vec2<usize>,
    conf_threshold: f32,
) -> Result<Option<Landmarks>, PoseError> {
    if output.ndim() != 3 || output.shape[0] != 1 || output.shape[1] != CHANNELS {
        return Err(PoseError::Shape {
            expected: format!("[1, {}, N]", CHANNELS),
            got: format!("{:?}", output.shape),
        });
    }

    // element [0, row, col] lives at row * n + col
    let n = output.shape[2];
    let at = |row: usize, col: usize| output.data[row * n + col];

    let best = (0..n)
        .filter(|&i| at(4, i) >= conf_threshold)
        .max_by(|&a, &b| at(4, a).total_cmp(&at(4, b)));
    let Some(best) = best else {
        return Ok(None);
    };

    let size = source_size.map(|v| v.max(1) as f32);
    let mut landmarks = Landmarks::default();
    for (k, id) in crate::LandmarkId::ALL.into_iter().enumerate() {
        let row = 5 + k * 3;
        let position = letterbox.unmap(Vec2::new(at(row, best), at(row + 1, best)));
        landmarks.set(
            id,
            Landmark {
                position: position / size,
                confidence: at(row + 2, best),
            },
        );
    }
    Ok(Some(landmarks))
}
