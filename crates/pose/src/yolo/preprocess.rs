use {
    super::Letterbox,
    crate::PoseError,
    base::{Tensor, Vec2},
    image::{Image, PixelFormat},
};

pub const TARGET_SIZE: usize = 640;
const PAD_VALUE: f32 = 114.0 / 255.0;

/// Letterbox an `Rgb8` frame into a `[1, 3, 640, 640]` tensor in [0, 1].
///
/// The frame is scaled with nearest-neighbour sampling to fit, centered,
/// and surrounded by gray padding.
pub fn preprocess(image: &Image) -> Result<(Tensor<f32>, Letterbox), PoseError> {
    image.format.ensure(PixelFormat::Rgb8)?;
    image.validate()?;
    let (w, h) = (image.size.x, image.size.y);
    if w == 0 || h == 0 {
        return Err(PoseError::Shape {
            expected: "non-empty frame".to_string(),
            got: format!("{}x{}", w, h),
        });
    }

    let scale = (TARGET_SIZE as f32 / w as f32).min(TARGET_SIZE as f32 / h as f32);
    let new_w = ((w as f32 * scale) as usize).min(TARGET_SIZE);
    let new_h = ((h as f32 * scale) as usize).min(TARGET_SIZE);
    let pad_x = (TARGET_SIZE - new_w) / 2;
    let pad_y = (TARGET_SIZE - new_h) / 2;

    let plane = TARGET_SIZE * TARGET_SIZE;
    let mut tensor = Tensor::filled(vec![1, 3, TARGET_SIZE, TARGET_SIZE], PAD_VALUE)?;
    for y in 0..new_h {
        let src_y = ((y as f32 / scale) as usize).min(h - 1);
        let dst_row = (y + pad_y) * TARGET_SIZE + pad_x;
        for x in 0..new_w {
            let src_x = ((x as f32 / scale) as usize).min(w - 1);
            let src = (src_y * w + src_x) * 3;
            for c in 0..3 {
                tensor.data[c * plane + dst_row + x] = image.data[src + c] as f32 / 255.0;
            }
        }
    }

    Ok((
        tensor,
        Letterbox {
            scale,
            pad: Vec2::new(pad_x as f32, pad_y as f32),
        },
    ))
}
