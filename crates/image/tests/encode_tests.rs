use {
    base::Vec2,
    image::{Image, PixelFormat},
};

fn noise(size: Vec2<usize>) -> Image {
    let data = (0..size.area() * 3).map(|v| (v * 37 % 256) as u8).collect();
    Image::new(size, data, PixelFormat::Rgb8)
}

#[test]
fn test_encode_jpeg_has_soi_marker() {
    let jpeg = image::encode_jpeg(&noise(Vec2::new(8, 8)), 70).unwrap();
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_encode_jpeg_quality_affects_size() {
    let image = noise(Vec2::new(16, 16));
    let low = image::encode_jpeg(&image, 10).unwrap();
    let high = image::encode_jpeg(&image, 100).unwrap();
    assert!(low.len() < high.len());
}

#[test]
fn test_encode_jpeg_rejects_yuyv() {
    let image = Image::new(Vec2::new(2, 2), vec![0; 8], PixelFormat::Yuyv);
    assert!(image::encode_jpeg(&image, 70).is_err());
}

#[test]
fn test_jpeg_decodes_back_to_rgb() {
    let size = Vec2::new(8, 6);
    let jpeg = image::encode_jpeg(&noise(size), 90).unwrap();
    let decoded = Image::new(size, jpeg, PixelFormat::Jpeg).to_rgb().unwrap();

    assert_eq!(decoded.format, PixelFormat::Rgb8);
    assert_eq!(decoded.size, size);
    assert_eq!(decoded.data.len(), 8 * 6 * 3);
}

#[test]
fn test_corrupt_jpeg_is_decode_error() {
    let corrupt = Image::new(Vec2::new(4, 4), b"not a jpeg".to_vec(), PixelFormat::Jpeg);
    assert!(matches!(
        corrupt.to_rgb(),
        Err(image::ImageError::Decode(_))
    ));
}
