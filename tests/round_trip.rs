use annotate_icons::{png, raster};
use image::ImageFormat;

/// Decoding an encoded icon with a conformant PNG decoder must give back the
/// exact rasterized buffer.
#[test]
fn test_decoded_icon_matches_raster() {
    for size in [16u32, 32, 48, 128] {
        let rgba = raster::generate(size);
        let encoded = png::encode(size, size, &rgba).expect("Failed to encode icon");

        assert_eq!(&encoded[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

        let decoded = image::load_from_memory_with_format(&encoded, ImageFormat::Png)
            .expect("Encoded icon should decode");
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
        assert_eq!((decoded.width(), decoded.height()), (size, size));
        assert_eq!(decoded.into_rgba8().into_raw(), rgba);
    }
}

#[test]
fn test_non_square_round_trip() {
    let (width, height) = (5u32, 9u32);
    let rgba: Vec<u8> = (0..width * height * 4).map(|i| (i * 7 % 256) as u8).collect();

    let encoded = png::encode(width, height, &rgba).expect("Failed to encode image");
    let decoded = image::load_from_memory(&encoded).expect("Encoded image should decode");

    assert_eq!((decoded.width(), decoded.height()), (width, height));
    assert_eq!(decoded.to_rgba8().into_raw(), rgba);
}

#[test]
fn test_encoding_is_deterministic() {
    let rgba = raster::generate(48);
    assert_eq!(
        png::encode(48, 48, &rgba).unwrap(),
        png::encode(48, 48, &rgba).unwrap()
    );
}
