//! End-to-end tests for the rotation filter.

use pixrot_core::{Image, Pixel};
use pixrot_ops::{rotate, OpsError, RightAngle, RotateConfig, RotateFilter, Rotation};

fn abcd() -> ([Pixel; 4], Image) {
    let px = [
        Pixel::new(255, 0, 0, 255),
        Pixel::new(0, 255, 0, 255),
        Pixel::new(0, 0, 255, 255),
        Pixel::new(10, 20, 30, 128),
    ];
    (px, Image::from_pixels(2, 2, px.to_vec()).unwrap())
}

#[test]
fn test_worked_example_quarter_turn() {
    let ([a, b, c, d], img) = abcd();
    let out = rotate(&img, Rotation::from(90), false).unwrap();
    assert_eq!(out.pixels(), &[c, a, d, b]);
}

#[test]
fn test_worked_example_half_turn() {
    let ([a, b, c, d], img) = abcd();
    let out = rotate(&img, Rotation::from(180), false).unwrap();
    assert_eq!(out.pixels(), &[d, c, b, a]);
}

#[test]
fn test_four_quarter_turns_restore() {
    let data = (0..12u8).map(|v| Pixel::new(v, v, v, 255)).collect();
    let img = Image::from_pixels(4, 3, data).unwrap();
    let mut current = img.clone();
    for _ in 0..4 {
        current = rotate(&current, RightAngle::R90.into(), false).unwrap();
    }
    assert_eq!(current, img);
}

#[test]
fn test_square_right_angles_agree_across_paths() {
    // Arbitrary(90.0) skips classification and forces the sampler.
    let data = (0..25u8).map(|v| Pixel::new(v, 0, 0, 255)).collect();
    let img = Image::from_pixels(5, 5, data).unwrap();
    let fast = rotate(&img, Rotation::Orthogonal(RightAngle::R90), false).unwrap();
    let sampled = rotate(&img, Rotation::Arbitrary(90.0), false).unwrap();
    assert_eq!(fast, sampled);
}

#[test]
fn test_filter_frame_loop() {
    let mut filter = RotateFilter::with_config(
        RotateConfig::default()
            .with_rotation(270.0)
            .with_byte_order_fix(true),
    );

    for frame in 0..3u8 {
        let img = Image::filled(6, 4, Pixel::new(frame, 1, 2, 3));
        filter.set_input(img);
        let out = filter.filter().unwrap();
        assert_eq!(out.dimensions(), (4, 6));
        assert!(out.pixels().iter().all(|&p| p == Pixel::new(2, 1, frame, 3)));
    }
}

#[test]
fn test_filter_without_input() {
    let mut filter = RotateFilter::new();
    let err = filter.filter().unwrap_err();
    assert!(matches!(err, OpsError::MissingInput));
    assert_eq!(err.to_string(), "no input image bound to the filter");
}

#[test]
fn test_cancel_from_another_thread() {
    let mut filter = RotateFilter::new();
    filter.set_input(Image::new(16, 16));
    let token = filter.cancel_token();
    std::thread::spawn(move || token.cancel()).join().unwrap();
    assert!(matches!(filter.filter(), Err(OpsError::Cancelled)));
}
