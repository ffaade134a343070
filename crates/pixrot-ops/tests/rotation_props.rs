//! Property tests for the rotation filter.

use pixrot_core::{Image, Pixel};
use pixrot_math::rotation_about_center;
use pixrot_ops::affine::source_coordinate;
use pixrot_ops::{rotate, RightAngle, Rotation};
use proptest::prelude::*;

fn random_image() -> impl Strategy<Value = Image> {
    (1u32..9, 1u32..9).prop_flat_map(|(w, h)| {
        prop::collection::vec(any::<[u8; 4]>(), (w * h) as usize).prop_map(move |raw| {
            let pixels = raw.into_iter().map(Pixel::from).collect();
            Image::from_pixels(w, h, pixels).unwrap()
        })
    })
}

fn right_angle() -> impl Strategy<Value = RightAngle> {
    prop::sample::select(RightAngle::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_inverse_restores_original(img in random_image(), angle in right_angle()) {
        let turned = rotate(&img, angle.into(), false).unwrap();
        let back = rotate(&turned, angle.inverse().into(), false).unwrap();
        prop_assert_eq!(back, img);
    }

    #[test]
    fn prop_dimensions(img in random_image(), angle in right_angle()) {
        let (w, h) = img.dimensions();
        let out = rotate(&img, angle.into(), false).unwrap();
        let expected = if angle.swaps_dimensions() { (h, w) } else { (w, h) };
        prop_assert_eq!(out.dimensions(), expected);
        prop_assert_eq!(out.pixel_count(), img.pixel_count());
    }

    #[test]
    fn prop_half_turn_is_involution(img in random_image()) {
        let once = rotate(&img, RightAngle::R180.into(), false).unwrap();
        let twice = rotate(&once, RightAngle::R180.into(), false).unwrap();
        prop_assert_eq!(twice, img);
    }

    #[test]
    fn prop_byte_order_fix_swaps_only_red_blue(img in random_image(), angle in right_angle()) {
        let plain = rotate(&img, angle.into(), false).unwrap();
        let fixed = rotate(&img, angle.into(), true).unwrap();
        for (p, f) in plain.pixels().iter().zip(fixed.pixels()) {
            prop_assert_eq!(f.r(), p.b());
            prop_assert_eq!(f.b(), p.r());
            prop_assert_eq!(f.g(), p.g());
            prop_assert_eq!(f.a(), p.a());
        }

        // Fixing the fixed output restores the plain rotation.
        let refixed = rotate(&fixed, RightAngle::R0.into(), true).unwrap();
        prop_assert_eq!(refixed, plain);
    }

    #[test]
    fn prop_zero_angle_affine_is_identity(img in random_image()) {
        let (w, h) = img.dimensions();
        let t = rotation_about_center(w, h, 0.0);
        for y in 0..h {
            for x in 0..w {
                prop_assert_eq!(source_coordinate(&t, x, y, w, h), (x, y));
            }
        }
    }

    #[test]
    fn prop_affine_reads_in_bounds(
        w in 1u32..64,
        h in 1u32..64,
        degrees in -1000.0f32..1000.0,
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
    ) {
        let t = rotation_about_center(w, h, degrees);
        let x = (fx * w as f64) as u32;
        let y = (fy * h as f64) as u32;
        let (sx, sy) = source_coordinate(&t, x.min(w - 1), y.min(h - 1), w, h);
        prop_assert!(sx < w);
        prop_assert!(sy < h);
    }

    #[test]
    fn prop_arbitrary_keeps_dimensions(img in random_image(), degrees in 0.5f32..89.5) {
        let out = rotate(&img, Rotation::from_degrees(degrees), false).unwrap();
        prop_assert_eq!(out.dimensions(), img.dimensions());
        // Nearest-neighbor sampling only copies existing pixels.
        for p in out.pixels() {
            prop_assert!(img.pixels().contains(p));
        }
    }
}
