//! Fingerprint visualization over real digests

use hashify_core::visualizer::{GRID_SIZE, MIN_DIGEST_LEN};
use hashify_core::*;
use hashify_test_utils::known_vectors;

#[test]
fn test_every_real_digest_produces_full_grid() {
    for vector in known_vectors() {
        let grid = visualize(vector.hash).unwrap();
        assert_eq!(grid.len(), GRID_SIZE * GRID_SIZE, "for {}", vector.hash);
    }
}

#[test]
fn test_pixels_stay_in_range() {
    for vector in known_vectors() {
        let grid = visualize(vector.hash).unwrap();
        for pixel in grid.pixels() {
            assert!(pixel.hue >= 0.0 && pixel.hue < 360.0);
            assert!(pixel.saturation >= 60.0 && pixel.saturation <= 90.0);
            assert!(pixel.lightness >= 40.0 && pixel.lightness <= 70.0);
        }
    }
}

#[test]
fn test_short_digest_is_skipped() {
    let digest = hash_text("hello", HashAlgorithm::MD5).unwrap();
    assert!(visualize(&digest[..MIN_DIGEST_LEN - 1]).is_none());
    assert!(visualize(&digest[..MIN_DIGEST_LEN]).is_some());
}

#[test]
fn test_empty_digest_from_empty_input_is_skipped() {
    let digest = hash_text("", HashAlgorithm::SHA512).unwrap();
    assert!(visualize(&digest).is_none());
}

#[test]
fn test_sha512_grid_uses_every_window_once() {
    // 64 pixels * 2 chars = 128, so no window repeats for SHA-512
    let digest = hash_text("hello", HashAlgorithm::SHA512).unwrap();
    let grid = visualize(&digest).unwrap();

    let first_hue = u8::from_str_radix(&digest[0..2], 16).unwrap();
    let last_hue = u8::from_str_radix(&digest[126..128], 16).unwrap();

    let expected_first = f64::from(first_hue) / 255.0 * 360.0 % 360.0;
    let expected_last = f64::from(last_hue) / 255.0 * 360.0 % 360.0;

    assert!((grid.pixels()[0].hue - expected_first).abs() < 1e-9);
    assert!((grid.pixels()[63].hue - expected_last).abs() < 1e-9);
}

#[test]
fn test_different_digests_give_different_grids() {
    let a = visualize(&hash_text("hello", HashAlgorithm::SHA256).unwrap()).unwrap();
    let b = visualize(&hash_text("hello!", HashAlgorithm::SHA256).unwrap()).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_css_output_shape() {
    let grid = visualize("5d41402abc4b2a76b9719d911017c592").unwrap();
    for pixel in grid.pixels() {
        let css = pixel.to_css();
        assert!(css.starts_with("hsl("));
        assert!(css.ends_with("%)"));
    }
}
