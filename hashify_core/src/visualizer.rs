//! Hash fingerprint visualization
//!
//! Turns a hex digest into an 8x8 grid of HSL colors. Pixel `i` reads a window
//! of up to four hex characters starting at `(i * 2) % len`:
//!
//! - characters 0..2 give the hue, `byte / 255 * 360`
//! - character 2 gives the saturation, `60 + nibble / 15 * 30` (default nibble 8)
//! - character 3 gives the lightness, `40 + nibble / 15 * 30` (default nibble 8)
//!
//! Windows never wrap past the end of the digest, so a window that starts on
//! the last character of an odd-length input is too short and the pixel is
//! skipped. Digests shorter than 128 characters reuse windows, which repeats
//! colors across the grid.
//!
//! This is a display transform, not a cryptographic one.

use serde::{Deserialize, Serialize};

/// Width and height of the fingerprint grid
pub const GRID_SIZE: usize = 8;

/// Shortest input that produces a grid
pub const MIN_DIGEST_LEN: usize = 16;

const DEFAULT_NIBBLE: u32 = 8;

/// A color in HSL space, saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// CSS functional notation, e.g. `hsl(131.29, 68%, 42%)`
    pub fn to_css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            trim_float(self.hue),
            trim_float(self.saturation),
            trim_float(self.lightness)
        )
    }

    /// Convert to 8-bit RGB
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (channel(r), channel(g), channel(b))
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn trim_float(value: f64) -> String {
    let rounded = format!("{value:.2}");
    rounded
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Ordered fingerprint pixels, row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorGrid {
    pixels: Vec<Hsl>,
}

impl ColorGrid {
    /// All pixels in order
    pub fn pixels(&self) -> &[Hsl] {
        &self.pixels
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the grid has no pixels
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixels grouped into rows of `GRID_SIZE`
    pub fn rows(&self) -> impl Iterator<Item = &[Hsl]> {
        self.pixels.chunks(GRID_SIZE)
    }

    /// Pixel at `row`, `col`
    pub fn get(&self, row: usize, col: usize) -> Option<&Hsl> {
        if col >= GRID_SIZE {
            return None;
        }
        self.pixels.get(row * GRID_SIZE + col)
    }
}

/// Derive the color grid for a hex digest
///
/// Returns `None` when the digest is shorter than `MIN_DIGEST_LEN` or is not
/// hexadecimal; callers show a placeholder instead.
pub fn visualize(digest: &str) -> Option<ColorGrid> {
    let bytes = digest.as_bytes();
    let len = bytes.len();

    if len < MIN_DIGEST_LEN {
        return None;
    }
    if !bytes.iter().all(u8::is_ascii_hexdigit) {
        log::debug!("Refusing to visualize non-hex input of length {len}");
        return None;
    }

    let pixels = (0..GRID_SIZE * GRID_SIZE)
        .filter_map(|i| {
            let offset = (i * 2) % len;
            let end = (offset + 4).min(len);
            pixel_from_window(&bytes[offset..end])
        })
        .collect();

    Some(ColorGrid { pixels })
}

fn pixel_from_window(window: &[u8]) -> Option<Hsl> {
    if window.len() < 2 {
        return None;
    }

    let byte = nibble(window[0])? * 16 + nibble(window[1])?;
    let saturation = window.get(2).and_then(|c| nibble(*c)).unwrap_or(DEFAULT_NIBBLE);
    let lightness = window.get(3).and_then(|c| nibble(*c)).unwrap_or(DEFAULT_NIBBLE);

    // 0xff maps onto 360, which is the same hue as 0
    let hue = (f64::from(byte) / 255.0 * 360.0) % 360.0;

    Some(Hsl {
        hue,
        saturation: 60.0 + f64::from(saturation) / 15.0 * 30.0,
        lightness: 40.0 + f64::from(lightness) / 15.0 * 30.0,
    })
}

fn nibble(c: u8) -> Option<u32> {
    char::from(c).to_digit(16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MD5_HELLO: &str = "5d41402abc4b2a76b9719d911017c592";

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_short_input_has_no_grid() {
        assert!(visualize("").is_none());
        assert!(visualize("5d41402abc4b2a7").is_none());
    }

    #[test]
    fn test_minimum_length_produces_full_grid() {
        let grid = visualize("5d41402abc4b2a76").unwrap();
        assert_eq!(grid.len(), 64);
    }

    #[test]
    fn test_first_pixel_of_md5_hello() {
        let grid = visualize(MD5_HELLO).unwrap();
        let pixel = grid.pixels()[0];

        assert!(approx(pixel.hue, 93.0 / 255.0 * 360.0));
        assert!(approx(pixel.saturation, 68.0));
        assert!(approx(pixel.lightness, 42.0));
    }

    #[test]
    fn test_tail_window_uses_default_nibbles() {
        // offset 30 of a 32 char digest leaves the window "92"
        let grid = visualize(MD5_HELLO).unwrap();
        let pixel = grid.pixels()[15];

        assert!(approx(pixel.hue, 146.0 / 255.0 * 360.0));
        assert!(approx(pixel.saturation, 76.0));
        assert!(approx(pixel.lightness, 56.0));
    }

    #[test]
    fn test_windows_wrap_and_repeat() {
        let grid = visualize(MD5_HELLO).unwrap();
        assert_eq!(grid.pixels()[16], grid.pixels()[0]);
        assert_eq!(grid.pixels()[47], grid.pixels()[15]);
    }

    #[test]
    fn test_odd_length_skips_single_char_windows() {
        // offsets landing on index 16 of a 17 char input hold one character
        let grid = visualize("0123456789abcdef0").unwrap();
        assert_eq!(grid.len(), 60);
    }

    #[test]
    fn test_ff_hue_wraps_to_zero() {
        let grid = visualize(&"f".repeat(16)).unwrap();
        let pixel = grid.pixels()[0];

        assert!(approx(pixel.hue, 0.0));
        assert!(approx(pixel.saturation, 90.0));
        assert!(approx(pixel.lightness, 70.0));
    }

    #[test]
    fn test_uppercase_hex_is_accepted() {
        assert_eq!(
            visualize(&MD5_HELLO.to_uppercase()),
            visualize(MD5_HELLO)
        );
    }

    #[test]
    fn test_non_hex_input_has_no_grid() {
        assert!(visualize("this is not a hex digest").is_none());
    }

    #[test]
    fn test_rows_and_get() {
        let grid = visualize(MD5_HELLO).unwrap();
        let rows: Vec<_> = grid.rows().collect();

        assert_eq!(rows.len(), GRID_SIZE);
        assert!(rows.iter().all(|row| row.len() == GRID_SIZE));
        assert_eq!(grid.get(2, 0), Some(&grid.pixels()[16]));
        assert_eq!(grid.get(0, GRID_SIZE), None);
        assert_eq!(grid.get(GRID_SIZE, 0), None);
    }

    #[test]
    fn test_css_rendering() {
        let pixel = Hsl {
            hue: 120.0,
            saturation: 76.0,
            lightness: 42.5,
        };
        assert_eq!(pixel.to_css(), "hsl(120, 76%, 42.5%)");
        assert_eq!(pixel.to_string(), pixel.to_css());
    }

    #[test]
    fn test_rgb_conversion() {
        let red = Hsl { hue: 0.0, saturation: 100.0, lightness: 50.0 };
        let green = Hsl { hue: 120.0, saturation: 100.0, lightness: 50.0 };
        let grey = Hsl { hue: 200.0, saturation: 0.0, lightness: 50.0 };

        assert_eq!(red.to_rgb(), (255, 0, 0));
        assert_eq!(green.to_rgb(), (0, 255, 0));
        assert_eq!(grey.to_rgb(), (128, 128, 128));
    }

    #[test]
    fn test_distinct_digests_differ() {
        let a = visualize("5d41402abc4b2a76b9719d911017c592").unwrap();
        let b = visualize("5d41402abc4b2a76b9719d911017c593").unwrap();
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn test_grid_ranges_and_size(digest in "([0-9a-f]{2}){8,64}") {
            let grid = visualize(&digest).unwrap();
            prop_assert_eq!(grid.len(), GRID_SIZE * GRID_SIZE);

            for pixel in grid.pixels() {
                prop_assert!((0.0..360.0).contains(&pixel.hue));
                prop_assert!((60.0..=90.0).contains(&pixel.saturation));
                prop_assert!((40.0..=70.0).contains(&pixel.lightness));
            }
        }

        #[test]
        fn test_visualize_is_deterministic(digest in "[0-9a-f]{16,128}") {
            prop_assert_eq!(visualize(&digest), visualize(&digest));
        }
    }
}
