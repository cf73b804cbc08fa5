use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use tracing::debug;

/// Channels strictly below this value count as background.
pub const THRESHOLD: u8 = 15;

/// Transparent black, the value every background pixel is rewritten to.
pub const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// True when red, green and blue are all below [`THRESHOLD`]. Alpha is ignored.
#[inline]
pub fn is_background(pixel: &[u8]) -> bool {
    pixel[0] < THRESHOLD && pixel[1] < THRESHOLD && pixel[2] < THRESHOLD
}

/// Rewrite every background pixel to `(0, 0, 0, 0)` in place and return how many
/// were cleared. All other pixels, including their alpha, are left untouched.
pub fn clear_dark_pixels(img: &mut RgbaImage) -> u64 {
    let (width, height) = img.dimensions();
    let data: &mut [u8] = &mut *img;

    let cleared = data
        .par_chunks_exact_mut(4)
        .map(|px| {
            if is_background(px) {
                px.copy_from_slice(&CLEAR.0);
                1u64
            } else {
                0
            }
        })
        .sum();

    debug!(
        "Threshold pass: cleared {} of {} pixels (threshold={})",
        cleared,
        u64::from(width) * u64::from(height),
        THRESHOLD
    );
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_pixels_become_transparent_regardless_of_alpha() {
        let mut img = RgbaImage::from_raw(
            3,
            1,
            vec![
                0, 0, 0, 255, //
                14, 14, 14, 128, //
                3, 7, 1, 0,
            ],
        )
        .unwrap();

        let cleared = clear_dark_pixels(&mut img);

        assert_eq!(cleared, 3);
        assert!(img.pixels().all(|p| *p == CLEAR));
    }

    #[test]
    fn any_bright_channel_keeps_pixel() {
        let input = vec![
            15, 0, 0, 255, //
            0, 15, 0, 10, //
            0, 0, 200, 0, //
            14, 14, 14, 255,
        ];
        let mut img = RgbaImage::from_raw(4, 1, input.clone()).unwrap();

        let cleared = clear_dark_pixels(&mut img);

        assert_eq!(cleared, 1);
        assert_eq!(&img.as_raw()[..12], &input[..12]);
        assert_eq!(*img.get_pixel(3, 0), CLEAR);
    }

    #[test]
    fn output_is_either_clear_or_unchanged() {
        let mut input = Vec::new();
        for i in 0..64u32 {
            let v = (i * 7 % 40) as u8;
            input.extend_from_slice(&[v, v / 2, (i % 20) as u8, (i * 13 % 256) as u8]);
        }
        let mut img = RgbaImage::from_raw(8, 8, input.clone()).unwrap();

        clear_dark_pixels(&mut img);

        for (out, orig) in img.as_raw().chunks_exact(4).zip(input.chunks_exact(4)) {
            if is_background(orig) {
                assert_eq!(out, &CLEAR.0);
            } else {
                assert_eq!(out, orig);
            }
        }
    }
}
