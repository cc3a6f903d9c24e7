#![allow(dead_code)]

use dot_art::color::Rgb;
use dot_art::image::RgbImageU8;
use image::{DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;

/// Single-colour image.
pub fn solid_rgb(width: usize, height: usize, color: Rgb) -> RgbImageU8 {
    RgbImageU8::filled(width, height, color)
}

/// Generates a two-colour checkerboard image.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize, a: Rgb, b: Rgb) -> RgbImageU8 {
    assert!(cell > 0, "cell size must be positive");

    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            data.push(if sum & 1 == 0 { a } else { b });
        }
    }
    RgbImageU8::new(width, height, data).expect("buffer length matches dimensions")
}

/// Deterministic pseudo-random noise (xorshift), so every pixel differs.
pub fn noise_rgb(width: usize, height: usize, seed: u32) -> RgbImageU8 {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    let data = (0..width * height)
        .map(|_| {
            let v = next();
            Rgb::new(v as u8, (v >> 8) as u8, (v >> 16) as u8)
        })
        .collect();
    RgbImageU8::new(width, height, data).expect("buffer length matches dimensions")
}

/// PNG bytes for a solid image, as a file picker would hand them over.
pub fn solid_png_bytes(width: u32, height: u32, color: Rgb) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, image::Rgb([color.r, color.g, color.b]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut out, ImageFormat::Png)
        .expect("in-memory PNG encode");
    out.into_inner()
}
