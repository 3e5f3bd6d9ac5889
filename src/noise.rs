//! Synthetic salt-and-pepper corruption used to exercise the median filter.

use image::{Rgb, RgbImage};
use rand::Rng;
use tracing::debug;

use crate::error::{FilterError, Result};

const SALT: Rgb<u8> = Rgb([255, 255, 255]);
const PEPPER: Rgb<u8> = Rgb([0, 0, 0]);

/// Number of draws made for each of salt and pepper.
pub fn draws_per_kind(amount: f64, width: u32, height: u32) -> u64 {
    let total_pixels = width as f64 * height as f64;
    return (amount * total_pixels / 2.0).floor() as u64;
}

// Coordinates come from 0..len-1, so the last row and column stay clean.
fn random_coordinate<R: Rng>(rng: &mut R, len: u32) -> u32 {
    if len <= 2 {
        return 0;
    }
    return rng.gen_range(0..len - 1);
}

/// Returns a copy of `img` where roughly `amount` of the pixels are set to
/// pure white or pure black, half each. Salt is applied first, so a pixel
/// drawn for both ends up black. Draws may repeat a pixel.
pub fn add_salt_pepper_noise<R: Rng>(rng: &mut R, img: &RgbImage, amount: f64) -> Result<RgbImage> {
    if !(0.0..=1.0).contains(&amount) {
        return Err(FilterError::InvalidNoiseAmount(amount));
    }
    let mut noisy = img.clone();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Ok(noisy);
    }
    let draws = draws_per_kind(amount, width, height);
    for color in [SALT, PEPPER] {
        for _ in 0..draws {
            let x = random_coordinate(rng, width);
            let y = random_coordinate(rng, height);
            noisy.put_pixel(x, y, color);
        }
    }
    debug!(amount, salt = draws, pepper = draws, "salt and pepper noise added");
    return Ok(noisy);
}
