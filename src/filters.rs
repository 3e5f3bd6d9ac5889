//! The classical filters shown by the demos.
//!
//! Colour filters work channel by channel on an 8-bit RGB image. Filters whose
//! response can leave the 8-bit range (Laplacian, Sobel) return the raw
//! floating point planes and leave the choice of rendering to the caller.

use image::{GrayImage, Rgb, RgbImage};
use imageproc::filter::median_filter;
use tracing::debug;

use crate::error::{FilterError, Result};
use crate::image_arithmetic::color_conversions;
use crate::image_arithmetic::{
    filter2d, filter_separable, gaussian_weights, merge_saturated, split_channels, Kernel, Plane,
    PlaneArithmetic, SHARPEN_KERNEL, SOBEL_X_KERNEL, SOBEL_Y_KERNEL, STRAIGHT_LAPLACE_KERNEL,
};

fn peak_response(planes: &[Plane]) -> f32 {
    return planes.iter().map(|plane| plane.max_abs()).fold(0.0, f32::max);
}

fn map_planes(img: &RgbImage, op: impl Fn(&Plane) -> Plane) -> Vec<Plane> {
    return split_channels(img).iter().map(op).collect();
}

/// Averages every pixel with its `width` x `height` neighbourhood.
pub fn box_blur(img: &RgbImage, width: u32, height: u32) -> Result<RgbImage> {
    let row = Kernel::normalized_box(width, 1)?;
    let column = Kernel::normalized_box(1, height)?;
    debug!(width, height, "box blur");
    let planes = map_planes(img, |plane| filter_separable(plane, &row, &column));
    return Ok(merge_saturated(&planes));
}

pub fn gaussian_blur(img: &RgbImage, ksize: u32, sigma: f64) -> Result<RgbImage> {
    let weights = gaussian_weights(ksize, sigma)?;
    let row = Kernel::row(weights.clone())?;
    let column = Kernel::column(weights)?;
    debug!(ksize, sigma, "gaussian blur");
    let planes = map_planes(img, |plane| filter_separable(plane, &row, &column));
    return Ok(merge_saturated(&planes));
}

/// Signed second derivative of every channel (4-neighbour aperture).
pub fn laplacian(img: &RgbImage) -> Result<Vec<Plane>> {
    let kernel = Kernel::square(STRAIGHT_LAPLACE_KERNEL)?;
    let planes = map_planes(img, |plane| filter2d(plane, &kernel));
    debug!(peak = peak_response(&planes), "laplacian");
    return Ok(planes);
}

/// Replaces every pixel with the per-channel median of its `ksize` x `ksize`
/// neighbourhood. Pixels beyond the border repeat the nearest edge pixel.
pub fn median_blur(img: &RgbImage, ksize: u32) -> Result<RgbImage> {
    if ksize < 3 || ksize % 2 == 0 {
        return Err(FilterError::InvalidKernel(format!(
            "median kernel size must be odd and at least 3, got {}",
            ksize
        )));
    }
    let radius = ksize / 2;
    debug!(ksize, radius, "median blur");
    return Ok(median_filter(img, radius, radius));
}

pub fn sharpen(img: &RgbImage) -> Result<RgbImage> {
    let kernel = Kernel::square(SHARPEN_KERNEL)?;
    let planes = map_planes(img, |plane| filter2d(plane, &kernel));
    return Ok(merge_saturated(&planes));
}

/// First derivatives along x and y, per channel.
pub fn sobel(img: &RgbImage) -> Result<(Vec<Plane>, Vec<Plane>)> {
    let kernel_x = Kernel::square(SOBEL_X_KERNEL)?;
    let kernel_y = Kernel::square(SOBEL_Y_KERNEL)?;
    let planes = split_channels(img);
    let dx: Vec<Plane> = planes.iter().map(|plane| filter2d(plane, &kernel_x)).collect();
    let dy: Vec<Plane> = planes.iter().map(|plane| filter2d(plane, &kernel_y)).collect();
    debug!(peak_x = peak_response(&dx), peak_y = peak_response(&dy), "sobel");
    return Ok((dx, dy));
}

pub fn grayscale(img: &RgbImage) -> GrayImage {
    return color_conversions::to_grayscale(img);
}

/// Magnifies every pixel into a `cell` x `cell` block and separates the
/// blocks with white one-pixel lines, including the outer frame.
pub fn grid_overlay(gray: &GrayImage, cell: u32) -> Result<RgbImage> {
    if cell < 2 {
        return Err(FilterError::InvalidKernel(format!(
            "grid cells must be at least 2 pixels wide, got {}",
            cell
        )));
    }
    let magnify = |len: u32| len.checked_mul(cell).and_then(|v| v.checked_add(1));
    let (Some(width), Some(height)) = (magnify(gray.width()), magnify(gray.height())) else {
        return Err(FilterError::InvalidKernel(format!(
            "grid cells of {} pixels overflow a {}x{} image",
            cell,
            gray.width(),
            gray.height()
        )));
    };
    return Ok(RgbImage::from_fn(width, height, |x, y| {
        if x % cell == 0 || y % cell == 0 {
            return Rgb([255, 255, 255]);
        }
        let value = gray.get_pixel(x / cell, y / cell).0[0];
        Rgb([value, value, value])
    }));
}
