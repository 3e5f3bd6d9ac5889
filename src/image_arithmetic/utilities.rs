use image::{GrayImage, ImageBuffer, Luma, Pixel, Rgb, RgbImage};
use num_traits::ToPrimitive;

use super::borders::reflect_101;
use super::{Kernel, Plane, PlaneArithmetic};

pub fn saturate_value(value: f32) -> u8 {
    return value.round().clamp(0.0, 255.0) as u8;
}

pub fn abs_saturate_value(value: f32) -> u8 {
    return saturate_value(value.abs());
}

impl PlaneArithmetic for Plane {
    fn saturate(&self) -> GrayImage {
        return GrayImage::from_fn(self.width(), self.height(), |x, y| {
            Luma([saturate_value(self.get_pixel(x, y).0[0])])
        });
    }

    fn abs_saturate(&self) -> GrayImage {
        return GrayImage::from_fn(self.width(), self.height(), |x, y| {
            Luma([abs_saturate_value(self.get_pixel(x, y).0[0])])
        });
    }

    fn max_abs(&self) -> f32 {
        return self.as_raw().iter().fold(0.0, |a: f32, &b| a.max(b.abs()));
    }
}

/// Splits an image into one floating point plane per channel.
pub fn split_channels<P, C>(img: &ImageBuffer<P, C>) -> Vec<Plane>
where
    P: Pixel,
    C: std::ops::Deref<Target = [P::Subpixel]>,
{
    let mut planes = vec![Plane::new(img.width(), img.height()); P::CHANNEL_COUNT as usize];
    for (x, y, pixel) in img.enumerate_pixels() {
        for (i, value) in pixel.channels().iter().enumerate() {
            planes[i].put_pixel(x, y, Luma([value.to_f32().unwrap_or(0.0)]));
        }
    }
    return planes;
}

/// Recombines 8-bit channels into an RGB image. A single channel is
/// repeated on every output channel.
pub fn merge_channels(channels: &[GrayImage]) -> RgbImage {
    let Some(first) = channels.first() else {
        return RgbImage::new(0, 0);
    };
    let last = channels.len() - 1;
    return RgbImage::from_fn(first.width(), first.height(), |x, y| {
        let sample = |c: usize| channels[c.min(last)].get_pixel(x, y).0[0];
        Rgb([sample(0), sample(1), sample(2)])
    });
}

pub fn merge_saturated(planes: &[Plane]) -> RgbImage {
    return merge_channels(&planes.iter().map(|plane| plane.saturate()).collect::<Vec<_>>());
}

pub fn merge_abs(planes: &[Plane]) -> RgbImage {
    return merge_channels(&planes.iter().map(|plane| plane.abs_saturate()).collect::<Vec<_>>());
}

/// Correlates a plane with a kernel (the kernel is not flipped).
/// Pixels outside the plane are produced by reflect-101 extrapolation.
pub fn filter2d(plane: &Plane, kernel: &Kernel) -> Plane {
    let (width, height) = plane.dimensions();
    let (ax, ay) = kernel.anchor();
    let mut out = Plane::new(width, height);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let mut acc = 0.0;
        for ky in 0..kernel.height() {
            let sy = reflect_101(y as i64 + ky as i64 - ay as i64, height);
            for kx in 0..kernel.width() {
                let weight = kernel.weight(kx, ky);
                if weight == 0.0 {
                    continue;
                }
                let sx = reflect_101(x as i64 + kx as i64 - ax as i64, width);
                acc += weight * plane.get_pixel(sx, sy).0[0];
            }
        }
        pixel.0[0] = acc;
    }
    return out;
}

/// Applies a row kernel followed by a column kernel.
pub fn filter_separable(plane: &Plane, row: &Kernel, column: &Kernel) -> Plane {
    return filter2d(&filter2d(plane, row), column);
}
