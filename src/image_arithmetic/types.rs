use image::{ImageBuffer, Luma};

use crate::error::{FilterError, Result};

/// A single image channel holding unbounded (possibly negative) responses.
pub type Plane = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Rectangular weight matrix applied by correlation.
///
/// The anchor is the kernel cell placed over the pixel being computed.
/// It defaults to `(width / 2, height / 2)`, so even-sized kernels reach
/// one pixel further towards the top-left than towards the bottom-right.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    width: u32,
    height: u32,
    anchor: (u32, u32),
    weights: Vec<f32>,
}

impl Kernel {
    pub fn new(width: u32, height: u32, weights: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if weights.len() != (width as usize) * (height as usize) {
            return Err(FilterError::InvalidKernel(format!(
                "{}x{} kernel needs {} weights, got {}",
                width,
                height,
                (width as usize) * (height as usize),
                weights.len()
            )));
        }
        return Ok(Self { width, height, anchor: (width / 2, height / 2), weights });
    }

    /// Square kernel from a row-major weight slice such as [`super::SHARPEN_KERNEL`].
    pub fn square(weights: &[f32]) -> Result<Self> {
        let size = (weights.len() as f64).sqrt() as u32;
        return Self::new(size, size, weights.to_vec());
    }

    pub fn normalized_box(width: u32, height: u32) -> Result<Self> {
        let count = (width as usize) * (height as usize);
        return Self::new(width, height, vec![1.0 / count.max(1) as f32; count]);
    }

    pub fn row(weights: Vec<f32>) -> Result<Self> {
        return Self::new(weights.len() as u32, 1, weights);
    }

    pub fn column(weights: Vec<f32>) -> Result<Self> {
        return Self::new(1, weights.len() as u32, weights);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn anchor(&self) -> (u32, u32) {
        self.anchor
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn weight(&self, x: u32, y: u32) -> f32 {
        return self.weights[(y * self.width + x) as usize];
    }
}

/// One-dimensional Gaussian weights of odd length `ksize`, summing to one.
///
/// A non-positive `sigma` is derived from the kernel size as
/// `0.3 * ((ksize - 1) / 2 - 1) + 0.8`.
pub fn gaussian_weights(ksize: u32, sigma: f64) -> Result<Vec<f32>> {
    if ksize == 0 || ksize % 2 == 0 {
        return Err(FilterError::InvalidKernel(format!(
            "gaussian kernel size must be odd and positive, got {}",
            ksize
        )));
    }
    let sigma = if sigma > 0.0 { sigma } else { 0.3 * ((ksize as f64 - 1.0) * 0.5 - 1.0) + 0.8 };
    let center = (ksize as f64 - 1.0) * 0.5;
    let raw: Vec<f64> = (0..ksize)
        .map(|i| {
            let x = i as f64 - center;
            (-(x * x) / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = raw.iter().sum();
    return Ok(raw.into_iter().map(|w| (w / sum) as f32).collect());
}
