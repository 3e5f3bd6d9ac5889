//! The individual demonstrations: load one image, apply one filter, collect
//! the panels to show.

use std::path::Path;

use image::{ImageReader, RgbImage};
use rand::Rng;
use tracing::{info, instrument};

use crate::error::{FilterError, Result};
use crate::figure::{Figure, Panel};
use crate::filters;
use crate::image_arithmetic::color_conversions::gray_to_rgb;
use crate::image_arithmetic::merge_abs;
use crate::noise;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Averaging,
    Gaussian,
    Laplacian,
    Median,
    Grayscale,
    Grid,
    Sharpen,
    Sobel,
}

/// Tunables of every demo. The defaults are the classic parameter choices
/// the demos are known for.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSettings {
    pub box_size: (u32, u32),
    pub gaussian_size: u32,
    pub gaussian_sigma: f64,
    pub median_size: u32,
    pub noise_amount: f64,
    pub grid_cell: u32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        return Self {
            box_size: (30, 30),
            gaussian_size: 21,
            gaussian_sigma: 50.0,
            median_size: 5,
            noise_amount: 0.5,
            grid_cell: 8,
        };
    }
}

impl Demo {
    pub const ALL: &'static [Demo] = &[
        Demo::Averaging,
        Demo::Gaussian,
        Demo::Laplacian,
        Demo::Median,
        Demo::Grayscale,
        Demo::Grid,
        Demo::Sharpen,
        Demo::Sobel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Averaging => "averaging",
            Demo::Gaussian => "gaussian",
            Demo::Laplacian => "laplacian",
            Demo::Median => "median",
            Demo::Grayscale => "grayscale",
            Demo::Grid => "grid",
            Demo::Sharpen => "sharpen",
            Demo::Sobel => "sobel",
        }
    }

    /// Image each demo reads from the working directory when none is given.
    pub fn default_input(self) -> &'static str {
        match self {
            Demo::Averaging | Demo::Sharpen | Demo::Sobel => "opencv_logo.png",
            Demo::Gaussian | Demo::Laplacian | Demo::Median => "afa_innovation.png",
            Demo::Grayscale | Demo::Grid => "boxer.png",
        }
    }

    #[instrument(skip(self, rng, img, settings), fields(demo = self.name()))]
    pub fn run<R: Rng>(self, rng: &mut R, img: &RgbImage, settings: &DemoSettings) -> Result<Figure> {
        let original = || Panel::new("Original", img.clone());
        let panels = match self {
            Demo::Averaging => {
                let (width, height) = settings.box_size;
                let blurred = filters::box_blur(img, width, height)?;
                vec![original(), Panel::new("Averaging Blurred", blurred)]
            }
            Demo::Gaussian => {
                let blurred =
                    filters::gaussian_blur(img, settings.gaussian_size, settings.gaussian_sigma)?;
                vec![original(), Panel::new("Gaussian Blurred", blurred)]
            }
            Demo::Laplacian => {
                let response = filters::laplacian(img)?;
                vec![original(), Panel::new("Laplacian", merge_abs(&response))]
            }
            Demo::Median => {
                let noisy = noise::add_salt_pepper_noise(rng, img, settings.noise_amount)?;
                let median = filters::median_blur(&noisy, settings.median_size)?;
                vec![
                    original(),
                    Panel::new("Noisy (Salt & Pepper)", noisy),
                    Panel::new("Median Blurred", median),
                ]
            }
            Demo::Grayscale => {
                let gray = filters::grayscale(img);
                vec![Panel::new("Grayscale Image", gray_to_rgb(&gray))]
            }
            Demo::Grid => {
                let gray = filters::grayscale(img);
                let grid = filters::grid_overlay(&gray, settings.grid_cell)?;
                vec![Panel::new("Grayscale Image with Grids", grid)]
            }
            Demo::Sharpen => {
                let sharpened = filters::sharpen(img)?;
                vec![original(), Panel::new("Sharpened", sharpened)]
            }
            Demo::Sobel => {
                let (dx, dy) = filters::sobel(img)?;
                vec![
                    original(),
                    Panel::new("sobel_x detects vertical edges", merge_abs(&dx)),
                    Panel::new("sobel_y detects horizontal edges", merge_abs(&dy)),
                ]
            }
        };
        info!(panels = panels.len(), "demo finished");
        return Ok(Figure::new(self.name(), panels));
    }
}

/// Loads an image as 8-bit RGB, dropping any alpha channel.
#[instrument]
pub fn load_image(path: &Path) -> Result<RgbImage> {
    if !path.is_file() {
        return Err(FilterError::ImageMissing { path: path.to_path_buf() });
    }
    let io_error = |source| FilterError::Io { path: path.to_path_buf(), source };
    let decoded = ImageReader::open(path)
        .map_err(io_error)?
        .with_guessed_format()
        .map_err(io_error)?
        .decode()
        .map_err(|source| FilterError::Decode { path: path.to_path_buf(), source })?;
    info!(width = decoded.width(), height = decoded.height(), "image loaded");
    return Ok(decoded.to_rgb8());
}
