//! Side-by-side rendering of demo results.

use std::fs;
use std::path::{Path, PathBuf};

use image::{imageops, Rgb, RgbImage};
use tracing::info;

use crate::error::{FilterError, Result};

const MARGIN: u32 = 16;
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub image: RgbImage,
}

impl Panel {
    pub fn new(title: &str, image: RgbImage) -> Self {
        return Self { title: title.to_string(), image };
    }
}

/// Ordered panels produced by one demo, shown left to right.
#[derive(Debug, Clone)]
pub struct Figure {
    pub name: String,
    pub panels: Vec<Panel>,
}

/// Lowercase alphanumeric words joined by underscores.
pub fn slug(title: &str) -> String {
    return title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<String>>()
        .join("_");
}

impl Figure {
    pub fn new(name: &str, panels: Vec<Panel>) -> Self {
        return Self { name: name.to_string(), panels };
    }

    pub fn titles(&self) -> Vec<&str> {
        return self.panels.iter().map(|panel| panel.title.as_str()).collect();
    }

    /// Places all panels on one white canvas, separated and framed by a
    /// fixed margin and centred vertically.
    pub fn compose(&self) -> RgbImage {
        let tallest = self.panels.iter().map(|p| p.image.height()).max().unwrap_or(0);
        let width = MARGIN + self.panels.iter().map(|p| p.image.width() + MARGIN).sum::<u32>();
        let height = tallest + 2 * MARGIN;
        let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);
        let mut x = MARGIN;
        for panel in &self.panels {
            let y = MARGIN + (tallest - panel.image.height()) / 2;
            imageops::replace(&mut canvas, &panel.image, x as i64, y as i64);
            x += panel.image.width() + MARGIN;
        }
        return canvas;
    }

    pub fn panel_path(&self, directory: &Path, index: usize) -> PathBuf {
        let title = &self.panels[index].title;
        return directory.join(format!("{}-{}-{}.png", self.name, index, slug(title)));
    }

    /// Writes the composed figure to `<directory>/<name>.png` and, when
    /// `write_panels` is set, every panel on its own. Returns the written paths.
    pub fn save(&self, directory: &Path, write_panels: bool) -> Result<Vec<PathBuf>> {
        fs::DirBuilder::new()
            .recursive(true)
            .create(directory)
            .map_err(|source| FilterError::Io { path: directory.to_path_buf(), source })?;

        let mut written = vec![];
        let path = directory.join(format!("{}.png", self.name));
        self.compose()
            .save(&path)
            .map_err(|source| FilterError::Save { path: path.clone(), source })?;
        info!(path = %path.display(), panels = ?self.titles(), "figure saved");
        written.push(path);

        if write_panels {
            for (i, panel) in self.panels.iter().enumerate() {
                let path = self.panel_path(directory, i);
                panel
                    .image
                    .save(&path)
                    .map_err(|source| FilterError::Save { path: path.clone(), source })?;
                info!(path = %path.display(), title = %panel.title, "panel saved");
                written.push(path);
            }
        }
        return Ok(written);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figure() -> Figure {
        return Figure::new(
            "sobel",
            vec![
                Panel::new("Original", RgbImage::from_pixel(10, 8, Rgb([1, 2, 3]))),
                Panel::new("sobel_x detects vertical edges", RgbImage::from_pixel(4, 4, Rgb([9, 9, 9]))),
            ],
        );
    }

    #[test]
    fn slug_keeps_words_only() {
        assert_eq!(slug("Noisy (Salt & Pepper)"), "noisy_salt_pepper");
        assert_eq!(slug("sobel_x detects vertical edges"), "sobel_x_detects_vertical_edges");
        assert_eq!(slug("Original"), "original");
    }

    #[test]
    fn compose_lays_panels_out_left_to_right() {
        let canvas = figure().compose();
        assert_eq!(canvas.dimensions(), (MARGIN * 3 + 14, 8 + 2 * MARGIN));
        assert_eq!(canvas.get_pixel(0, 0), &BACKGROUND);
        assert_eq!(canvas.get_pixel(MARGIN, MARGIN), &Rgb([1, 2, 3]));
        // The shorter panel is centred vertically.
        let second_x = MARGIN * 2 + 10;
        assert_eq!(canvas.get_pixel(second_x, MARGIN), &BACKGROUND);
        assert_eq!(canvas.get_pixel(second_x, MARGIN + 2), &Rgb([9, 9, 9]));
        assert_eq!(canvas.get_pixel(second_x + 3, MARGIN + 5), &Rgb([9, 9, 9]));
        assert_eq!(canvas.get_pixel(second_x + 3, MARGIN + 6), &BACKGROUND);
    }

    #[test]
    fn empty_figure_composes_to_a_blank_margin() {
        let canvas = Figure::new("empty", vec![]).compose();
        assert_eq!(canvas.dimensions(), (MARGIN, 2 * MARGIN));
    }

    #[test]
    fn save_writes_figure_and_panels() {
        let directory = tempfile::tempdir().unwrap();
        let target = directory.path().join("nested");
        let written = figure().save(&target, true).unwrap();
        assert_eq!(written.len(), 3);
        assert_eq!(written[0], target.join("sobel.png"));
        assert_eq!(written[2], target.join("sobel-1-sobel_x_detects_vertical_edges.png"));
        for path in &written {
            assert!(path.exists());
        }
        let reloaded = image::open(&written[0]).unwrap().to_rgb8();
        assert_eq!(reloaded, figure().compose());
    }
}
