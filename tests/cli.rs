use std::path::Path;
use std::process::{Command, Output};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    return Command::new(env!("CARGO_BIN_EXE_classic_image_filters"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap();
}

fn logo(dir: &Path, name: &str) {
    RgbImage::from_fn(32, 24, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Rgb([220, 40, 40])
        } else {
            Rgb([20, 60, 200])
        }
    })
    .save(dir.join(name))
    .unwrap();
}

#[test]
fn sobel_renders_three_panels_side_by_side() {
    let dir = TempDir::new().unwrap();
    logo(dir.path(), "opencv_logo.png");
    let output = run(dir.path(), &["--output", "out", "--panels", "sobel"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let figure = image::open(dir.path().join("out/sobel.png")).unwrap();
    assert_eq!(figure.width(), 16 + 3 * (32 + 16));
    assert_eq!(figure.height(), 24 + 2 * 16);
    for panel in [
        "sobel-0-original.png",
        "sobel-1-sobel_x_detects_vertical_edges.png",
        "sobel-2-sobel_y_detects_horizontal_edges.png",
    ] {
        let image = image::open(dir.path().join("out").join(panel)).unwrap();
        assert_eq!((image.width(), image.height()), (32, 24));
    }
}

#[test]
fn median_is_reproducible_with_a_seed() {
    let dir = TempDir::new().unwrap();
    logo(dir.path(), "afa_innovation.png");
    for out in ["a", "b"] {
        let output = run(dir.path(), &["-s", "42", "-o", out, "--panels", "median"]);
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    }
    let noisy = "median-1-noisy_salt_pepper.png";
    let a = image::open(dir.path().join("a").join(noisy)).unwrap().to_rgb8();
    let b = image::open(dir.path().join("b").join(noisy)).unwrap().to_rgb8();
    assert_eq!(a, b);
}

#[test]
fn explicit_input_and_options_are_honoured() {
    let dir = TempDir::new().unwrap();
    logo(dir.path(), "custom.png");
    let output = run(dir.path(), &["grid", "--input", "custom.png", "--cell", "3"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let figure = image::open(dir.path().join("grid.png")).unwrap();
    assert_eq!(figure.width(), 32 * 3 + 1 + 2 * 16);
}

#[test]
fn missing_image_fails_with_a_message() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["laplacian"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("afa_innovation.png"), "{}", stderr);
    assert!(!dir.path().join("laplacian.png").exists());
}

#[test]
fn invalid_kernel_is_rejected() {
    let dir = TempDir::new().unwrap();
    logo(dir.path(), "afa_innovation.png");
    let output = run(dir.path(), &["gaussian", "--ksize", "20"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("odd"));
}
