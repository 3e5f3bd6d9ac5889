use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod demos;
mod error;
mod figure;
mod filters;
#[allow(dead_code)]
mod image_arithmetic;
mod noise;

use demos::{Demo, DemoSettings};

#[derive(Parser)]
#[command(name = "classic_image_filters", version)]
#[command(about = "Apply one classical image filter and render input and output side by side")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory receiving the rendered figure
    #[arg(long, short, default_value = ".", global = true)]
    output: PathBuf,

    /// Also save every panel as its own image
    #[arg(long, global = true)]
    panels: bool,

    /// Seed for the noise generator, otherwise a random one is used
    #[arg(long, short, global = true)]
    seed: Option<u64>,

    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct InputArgs {
    /// Image to load, defaults to the demo's classic image in the working directory
    #[arg(long, short)]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Box (averaging) blur
    Averaging {
        #[command(flatten)]
        input: InputArgs,
        /// Window size as N or WxH
        #[arg(long, default_value = "30x30", value_parser = parse_window)]
        ksize: (u32, u32),
    },
    /// Gaussian blur
    Gaussian {
        #[command(flatten)]
        input: InputArgs,
        /// Odd window size
        #[arg(long, default_value_t = 21)]
        ksize: u32,
        /// Standard deviation, derived from the window size when not positive
        #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
        sigma: f64,
    },
    /// Laplacian (second derivative) response
    Laplacian {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Salt-and-pepper noise removed by a median filter
    Median {
        #[command(flatten)]
        input: InputArgs,
        /// Odd window size
        #[arg(long, default_value_t = 5)]
        ksize: u32,
        /// Share of pixels to corrupt
        #[arg(long, default_value_t = 0.5)]
        amount: f64,
    },
    /// Colour to grayscale conversion
    Grayscale {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Grayscale image with a grid around every pixel
    Grid {
        #[command(flatten)]
        input: InputArgs,
        /// Magnified size of one pixel
        #[arg(long, default_value_t = 8)]
        cell: u32,
    },
    /// 3x3 sharpening kernel
    Sharpen {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Sobel derivatives along x and y
    Sobel {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn parse_window(value: &str) -> Result<(u32, u32), String> {
    let parse = |part: &str| {
        part.trim().parse::<u32>().map_err(|_| format!("'{}' is not a positive integer", part))
    };
    let (width, height) = match value.split_once(|c: char| c == 'x' || c == 'X') {
        Some((width, height)) => (parse(width)?, parse(height)?),
        None => {
            let size = parse(value)?;
            (size, size)
        }
    };
    if width == 0 || height == 0 {
        return Err("window size cannot be 0".to_string());
    }
    return Ok((width, height));
}

impl Commands {
    /// Resolves the demo to run and folds the command's options into `settings`.
    fn into_demo(self, settings: &mut DemoSettings) -> (Demo, Option<PathBuf>) {
        match self {
            Commands::Averaging { input, ksize } => {
                settings.box_size = ksize;
                (Demo::Averaging, input.input)
            }
            Commands::Gaussian { input, ksize, sigma } => {
                settings.gaussian_size = ksize;
                settings.gaussian_sigma = sigma;
                (Demo::Gaussian, input.input)
            }
            Commands::Laplacian { input } => (Demo::Laplacian, input.input),
            Commands::Median { input, ksize, amount } => {
                settings.median_size = ksize;
                settings.noise_amount = amount;
                (Demo::Median, input.input)
            }
            Commands::Grayscale { input } => (Demo::Grayscale, input.input),
            Commands::Grid { input, cell } => {
                settings.grid_cell = cell;
                (Demo::Grid, input.input)
            }
            Commands::Sharpen { input } => (Demo::Sharpen, input.input),
            Commands::Sobel { input } => (Demo::Sobel, input.input),
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let mut settings = DemoSettings::default();
    let (demo, input) = cli.command.into_demo(&mut settings);
    let input = input.unwrap_or_else(|| PathBuf::from(demo.default_input()));
    debug!(demo = demo.name(), ?settings, "settings resolved");

    let img = demos::load_image(&input)
        .with_context(|| format!("cannot run the {} demo", demo.name()))?;
    let figure = demo
        .run(&mut rng, &img, &settings)
        .with_context(|| format!("{} demo failed on {}", demo.name(), input.display()))?;
    let written = figure
        .save(&cli.output, cli.panels)
        .with_context(|| format!("cannot write the {} figure", demo.name()))?;
    info!(demo = demo.name(), files = written.len(), "done");
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn window_sizes_accept_square_and_rectangular_forms() {
        assert_eq!(parse_window("30"), Ok((30, 30)));
        assert_eq!(parse_window("30x20"), Ok((30, 20)));
        assert_eq!(parse_window("4X6"), Ok((4, 6)));
        assert!(parse_window("0x3").is_err());
        assert!(parse_window("ax3").is_err());
    }

    #[test]
    fn options_flow_into_settings() {
        let cli = Cli::parse_from([
            "classic_image_filters",
            "--seed",
            "9",
            "median",
            "--ksize",
            "7",
            "--amount",
            "0.25",
            "-i",
            "noisy.png",
        ]);
        assert_eq!(cli.seed, Some(9));
        let mut settings = DemoSettings::default();
        let (demo, input) = cli.command.into_demo(&mut settings);
        assert_eq!(demo, Demo::Median);
        assert_eq!(input, Some(PathBuf::from("noisy.png")));
        assert_eq!(settings.median_size, 7);
        assert_eq!(settings.noise_amount, 0.25);
        assert_eq!(settings.box_size, (30, 30));
    }

    #[test]
    fn every_demo_has_a_subcommand() {
        let command = Cli::command();
        for demo in Demo::ALL {
            assert!(command.find_subcommand(demo.name()).is_some(), "{}", demo.name());
        }
    }
}
