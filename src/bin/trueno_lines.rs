//! trueno-lines - render Bresenham and Wu lines side by side.
//!
//! `trueno-lines render` draws the configured scene into a 2x2 comparison
//! sheet; `trueno-lines samples` prints the raw samples of one segment.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use trueno_lines::config::{Config, OutputFormat};
use trueno_lines::output::{PngEncoder, TerminalEncoder};
use trueno_lines::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "trueno-lines", version, about = "Aliased vs anti-aliased line rasterization")]
struct Cli {
    /// YAML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the comparison sheet.
    Render(RenderArgs),
    /// Print the samples of one segment as tab-separated values.
    Samples(SamplesArgs),
}

#[derive(Debug, Default, clap::Args)]
struct RenderArgs {
    /// Scene to draw.
    #[arg(long, value_enum)]
    scene: Option<SceneKind>,

    /// Cell width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Cell height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Anti-aliased line color (#rrggbb).
    #[arg(long)]
    color: Option<String>,

    /// PNG output path.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print an ASCII preview instead of writing a PNG.
    #[arg(long)]
    terminal: bool,
}

#[derive(Debug, clap::Args)]
struct SamplesArgs {
    /// Start x.
    #[arg(allow_negative_numbers = true)]
    x0: f32,
    /// Start y.
    #[arg(allow_negative_numbers = true)]
    y0: f32,
    /// End x.
    #[arg(allow_negative_numbers = true)]
    x1: f32,
    /// End y.
    #[arg(allow_negative_numbers = true)]
    y1: f32,

    /// Print Bresenham pixels (endpoints rounded) instead of Wu coverage.
    #[arg(long)]
    aliased: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SceneKind {
    Radial,
    Sine,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn render(mut config: Config, args: RenderArgs) -> anyhow::Result<()> {
    match args.scene {
        Some(SceneKind::Radial) => config.scene = Scene::default(),
        Some(SceneKind::Sine) => {
            config.scene = Scene::Sine { amplitude: None, frequency: 0.01, phase: 0.0 };
        }
        None => {}
    }
    if let Some(width) = args.width {
        config.grid.width = width;
    }
    if let Some(height) = args.height {
        config.grid.height = height;
    }
    if let Some(color) = args.color {
        config.color = color;
    }
    if let Some(output) = args.output {
        config.output.path = output;
    }
    if args.terminal {
        config.output.format = OutputFormat::Terminal;
    }

    let grid = config.grid()?;
    let color = config.color()?;
    let samples = config.scene.samples(grid, color)?;
    let sheet = ComparisonSheet::new(grid).render(&samples.aliased, &samples.coverage)?;

    let (min, max, mean) = sheet.luminance_stats();
    tracing::info!(
        backend = ?Framebuffer::backend(),
        min,
        max,
        mean,
        "sheet rendered"
    );

    match config.output.format {
        OutputFormat::Png => {
            PngEncoder::write_to_file(&sheet, &config.output.path)
                .with_context(|| format!("writing {}", config.output.path.display()))?;
            tracing::info!(path = %config.output.path.display(), "saved");
        }
        OutputFormat::Terminal => {
            print!("{}", TerminalEncoder::new().render(&sheet));
        }
    }
    Ok(())
}

fn samples(args: &SamplesArgs) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let line = Line::from_coords(args.x0, args.y0, args.x1, args.y1);

    if args.aliased {
        let (x0, y0) = line.start.rounded();
        let (x1, y1) = line.end.rounded();
        writeln!(out, "px\tpy")?;
        for s in bresenham(x0, y0, x1, y1) {
            writeln!(out, "{}\t{}", s.px, s.py)?;
        }
    } else {
        writeln!(out, "px\tpy\tcoverage")?;
        for s in wu(line.start.x, line.start.y, line.end.x, line.end.y, Rgb::default()) {
            writeln!(out, "{}\t{}\t{:.6}", s.px, s.py, s.coverage)?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Command::Samples(args)) => samples(&args),
        Some(Command::Render(args)) => render(load_config(cli.config.as_ref())?, args),
        None => render(load_config(cli.config.as_ref())?, RenderArgs::default()),
    }
}
