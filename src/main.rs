use anyhow::Context;
use clap::Parser;
use lsystem_plant::render;
use lsystem_plant::{PlantConfig, StartPosition, Stream};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Grow an L-System plant and draw it as ASCII and/or PNG.
///
/// Flags override values from `--config`, which override the built-in defaults.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial axiom of the L-system [default: F]
    #[arg(long)]
    axiom: Option<String>,

    /// L-system rules in the format 'F=FF;X=FX' [default: F=F]
    #[arg(long)]
    rules: Option<String>,

    /// Rotation angle for '+' and '-' in degrees [default: 25]
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f64>,

    /// Number of L-system iterations [default: 4]
    #[arg(long)]
    iterations: Option<usize>,

    /// Grid height [default: 80]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    rows: Option<u32>,

    /// Grid width [default: 80]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    cols: Option<u32>,

    /// Output file name [default: output.png]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Kind of stream [default: both]
    #[arg(long, value_enum)]
    stream: Option<Stream>,

    /// Start drawing from [default: bottom]
    #[arg(long, value_enum)]
    start: Option<StartPosition>,

    /// Start heading in degrees; 90 draws upwards [default: 90]
    #[arg(long = "startangle", allow_negative_numbers = true)]
    start_angle: Option<f64>,

    /// Character for drawn cells in the ASCII dump [default: *]
    #[arg(long)]
    glyph: Option<char>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<PlantConfig> {
        let mut config = match &self.config {
            Some(path) => PlantConfig::from_json_file(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => PlantConfig::default(),
        };

        if let Some(axiom) = self.axiom {
            config.axiom = axiom;
        }
        if let Some(rules) = self.rules {
            config.rules = rules;
        }
        if let Some(angle) = self.angle {
            config.angle = angle;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(rows) = self.rows {
            config.rows = rows as usize;
        }
        if let Some(cols) = self.cols {
            config.cols = cols as usize;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(stream) = self.stream {
            config.stream = stream;
        }
        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(start_angle) = self.start_angle {
            config.start_angle = start_angle;
        }
        if let Some(glyph) = self.glyph {
            config.glyph = glyph;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = Args::parse().into_config()?;
    info!(
        axiom = %config.axiom,
        rules = %config.rules,
        iterations = config.iterations,
        cols = config.cols,
        rows = config.rows,
        "growing plant"
    );

    let canvas = config.grow();
    info!(marked = canvas.marked_count(), "plant grown");

    if config.stream.wants_ascii() {
        render::write_ascii(&canvas, config.glyph, std::io::stdout().lock())
            .context("writing ASCII dump to stdout")?;
    }
    if config.stream.wants_image() {
        render::save_png(&canvas, &config.palette, &config.output)
            .with_context(|| format!("saving image to {}", config.output.display()))?;
    }

    Ok(())
}
