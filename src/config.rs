//! Settings for a full grow-and-render run.
//!
//! [`PlantConfig`] is what the command line and settings files both fill in. Its
//! [`Default`] draws a single upward stroke from the bottom of an 80×80 canvas.

use crate::canvas::Canvas;
use crate::error::PlantError;
use crate::grammar::RuleSet;
use crate::interpreter::{TurtleConfig, TurtleInterpreter};
use crate::render::Palette;
use crate::turtle::TurtleState;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which outputs to produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    /// Print the canvas to stdout.
    Ascii,
    /// Write the canvas to the output image.
    Img,
    #[default]
    Both,
}

impl Stream {
    pub fn wants_ascii(self) -> bool {
        matches!(self, Stream::Ascii | Stream::Both)
    }

    pub fn wants_image(self) -> bool {
        matches!(self, Stream::Img | Stream::Both)
    }
}

/// Where the turtle starts. Every preset is horizontally centered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StartPosition {
    #[default]
    Bottom,
    Middle,
    Top,
}

impl StartPosition {
    /// Start cell on a canvas of `cols` × `rows`.
    pub fn origin(self, cols: usize, rows: usize) -> (i64, i64) {
        let x = (cols / 2) as i64;
        let y = match self {
            StartPosition::Bottom => rows as i64 - 1,
            StartPosition::Middle => (rows / 2) as i64,
            StartPosition::Top => 1,
        };
        (x, y)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantConfig {
    /// Initial symbol sequence.
    pub axiom: String,
    /// Production rules, e.g. `"X=F[+X]F[-X]+X;F=FF"`.
    pub rules: String,
    /// Turn applied by `+`/`-`, in degrees.
    pub angle: f64,
    /// Number of rewriting passes.
    pub iterations: usize,
    /// Canvas height.
    pub rows: usize,
    /// Canvas width.
    pub cols: usize,
    /// Destination of the PNG.
    pub output: PathBuf,
    pub stream: Stream,
    pub start: StartPosition,
    /// Initial heading in degrees; 90 draws upwards.
    pub start_angle: f64,
    /// Character used for drawn cells in the ASCII dump.
    pub glyph: char,
    pub palette: Palette,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            axiom: "F".to_owned(),
            rules: "F=F".to_owned(),
            angle: 25.0,
            iterations: 4,
            rows: 80,
            cols: 80,
            output: PathBuf::from("output.png"),
            stream: Stream::Both,
            start: StartPosition::Bottom,
            start_angle: 90.0,
            glyph: '*',
            palette: Palette::default(),
        }
    }
}

impl PlantConfig {
    /// Loads settings from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PlantError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|source| PlantError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn turtle_config(&self) -> TurtleConfig {
        TurtleConfig {
            angle_step: self.angle,
        }
    }

    pub fn start_state(&self) -> TurtleState {
        let (x, y) = self.start.origin(self.cols, self.rows);
        TurtleState::at(x, y, self.start_angle)
    }

    /// Expands the grammar and draws it onto a fresh canvas.
    pub fn grow(&self) -> Canvas {
        let rules = RuleSet::parse(&self.rules);
        debug!(
            rules = rules.len(),
            axiom = %self.axiom,
            iterations = self.iterations,
            "expanding"
        );
        let instructions = rules.expand(&self.axiom, self.iterations);

        let mut canvas = Canvas::new(self.cols, self.rows);
        TurtleInterpreter::standard(self.turtle_config()).run(
            &instructions,
            &mut canvas,
            self.start_state(),
        );
        canvas
    }
}
