//! # lsystem-plant
//!
//! Grows plant-like fractals from L-System grammars and draws them onto a bounded
//! 2D raster.
//!
//! The pipeline has two core stages: [`RuleSet::expand`] rewrites an axiom into a
//! long instruction string, and [`TurtleInterpreter::run`] walks that string with a
//! branching turtle, marking cells on a [`Canvas`]. Everything in [`render`] and
//! [`config`] is I/O glue around those two stages.
//!
//! ```
//! use lsystem_plant::{Canvas, TurtleConfig, TurtleInterpreter, TurtleState, expand};
//!
//! let instructions = expand("F=F[+F]F", "F", 2);
//! let mut canvas = Canvas::new(16, 16);
//! let interpreter = TurtleInterpreter::standard(TurtleConfig { angle_step: 25.0 });
//! interpreter.run(&instructions, &mut canvas, TurtleState::at(8, 15, 90.0));
//! assert!(canvas.marked_count() > 0);
//! ```

pub mod canvas;
pub mod config;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod render;
pub mod turtle;

pub use canvas::*;
pub use config::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use turtle::*;
