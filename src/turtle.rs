//! Turtle state and operations for raster interpretation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// Position is kept unrounded so long chains of short steps do not accumulate
/// rounding error; only the marked cell is rounded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current canvas-space position. `y` grows downwards.
    pub position: DVec2,

    /// Current heading in degrees. 0 points right, 90 points up the screen.
    pub angle: f64,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            angle: 90.0, // Grow upwards
        }
    }
}

impl TurtleState {
    /// Creates a turtle standing on cell `(x, y)` with the given heading in degrees.
    pub fn at(x: i64, y: i64, angle: f64) -> Self {
        Self {
            position: DVec2::new(x as f64, y as f64),
            angle,
        }
    }

    /// Unit step along the current heading in screen coordinates.
    pub fn heading(&self) -> DVec2 {
        let rad = self.angle.to_radians();
        DVec2::new(rad.cos(), -rad.sin())
    }

    /// Moves one unit forward and returns the cell the turtle now occupies.
    pub fn advance(&mut self) -> (i64, i64) {
        self.position += self.heading();
        let cell = self.position.round();
        (cell.x as i64, cell.y as i64)
    }

    /// Turns by `degrees`; positive is counter-clockwise on screen.
    pub fn turn(&mut self, degrees: f64) {
        self.angle += degrees;
    }
}

/// Operations that can be performed by the turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    /// Step forward one unit and mark the cell landed on (`F`).
    Forward,
    /// Turn by the configured angle step times the sign (`+`/`-`).
    Turn(f64),
    /// Save the turtle state onto the stack (`[`).
    Push,
    /// Restore the most recently pushed turtle state (`]`).
    Pop,
    /// No-op. Symbol has no registered meaning.
    Ignore,
}
