//! Interpreter that draws an L-System symbol sequence onto a [`Canvas`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a [`TurtleConfig`],
//! register symbol-to-operation mappings via [`TurtleInterpreter::set_op`] or
//! [`TurtleInterpreter::populate_standard_symbols`], then call
//! [`TurtleInterpreter::run`] with the expanded instruction string.

use crate::canvas::Canvas;
use crate::turtle::{TurtleOp, TurtleState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Configuration for turtle interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleConfig {
    /// Rotation applied by `+` and `-`, in degrees.
    pub angle_step: f64,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self { angle_step: 25.0 }
    }
}

/// Interprets L-System output by marking cells on a [`Canvas`].
#[derive(Clone, Debug)]
pub struct TurtleInterpreter {
    op_map: HashMap<char, TurtleOp>,
    config: TurtleConfig,
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration and an empty symbol map.
    ///
    /// Every symbol is ignored until operations are registered with
    /// [`set_op`](Self::set_op) or
    /// [`populate_standard_symbols`](Self::populate_standard_symbols).
    pub fn new(config: TurtleConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            config,
        }
    }

    /// Creates an interpreter that understands `F`, `+`, `-`, `[` and `]`.
    pub fn standard(config: TurtleConfig) -> Self {
        let mut interpreter = Self::new(config);
        interpreter.populate_standard_symbols();
        interpreter
    }

    /// Replaces the entire symbol-to-operation map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Returns the operation bound to `symbol`, [`TurtleOp::Ignore`] if none.
    pub fn op(&self, symbol: char) -> TurtleOp {
        self.op_map.get(&symbol).copied().unwrap_or(TurtleOp::Ignore)
    }

    /// Registers the conventional plant-drawing alphabet.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('F', TurtleOp::Forward),
            ('+', TurtleOp::Turn(1.0)),
            ('-', TurtleOp::Turn(-1.0)),
            ('[', TurtleOp::Push),
            (']', TurtleOp::Pop),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// Walks `instructions` left to right, marking cells on `canvas`, and returns the
    /// final turtle state.
    ///
    /// # Drawing
    ///
    /// [`TurtleOp::Forward`] moves the turtle one unit along its heading, rounds the
    /// new position to the nearest cell and marks it. Cells outside the canvas are
    /// clipped; the turtle keeps walking regardless.
    ///
    /// # Push / Pop
    ///
    /// `[` saves position and heading onto a stack and `]` restores them. A `]`
    /// with nothing on the stack leaves the turtle where it is.
    pub fn run(
        &self,
        instructions: &str,
        canvas: &mut Canvas,
        start: TurtleState,
    ) -> TurtleState {
        let mut turtle = start;
        let mut stack: Vec<TurtleState> = Vec::new();

        let mut steps = 0usize;
        let mut clipped = 0usize;
        let mut max_depth = 0usize;

        for symbol in instructions.chars() {
            match self.op(symbol) {
                TurtleOp::Forward => {
                    let (x, y) = turtle.advance();
                    steps += 1;
                    if !canvas.mark(x, y) {
                        clipped += 1;
                    }
                }
                TurtleOp::Turn(s) => turtle.turn(self.config.angle_step * s),
                TurtleOp::Push => {
                    stack.push(turtle);
                    max_depth = max_depth.max(stack.len());
                }
                TurtleOp::Pop => {
                    if let Some(state) = stack.pop() {
                        turtle = state;
                    }
                }
                TurtleOp::Ignore => {}
            }
        }

        debug!(steps, clipped, max_depth, "turtle run finished");
        turtle
    }
}
