use serde::{Deserialize, Serialize};

/// A fixed-size grid of drawn/undrawn cells.
///
/// Cells are stored row-major. The canvas has no notion of glyphs or colors;
/// renderers decide how a marked cell looks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Canvas {
    /// Creates a `width` × `height` canvas with every cell unmarked.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major index of `(x, y)`, or `None` when it lies outside the canvas.
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Marks the cell at `(x, y)`.
    ///
    /// Coordinates outside `[0, width) × [0, height)` are dropped without effect.
    pub fn mark(&mut self, x: i64, y: i64) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = true;
                true
            }
            None => false,
        }
    }

    /// Returns whether `(x, y)` has been drawn. Out-of-range cells read as unmarked.
    pub fn is_marked(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some_and(|idx| self.cells[idx])
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Iterates the coordinates of every marked cell in row-major order.
    pub fn marked_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell)
            .map(move |(idx, _)| (idx % width, idx / width))
    }

    /// Iterates the rows top to bottom, each as a slice of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // chunks(0) panics; a zero-width canvas has no cells anyway.
        self.cells.chunks(self.width.max(1))
    }
}
