use crate::{Cell, CellStatus, ConfigError};
use rand::Rng;
use tracing::trace;

/// Neighbourhood offsets of the Moore neighbourhood.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Fixed-size field of cells whose edges are stitched together.
///
/// Storage is a plain row-major vector; the wrap-around exists only in
/// neighbour lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Board {
    /// Create an all-dead board.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimensions`] if either side is zero.
    pub fn blank(width: usize, height: usize) -> Result<Self, ConfigError> {
        let size = width
            .checked_mul(height)
            .filter(|&size| size > 0)
            .ok_or(ConfigError::InvalidDimensions { width, height })?;
        Ok(Self {
            cells: vec![Cell::default(); size],
            width,
            height,
        })
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            self.contains(x, y),
            "cell ({x}, {y}) is outside the {}x{} board",
            self.width,
            self.height
        );
        x + y * self.width
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the board, in every build profile.
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    pub fn status(&self, x: usize, y: usize) -> CellStatus {
        self.cell(x, y).status()
    }

    /// Returns `true` if the status actually changed.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the board.
    pub fn set_status(&mut self, x: usize, y: usize, status: CellStatus) -> bool {
        let idx = self.index(x, y);
        self.cells[idx].set_status(status)
    }

    /// Maps signed coordinates onto the board, `None` if outside.
    pub fn checked_coords(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.contains(x, y).then_some((x, y))
    }

    /// Iterates over `(x, y, status)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellStatus)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (i % self.width, i / self.width, cell.status()))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.status().is_alive()).count()
    }

    // `rem_euclid` keeps this correct for any offset, not only +-1.
    fn wrap(coord: usize, offset: isize, side: usize) -> usize {
        (coord as isize + offset).rem_euclid(side as isize) as usize
    }

    /// Number of alive cells among the 8 toroidal neighbours of `(x, y)`.
    ///
    /// On boards narrower than 3 cells the same neighbour may be counted
    /// more than once.
    pub fn count_alive_neighbours(&self, x: usize, y: usize) -> usize {
        NEIGHBOURS
            .iter()
            .filter(|&&(dx, dy)| {
                let nx = Self::wrap(x, dx, self.width);
                let ny = Self::wrap(y, dy, self.height);
                self.status(nx, ny).is_alive()
            })
            .count()
    }

    fn evolve(&self, x: usize, y: usize) -> CellStatus {
        let neibs = self.count_alive_neighbours(x, y);
        let alive = if self.status(x, y).is_alive() {
            neibs == 2 || neibs == 3
        } else {
            neibs == 3
        };
        alive.into()
    }

    /// Compute phase: stage the next status of every cell.
    ///
    /// Only staged slots are written, so every cell reads the same
    /// snapshot of the current generation.
    pub fn compute_next(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let next = self.evolve(x, y);
                let idx = self.index(x, y);
                self.cells[idx].stage(next);
            }
        }
    }

    /// Commit phase: apply staged statuses.
    ///
    /// `on_change` is called for every cell whose status changed.
    /// Returns the number of such cells.
    pub fn commit(&mut self, mut on_change: impl FnMut(usize, usize, CellStatus)) -> usize {
        let mut changed = 0;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if let Some(status) = cell.commit() {
                on_change(i % self.width, i / self.width, status);
                changed += 1;
            }
        }
        changed
    }

    /// Replace every cell with a fresh one, alive with probability `fill_rate`.
    pub fn randomize(&mut self, rng: &mut impl Rng, fill_rate: f64) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::new(rng.gen_bool(fill_rate).into());
        }
        trace!(population = self.population(), fill_rate, "board randomized");
    }

    /// Replace every cell with a fresh dead one. Staged statuses are dropped.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::new(CellStatus::Dead));
    }
}
