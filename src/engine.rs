use crate::{
    utils::{wrap_dec, wrap_inc},
    Grid, LifeError,
};


/// Conway's Game of Life on a torus of fixed size.
///
/// Every generation is computed from the previous one as a whole: [`GameOfLife::sweep`]
/// collects the cells that change into a pending list while reading only the
/// current grid, and commits that list once the pass is complete.
/// The number of alive cells is kept up to date by the commit instead of being
/// recounted.
///
/// # Example
///
/// ```rust
/// use torus_life::{GameOfLife, InitialSetup};
///
/// let mut life = GameOfLife::new(InitialSetup::oscillator(10, 10).unwrap());
/// let history = life.run(2, true).unwrap();
/// assert_eq!(history, vec![3, 3, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct GameOfLife {
    grid: Grid,
    alive_count: usize,
    generation: u64,
    /// Row-major index and new state of every cell changing in the current sweep.
    pending: Vec<(usize, bool)>,
}

impl GameOfLife {
    pub fn new(grid: Grid) -> Self {
        let alive_count = grid.population();
        log::debug!(
            "created {}x{} field with {} alive cells",
            grid.width(),
            grid.height(),
            alive_count
        );
        Self {
            grid,
            alive_count,
            generation: 0,
            pending: Vec::new(),
        }
    }

    /// Read-only view of the current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn cell(&self, i: usize, j: usize) -> bool {
        self.grid.get(i, j)
    }

    /// Current population.
    pub fn alive_count(&self) -> usize {
        self.alive_count
    }

    /// Number of sweeps performed since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of alive cells among the 8 neighbors of `(i, j)`, edges wrapped around.
    pub fn neighbor_count(&self, i: usize, j: usize) -> u8 {
        let (w, h) = (self.grid.width(), self.grid.height());
        let (i1, i2) = (wrap_dec(i, h), wrap_inc(i, h));
        let (j1, j2) = (wrap_dec(j, w), wrap_inc(j, w));
        self.grid.get(i1, j1) as u8
            + self.grid.get(i1, j) as u8
            + self.grid.get(i1, j2) as u8
            + self.grid.get(i, j1) as u8
            + self.grid.get(i, j2) as u8
            + self.grid.get(i2, j1) as u8
            + self.grid.get(i2, j) as u8
            + self.grid.get(i2, j2) as u8
    }

    /// New state of `(i, j)` in the next generation, or `None` if it stays the same.
    pub fn compute_cell_update(&self, i: usize, j: usize) -> Option<bool> {
        let neighbors = self.neighbor_count(i, j);
        match (self.grid.get(i, j), neighbors) {
            (true, n) if !(2..=3).contains(&n) => Some(false),
            (false, 3) => Some(true),
            _ => None,
        }
    }

    /// Advance the field by one generation.
    pub fn sweep(&mut self) {
        let mut pending = std::mem::take(&mut self.pending);
        pending.clear();
        for i in 0..self.grid.height() {
            for j in 0..self.grid.width() {
                if let Some(state) = self.compute_cell_update(i, j) {
                    pending.push((self.grid.index(i, j), state));
                }
            }
        }

        for &(idx, state) in &pending {
            debug_assert_ne!(self.grid.get_index(idx), state);
            self.grid.set_index(idx, state);
            if state {
                self.alive_count += 1;
            } else {
                self.alive_count -= 1;
            }
        }
        debug_assert_eq!(self.alive_count, self.grid.population());

        log::trace!(
            "generation {}: {} changes, {} alive",
            self.generation + 1,
            pending.len(),
            self.alive_count
        );
        self.generation += 1;
        self.pending = pending;
    }

    /// Sweep `steps` times.
    ///
    /// With `record_history` returns the population before the first sweep
    /// followed by the population after each sweep (`steps + 1` values).
    pub fn run(&mut self, steps: usize, record_history: bool) -> Option<Vec<usize>> {
        self.run_with_progress(steps, record_history, |_, _| {})
    }

    /// Same as [`GameOfLife::run`], calling `progress(done, steps)` after every sweep.
    pub fn run_with_progress<F>(
        &mut self,
        steps: usize,
        record_history: bool,
        mut progress: F,
    ) -> Option<Vec<usize>>
    where
        F: FnMut(usize, usize),
    {
        let mut history = record_history.then(|| {
            let mut history = Vec::with_capacity(steps + 1);
            history.push(self.alive_count);
            history
        });
        let before = self.alive_count;
        for done in 1..=steps {
            self.sweep();
            if let Some(history) = history.as_mut() {
                history.push(self.alive_count);
            }
            progress(done, steps);
        }
        log::debug!(
            "ran {} generations, population {} -> {}",
            steps,
            before,
            self.alive_count
        );
        history
    }

    /// Mean column (`x`) and mean row (`y`) of the alive cells.
    ///
    /// Scans the whole field on every call.
    pub fn center_of_mass(&self) -> Result<(f64, f64), LifeError> {
        if self.alive_count == 0 {
            return Err(LifeError::EmptyPopulation);
        }
        let (sum_x, sum_y) = self
            .grid
            .alive_cells()
            .fold((0usize, 0usize), |(sx, sy), (i, j)| (sx + j, sy + i));
        let n = self.alive_count as f64;
        Ok((sum_x as f64 / n, sum_y as f64 / n))
    }
}
