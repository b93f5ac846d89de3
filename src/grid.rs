use crate::LifeError;
use std::fmt;

/// Rectangular field of cells stored row-major, addressed as `(row, column)`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a field of dead cells with `width` columns and `height` rows.
    pub fn blank(width: usize, height: usize) -> Result<Self, LifeError> {
        let size = Self::cell_count(width, height)?;
        Ok(Self {
            cells: vec![false; size],
            width,
            height,
        })
    }

    /// Create a field from row-major cell states.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, LifeError> {
        let size = Self::cell_count(width, height)?;
        if cells.len() != size {
            return Err(LifeError::ShapeMismatch {
                expected: size,
                got: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Number of cells in a `width` x `height` field.
    ///
    /// Fails if either side is zero or the product does not fit in `usize`.
    pub fn cell_count(width: usize, height: usize) -> Result<usize, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::ZeroDimension { width, height });
        }
        width
            .checked_mul(height)
            .ok_or(LifeError::TooLarge { width, height })
    }

    /// Create a field from rows of `0`/`1` values; any non-zero value is alive.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, LifeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(LifeError::RaggedRows {
                    row,
                    len: values.len(),
                    expected: width,
                });
            }
            cells.extend(values.iter().map(|&v| v != 0));
        }
        Self::from_cells(width, height, cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// State of the cell at row `i`, column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[self.index(i, j)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, state: bool) {
        let idx = self.index(i, j);
        self.cells[idx] = state;
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width)
    }

    /// Number of alive cells, counted by a full scan.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of alive cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c)
            .map(|(idx, _)| (idx / self.width, idx % self.width))
    }

    #[inline]
    pub(crate) fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.height && j < self.width,
            "cell ({}, {}) is outside of {}x{} grid",
            i,
            j,
            self.width,
            self.height
        );
        j + i * self.width
    }

    #[inline]
    pub(crate) fn get_index(&self, idx: usize) -> bool {
        self.cells[idx]
    }

    #[inline]
    pub(crate) fn set_index(&mut self, idx: usize, state: bool) {
        self.cells[idx] = state;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &c in row {
                f.write_str(if c { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use crate::LifeError;

    #[test]
    fn test_blank_rejects_zero_extent() {
        assert_eq!(
            Grid::blank(0, 5),
            Err(LifeError::ZeroDimension {
                width: 0,
                height: 5
            })
        );
        assert!(Grid::blank(1, 1).is_ok());
    }

    #[test]
    fn test_from_rows_layout() {
        let grid = Grid::from_rows(vec![vec![0, 1, 0], vec![1, 0, 0]]).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert!(grid.get(0, 1));
        assert!(grid.get(1, 0));
        assert!(!grid.get(1, 2));
        assert_eq!(grid.population(), 2);
        assert_eq!(grid.alive_cells().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
        assert_eq!(grid.to_string(), ".#.\n#..\n");
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(vec![vec![0, 1, 0], vec![1, 0]]).unwrap_err();
        assert_eq!(
            err,
            LifeError::RaggedRows {
                row: 1,
                len: 2,
                expected: 3
            }
        );
        assert!(matches!(
            Grid::from_rows(vec![]),
            Err(LifeError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        assert_eq!(
            Grid::from_cells(3, 3, vec![false; 8]),
            Err(LifeError::ShapeMismatch {
                expected: 9,
                got: 8
            })
        );
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        let (width, height) = (usize::MAX / 2 + 1, 2);
        let too_large = LifeError::TooLarge { width, height };
        assert_eq!(Grid::cell_count(width, height), Err(too_large.clone()));
        assert_eq!(Grid::blank(width, height), Err(too_large.clone()));
        assert_eq!(Grid::from_cells(width, height, vec![]), Err(too_large));
        assert_eq!(Grid::cell_count(12, 10), Ok(120));
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_panics() {
        let grid = Grid::blank(4, 4).unwrap();
        grid.get(4, 0);
    }
}
