use crate::{Grid, LifeError};
use std::str::FromStr;

/// Smallest side length accepted by the named patterns.
pub const MIN_PATTERN_SIDE: usize = 10;

const GLIDER: &[(usize, usize)] = &[(2, 2), (3, 3), (4, 1), (4, 2), (4, 3)];
const BEEHIVE: &[(usize, usize)] = &[(2, 3), (3, 2), (3, 4), (4, 2), (4, 4), (5, 3)];
const OSCILLATOR: &[(usize, usize)] = &[(2, 2), (3, 2), (4, 2)];

/// Initial fields for a simulation. Cell coordinates are `(row, column)`.
pub struct InitialSetup;

impl InitialSetup {
    /// Fails if the field is smaller than [`MIN_PATTERN_SIDE`] in either direction.
    pub fn check(width: usize, height: usize) -> Result<(), LifeError> {
        if width < MIN_PATTERN_SIDE || height < MIN_PATTERN_SIDE {
            return Err(LifeError::InvalidDimension {
                width,
                height,
                min: MIN_PATTERN_SIDE,
            });
        }
        Ok(())
    }

    /// Every cell is alive with probability 1/2.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(width: usize, height: usize, seed: Option<u64>) -> Result<Grid, LifeError> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let size = Grid::cell_count(width, height)?;
        let cells = (0..size).map(|_| rng.gen_bool(0.5)).collect();
        Grid::from_cells(width, height, cells)
    }

    pub fn glider(width: usize, height: usize) -> Result<Grid, LifeError> {
        Self::with_cells(width, height, GLIDER)
    }

    /// Six-cell still life.
    pub fn beehive(width: usize, height: usize) -> Result<Grid, LifeError> {
        Self::with_cells(width, height, BEEHIVE)
    }

    /// Vertical blinker, period 2.
    pub fn oscillator(width: usize, height: usize) -> Result<Grid, LifeError> {
        Self::with_cells(width, height, OSCILLATOR)
    }

    fn with_cells(
        width: usize,
        height: usize,
        cells: &[(usize, usize)],
    ) -> Result<Grid, LifeError> {
        Self::check(width, height)?;
        let mut grid = Grid::blank(width, height)?;
        for &(i, j) in cells {
            grid.set(i, j, true);
        }
        Ok(grid)
    }
}

/// Named choice of [`InitialSetup`] constructor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Preset {
    Random,
    Glider,
    Beehive,
    Oscillator,
}

impl Preset {
    pub fn build(self, width: usize, height: usize, seed: Option<u64>) -> Result<Grid, LifeError> {
        match self {
            Self::Random => InitialSetup::random(width, height, seed),
            Self::Glider => InitialSetup::glider(width, height),
            Self::Beehive => InitialSetup::beehive(width, height),
            Self::Oscillator => InitialSetup::oscillator(width, height),
        }
    }
}

impl FromStr for Preset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "glider" => Ok(Self::Glider),
            "beehive" => Ok(Self::Beehive),
            "oscillator" | "blinker" => Ok(Self::Oscillator),
            _ => Err(anyhow::anyhow!(
                "unknown preset {:?}, expected one of: random, glider, beehive, oscillator",
                s
            )),
        }
    }
}
