#![warn(clippy::all)]

mod engine;
mod error;
mod grid;
mod patterns;
mod utils;
mod view;

pub use engine::GameOfLife;
pub use error::LifeError;
pub use grid::Grid;
pub use patterns::{InitialSetup, Preset, MIN_PATTERN_SIDE};
pub use utils::{with_delimiters, wrap_dec, wrap_inc, Config, FrameLimiter};
pub use view::TextView;
