use crate::Preset;
use anyhow::{anyhow, Context, Result};
use std::time::Duration;

/// Settings of a single command-line run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub steps: usize,
    pub preset: Preset,
    pub seed: Option<u64>,
    pub print_progress: bool,
    pub animate: bool,
    pub interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_SIDE,
            height: Self::DEFAULT_SIDE,
            steps: Self::DEFAULT_STEPS,
            preset: Preset::Random,
            seed: None,
            print_progress: false,
            animate: false,
            interval: Self::DEFAULT_INTERVAL,
        }
    }
}

impl Config {
    pub const DEFAULT_SIDE: usize = 50;
    pub const DEFAULT_STEPS: usize = 200;
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(350);

    pub const USAGE: &'static str = "\
usage: torus_life [options]
  --width N         columns of the field (default 50)
  --height N        rows of the field (default 50)
  --steps N         generations to simulate (default 200)
  --preset NAME     random | glider | beehive | oscillator (default random)
  --seed N          seed for the random preset
  --progress        log every finished generation
  --animate         draw the field in the terminal instead of printing statistics
  --interval-ms N   delay between animation frames (default 350)
  --help            print this message";

    /// Parse options, not including the program name.
    ///
    /// Returns `Ok(None)` when help was requested.
    pub fn from_args<I>(args: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| anyhow!("missing value for {}", arg))
            };
            match arg.as_str() {
                "--width" => config.width = parse_number(&arg, value()?)?,
                "--height" => config.height = parse_number(&arg, value()?)?,
                "--steps" => config.steps = parse_number(&arg, value()?)?,
                "--seed" => config.seed = Some(parse_number(&arg, value()?)?),
                "--preset" => config.preset = value()?.parse()?,
                "--interval-ms" => {
                    config.interval = Duration::from_millis(parse_number(&arg, value()?)?)
                }
                "--progress" => config.print_progress = true,
                "--animate" => config.animate = true,
                "--help" | "-h" => return Ok(None),
                _ => return Err(anyhow!("unknown option {:?}\n{}", arg, Self::USAGE)),
            }
        }
        Ok(Some(config))
    }
}

fn parse_number<T>(option: &str, value: String) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("invalid value {:?} for {}", value, option))
}
