#![warn(clippy::all)]

use anyhow::{Context, Result};
use torus_life::{with_delimiters, Config, GameOfLife, LifeError, TextView};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(config) = Config::from_args(std::env::args().skip(1))? else {
        println!("{}", Config::USAGE);
        return Ok(());
    };
    log::debug!("{:?}", config);

    let grid = config
        .preset
        .build(config.width, config.height, config.seed)
        .with_context(|| format!("failed to build {:?} field", config.preset))?;
    let mut life = GameOfLife::new(grid);

    if config.animate {
        let stdout = std::io::stdout();
        TextView::new(&mut life)
            .animate(config.steps, config.interval, &mut stdout.lock())
            .context("failed to write animation frame")?;
        return Ok(());
    }

    let timer = std::time::Instant::now();
    let history = life
        .run_with_progress(config.steps, true, |done, total| {
            if config.print_progress {
                log::info!("Done {}/{}", done, total);
            }
        })
        .unwrap_or_default();
    log::info!(
        "simulated {} generations in {:?}",
        config.steps,
        timer.elapsed()
    );

    let line = history
        .iter()
        .map(|&n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("population history: {}", line);
    println!(
        "final population: {} of {} cells",
        with_delimiters(life.alive_count()),
        with_delimiters(life.width() * life.height())
    );
    match life.center_of_mass() {
        Ok((x, y)) => println!("center of mass: x={:.3} y={:.3}", x, y),
        Err(LifeError::EmptyPopulation) => println!("center of mass: undefined, no cells alive"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
