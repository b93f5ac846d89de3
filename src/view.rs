use crate::{utils::with_delimiters, FrameLimiter, GameOfLife};
use std::{io::Write, time::Duration};

/// Text renderer bound to one simulation.
pub struct TextView<'a> {
    life: &'a mut GameOfLife,
}

impl<'a> TextView<'a> {
    pub fn new(life: &'a mut GameOfLife) -> Self {
        Self { life }
    }

    /// Header line followed by the field, one row per line.
    pub fn frame(&self) -> String {
        format!(
            "generation {}, population {}\n{}",
            self.life.generation(),
            with_delimiters(self.life.alive_count()),
            self.life.grid()
        )
    }

    /// Advance one generation and render it.
    pub fn step(&mut self) -> String {
        self.life.sweep();
        self.frame()
    }

    /// Write the current frame and then `frames` more, one per `interval`.
    pub fn animate<W: Write>(
        &mut self,
        frames: usize,
        interval: Duration,
        out: &mut W,
    ) -> std::io::Result<()> {
        let mut limiter = FrameLimiter::new(interval);
        writeln!(out, "{}", self.frame())?;
        for _ in 0..frames {
            limiter.delay();
            let frame = self.step();
            writeln!(out, "{}", frame)?;
            out.flush()?;
        }
        match limiter.fps() {
            Some(fps) => log::debug!("animation finished at {:.1} fps", fps),
            None => log::debug!("animation finished without stepping"),
        }
        Ok(())
    }
}
