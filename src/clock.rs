//! Fixed timestep accumulator
//!
//! Hosts feed real frame times in and get back how many simulation ticks to
//! run, capped so a long stall cannot trigger a spiral of death.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedTimestep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Add elapsed seconds and return the number of ticks due
    pub fn advance(&mut self, dt: f32) -> u32 {
        // Clamp huge frame gaps (tab switch, debugger)
        self.accumulator += dt.clamp(0.0, 0.1);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == self.max_substeps && self.accumulator >= self.step {
            log::warn!("Dropping {:.3}s of simulation time", self.accumulator);
            self.accumulator = 0.0;
        }
        ticks
    }

    /// Fraction of a tick left over, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}
