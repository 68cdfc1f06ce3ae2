mod boundary;
pub mod diagnostics;
mod params;
mod pressure;
mod source;
mod velocity;

// Re-export public API
pub use boundary::{set_bnd, CavityBoundary, FieldType};
pub use diagnostics::{FieldRange, FieldSummary, StabilityReport};
pub use params::SolverParams;
pub use pressure::{pressure_poisson, relax_sweep};
pub use source::build_source;
pub use velocity::update_velocity;

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::backend::Backend;
use crate::error::Result;
use crate::state::{Coordinates, GridState};

/// One full timestep of lid-driven cavity flow.
pub fn cavity_step(state: &mut GridState, params: &SolverParams, backend: Backend) {
    let bc = CavityBoundary { lid_velocity: params.lid_velocity };

    // 1. Freeze velocity(t) as the right-hand side of this step
    backend.snapshot(&mut state.un, &state.u);
    backend.snapshot(&mut state.vn, &state.v);

    // 2. Source term from velocity(t)
    build_source(state, params, backend);

    // 3. Relax pressure, nit Jacobi sweeps
    pressure_poisson(state, params.nit, &bc, backend);

    // 4. Explicit velocity update + wall reset
    update_velocity(state, params, &bc, backend);
}

/// Owns the grid and drives a fixed number of timesteps.
pub struct Simulation {
    state: GridState,
    params: SolverParams,
    backend: Backend,
    timesteps: usize,
    completed: usize,
    log_interval: usize,
}

impl Simulation {
    /// Zeroed `grid_size x grid_size` cavity with default physics.
    pub fn new(grid_size: usize, timesteps: usize, backend: Backend) -> Result<Self> {
        Self::with_params(grid_size, timesteps, backend, SolverParams::default())
    }

    pub fn with_params(grid_size: usize, timesteps: usize, backend: Backend, params: SolverParams) -> Result<Self> {
        params.validate()?;
        let state = GridState::new(grid_size)?;
        Ok(Self {
            state,
            params,
            backend,
            timesteps,
            completed: 0,
            log_interval: 0,
        })
    }

    /// Log a diagnostics line every `interval` timesteps during `compute` (0 disables).
    pub fn with_log_interval(mut self, interval: usize) -> Self {
        self.log_interval = interval;
        self
    }

    /// Run the configured timesteps not yet taken and return the wall time spent.
    /// Steps already advanced with `step()` count towards the total, so a
    /// finished run is left untouched.
    pub fn compute(&mut self) -> Duration {
        let n = self.state.n;
        let first = self.completed + 1;
        info!(
            "cavity run: n={} timesteps={} (from step {}) nit={} backend={}",
            n, self.timesteps, first, self.params.nit, self.backend
        );
        let start = Instant::now();
        let interval = self.log_interval;
        for step in first..=self.timesteps {
            self.step();
            if interval > 0 && step % interval == 0 {
                let summary = self.summary();
                debug!(
                    "step {}/{}: KE={:.6e} max|div|={:.3e} u=[{:.4}, {:.4}] p=[{:.4}, {:.4}]",
                    step,
                    self.timesteps,
                    summary.kinetic_energy,
                    summary.max_divergence,
                    summary.u.min,
                    summary.u.max,
                    summary.p.min,
                    summary.p.max
                );
                if !summary.finite {
                    warn!("non-finite values at step {}; parameters are likely unstable", step);
                }
            }
        }
        let elapsed = start.elapsed();
        info!("cavity run finished: {} steps in {:.3?}", self.completed, elapsed);
        elapsed
    }

    /// Advance exactly one timestep. Safe point for callers that want to
    /// interleave their own work or stop early.
    pub fn step(&mut self) {
        cavity_step(&mut self.state, &self.params, self.backend);
        self.completed += 1;
    }

    /// Zero all fields so the same configuration can be run again.
    pub fn reset(&mut self) {
        self.state.reset();
        self.completed = 0;
    }

    pub fn u(&self) -> &[f64] {
        &self.state.u
    }

    pub fn v(&self) -> &[f64] {
        &self.state.v
    }

    pub fn p(&self) -> &[f64] {
        &self.state.p
    }

    pub fn b(&self) -> &[f64] {
        &self.state.b
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.state.coords
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn grid_size(&self) -> usize {
        self.state.n
    }

    pub fn timesteps(&self) -> usize {
        self.timesteps
    }

    pub fn log_interval(&self) -> usize {
        self.log_interval
    }

    /// Timesteps executed since construction or the last reset.
    pub fn completed_steps(&self) -> usize {
        self.completed
    }

    pub fn summary(&self) -> FieldSummary {
        FieldSummary::of(&self.state)
    }

    pub fn stability(&self) -> StabilityReport {
        StabilityReport::new(&self.params, self.state.dx, self.state.dy)
    }
}
