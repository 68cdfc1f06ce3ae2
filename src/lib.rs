//! Explicit finite-difference solver for 2-D lid-driven cavity flow.
//!
//! Each timestep builds the pressure-Poisson source from the velocity field,
//! relaxes pressure with a fixed number of Jacobi sweeps and advances velocity
//! with forward Euler. See [`Simulation`] for the entry point.

pub mod backend;
pub mod config;
pub mod error;
pub mod solver;
pub mod state;

pub use backend::Backend;
pub use error::{CavityError, Result};
pub use solver::{FieldSummary, Simulation, SolverParams, StabilityReport};
pub use state::GridState;
