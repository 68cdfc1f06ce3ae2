use crate::state::{idx, GridState};

use super::params::SolverParams;

/// Explicit-scheme stability limits (von Neumann, 2-D forward Euler).
pub const DIFFUSION_LIMIT: f64 = 0.5;
pub const COURANT_LIMIT: f64 = 1.0;

/// Volume-averaged kinetic energy over interior nodes: KE = 0.5 * <u^2 + v^2>.
pub fn compute_kinetic_energy(u: &[f64], v: &[f64], n: usize) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for i in 1..(n - 1) {
        for j in 1..(n - 1) {
            let ii = idx(i, j, n);
            sum += u[ii] * u[ii] + v[ii] * v[ii];
            count += 1;
        }
    }
    if count > 0 { 0.5 * sum / count as f64 } else { 0.0 }
}

/// Largest central-difference |du/dx + dv/dy| over interior nodes.
pub fn compute_max_divergence(u: &[f64], v: &[f64], n: usize, dx: f64, dy: f64) -> f64 {
    let mut max = 0.0_f64;
    for i in 1..(n - 1) {
        for j in 1..(n - 1) {
            let div = (u[idx(i, j + 1, n)] - u[idx(i, j - 1, n)]) / (2.0 * dx)
                + (v[idx(i + 1, j, n)] - v[idx(i - 1, j, n)]) / (2.0 * dy);
            max = max.max(div.abs());
        }
    }
    max
}

/// Largest |laplacian(p) - b| over interior nodes (five-point Laplacian).
pub fn compute_poisson_residual(p: &[f64], b: &[f64], n: usize, dx: f64, dy: f64) -> f64 {
    let mut max = 0.0_f64;
    for i in 1..(n - 1) {
        for j in 1..(n - 1) {
            let c = p[idx(i, j, n)];
            let lap = (p[idx(i, j + 1, n)] - 2.0 * c + p[idx(i, j - 1, n)]) / (dx * dx)
                + (p[idx(i + 1, j, n)] - 2.0 * c + p[idx(i - 1, j, n)]) / (dy * dy);
            max = max.max((lap - b[idx(i, j, n)]).abs());
        }
    }
    max
}

/// Element-wise max |a - b|. Any NaN yields NaN.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(0.0_f64, |acc, (x, y)| {
        let d = (x - y).abs();
        if d.is_nan() || acc.is_nan() { f64::NAN } else { acc.max(d) }
    })
}

/// True when every value is finite (no blow-up yet).
pub fn all_finite(field: &[f64]) -> bool {
    field.iter().all(|x| x.is_finite())
}

/// Min / max of one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub fn of(field: &[f64]) -> Self {
        let (min, max) = field
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));
        Self { min, max }
    }
}

/// Snapshot of the solution used for progress logging and the final report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSummary {
    pub u: FieldRange,
    pub v: FieldRange,
    pub p: FieldRange,
    pub kinetic_energy: f64,
    pub max_divergence: f64,
    pub finite: bool,
}

impl FieldSummary {
    pub fn of(state: &GridState) -> Self {
        let n = state.n;
        Self {
            u: FieldRange::of(&state.u),
            v: FieldRange::of(&state.v),
            p: FieldRange::of(&state.p),
            kinetic_energy: compute_kinetic_energy(&state.u, &state.v, n),
            max_divergence: compute_max_divergence(&state.u, &state.v, n, state.dx, state.dy),
            finite: all_finite(&state.u) && all_finite(&state.v) && all_finite(&state.p),
        }
    }
}

/// Pre-flight estimate of the explicit scheme's stability numbers.
/// Informational only: the solver runs whatever parameters it is given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityReport {
    /// nu * dt * (1/dx^2 + 1/dy^2)
    pub diffusion_number: f64,
    /// |U_lid| * dt * (1/dx + 1/dy)
    pub courant_number: f64,
}

impl StabilityReport {
    pub fn new(params: &SolverParams, dx: f64, dy: f64) -> Self {
        Self {
            diffusion_number: params.nu * params.dt * (1.0 / (dx * dx) + 1.0 / (dy * dy)),
            courant_number: params.lid_velocity.abs() * params.dt * (1.0 / dx + 1.0 / dy),
        }
    }

    pub fn is_stable(&self) -> bool {
        self.diffusion_number <= DIFFUSION_LIMIT && self.courant_number <= COURANT_LIMIT
    }
}
