use crate::backend::Backend;
use crate::state::{idx, GridState};

use super::params::SolverParams;

/// Build the pressure-Poisson source term from the current velocity field.
///
/// Central differences on every interior node:
/// `b = rho * (1/dt * (du/dx + dv/dy) - (du/dx)^2 - 2 * du/dy * dv/dx - (dv/dy)^2)`.
/// The boundary of `b` is never written; the pressure stencil never reads it.
pub fn build_source(state: &mut GridState, params: &SolverParams, backend: Backend) {
    let n = state.n;
    let (dx, dy) = (state.dx, state.dy);
    let (rho, dt) = (params.rho, params.dt);
    let GridState { u, v, b, .. } = state;
    let (u, v) = (&u[..], &v[..]);

    backend.fill_interior(b, n, |i, j| {
        let dudx = (u[idx(i, j + 1, n)] - u[idx(i, j - 1, n)]) / (2.0 * dx);
        let dvdy = (v[idx(i + 1, j, n)] - v[idx(i - 1, j, n)]) / (2.0 * dy);
        let dudy = (u[idx(i + 1, j, n)] - u[idx(i - 1, j, n)]) / (2.0 * dy);
        let dvdx = (v[idx(i, j + 1, n)] - v[idx(i, j - 1, n)]) / (2.0 * dx);
        rho * (1.0 / dt * (dudx + dvdy) - dudx * dudx - 2.0 * (dudy * dvdx) - dvdy * dvdy)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const N: usize = 9;

    #[test]
    fn test_zero_velocity_gives_zero_source() {
        let mut state = GridState::new(N).unwrap();
        state.b.fill(7.0);
        build_source(&mut state, &SolverParams::default(), Backend::Serial);
        for i in 1..(N - 1) {
            for j in 1..(N - 1) {
                assert_eq!(state.b[idx(i, j, N)], 0.0, "interior ({}, {}) should be zero", i, j);
            }
        }
        // Boundary keeps whatever it held.
        assert_eq!(state.b[idx(0, 0, N)], 7.0);
        assert_eq!(state.b[idx(N - 1, 4, N)], 7.0);
    }

    #[test]
    fn test_uniform_expansion() {
        // u = x, v = y  ->  du/dx = dv/dy = 1, cross terms vanish.
        let mut state = GridState::new(N).unwrap();
        let params = SolverParams::default();
        for i in 0..N {
            for j in 0..N {
                state.u[idx(i, j, N)] = state.coords.x[j];
                state.v[idx(i, j, N)] = state.coords.y[i];
            }
        }
        build_source(&mut state, &params, Backend::Serial);
        let expected = params.rho * (2.0 / params.dt - 1.0 - 1.0);
        for i in 1..(N - 1) {
            for j in 1..(N - 1) {
                assert_relative_eq!(state.b[idx(i, j, N)], expected, max_relative = 1e-10);
            }
        }
    }

    #[test]
    fn test_solid_rotation_cross_term() {
        // u = -y, v = x: divergence-free, du/dy = -1, dv/dx = 1 -> b = rho * 2.
        let mut state = GridState::new(N).unwrap();
        let params = SolverParams { rho: 1.5, ..Default::default() };
        for i in 0..N {
            for j in 0..N {
                state.u[idx(i, j, N)] = -state.coords.y[i];
                state.v[idx(i, j, N)] = state.coords.x[j];
            }
        }
        build_source(&mut state, &params, Backend::Serial);
        for i in 1..(N - 1) {
            for j in 1..(N - 1) {
                assert_relative_eq!(state.b[idx(i, j, N)], 3.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut serial = GridState::new(N).unwrap();
        for k in 0..N * N {
            serial.u[k] = (k as f64 * 0.37).sin();
            serial.v[k] = (k as f64 * 0.11).cos();
        }
        let mut parallel = GridState::new(N).unwrap();
        parallel.u.copy_from_slice(&serial.u);
        parallel.v.copy_from_slice(&serial.v);
        let params = SolverParams::default();
        build_source(&mut serial, &params, Backend::Serial);
        build_source(&mut parallel, &params, Backend::Parallel);
        assert_eq!(serial.b, parallel.b);
    }
}
