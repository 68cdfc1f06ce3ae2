use crate::backend::Backend;
use crate::state::{idx, GridState};

use super::boundary::{set_bnd, CavityBoundary, FieldType};
use super::params::SolverParams;

/// Advance `u` and `v` one explicit Euler step, then reset the walls.
///
/// Reads the `(un, vn)` snapshot taken at the start of the timestep and the
/// freshly relaxed `p`. Convection is first-order upwind (backward
/// differences), diffusion and pressure gradient are central.
/// Both equations use `un` as the x-advection coefficient and `vn` as the
/// y-advection coefficient, so `v` is advected by the same velocity vector as `u`.
pub fn update_velocity(state: &mut GridState, params: &SolverParams, bc: &CavityBoundary, backend: Backend) {
    let n = state.n;
    let (dx, dy) = (state.dx, state.dy);
    let (rho, nu, dt) = (params.rho, params.nu, params.dt);
    let GridState { u, v, p, un, vn, .. } = state;
    let (un, vn, p) = (&un[..], &vn[..], &p[..]);

    backend.fill_interior(u, n, |i, j| {
        let c = un[idx(i, j, n)];
        c - un[idx(i, j, n)] * dt / dx * (c - un[idx(i, j - 1, n)])
            - vn[idx(i, j, n)] * dt / dy * (c - un[idx(i - 1, j, n)])
            - dt / (2.0 * rho * dx) * (p[idx(i, j + 1, n)] - p[idx(i, j - 1, n)])
            + nu * (dt / (dx * dx) * (un[idx(i, j + 1, n)] - 2.0 * c + un[idx(i, j - 1, n)])
                + dt / (dy * dy) * (un[idx(i + 1, j, n)] - 2.0 * c + un[idx(i - 1, j, n)]))
    });

    backend.fill_interior(v, n, |i, j| {
        let c = vn[idx(i, j, n)];
        c - un[idx(i, j, n)] * dt / dx * (c - vn[idx(i, j - 1, n)])
            - vn[idx(i, j, n)] * dt / dy * (c - vn[idx(i - 1, j, n)])
            - dt / (2.0 * rho * dy) * (p[idx(i + 1, j, n)] - p[idx(i - 1, j, n)])
            + nu * (dt / (dx * dx) * (vn[idx(i, j + 1, n)] - 2.0 * c + vn[idx(i, j - 1, n)])
                + dt / (dy * dy) * (vn[idx(i + 1, j, n)] - 2.0 * c + vn[idx(i - 1, j, n)]))
    });

    set_bnd(FieldType::U, u, bc, n);
    set_bnd(FieldType::V, v, bc, n);
}
