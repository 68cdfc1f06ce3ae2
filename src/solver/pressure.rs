use crate::backend::Backend;
use crate::state::{idx, GridState};

use super::boundary::{set_bnd, CavityBoundary, FieldType};

/// Jacobi relaxation of `laplacian(p) = b` for exactly `nit` sweeps.
///
/// Every sweep snapshots `p` into `pn`, rewrites the interior from `pn` alone
/// and then applies the pressure boundary conditions. There is no residual
/// check; the cost per timestep is fixed.
pub fn pressure_poisson(state: &mut GridState, nit: usize, bc: &CavityBoundary, backend: Backend) {
    for _ in 0..nit {
        relax_sweep(state, bc, backend);
    }
}

/// One synchronous sweep followed by boundary enforcement.
pub fn relax_sweep(state: &mut GridState, bc: &CavityBoundary, backend: Backend) {
    let n = state.n;
    let dx2 = state.dx * state.dx;
    let dy2 = state.dy * state.dy;
    let denom = 2.0 * (dx2 + dy2);
    let GridState { p, pn, b, .. } = state;

    backend.snapshot(pn, p);
    let (pn, b) = (&pn[..], &b[..]);
    backend.fill_interior(p, n, |i, j| {
        ((pn[idx(i, j + 1, n)] + pn[idx(i, j - 1, n)]) * dy2
            + (pn[idx(i + 1, j, n)] + pn[idx(i - 1, j, n)]) * dx2)
            / denom
            - dx2 * dy2 / denom * b[idx(i, j, n)]
    });
    set_bnd(FieldType::Pressure, p, bc, n);
}
