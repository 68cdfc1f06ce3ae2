use crate::state::idx;

/// Field type for boundary condition dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Pressure,
    U,
    V,
}

/// Closed square cavity whose top wall slides in +x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CavityBoundary {
    pub lid_velocity: f64,
}

impl Default for CavityBoundary {
    fn default() -> Self {
        Self { lid_velocity: 1.0 }
    }
}

/// Boundary condition handler.
///   - `FieldType::Pressure`: Neumann on right, bottom, left; Dirichlet p = 0 on top
///   - `FieldType::U`: no-slip on bottom, left, right; lid velocity on top
///   - `FieldType::V`: zero on all four walls
///
/// Edges are written in a fixed order and the top row always goes last,
/// so it owns both top corners.
pub fn set_bnd(field_type: FieldType, x: &mut [f64], bc: &CavityBoundary, n: usize) {
    debug_assert_eq!(x.len(), n * n);
    match field_type {
        FieldType::Pressure => {
            // dp/dx = 0 at x = 2
            copy_col(x, n, n - 1, n - 2);
            // dp/dy = 0 at y = 0
            copy_row(x, n, 0, 1);
            // dp/dx = 0 at x = 0
            copy_col(x, n, 0, 1);
            // p = 0 at y = 2
            fill_row(x, n, n - 1, 0.0);
        }
        FieldType::U => {
            fill_row(x, n, 0, 0.0);
            fill_col(x, n, 0, 0.0);
            fill_col(x, n, n - 1, 0.0);
            fill_row(x, n, n - 1, bc.lid_velocity);
        }
        FieldType::V => {
            fill_row(x, n, 0, 0.0);
            fill_row(x, n, n - 1, 0.0);
            fill_col(x, n, 0, 0.0);
            fill_col(x, n, n - 1, 0.0);
        }
    }
}

fn fill_row(x: &mut [f64], n: usize, i: usize, value: f64) {
    x[idx(i, 0, n)..idx(i + 1, 0, n)].fill(value);
}

fn fill_col(x: &mut [f64], n: usize, j: usize, value: f64) {
    for i in 0..n {
        x[idx(i, j, n)] = value;
    }
}

fn copy_row(x: &mut [f64], n: usize, dst: usize, src: usize) {
    x.copy_within(idx(src, 0, n)..idx(src + 1, 0, n), idx(dst, 0, n));
}

fn copy_col(x: &mut [f64], n: usize, dst: usize, src: usize) {
    for i in 0..n {
        x[idx(i, dst, n)] = x[idx(i, src, n)];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 6;

    /// Field with a distinct value in every cell.
    fn distinct() -> Vec<f64> {
        (0..N * N).map(|k| 1.0 + k as f64).collect()
    }

    #[test]
    fn test_pressure_neumann_edges() {
        let bc = CavityBoundary::default();
        let mut p = distinct();
        set_bnd(FieldType::Pressure, &mut p, &bc, N);
        for i in 0..N {
            assert_eq!(p[idx(i, N - 1, N)], p[idx(i, N - 2, N)], "right edge should copy column N-2 at row {}", i);
            assert_eq!(p[idx(i, 0, N)], p[idx(i, 1, N)], "left edge should copy column 1 at row {}", i);
        }
        for j in 0..N {
            assert_eq!(p[idx(0, j, N)], p[idx(1, j, N)], "bottom edge should copy row 1 at column {}", j);
        }
    }

    #[test]
    fn test_pressure_top_dirichlet_wins_corners() {
        let bc = CavityBoundary::default();
        let mut p = distinct();
        set_bnd(FieldType::Pressure, &mut p, &bc, N);
        for j in 0..N {
            assert_eq!(p[idx(N - 1, j, N)], 0.0, "top edge should be zero at column {}", j);
        }
        // Neumann copies would have left these non-zero.
        assert_eq!(p[idx(N - 1, 0, N)], 0.0);
        assert_eq!(p[idx(N - 1, N - 1, N)], 0.0);
    }

    #[test]
    fn test_pressure_bottom_corners_follow_order() {
        let bc = CavityBoundary::default();
        let mut p = distinct();
        let original = p.clone();
        set_bnd(FieldType::Pressure, &mut p, &bc, N);
        // Bottom-right: right edge copies column N-2, then bottom row copies row 1.
        assert_eq!(p[idx(0, N - 1, N)], original[idx(1, N - 2, N)]);
        // Bottom-left: bottom row first, then left edge copies column 1.
        assert_eq!(p[idx(0, 0, N)], original[idx(1, 1, N)]);
    }

    #[test]
    fn test_pressure_interior_untouched() {
        let bc = CavityBoundary::default();
        let mut p = distinct();
        let original = p.clone();
        set_bnd(FieldType::Pressure, &mut p, &bc, N);
        for i in 1..(N - 1) {
            for j in 1..(N - 1) {
                assert_eq!(p[idx(i, j, N)], original[idx(i, j, N)]);
            }
        }
    }

    #[test]
    fn test_u_lid_and_walls() {
        let bc = CavityBoundary { lid_velocity: 2.5 };
        let mut u = distinct();
        set_bnd(FieldType::U, &mut u, &bc, N);
        for j in 0..N {
            assert_eq!(u[idx(N - 1, j, N)], 2.5, "lid should move at column {}", j);
            assert_eq!(u[idx(0, j, N)], 0.0, "bottom wall should be no-slip at column {}", j);
        }
        for i in 0..(N - 1) {
            assert_eq!(u[idx(i, 0, N)], 0.0, "left wall should be no-slip at row {}", i);
            assert_eq!(u[idx(i, N - 1, N)], 0.0, "right wall should be no-slip at row {}", i);
        }
    }

    #[test]
    fn test_v_all_walls_zero() {
        let bc = CavityBoundary::default();
        let mut v = distinct();
        set_bnd(FieldType::V, &mut v, &bc, N);
        for k in 0..N {
            assert_eq!(v[idx(0, k, N)], 0.0);
            assert_eq!(v[idx(N - 1, k, N)], 0.0);
            assert_eq!(v[idx(k, 0, N)], 0.0);
            assert_eq!(v[idx(k, N - 1, N)], 0.0);
        }
        assert_eq!(v[idx(2, 3, N)], distinct()[idx(2, 3, N)]);
    }
}
