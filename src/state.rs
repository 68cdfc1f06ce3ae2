use crate::error::{CavityError, Result};

/// Side length of the square domain `[0, L] x [0, L]`.
pub const DOMAIN_LENGTH: f64 = 2.0;

/// Smallest grid that still has an interior cell.
pub const MIN_GRID_SIZE: usize = 3;

/// Row-major index: `i` is the y row (0 = bottom), `j` the x column (0 = left).
#[inline(always)]
pub const fn idx(i: usize, j: usize, n: usize) -> usize {
    i * n + j
}

/// `n` evenly spaced samples over `[start, stop]`, endpoints included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|k| start + step * k as f64).collect()
        }
    }
}

/// Meshgrid coordinates of every node, presentation only.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// `xx[idx(i, j)] == x[j]`
    pub xx: Vec<f64>,
    /// `yy[idx(i, j)] == y[i]`
    pub yy: Vec<f64>,
}

impl Coordinates {
    pub fn new(n: usize) -> Self {
        let x = linspace(0.0, DOMAIN_LENGTH, n);
        let y = linspace(0.0, DOMAIN_LENGTH, n);
        let mut xx = vec![0.0; n * n];
        let mut yy = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                xx[idx(i, j, n)] = x[j];
                yy[idx(i, j, n)] = y[i];
            }
        }
        Self { x, y, xx, yy }
    }
}

/// All field storage for one cavity run.
pub struct GridState {
    pub n: usize,
    pub dx: f64,
    pub dy: f64,
    pub u: Vec<f64>,
    pub v: Vec<f64>,
    pub p: Vec<f64>,
    /// Pressure-Poisson source term. Only the interior is ever written.
    pub b: Vec<f64>,
    /// Velocity snapshot taken at the start of each timestep.
    pub un: Vec<f64>,
    pub vn: Vec<f64>,
    /// Pressure snapshot taken before each relaxation sweep.
    pub pn: Vec<f64>,
    pub coords: Coordinates,
}

impl GridState {
    /// Allocate zeroed fields for an `n x n` grid over `[0, 2] x [0, 2]`.
    pub fn new(n: usize) -> Result<Self> {
        if n < MIN_GRID_SIZE {
            return Err(CavityError::GridTooSmall { n });
        }
        let size = n * n;
        let spacing = DOMAIN_LENGTH / (n - 1) as f64;
        Ok(Self {
            n,
            dx: spacing,
            dy: spacing,
            u: vec![0.0; size],
            v: vec![0.0; size],
            p: vec![0.0; size],
            b: vec![0.0; size],
            un: vec![0.0; size],
            vn: vec![0.0; size],
            pn: vec![0.0; size],
            coords: Coordinates::new(n),
        })
    }

    /// Zero every field, returning the state to its freshly constructed form.
    pub fn reset(&mut self) {
        for field in [
            &mut self.u,
            &mut self.v,
            &mut self.p,
            &mut self.b,
            &mut self.un,
            &mut self.vn,
            &mut self.pn,
        ] {
            field.fill(0.0);
        }
    }
}
