use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::Deserialize;

use crate::error::CavityError;

/// Array-compute substrate the stencil kernels run on.
///
/// Every kernel is expressed as "write one interior cell from frozen inputs",
/// so both variants evaluate the same arithmetic per cell and produce
/// bit-identical fields. `Parallel` spreads interior rows across the rayon
/// thread pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    #[serde(alias = "cpu")]
    Serial,
    #[serde(alias = "accelerator", alias = "gpu")]
    Parallel,
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Serial => "serial",
            Backend::Parallel => "parallel",
        }
    }

    /// Write `f(i, j)` into every interior cell of the `n x n` field `out`.
    /// Boundary rows and columns are left untouched.
    /// `f` must only read buffers other than `out` (snapshot discipline).
    pub fn fill_interior<F>(self, out: &mut [f64], n: usize, f: F)
    where
        F: Fn(usize, usize) -> f64 + Sync,
    {
        debug_assert_eq!(out.len(), n * n);
        if n < 3 {
            return;
        }
        match self {
            Backend::Serial => {
                for (i, row) in out.chunks_mut(n).enumerate().skip(1).take(n - 2) {
                    fill_row(row, i, &f);
                }
            }
            Backend::Parallel => {
                out.par_chunks_mut(n)
                    .enumerate()
                    .skip(1)
                    .take(n - 2)
                    .for_each(|(i, row)| fill_row(row, i, &f));
            }
        }
    }

    /// Full copy of `src` into the snapshot buffer `dst`.
    pub fn snapshot(self, dst: &mut [f64], src: &[f64]) {
        debug_assert_eq!(dst.len(), src.len());
        match self {
            Backend::Serial => dst.copy_from_slice(src),
            Backend::Parallel => {
                let chunk = (src.len() / rayon::current_num_threads()).max(1024);
                dst.par_chunks_mut(chunk)
                    .zip(src.par_chunks(chunk))
                    .for_each(|(d, s)| d.copy_from_slice(s));
            }
        }
    }
}

#[inline(always)]
fn fill_row<F>(row: &mut [f64], i: usize, f: &F)
where
    F: Fn(usize, usize) -> f64,
{
    let n = row.len();
    for (j, cell) in row.iter_mut().enumerate().skip(1).take(n - 2) {
        *cell = f(i, j);
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = CavityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "serial" | "cpu" => Ok(Backend::Serial),
            "parallel" | "accelerator" | "gpu" => Ok(Backend::Parallel),
            other => Err(CavityError::UnknownBackend(other.to_string())),
        }
    }
}
