use crate::error::{CavityError, Result};

/// Physical and numerical parameters for the cavity solver.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverParams {
    pub rho: f64,
    pub nu: f64,
    pub dt: f64,
    /// Pressure relaxation sweeps per timestep.
    pub nit: usize,
    pub lid_velocity: f64,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            rho: 1.0,
            nu: 0.1,
            dt: 0.001,
            nit: 50,
            lid_velocity: 1.0,
        }
    }
}

impl SolverParams {
    /// Reject values the update equations cannot evaluate.
    /// Stability is not checked here, see `diagnostics::StabilityReport`.
    pub fn validate(&self) -> Result<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(CavityError::InvalidParameter(format!("dt must be positive, got {}", self.dt)));
        }
        if !(self.rho.is_finite() && self.rho > 0.0) {
            return Err(CavityError::InvalidParameter(format!("rho must be positive, got {}", self.rho)));
        }
        if !(self.nu.is_finite() && self.nu >= 0.0) {
            return Err(CavityError::InvalidParameter(format!("nu must be non-negative, got {}", self.nu)));
        }
        if !self.lid_velocity.is_finite() {
            return Err(CavityError::InvalidParameter(format!(
                "lid_velocity must be finite, got {}",
                self.lid_velocity
            )));
        }
        Ok(())
    }
}
