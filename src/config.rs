use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::backend::Backend;
use crate::error::Result;
use crate::solver::SolverParams;

/// Config file looked up in the working directory by `load()`.
pub const CONFIG_FILE: &str = "cavity.yaml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid_size: usize,
    pub timesteps: usize,
    pub backend: Backend,
    pub log_interval: usize,
    pub physics: PhysicsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub rho: f64,
    pub nu: f64,
    pub dt: f64,
    pub nit: usize,
    pub lid_velocity: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: 41,
            timesteps: 1000,
            backend: Backend::Serial,
            log_interval: 100,
            physics: PhysicsConfig::default(),
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        let params = SolverParams::default();
        Self {
            rho: params.rho,
            nu: params.nu,
            dt: params.dt,
            nit: params.nit,
            lid_velocity: params.lid_velocity,
        }
    }
}

impl Config {
    /// Solver parameters described by this config.
    pub fn solver_params(&self) -> SolverParams {
        SolverParams {
            rho: self.physics.rho,
            nu: self.physics.nu,
            dt: self.physics.dt,
            nit: self.physics.nit,
            lid_velocity: self.physics.lid_velocity,
        }
    }
}

/// Parse a YAML document; missing keys fall back to defaults.
pub fn parse(yaml: &str) -> Result<Config> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Read and parse a config file, propagating IO and parse errors.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    parse(&contents)
}

/// Load `cavity.yaml` from the working directory if present.
pub fn load() -> Config {
    load_or_default(CONFIG_FILE)
}

/// Like `load_from`, but a missing file yields defaults and an unreadable or
/// malformed one is reported and replaced by defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Config {
    let path = path.as_ref();
    if !path.exists() {
        return Config::default();
    }
    match load_from(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("failed to load {}: {e}; using defaults", path.display());
            Config::default()
        }
    }
}
