//! Integrator configuration and validation.

use crate::error::{Result, SimError};

/// Immutable Euler–Maruyama configuration.
///
/// Validated once at construction; changing any field means building a new
/// [`Integrator`](crate::Integrator).
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Diffusion coefficient σ ≥ 0.
    pub sigma: f64,
    /// Time step Δt > 0.
    pub dt: f64,
    /// Particle count N ≥ 1.
    pub n: usize,
    /// Spatial dimension d ≥ 1.
    pub dim: usize,
    /// Seed for the deterministic random source.
    pub seed: u64,
}

impl SimConfig {
    /// Create a configuration after validating every field.
    pub fn new(sigma: f64, dt: f64, n: usize, dim: usize, seed: u64) -> Result<Self> {
        let config = Self {
            sigma,
            dt,
            n,
            dim,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check all parameter invariants.
    pub fn validate(&self) -> Result<()> {
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(SimError::InvalidParameter(
                "sigma must be finite and >= 0".into(),
            ));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidParameter(
                "dt must be finite and > 0".into(),
            ));
        }
        if self.n == 0 {
            return Err(SimError::InvalidParameter("n must be >= 1".into()));
        }
        if self.dim == 0 {
            return Err(SimError::InvalidParameter("dim must be >= 1".into()));
        }
        Ok(())
    }
}
