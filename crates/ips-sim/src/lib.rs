//! Euler–Maruyama engine for mean-field interacting particle systems.
//!
//! Provides:
//! - flat contiguous particle storage ([`ParticleState`])
//! - validated immutable configuration ([`SimConfig`])
//! - the fixed-step integrator with pre-allocated scratch buffers
//!   ([`Integrator`])
//! - ensemble statistics for visualization overlays ([`stats`])

pub mod config;
pub mod error;
pub mod integrator;
pub mod state;
pub mod stats;

pub use config::SimConfig;
pub use error::{Result, SimError};
pub use integrator::{Integrator, RECORD_INTERVAL};
pub use state::ParticleState;
pub use stats::{ensemble_covariance, ensemble_mean, ensemble_std};

use nalgebra as na;

/// Dynamic vector alias.
pub type DVec = na::DVector<f64>;
/// Dynamic matrix alias.
pub type DMat = na::DMatrix<f64>;
