//! Ensemble statistics over a particle cloud.
//!
//! The demo pages overlay the empirical mean and spread of the ensemble on
//! the live particle view; these helpers compute them from a
//! [`ParticleState`] without touching the integrator.

use crate::state::ParticleState;
use crate::{DMat, DVec};

/// Empirical mean position of the ensemble (length d).
pub fn ensemble_mean(state: &ParticleState) -> DVec {
    let d = state.dim();
    let mut mean = DVec::zeros(d);
    for p in state.particles() {
        for k in 0..d {
            mean[k] += p[k];
        }
    }
    mean / state.num_particles() as f64
}

/// Empirical covariance of particle positions (d × d), normalized by N.
pub fn ensemble_covariance(state: &ParticleState) -> DMat {
    let d = state.dim();
    let n = state.num_particles() as f64;
    let mean = ensemble_mean(state);
    let mut cov = DMat::zeros(d, d);
    for p in state.particles() {
        for a in 0..d {
            for b in 0..d {
                cov[(a, b)] += (p[a] - mean[a]) * (p[b] - mean[b]);
            }
        }
    }
    cov / n
}

/// Per-axis empirical standard deviation (length d).
pub fn ensemble_std(state: &ParticleState) -> DVec {
    let cov = ensemble_covariance(state);
    DVec::from_iterator(
        cov.nrows(),
        cov.diagonal().iter().map(|&v| v.max(0.0).sqrt()),
    )
}
