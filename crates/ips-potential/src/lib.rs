//! Confinement and pairwise-interaction force laws.
//!
//! Implements:
//! - the [`Confinement`] trait for single-particle potentials V(x)
//! - the [`RadialPotential`] / [`VectorPotential`] traits behind the tagged
//!   [`Interaction`] shape
//! - the closed-form potential family used by the demo models
//!
//! Every potential exposes its value and the exact analytic gradient of that
//! value; gradients are written into caller-supplied buffers so the
//! integrator hot path allocates nothing.

pub mod confinement;
pub mod interaction;

pub use confinement::{Anisotropic, Confinement, DoubleWell, Harmonic, QuadraticLinear};
pub use interaction::{
    AnisotropicGaussian, GaussianBump, Interaction, InverseDistance, LennardJones, Morse,
    RadialPotential, SmoothedStep, VectorPotential, SMOOTHING_WIDTH,
};

/// Floor applied to norms and pair distances before they are used as
/// divisors. Only matters when a position or a pair lands exactly on a
/// singular point.
pub const NORM_FLOOR: f64 = 1e-10;

/// Squared Euclidean norm of a coordinate slice.
#[inline]
pub(crate) fn norm_squared(x: &[f64]) -> f64 {
    x.iter().map(|c| c * c).sum()
}
