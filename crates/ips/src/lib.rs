//! ips — mean-field interacting particle simulation engine.
//!
//! This is the umbrella crate that re-exports the engine components: the
//! deterministic random source, the force-law library, the Euler–Maruyama
//! integrator, and the model registry behind the demo pages.
//!
//! # Example
//!
//! ```
//! use ips::{Harmonic, Integrator, Interaction, InverseDistance, SimConfig};
//!
//! let config = SimConfig::new(0.15, 0.02, 16, 2, 42)?;
//! let mut integrator = Integrator::new(
//!     Box::new(Harmonic::new(1.0)),
//!     Interaction::radial(InverseDistance::new(0.5)),
//!     config,
//! )?;
//! let mut state = integrator.initialize(1.0);
//! for _ in 0..100 {
//!     integrator.step(&mut state);
//! }
//! assert!(state.as_slice().iter().all(|x| x.is_finite()));
//! # Ok::<(), ips::SimError>(())
//! ```

pub use ips_rng::{self, RandomSource};

pub use ips_potential::{
    self, Anisotropic, AnisotropicGaussian, Confinement, DoubleWell, GaussianBump, Harmonic,
    Interaction, InverseDistance, LennardJones, Morse, QuadraticLinear, RadialPotential,
    SmoothedStep, VectorPotential, NORM_FLOOR, SMOOTHING_WIDTH,
};

pub use ips_sim::{
    self, ensemble_covariance, ensemble_mean, ensemble_std, Integrator, ParticleState, SimConfig,
    SimError, RECORD_INTERVAL,
};

pub use ips_model::{
    self, builtin_presets, ConfinementSpec, InteractionSpec, MethodError, ModelError, ModelPreset,
    ModelRegistry, ResultRow, ResultTable,
};
