//! Named model configurations for the model explorer.
//!
//! A preset pairs one confinement law with one interaction law and a
//! diffusion coefficient under a stable key. Presets are plain data
//! (serde-serializable), so demo catalogs can live in JSON; `build` turns
//! them into the engine's trait objects.

use serde::{Deserialize, Serialize};

use ips_potential::{
    Anisotropic, AnisotropicGaussian, Confinement, DoubleWell, GaussianBump, Harmonic,
    Interaction, InverseDistance, LennardJones, Morse, QuadraticLinear, SmoothedStep,
};
use ips_sim::{Integrator, SimConfig};

use crate::error::{ModelError, Result};

/// Confinement law selector.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConfinementSpec {
    /// V(x) = ½ k ‖x‖².
    Harmonic { stiffness: f64 },
    /// V(x) = ½ α₁ ‖x‖ + α₂ ‖x‖².
    QuadraticLinear { alpha1: f64, alpha2: f64 },
    /// V(x) = ¼ (‖x‖² − 1)².
    DoubleWell,
    /// V(x) = Σₖ aₖ xₖ².
    Anisotropic { weights: Vec<f64> },
}

impl ConfinementSpec {
    /// Build the confinement trait object.
    pub fn build(&self) -> Box<dyn Confinement> {
        match self {
            Self::Harmonic { stiffness } => Box::new(Harmonic::new(*stiffness)),
            Self::QuadraticLinear { alpha1, alpha2 } => {
                Box::new(QuadraticLinear::new(*alpha1, *alpha2))
            }
            Self::DoubleWell => Box::new(DoubleWell::new()),
            Self::Anisotropic { weights } => Box::new(Anisotropic::new(weights.clone())),
        }
    }
}

/// Interaction law selector. The radial/vector shape is fixed by the
/// variant, mirroring the engine's `Interaction` discriminant.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionSpec {
    /// Φ(r) = A exp(−r²/2w²).
    GaussianBump { amplitude: f64, width: f64 },
    /// Smoothed piecewise-constant window between two radii.
    SmoothedStep { height: f64, r_inner: f64, r_outer: f64 },
    /// Φ(r) = γ / r.
    InverseDistance { gamma: f64 },
    /// Φ(r) = D (1 − e^(−a(r − r₀)))².
    Morse { depth: f64, width: f64, r0: f64 },
    /// Truncated-and-shifted Lennard-Jones 12-6.
    LennardJones { epsilon: f64, sigma: f64, r_cut: f64 },
    /// Anisotropic Gaussian with per-axis length scales.
    AnisotropicGaussian { amplitude: f64, scales: Vec<f64> },
}

impl InteractionSpec {
    /// Build the interaction with its construction-time shape.
    pub fn build(&self) -> Interaction {
        match self {
            Self::GaussianBump { amplitude, width } => {
                Interaction::radial(GaussianBump::new(*amplitude, *width))
            }
            Self::SmoothedStep {
                height,
                r_inner,
                r_outer,
            } => Interaction::radial(SmoothedStep::new(*height, *r_inner, *r_outer)),
            Self::InverseDistance { gamma } => {
                Interaction::radial(InverseDistance::new(*gamma))
            }
            Self::Morse { depth, width, r0 } => {
                Interaction::radial(Morse::new(*depth, *width, *r0))
            }
            Self::LennardJones {
                epsilon,
                sigma,
                r_cut,
            } => Interaction::radial(LennardJones::new(*epsilon, *sigma, *r_cut)),
            Self::AnisotropicGaussian { amplitude, scales } => {
                Interaction::vector(AnisotropicGaussian::new(*amplitude, scales.clone()))
            }
        }
    }
}

/// One entry of the model explorer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelPreset {
    /// Stable lookup key.
    pub key: String,
    /// Short human-readable name shown on the tab.
    pub label: String,
    /// One-paragraph description shown next to the live view.
    pub description: String,
    /// Confinement law.
    pub confinement: ConfinementSpec,
    /// Interaction law.
    pub interaction: InteractionSpec,
    /// Diffusion coefficient σ.
    pub sigma: f64,
}

impl ModelPreset {
    /// Construct a fresh integrator for this preset.
    pub fn integrator(&self, dt: f64, n: usize, dim: usize, seed: u64) -> Result<Integrator> {
        let config = SimConfig::new(self.sigma, dt, n, dim, seed)?;
        Ok(Integrator::new(
            self.confinement.build(),
            self.interaction.build(),
            config,
        )?)
    }
}

/// Registry of named presets, iterated in insertion order (tab order).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelRegistry {
    presets: Vec<ModelPreset>,
}

impl ModelRegistry {
    /// Registry with the built-in demo models.
    pub fn builtin() -> Self {
        Self {
            presets: builtin_presets(),
        }
    }

    /// Parse a registry from a JSON catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a preset by key.
    pub fn get(&self, key: &str) -> Result<&ModelPreset> {
        self.presets
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| ModelError::UnknownModel(key.to_string()))
    }

    /// All presets in tab order.
    pub fn presets(&self) -> &[ModelPreset] {
        &self.presets
    }

    /// All keys in tab order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.key.as_str())
    }
}

/// The built-in demo models.
pub fn builtin_presets() -> Vec<ModelPreset> {
    vec![
        ModelPreset {
            key: "harmonic-gaussian".into(),
            label: "Harmonic + Gaussian".into(),
            description: "Ornstein–Uhlenbeck confinement with a short-range \
                          Gaussian repulsion; the cloud settles into a ring-free \
                          equilibrium around the origin."
                .into(),
            confinement: ConfinementSpec::Harmonic { stiffness: 1.0 },
            interaction: InteractionSpec::GaussianBump {
                amplitude: 2.0,
                width: 0.5,
            },
            sigma: 0.3,
        },
        ModelPreset {
            key: "double-well-coulomb".into(),
            label: "Double well + Coulomb".into(),
            description: "Bistable radial confinement with inverse-distance \
                          repulsion; particles split between the two wells."
                .into(),
            confinement: ConfinementSpec::DoubleWell,
            interaction: InteractionSpec::InverseDistance { gamma: 0.5 },
            sigma: 0.15,
        },
        ModelPreset {
            key: "quadratic-linear-morse".into(),
            label: "Quadratic-linear + Morse".into(),
            description: "Sharper-than-harmonic pull toward the origin combined \
                          with a Morse pair bond at finite distance."
                .into(),
            confinement: ConfinementSpec::QuadraticLinear {
                alpha1: 1.0,
                alpha2: 0.5,
            },
            interaction: InteractionSpec::Morse {
                depth: 0.8,
                width: 2.0,
                r0: 0.6,
            },
            sigma: 0.2,
        },
        ModelPreset {
            key: "anisotropic-window".into(),
            label: "Anisotropic + window".into(),
            description: "Axis-weighted confinement with a smoothed \
                          piecewise-constant interaction band."
                .into(),
            confinement: ConfinementSpec::Anisotropic {
                weights: vec![1.0, 4.0],
            },
            interaction: InteractionSpec::SmoothedStep {
                height: 1.0,
                r_inner: 0.4,
                r_outer: 1.2,
            },
            sigma: 0.25,
        },
        ModelPreset {
            key: "lennard-jones".into(),
            label: "Lennard-Jones".into(),
            description: "Weak harmonic confinement with a truncated-and-shifted \
                          Lennard-Jones pair potential; clusters at the \
                          equilibrium pair distance."
                .into(),
            confinement: ConfinementSpec::Harmonic { stiffness: 0.5 },
            interaction: InteractionSpec::LennardJones {
                epsilon: 0.5,
                sigma: 0.4,
                r_cut: 1.0,
            },
            sigma: 0.1,
        },
        ModelPreset {
            key: "anisotropic-gaussian".into(),
            label: "Anisotropic Gaussian".into(),
            description: "Harmonic confinement with a vector-valued Gaussian \
                          interaction whose length scales differ per axis \
                          (planar models)."
                .into(),
            confinement: ConfinementSpec::Harmonic { stiffness: 1.0 },
            interaction: InteractionSpec::AnisotropicGaussian {
                amplitude: 1.5,
                scales: vec![0.5, 2.0],
            },
            sigma: 0.2,
        },
    ]
}
