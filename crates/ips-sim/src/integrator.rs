//! Euler–Maruyama integrator for the mean-field SDE
//!
//!   dXᵢ = −(∇V(Xᵢ) + (1/N) Σ_{j≠i} ∇Φ(Xᵢ − Xⱼ)) dt + σ dWᵢ
//!
//! One confinement law and one interaction law are bound at construction
//! together with the seeded random source, so a configuration replays the
//! same trajectory bit for bit.

use ips_potential::{Confinement, Interaction, NORM_FLOOR};
use ips_rng::RandomSource;

use crate::config::SimConfig;
use crate::error::Result;
use crate::state::ParticleState;

/// Snapshot cadence of [`Integrator::simulate`]: every this many steps, plus
/// the final step.
pub const RECORD_INTERVAL: usize = 10;

/// Fixed-step Euler–Maruyama integrator over N particles in d dimensions.
///
/// All scratch buffers are allocated at construction; the per-step hot path
/// performs no allocation. Every pairwise force of a step is read from the
/// pre-step positions: drift for all particles is assembled into its own
/// buffer before any position is written, so a particle never sees a
/// neighbor that has already moved within the same step.
pub struct Integrator {
    confinement: Box<dyn Confinement>,
    interaction: Interaction,
    config: SimConfig,
    rng: RandomSource,
    /// Scratch: ∇V at one position (d).
    grad_v: Vec<f64>,
    /// Scratch: ∇Φ of one displacement (d).
    grad_phi: Vec<f64>,
    /// Scratch: one pair displacement (d).
    disp: Vec<f64>,
    /// Scratch: mean-field accumulator for one particle (d).
    mean_field: Vec<f64>,
    /// Noise batch for one step (N·d).
    noise: Vec<f64>,
    /// Drift assembled from the pre-step snapshot (N·d).
    drift: Vec<f64>,
}

impl Integrator {
    /// Bind a confinement law and an interaction law to a validated
    /// configuration.
    ///
    /// Fails fast on invalid parameters (σ < 0, dt ≤ 0, N = 0, d = 0).
    pub fn new(
        confinement: Box<dyn Confinement>,
        interaction: Interaction,
        config: SimConfig,
    ) -> Result<Self> {
        config.validate()?;
        let nd = config.n * config.dim;
        let rng = RandomSource::new(config.seed);
        Ok(Self {
            confinement,
            interaction,
            rng,
            grad_v: vec![0.0; config.dim],
            grad_phi: vec![0.0; config.dim],
            disp: vec![0.0; config.dim],
            mean_field: vec![0.0; config.dim],
            noise: vec![0.0; nd],
            drift: vec![0.0; nd],
            config,
        })
    }

    /// The bound configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Draw initial positions: N·d independent standard normals scaled by
    /// `std`.
    ///
    /// Consumes exactly N·d normal draws from the integrator's source.
    pub fn initialize(&mut self, std: f64) -> ParticleState {
        let mut state = ParticleState::zeros(self.config.n, self.config.dim);
        self.rng.fill_normal(state.as_mut_slice());
        for x in state.as_mut_slice() {
            *x *= std;
        }
        state
    }

    /// Advance `state` in place by one step of length dt.
    ///
    /// Draw order is part of the determinism contract: all N·d noise values
    /// for the step are drawn in one batch before any force is computed.
    pub fn step(&mut self, state: &mut ParticleState) {
        debug_assert_eq!(state.num_particles(), self.config.n);
        debug_assert_eq!(state.dim(), self.config.dim);

        self.rng.fill_normal(&mut self.noise);
        self.compute_drift(state);

        let dt = self.config.dt;
        let scale = self.config.sigma * dt.sqrt();
        for (m, x) in state.as_mut_slice().iter_mut().enumerate() {
            *x = *x + self.drift[m] * dt + scale * self.noise[m];
        }
    }

    /// Assemble −∇V − (1/N)Σ∇Φ for every particle into the drift buffer,
    /// reading only pre-step positions.
    fn compute_drift(&mut self, state: &ParticleState) {
        let n = self.config.n;
        let d = self.config.dim;

        for i in 0..n {
            self.confinement.gradient(state.particle(i), &mut self.grad_v);
            for k in 0..d {
                self.drift[i * d + k] = -self.grad_v[k];
            }
        }

        // The radial/vector branch is a construction-time property; take it
        // once per step, outside the pair loops.
        match &self.interaction {
            Interaction::Radial(potential) => {
                for i in 0..n {
                    self.mean_field.fill(0.0);
                    let xi = state.particle(i);
                    for j in 0..n {
                        if j == i {
                            continue;
                        }
                        let xj = state.particle(j);
                        let mut r2 = 0.0;
                        for k in 0..d {
                            self.disp[k] = xi[k] - xj[k];
                            r2 += self.disp[k] * self.disp[k];
                        }
                        let r = r2.sqrt().max(NORM_FLOOR);
                        let dphi = potential.derivative(r);
                        for k in 0..d {
                            self.mean_field[k] += dphi * self.disp[k] / r;
                        }
                    }
                    for k in 0..d {
                        self.drift[i * d + k] -= self.mean_field[k] / n as f64;
                    }
                }
            }
            Interaction::Vector(potential) => {
                for i in 0..n {
                    self.mean_field.fill(0.0);
                    let xi = state.particle(i);
                    for j in 0..n {
                        if j == i {
                            continue;
                        }
                        let xj = state.particle(j);
                        for k in 0..d {
                            self.disp[k] = xi[k] - xj[k];
                        }
                        potential.gradient(&self.disp, &mut self.grad_phi);
                        for k in 0..d {
                            self.mean_field[k] += self.grad_phi[k];
                        }
                    }
                    for k in 0..d {
                        self.drift[i * d + k] -= self.mean_field[k] / n as f64;
                    }
                }
            }
        }
    }

    /// Convenience driver: initialize, then step `n_steps` times, recording
    /// the initial state, every [`RECORD_INTERVAL`]-th state and the final
    /// state into an append-only sequence for playback.
    pub fn simulate(&mut self, n_steps: usize, init_std: f64) -> Vec<ParticleState> {
        let mut state = self.initialize(init_std);
        let mut snapshots = Vec::with_capacity(n_steps / RECORD_INTERVAL + 2);
        snapshots.push(state.clone());
        for s in 1..=n_steps {
            self.step(&mut state);
            if s % RECORD_INTERVAL == 0 || s == n_steps {
                snapshots.push(state.clone());
            }
        }
        snapshots
    }
}
