//! Browser bindings for the demo pages.
//!
//! Each open demo owns one [`WasmSim`]; the page drives it once per rendered
//! frame and reads positions back as a flat array for the canvas layer.

use wasm_bindgen::prelude::*;

use ips_model::ModelRegistry;
use ips_sim::{ensemble_mean, ensemble_std, Integrator, ParticleState};

/// A live simulation instance exposed to JS.
#[wasm_bindgen]
pub struct WasmSim {
    integrator: Integrator,
    state: ParticleState,
}

#[wasm_bindgen]
impl WasmSim {
    /// Build a simulation from a registry preset key.
    ///
    /// `init_std` is the standard deviation of the initial particle cloud.
    pub fn from_preset(
        key: &str,
        dt: f64,
        n: usize,
        dim: usize,
        seed: u64,
        init_std: f64,
    ) -> Result<WasmSim, JsValue> {
        let registry = ModelRegistry::builtin();
        let preset = registry
            .get(key)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut integrator = preset
            .integrator(dt, n, dim, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let state = integrator.initialize(init_std);
        Ok(WasmSim { integrator, state })
    }

    /// Advance the simulation by `n` steps.
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.integrator.step(&mut self.state);
        }
    }

    /// Positions as a flat array `[x0, y0, ..., x1, y1, ...]`.
    pub fn positions(&self) -> Vec<f64> {
        self.state.as_slice().to_vec()
    }

    /// Empirical mean position of the ensemble (length d).
    pub fn mean(&self) -> Vec<f64> {
        ensemble_mean(&self.state).as_slice().to_vec()
    }

    /// Per-axis empirical standard deviation (length d).
    pub fn std(&self) -> Vec<f64> {
        ensemble_std(&self.state).as_slice().to_vec()
    }

    /// Number of particles.
    pub fn num_particles(&self) -> usize {
        self.state.num_particles()
    }

    /// Spatial dimension.
    pub fn dim(&self) -> usize {
        self.state.dim()
    }

    /// The built-in preset catalog as JSON, for the explorer tabs.
    pub fn preset_catalog_json() -> String {
        let registry = ModelRegistry::builtin();
        serde_json::to_string(registry.presets()).unwrap_or_else(|_| "[]".to_string())
    }
}
