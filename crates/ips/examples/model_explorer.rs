//! Drive a built-in model preset from the command line and log ensemble
//! statistics while it relaxes.
//!
//! Usage: RUST_LOG=info cargo run --example model_explorer [preset-key]

use ips::{ensemble_mean, ensemble_std, ModelRegistry};

fn main() {
    env_logger::init();

    let registry = ModelRegistry::builtin();
    for preset in registry.presets() {
        log::info!("available model: {} ({})", preset.key, preset.label);
    }

    let key = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "double-well-coulomb".to_string());
    let preset = match registry.get(&key) {
        Ok(p) => p,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    log::info!("running '{}': {}", preset.label, preset.description);

    let mut integrator = preset
        .integrator(0.01, 128, 2, 42)
        .expect("builtin preset parameters are valid");
    let mut state = integrator.initialize(1.0);

    for step in 1..=1000usize {
        integrator.step(&mut state);
        if step % 200 == 0 {
            let mean = ensemble_mean(&state);
            let std = ensemble_std(&state);
            log::info!(
                "step {step}: mean = ({:+.4}, {:+.4}), std = ({:.4}, {:.4})",
                mean[0],
                mean[1],
                std[0],
                std[1]
            );
        }
    }

    let std = ensemble_std(&state);
    println!("final ensemble spread: ({:.4}, {:.4})", std[0], std[1]);
}
