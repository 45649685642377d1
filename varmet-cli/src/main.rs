use std::{env, time::Instant};

use anyhow::Context;
use varmet::{
    config::ConfigRun, variational::EXACT_GROUND_STATE_ENERGY, variational_minimization,
    VariationalOutput,
};

/// Path to an optional json file overriding the reference calculation
const CONFIG_VAR: &str = "VARMET_CONFIG";

fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match env::var_os(CONFIG_VAR) {
        Some(path) => ConfigRun::load(&path)
            .map_err(|error| anyhow::anyhow!("{error}"))
            .with_context(|| format!("failed to load config {}", path.to_string_lossy()))?,
        None => ConfigRun::default(),
    };
    let (initial, config) = config.into_parts().context("invalid config")?;

    log::info!(
        "minimizing {} basis functions over {} iterations",
        initial.n_terms(),
        config.iterations
    );

    let start = Instant::now();
    let output = variational_minimization(initial, &config);

    let VariationalOutput {
        ref wavefunction,
        energy,
        norm,
        unnormalized_norm,
        iterations,
        ..
    } = output;

    println!(
        "variational minimization finished after {iterations} iterations and {:0.2?}",
        start.elapsed()
    );
    println!("coefficients: {:1.8?}", wavefunction.coefficients().as_slice());
    println!("widths: {:1.8?}", wavefunction.widths().as_slice());
    println!("normalization before rescaling: {unnormalized_norm:1.8}");
    println!("normalization: {norm:1.8}");
    println!("energy: {energy:1.8}");
    println!(
        "error against exact energy ({EXACT_GROUND_STATE_ENERGY}): {:1.3e}",
        output.error()
    );
    println!(
        "optimal energy for these widths: {:1.8}",
        output.linear_optimum().energy
    );

    Ok(())
}
