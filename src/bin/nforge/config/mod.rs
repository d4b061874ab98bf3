use std::fs;

use anyhow::{Context, Result};

use nuclide_forge::SimulationConfig;

use crate::cli::{SimulateArgs, SimulationOverrides};

/// Loads the config file, if any, then applies command-line overrides and
/// validates the result.
pub fn build_simulation_config(args: &SimulateArgs) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            SimulationConfig::from_toml(&text)
                .with_context(|| format!("Invalid simulation config {}", path.display()))?
        }
        None => SimulationConfig::default(),
    };

    apply_overrides(&mut config, &args.overrides);
    config
        .validate()
        .context("Invalid simulation settings after overrides")?;

    Ok(config)
}

fn apply_overrides(config: &mut SimulationConfig, overrides: &SimulationOverrides) {
    if let Some(seed) = overrides.seed {
        config.seed = seed;
    }
    if let Some(ticks) = overrides.ticks {
        config.ticks = ticks;
    }
    if let Some(count) = overrides.count {
        config.spawn.count = count;
    }
    if let Some(min) = overrides.min_protons {
        config.spawn.min_protons = min;
    }
    if let Some(max) = overrides.max_protons {
        config.spawn.max_protons = max;
    }
}
