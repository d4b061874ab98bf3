use std::io::{self, Write};

use anyhow::{Context, Result};

use nuclide_forge::{SimulationConfig, SimulationReport, simulate_with};

use crate::cli::SimulateArgs;
use crate::config::build_simulation_config;
use crate::display::{
    Context as DisplayContext, Progress, print_mode_distribution, print_population,
    print_simulation_summary,
};

const TOTAL_STEPS: u8 = 2;

pub fn run_simulate(args: SimulateArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading configuration");
    let config = build_simulation_config(&args)?;
    progress.complete_step("Loading configuration", &config_substeps(&args, &config));

    progress.step("Running decay simulation");
    let mut per_tick = Vec::with_capacity(config.ticks as usize);
    let report = simulate_with(&config, |tick, fired| {
        per_tick.push(fired.len());
        let decays: usize = per_tick.iter().sum();
        progress.detail(&format!("tick {}/{}, {} decays", tick, config.ticks, decays));
    })
    .context("Simulation failed")?;
    progress.complete_step(
        "Running decay simulation",
        &[
            format!("{} ticks over {} atoms", report.ticks, report.atoms.len()),
            format!(
                "{} decays, {} infeasible draws",
                report.decay_count(),
                report.infeasible_draws
            ),
        ],
    );

    progress.finish(&tick_summary(&report, &per_tick));

    let mut out = io::stdout().lock();
    print_simulation_summary(&mut out, &report);
    print_population(&mut out, "Initial Atoms", &report.initial);
    print_population(&mut out, "Final Atoms", &report.atoms);
    print_mode_distribution(&mut out, &report);
    out.flush().context("Failed to write report")
}

fn config_substeps(args: &SimulateArgs, config: &SimulationConfig) -> Vec<String> {
    let source = match &args.config {
        Some(path) => format!("Read {}", path.display()),
        None => "Use built-in defaults".to_string(),
    };

    let population = if config.atoms.is_empty() {
        format!(
            "Spawn {} neutral atoms with {}-{} protons",
            config.spawn.count, config.spawn.min_protons, config.spawn.max_protons
        )
    } else {
        format!("Load {} configured atoms", config.atoms.len())
    };

    vec![source, format!("Seed {}", config.seed), population]
}

fn tick_summary(report: &SimulationReport, per_tick: &[usize]) -> Vec<String> {
    if report.ticks == 0 {
        return vec!["No ticks run".to_string()];
    }

    let rate = report.decay_count() as f64 / f64::from(report.ticks);
    let mut lines = vec![format!("{:.2} decays per tick", rate)];

    if let Some((index, &peak)) = per_tick
        .iter()
        .enumerate()
        .filter(|(_, n)| **n > 0)
        .max_by_key(|(i, n)| (**n, std::cmp::Reverse(*i)))
    {
        lines.push(format!("Busiest tick: {} with {} decays", index + 1, peak));
    }

    let quiet_ticks = per_tick.iter().filter(|n| **n == 0).count();
    if quiet_ticks > 0 {
        lines.push(format!("{} ticks without a decay", quiet_ticks));
    }

    lines
}
