use std::io::{self, Write};

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing::info;

use nuclide_forge::{Atom, DecayMode, DecayOutcome, apply_mode, decay};

use crate::cli::DecayArgs;
use crate::display::{print_atom_report, print_decay_log};

pub fn run_decay(args: DecayArgs) -> Result<()> {
    let start = args.atom.clone();
    let mut atom = args.atom;

    let (title, steps) = match args.mode {
        Some(mode) => {
            let mode = DecayMode::from(mode);
            let outcome = apply_mode(&mut atom, mode);
            (
                format!("Decay Log · forced {}", mode),
                vec![(1, outcome, atom.clone())],
            )
        }
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            info!(seed, ticks = args.ticks, "running decay");
            let steps = run_ticks(&mut atom, seed, args.ticks);
            (format!("Decay Log · seed {}", seed), steps)
        }
    };

    let mut out = io::stdout().lock();
    print_decay_log(&mut out, &title, &start, &steps);
    print_atom_report(&mut out, &atom);
    out.flush().context("Failed to write report")
}

fn run_ticks(atom: &mut Atom, seed: u64, ticks: u32) -> Vec<(u32, DecayOutcome, Atom)> {
    let mut rng = ChaChaRng::seed_from_u64(seed);

    (1..=ticks)
        .map(|tick| {
            let outcome = decay(atom, &mut rng);
            (tick, outcome, atom.clone())
        })
        .collect()
}
