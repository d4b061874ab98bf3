use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use nuclide_forge::attempt_bond;

use crate::cli::BondArgs;
use crate::display::print_bond_report;

pub fn run_bond(args: BondArgs) -> Result<()> {
    let BondArgs {
        first,
        second,
        spacing,
    } = args;

    let outcome = attempt_bond(
        first.clone(),
        second.clone(),
        [0.0, 0.0, 0.0],
        [spacing, 0.0, 0.0],
    );
    info!(bonded = outcome.is_bonded(), "bond attempt finished");

    let mut out = io::stdout().lock();
    print_bond_report(&mut out, &first, &second, &outcome);
    out.flush().context("Failed to write report")
}
