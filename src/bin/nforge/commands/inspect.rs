use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::InspectArgs;
use crate::display::print_atom_report;

pub fn run_inspect(args: InspectArgs) -> Result<()> {
    let mut out = io::stdout().lock();

    for atom in &args.atoms {
        print_atom_report(&mut out, atom);
    }

    out.flush().context("Failed to write report")
}
