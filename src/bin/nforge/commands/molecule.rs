use std::io::{self, Write};

use anyhow::{Context, Result};

use nuclide_forge::Molecule;

use crate::cli::MoleculeArgs;
use crate::display::print_molecule_report;

pub fn run_molecule(args: MoleculeArgs) -> Result<()> {
    let molecule: Molecule = args.atoms.into_iter().map(|atom| (atom, ())).collect();

    let mut out = io::stdout().lock();
    print_molecule_report(&mut out, &molecule);
    out.flush().context("Failed to write report")
}
