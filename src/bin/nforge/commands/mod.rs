mod bond;
mod decay;
mod inspect;
mod molecule;
mod simulate;

use bond::run_bond;
use decay::run_decay;
use inspect::run_inspect;
use molecule::run_molecule;
use simulate::run_simulate;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Inspect(args) => run_inspect(args),
        Command::Decay(args) => run_decay(args),
        Command::Bond(args) => run_bond(args),
        Command::Molecule(args) => run_molecule(args),
        Command::Simulate(args) => run_simulate(args, ctx),
    }
}
