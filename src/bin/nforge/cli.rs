use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use nuclide_forge::Atom;

#[derive(Parser)]
#[command(
    name = "nforge",
    about = "Atomic properties, radioactive decay, and molecule building",
    version,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options accepted by every command.
#[derive(Args)]
pub struct GlobalOptions {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner and progress output (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the properties report for one or more atoms
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),

    /// Step one atom through radioactive decay
    #[command(visible_alias = "d")]
    Decay(DecayArgs),

    /// Try to bond two atoms into a molecule
    #[command(visible_alias = "b")]
    Bond(BondArgs),

    /// Build a molecule from atoms in order and report its formula
    #[command(visible_alias = "m")]
    Molecule(MoleculeArgs),

    /// Run a seeded decay simulation over a population of atoms
    #[command(visible_alias = "s")]
    Simulate(SimulateArgs),
}

#[derive(Args)]
pub struct InspectArgs {
    /// Atoms as PROTONS,NEUTRONS,ELECTRONS (e.g. 6,6,6)
    #[arg(value_name = "ATOM", required = true, allow_hyphen_values = true)]
    pub atoms: Vec<Atom>,
}

#[derive(Args)]
pub struct DecayArgs {
    /// Atom as PROTONS,NEUTRONS,ELECTRONS (e.g. 92,146,92)
    #[arg(value_name = "ATOM", allow_hyphen_values = true)]
    pub atom: Atom,

    /// Number of decay draws
    #[arg(short, long, value_name = "N", default_value = "1")]
    pub ticks: u32,

    /// Random seed for a reproducible sequence (random if omitted)
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Force one decay mode instead of drawing (applied once)
    #[arg(short, long, value_name = "MODE", conflicts_with_all = ["ticks", "seed"])]
    pub mode: Option<DecayModeArg>,
}

#[derive(Args)]
pub struct BondArgs {
    /// First atom as PROTONS,NEUTRONS,ELECTRONS
    #[arg(value_name = "ATOM", allow_hyphen_values = true)]
    pub first: Atom,

    /// Second atom as PROTONS,NEUTRONS,ELECTRONS
    #[arg(value_name = "ATOM", allow_hyphen_values = true)]
    pub second: Atom,

    /// Distance between the two atoms along x in the reported placement
    #[arg(long, value_name = "Å", default_value = "1.0")]
    pub spacing: f64,
}

#[derive(Args)]
pub struct MoleculeArgs {
    /// Atoms in append order as PROTONS,NEUTRONS,ELECTRONS
    #[arg(value_name = "ATOM", required = true, allow_hyphen_values = true)]
    pub atoms: Vec<Atom>,
}

#[derive(Args)]
pub struct SimulateArgs {
    /// Simulation config (TOML); defaults apply to omitted keys
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: SimulationOverrides,
}

/// Command-line values that take precedence over the config file.
#[derive(Args)]
#[command(next_help_heading = "Overrides")]
pub struct SimulationOverrides {
    /// Random seed
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Number of decay passes
    #[arg(short, long, value_name = "N")]
    pub ticks: Option<u32>,

    /// Number of atoms to spawn (ignored when the config lists atoms)
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Smallest spawned proton count
    #[arg(long, value_name = "P")]
    pub min_protons: Option<u32>,

    /// Largest spawned proton count
    #[arg(long, value_name = "P")]
    pub max_protons: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DecayModeArg {
    /// Lose 2 protons, 2 neutrons, 2 electrons
    Alpha,
    /// Neutron to proton, gain an electron
    #[value(name = "beta-minus", alias = "beta-")]
    BetaMinus,
    /// Proton to neutron, lose an electron
    #[value(name = "beta-plus", alias = "beta+")]
    BetaPlus,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_atom_triples() {
        let cli = Cli::try_parse_from(["nforge", "inspect", "8,8,8", "1,0,1"]).unwrap();
        let Command::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(
            args.atoms,
            vec![Atom::from_counts(8, 8, 8), Atom::from_counts(1, 0, 1)]
        );
    }

    #[test]
    fn negative_counts_fail_to_parse() {
        assert!(Cli::try_parse_from(["nforge", "inspect", "-1,0,0"]).is_err());
    }

    #[test]
    fn forced_mode_conflicts_with_ticks() {
        assert!(
            Cli::try_parse_from(["nforge", "decay", "92,146,92", "--mode", "alpha", "-t", "3"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["nforge", "d", "92,146,92", "--mode", "beta-"]).is_ok());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["nforge", "simulate", "-q", "-v", "-n", "4"]).unwrap();
        assert!(cli.global.quiet);
        assert!(cli.global.verbose);
        let Command::Simulate(args) = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(args.overrides.count, Some(4));
    }
}
