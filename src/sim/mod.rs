//! Batch decay simulation over a population of atoms.
//!
//! This is the host loop around the chemistry model: a population is either
//! listed explicitly or spawned at random, then every atom gets one decay draw
//! per tick. Spawning and decay share one seeded [`ChaChaRng`], so a
//! configuration fully determines its report.

mod config;
mod error;
mod sample;

pub use config::{AtomSpec, SimulationConfig, SpawnConfig};
pub use error::Error;
pub use sample::{random_neutral_atom, spawn_atoms};

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing::{debug, info, info_span};

use crate::model::atom::Atom;
use crate::reaction::{DecayMode, DecayOutcome, NoDecayReason, decay};

/// One transition that actually fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecayEvent {
    /// Tick number, starting at 1.
    pub tick: u32,
    /// Position of the atom in the population.
    pub index: usize,
    pub mode: DecayMode,
    pub before: Atom,
    pub after: Atom,
}

/// A population of atoms advanced one tick at a time.
///
/// Hosts that drive decay per frame call [`step`](Self::step); [`simulate`]
/// runs a whole configuration at once.
#[derive(Debug, Clone)]
pub struct Simulation {
    atoms: Vec<Atom>,
    rng: ChaChaRng,
    tick: u32,
    infeasible_draws: usize,
}

impl Simulation {
    pub fn new(atoms: Vec<Atom>, seed: u64) -> Self {
        Self::with_rng(atoms, ChaChaRng::seed_from_u64(seed))
    }

    pub fn with_rng(atoms: Vec<Atom>, rng: ChaChaRng) -> Self {
        Self {
            atoms,
            rng,
            tick: 0,
            infeasible_draws: 0,
        }
    }

    /// Builds the starting population described by `config`.
    ///
    /// Explicit atoms win over spawning.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, Error> {
        config.validate()?;

        let mut rng = ChaChaRng::seed_from_u64(config.seed);
        let atoms = if config.atoms.is_empty() {
            let spawn = &config.spawn;
            spawn_atoms(&mut rng, spawn.count, spawn.min_protons..=spawn.max_protons)
        } else {
            config.explicit_atoms()?
        };

        debug!(count = atoms.len(), "population ready");

        Ok(Self::with_rng(atoms, rng))
    }

    #[inline]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    #[inline]
    pub fn tick(&self) -> u32 {
        self.tick
    }

    #[inline]
    pub fn infeasible_draws(&self) -> usize {
        self.infeasible_draws
    }

    /// Gives every atom one decay draw, in population order.
    pub fn step(&mut self) -> Vec<DecayEvent> {
        self.tick += 1;

        let mut events = Vec::new();
        for (index, atom) in self.atoms.iter_mut().enumerate() {
            let before = atom.clone();
            match decay(atom, &mut self.rng) {
                DecayOutcome::Decayed(mode) => events.push(DecayEvent {
                    tick: self.tick,
                    index,
                    mode,
                    before,
                    after: atom.clone(),
                }),
                DecayOutcome::NoDecay(NoDecayReason::Infeasible(_)) => {
                    self.infeasible_draws += 1;
                }
                DecayOutcome::NoDecay(NoDecayReason::Stable) => {}
            }
        }

        events
    }

    pub fn into_atoms(self) -> Vec<Atom> {
        self.atoms
    }
}

/// Everything a simulation run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub seed: u64,
    pub ticks: u32,
    pub initial: Vec<Atom>,
    pub atoms: Vec<Atom>,
    pub events: Vec<DecayEvent>,
    pub infeasible_draws: usize,
}

impl SimulationReport {
    #[inline]
    pub fn decay_count(&self) -> usize {
        self.events.len()
    }

    /// Number of events per mode, in [`DecayMode::ALL`] order.
    pub fn mode_counts(&self) -> [(DecayMode, usize); 3] {
        DecayMode::ALL.map(|mode| (mode, self.events.iter().filter(|e| e.mode == mode).count()))
    }

    pub fn stable_count(&self) -> usize {
        self.atoms.iter().filter(|a| a.is_stable()).count()
    }
}

/// Runs `config` to completion.
///
/// # Errors
///
/// Fails only when the configuration does not validate.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationReport, Error> {
    simulate_with(config, |_, _| {})
}

/// Like [`simulate`], but calls `on_tick` after every tick with the tick
/// number and the events that tick produced.
pub fn simulate_with<F>(config: &SimulationConfig, mut on_tick: F) -> Result<SimulationReport, Error>
where
    F: FnMut(u32, &[DecayEvent]),
{
    let _span = info_span!("simulate", seed = config.seed, ticks = config.ticks).entered();

    let mut simulation = Simulation::from_config(config)?;
    let initial = simulation.atoms().to_vec();

    let mut events = Vec::new();
    for _ in 0..config.ticks {
        let fired = simulation.step();
        on_tick(simulation.tick(), &fired);
        events.extend(fired);
    }

    info!(
        atoms = initial.len(),
        decays = events.len(),
        infeasible = simulation.infeasible_draws(),
        "simulation finished"
    );

    let infeasible_draws = simulation.infeasible_draws();
    Ok(SimulationReport {
        seed: config.seed,
        ticks: config.ticks,
        initial,
        atoms: simulation.into_atoms(),
        events,
        infeasible_draws,
    })
}
