//! A small, deterministic chemistry model for atom and molecule visualizers.
//! Atoms are nothing but proton, neutron, and electron counts; everything else
//! (mass, charge, valence, stability) is derived from them on demand.
//!
//! # Features
//!
//! - **Atom properties** — Atomic mass, mass number, charge, a simplified
//!   octet-rule valence, and a neutron/proton ratio stability check
//! - **Radioactive decay** — Alpha, beta⁻, and beta⁺ transmutation driven by a
//!   caller-supplied random source, with no-op outcomes for infeasible draws
//! - **Bonding** — Valence-based bond eligibility and two-atom molecule
//!   construction
//! - **Molecules** — Ordered atom groups with molecular mass and an empirical
//!   formula grouped by first appearance
//! - **Simulation** — Seeded batch decay over a spawned or configured
//!   population, loadable from TOML
//!
//! # Quick Start
//!
//! ```
//! use nuclide_forge::{Atom, BondOutcome, DecayMode, DecayOutcome, ValidationError};
//! use nuclide_forge::{apply_mode, attempt_bond, can_bond};
//!
//! let oxygen = Atom::new(8, 8, 8)?;
//! let hydrogen = Atom::new(1, 0, 1)?;
//!
//! // O: 8 electrons, 8 mod 8 = 0 -> 4 free slots; H always has one
//! assert_eq!(oxygen.valence(), 4);
//! assert_eq!(hydrogen.valence(), 1);
//! assert!(oxygen.is_stable());
//! assert!(can_bond(&oxygen, &hydrogen));
//!
//! let expected = oxygen.atomic_mass() + 2.0 * hydrogen.atomic_mass();
//!
//! // Bonding moves both atoms into a new molecule
//! let BondOutcome::Bonded(mut water) = attempt_bond(oxygen, hydrogen.clone(), (), ()) else {
//!     unreachable!("oxygen and hydrogen bond");
//! };
//! water.append(hydrogen, ());
//! assert_eq!(water.formula(), "OH2");
//! assert!((water.molecular_mass() - expected).abs() < 1e-9);
//!
//! // Negative counts never make an atom
//! assert!(matches!(
//!     Atom::new(1, -1, 1),
//!     Err(ValidationError::NegativeCount { .. })
//! ));
//!
//! // Forcing a mode applies it directly
//! let mut helium = Atom::new(2, 2, 2)?;
//! assert_eq!(
//!     apply_mode(&mut helium, DecayMode::Alpha),
//!     DecayOutcome::Decayed(DecayMode::Alpha)
//! );
//! assert_eq!(helium.mass_number(), 0);
//! # Ok::<(), ValidationError>(())
//! ```
//!
//! Stochastic decay takes any [`rand::Rng`]; seed one for reproducible runs:
//!
//! ```
//! use nuclide_forge::{Atom, decay};
//! use rand::SeedableRng;
//! use rand_chacha::ChaChaRng;
//!
//! let mut rng = ChaChaRng::seed_from_u64(42);
//! let mut uranium = Atom::from_counts(92, 146, 92);
//! let outcome = decay(&mut uranium, &mut rng);
//! assert!(outcome.is_decay());
//! assert_ne!(uranium, Atom::from_counts(92, 146, 92));
//! ```
//!
//! # Module Organization
//!
//! - [`sim`] — Seeded batch decay simulation and its TOML configuration
//!
//! # Data Types
//!
//! - [`Atom`] — Particle counts and derived properties
//! - [`AtomProperties`] — Snapshot of every derived quantity
//! - [`Molecule`] — Ordered atoms with opaque placement hints
//! - [`Element`] — The named elements (H, He, C, N, O, Cl)
//! - [`DecayMode`] / [`DecayOutcome`] — Decay channels and step results
//! - [`BondOutcome`] / [`BondRefusal`] — Bond attempt results
//!
//! # Errors
//!
//! - [`ValidationError`] — Negative or oversized particle counts
//! - [`ParseAtomError`] — Malformed `protons,neutrons,electrons` text
//! - [`SimulationError`] — Invalid simulation configuration

mod model;
mod reaction;

pub mod sim;

pub use model::atom::{Atom, AtomProperties};
pub use model::error::{ParseAtomError, ValidationError};
pub use model::molecule::Molecule;
pub use model::types::{Element, ParseElementError, Particle, element_symbol};

pub use reaction::{
    BondOutcome, BondRefusal, BondRefused, DecayMode, DecayOutcome, NoDecayReason, OCTET,
    apply_mode, attempt_bond, can_bond, decay,
};

pub use sim::{SimulationConfig, SimulationReport, simulate, simulate_with};

pub use sim::Error as SimulationError;
