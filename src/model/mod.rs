//! Core data structures of the chemistry model.
//!
//! - [`atom`] – Atoms identified by proton, neutron, and electron counts, with
//!   their derived mass, charge, valence, and stability.
//! - [`types`] – The small element symbol table and particle kinds.
//! - [`molecule`] – Ordered atom groups with mass and empirical formula.
//! - [`error`] – Construction failures.
//!
//! Nothing here knows about positions or rendering. A [`Molecule`] carries a
//! caller-chosen placement hint per atom without ever reading it.
//!
//! [`Molecule`]: molecule::Molecule

pub mod atom;
pub mod error;
pub mod molecule;
pub mod types;
