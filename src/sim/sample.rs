use std::ops::RangeInclusive;

use rand::Rng;

use crate::model::atom::Atom;

/// Draws a neutral atom whose neutron and electron counts equal its proton
/// count, with protons uniform over `protons`.
///
/// # Panics
///
/// Panics if `protons` is empty.
pub fn random_neutral_atom<R: Rng + ?Sized>(rng: &mut R, protons: RangeInclusive<u32>) -> Atom {
    let p = rng.random_range(protons);
    Atom::from_counts(p, p, p)
}

/// Draws `count` atoms with [`random_neutral_atom`].
pub fn spawn_atoms<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    protons: RangeInclusive<u32>,
) -> Vec<Atom> {
    let mut atoms = Vec::with_capacity(count);
    for _ in 0..count {
        atoms.push(random_neutral_atom(rng, protons.clone()));
    }
    atoms
}
