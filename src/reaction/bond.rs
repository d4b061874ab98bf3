use std::fmt;

use tracing::debug;

use crate::model::atom::Atom;
use crate::model::molecule::Molecule;

/// Largest combined valence two atoms may share in one bond.
pub const OCTET: u32 = 8;

/// Why two atoms were not bonded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondRefusal {
    /// At least one atom has no free valence. The flags mark which.
    NoCapacity { first: bool, second: bool },
    /// The combined valence exceeds the octet. Unreachable while
    /// [`Atom::valence`] is capped at 4; the guard keeps the octet rule explicit.
    OctetExceeded { total: u32 },
}

impl fmt::Display for BondRefusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BondRefusal::NoCapacity {
                first: true,
                second: true,
            } => write!(f, "neither atom has free valence"),
            BondRefusal::NoCapacity { first: true, .. } => {
                write!(f, "first atom has no free valence")
            }
            BondRefusal::NoCapacity { .. } => write!(f, "second atom has no free valence"),
            BondRefusal::OctetExceeded { total } => {
                write!(f, "combined valence {} exceeds {}", total, OCTET)
            }
        }
    }
}

/// A refused bond attempt. Both atoms and their placements are handed back
/// unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct BondRefused<P> {
    pub a: Atom,
    pub b: Atom,
    pub placement_a: P,
    pub placement_b: P,
    pub reason: BondRefusal,
}

/// Result of [`attempt_bond`].
#[derive(Debug, Clone, PartialEq)]
pub enum BondOutcome<P> {
    /// The atoms now live in the molecule. Any standalone representation the
    /// caller kept for them must be retired.
    Bonded(Molecule<P>),
    Refused(BondRefused<P>),
}

impl<P> BondOutcome<P> {
    #[inline]
    pub fn is_bonded(&self) -> bool {
        matches!(self, BondOutcome::Bonded(_))
    }

    pub fn molecule(self) -> Option<Molecule<P>> {
        match self {
            BondOutcome::Bonded(molecule) => Some(molecule),
            BondOutcome::Refused(_) => None,
        }
    }
}

fn refusal(a: &Atom, b: &Atom) -> Option<BondRefusal> {
    let (va, vb) = (a.valence(), b.valence());

    if va == 0 || vb == 0 {
        return Some(BondRefusal::NoCapacity {
            first: va == 0,
            second: vb == 0,
        });
    }

    let total = va + vb;
    if total > OCTET {
        return Some(BondRefusal::OctetExceeded { total });
    }

    None
}

/// Whether `a` and `b` both have free valence and together fit an octet.
pub fn can_bond(a: &Atom, b: &Atom) -> bool {
    refusal(a, b).is_none()
}

/// Bonds `a` and `b` into a new two-atom molecule, `a` first.
///
/// A refusal is an ordinary outcome, not an error.
pub fn attempt_bond<P>(a: Atom, b: Atom, placement_a: P, placement_b: P) -> BondOutcome<P> {
    if let Some(reason) = refusal(&a, &b) {
        debug!(%reason, "bond refused");
        return BondOutcome::Refused(BondRefused {
            a,
            b,
            placement_a,
            placement_b,
            reason,
        });
    }

    let mut molecule = Molecule::new();
    molecule.append(a, placement_a);
    molecule.append(b, placement_b);

    debug!(formula = %molecule.formula(), "atoms bonded");

    BondOutcome::Bonded(molecule)
}
