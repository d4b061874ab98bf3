use super::atom::Atom;
use super::types::Element;

/// An ordered group of atoms, each paired with an opaque placement hint.
///
/// The hint type `P` belongs to whoever renders the molecule; the model only
/// stores it next to its atom and hands it back. Derived values are computed
/// from the members on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule<P = ()> {
    members: Vec<(Atom, P)>,
}

impl<P> Default for Molecule<P> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<P> Molecule<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `atom` after the existing members. The molecule takes
    /// ownership of the atom.
    pub fn append(&mut self, atom: Atom, placement: P) {
        self.members.push((atom, placement));
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Atom, &P)> {
        self.members.iter().map(|(atom, placement)| (atom, placement))
    }

    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.members.iter().map(|(atom, _)| atom)
    }

    pub fn into_members(self) -> Vec<(Atom, P)> {
        self.members
    }

    /// Sum of the members' atomic masses; `0.0` for an empty molecule.
    pub fn molecular_mass(&self) -> f64 {
        self.atoms().map(Atom::atomic_mass).sum()
    }

    /// Element counts in the order each element first appears.
    ///
    /// Members whose proton count has no symbol are left out.
    pub fn composition(&self) -> Vec<(Element, usize)> {
        let mut counts: Vec<(Element, usize)> = Vec::new();

        for element in self.atoms().filter_map(Atom::element) {
            match counts.iter_mut().find(|(e, _)| *e == element) {
                Some((_, count)) => *count += 1,
                None => counts.push((element, 1)),
            }
        }

        counts
    }

    /// Empirical formula grouped by first appearance, e.g. `"OH2"`.
    ///
    /// A count of one is not written. Atoms without a symbol contribute
    /// nothing, so a molecule made only of such atoms has an empty formula.
    pub fn formula(&self) -> String {
        let mut formula = String::new();

        for (element, count) in self.composition() {
            formula.push_str(element.symbol());
            if count > 1 {
                formula.push_str(&count.to_string());
            }
        }

        formula
    }
}

impl<P> Extend<(Atom, P)> for Molecule<P> {
    fn extend<I: IntoIterator<Item = (Atom, P)>>(&mut self, iter: I) {
        for (atom, placement) in iter {
            self.append(atom, placement);
        }
    }
}

impl<P> FromIterator<(Atom, P)> for Molecule<P> {
    fn from_iter<I: IntoIterator<Item = (Atom, P)>>(iter: I) -> Self {
        let mut molecule = Self::new();
        molecule.extend(iter);
        molecule
    }
}
