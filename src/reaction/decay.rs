use std::fmt;

use rand::Rng;
use tracing::{debug, trace};

use crate::model::atom::Atom;

/// The three transmutation channels an unstable atom can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DecayMode {
    /// Loses two protons, two neutrons, and two electrons.
    Alpha,
    /// A neutron becomes a proton and an electron is gained.
    BetaMinus,
    /// A proton becomes a neutron and an electron is lost.
    BetaPlus,
}

impl DecayMode {
    pub const ALL: [DecayMode; 3] = [DecayMode::Alpha, DecayMode::BetaMinus, DecayMode::BetaPlus];

    /// Draws one mode uniformly.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Whether the nucleus has the particles this mode removes and room for
    /// the ones it adds.
    pub fn is_feasible(&self, atom: &Atom) -> bool {
        self.product(atom).is_some()
    }

    /// The atom this mode would produce, or `None` when infeasible.
    ///
    /// Nucleon counts must neither underflow nor overflow. Electron losses
    /// stop at zero so a bare ion can still decay.
    fn product(&self, atom: &Atom) -> Option<Atom> {
        let Atom {
            protons,
            neutrons,
            electrons,
        } = *atom;

        let next = match self {
            DecayMode::Alpha => Atom {
                protons: protons.checked_sub(2)?,
                neutrons: neutrons.checked_sub(2)?,
                electrons: electrons.saturating_sub(2),
            },
            DecayMode::BetaMinus => Atom {
                protons: protons.checked_add(1)?,
                neutrons: neutrons.checked_sub(1)?,
                electrons: electrons.checked_add(1)?,
            },
            DecayMode::BetaPlus => Atom {
                protons: protons.checked_sub(1)?,
                neutrons: neutrons.checked_add(1)?,
                electrons: electrons.saturating_sub(1),
            },
        };

        Some(next)
    }
}

impl fmt::Display for DecayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecayMode::Alpha => write!(f, "alpha"),
            DecayMode::BetaMinus => write!(f, "beta-"),
            DecayMode::BetaPlus => write!(f, "beta+"),
        }
    }
}

/// Why a decay step left the atom untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoDecayReason {
    /// The atom is stable; no mode was drawn.
    Stable,
    /// The drawn mode's precondition failed. It is not retried.
    Infeasible(DecayMode),
}

/// Result of one decay step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecayOutcome {
    Decayed(DecayMode),
    NoDecay(NoDecayReason),
}

impl DecayOutcome {
    /// The mode that fired, if any.
    pub fn mode(&self) -> Option<DecayMode> {
        match self {
            DecayOutcome::Decayed(mode) => Some(*mode),
            DecayOutcome::NoDecay(_) => None,
        }
    }

    #[inline]
    pub fn is_decay(&self) -> bool {
        matches!(self, DecayOutcome::Decayed(_))
    }
}

impl fmt::Display for DecayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecayOutcome::Decayed(mode) => write!(f, "{}", mode),
            DecayOutcome::NoDecay(NoDecayReason::Stable) => write!(f, "stable"),
            DecayOutcome::NoDecay(NoDecayReason::Infeasible(_)) => write!(f, "infeasible"),
        }
    }
}

/// Runs one stochastic decay step on `atom`.
///
/// Stable atoms are left alone without consuming randomness. Otherwise one
/// mode is drawn uniformly from `rng`; if its precondition fails the step is a
/// no-op reported as [`NoDecayReason::Infeasible`]. When a mode fires, all
/// three counts change together.
pub fn decay<R: Rng + ?Sized>(atom: &mut Atom, rng: &mut R) -> DecayOutcome {
    if atom.is_stable() {
        return DecayOutcome::NoDecay(NoDecayReason::Stable);
    }

    let mode = DecayMode::sample(rng);
    transmute(atom, mode)
}

/// Applies `mode` to `atom` directly, as if it had been drawn.
///
/// No stability check is made; feasibility rules are the same as in
/// [`decay`].
pub fn apply_mode(atom: &mut Atom, mode: DecayMode) -> DecayOutcome {
    transmute(atom, mode)
}

fn transmute(atom: &mut Atom, mode: DecayMode) -> DecayOutcome {
    match mode.product(atom) {
        Some(next) => {
            debug!(
                %mode,
                from = ?(atom.protons, atom.neutrons, atom.electrons),
                to = ?(next.protons, next.neutrons, next.electrons),
                "atom decayed"
            );
            *atom = next;
            DecayOutcome::Decayed(mode)
        }
        None => {
            trace!(
                %mode,
                protons = atom.protons,
                neutrons = atom.neutrons,
                "decay mode infeasible"
            );
            DecayOutcome::NoDecay(NoDecayReason::Infeasible(mode))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;
    use std::collections::HashSet;

    fn atom(p: u32, n: u32, e: u32) -> Atom {
        Atom::from_counts(p, n, e)
    }

    fn counts(a: &Atom) -> (u32, u32, u32) {
        (a.protons(), a.neutrons(), a.electrons())
    }

    #[test]
    fn stable_atoms_never_change() {
        let original = atom(6, 6, 6);
        for seed in 0..1000u64 {
            let mut rng = ChaChaRng::seed_from_u64(seed);
            let mut a = original.clone();
            let outcome = decay(&mut a, &mut rng);
            assert_eq!(outcome, DecayOutcome::NoDecay(NoDecayReason::Stable));
            assert_eq!(a, original);
        }
    }

    #[test]
    fn forced_alpha_on_helium_empties_it() {
        let mut a = atom(2, 2, 2);
        let outcome = apply_mode(&mut a, DecayMode::Alpha);
        assert_eq!(outcome, DecayOutcome::Decayed(DecayMode::Alpha));
        assert_eq!(counts(&a), (0, 0, 0));
    }

    #[test]
    fn forced_alpha_on_hydrogen_is_infeasible() {
        let mut a = atom(1, 0, 1);
        let outcome = apply_mode(&mut a, DecayMode::Alpha);
        assert_eq!(
            outcome,
            DecayOutcome::NoDecay(NoDecayReason::Infeasible(DecayMode::Alpha))
        );
        assert_eq!(counts(&a), (1, 0, 1));
    }

    #[test]
    fn beta_minus_converts_neutron_to_proton() {
        let mut a = atom(6, 8, 6);
        assert!(apply_mode(&mut a, DecayMode::BetaMinus).is_decay());
        assert_eq!(counts(&a), (7, 7, 7));
    }

    #[test]
    fn beta_minus_needs_a_neutron() {
        let mut a = atom(3, 0, 3);
        let outcome = apply_mode(&mut a, DecayMode::BetaMinus);
        assert_eq!(
            outcome,
            DecayOutcome::NoDecay(NoDecayReason::Infeasible(DecayMode::BetaMinus))
        );
        assert_eq!(counts(&a), (3, 0, 3));
    }

    #[test]
    fn beta_plus_converts_proton_to_neutron() {
        let mut a = atom(6, 4, 6);
        assert_eq!(
            apply_mode(&mut a, DecayMode::BetaPlus),
            DecayOutcome::Decayed(DecayMode::BetaPlus)
        );
        assert_eq!(counts(&a), (5, 5, 5));
    }

    #[test]
    fn beta_plus_needs_a_proton() {
        let mut a = atom(0, 3, 0);
        assert!(!apply_mode(&mut a, DecayMode::BetaPlus).is_decay());
        assert_eq!(counts(&a), (0, 3, 0));
    }

    #[test]
    fn electron_losses_stop_at_zero() {
        let mut a = atom(92, 146, 1);
        apply_mode(&mut a, DecayMode::Alpha);
        assert_eq!(counts(&a), (90, 144, 0));

        let mut b = atom(5, 2, 0);
        apply_mode(&mut b, DecayMode::BetaPlus);
        assert_eq!(counts(&b), (4, 3, 0));
    }

    #[test]
    fn beta_minus_at_proton_ceiling_is_infeasible() {
        let mut a = atom(u32::MAX, 1, u32::MAX - 1);
        let outcome = apply_mode(&mut a, DecayMode::BetaMinus);
        assert_eq!(
            outcome,
            DecayOutcome::NoDecay(NoDecayReason::Infeasible(DecayMode::BetaMinus))
        );
        assert_eq!(counts(&a), (u32::MAX, 1, u32::MAX - 1));
        assert!(!DecayMode::BetaMinus.is_feasible(&a));
    }

    #[test]
    fn beta_minus_at_electron_ceiling_is_infeasible() {
        let mut a = atom(100, 1, u32::MAX);
        assert!(!apply_mode(&mut a, DecayMode::BetaMinus).is_decay());
        assert_eq!(counts(&a), (100, 1, u32::MAX));
    }

    #[test]
    fn beta_plus_at_neutron_ceiling_is_infeasible() {
        let mut a = atom(100, u32::MAX, 100);
        let before = a.mass_number();
        assert_eq!(
            apply_mode(&mut a, DecayMode::BetaPlus),
            DecayOutcome::NoDecay(NoDecayReason::Infeasible(DecayMode::BetaPlus))
        );
        assert_eq!(a.mass_number(), before);
    }

    #[test]
    fn beta_minus_just_below_ceiling_keeps_mass_number() {
        let mut a = atom(u32::MAX - 1, 5, u32::MAX - 1);
        let before = a.mass_number();
        assert!(apply_mode(&mut a, DecayMode::BetaMinus).is_decay());
        assert_eq!(a.mass_number(), before);
        assert_eq!(counts(&a), (u32::MAX, 4, u32::MAX));
    }

    #[test]
    fn unstable_decay_changes_counts_by_the_reported_mode() {
        let original = atom(92, 146, 92);
        for seed in 0..200u64 {
            let mut rng = ChaChaRng::seed_from_u64(seed);
            let mut a = original.clone();
            match decay(&mut a, &mut rng) {
                DecayOutcome::Decayed(DecayMode::Alpha) => assert_eq!(counts(&a), (90, 144, 90)),
                DecayOutcome::Decayed(DecayMode::BetaMinus) => {
                    assert_eq!(counts(&a), (93, 145, 93))
                }
                DecayOutcome::Decayed(DecayMode::BetaPlus) => {
                    assert_eq!(counts(&a), (91, 147, 91))
                }
                other => panic!("uranium modes are all feasible, got {other:?}"),
            }
        }
    }

    #[test]
    fn every_mode_is_drawn_eventually() {
        let mut rng = ChaChaRng::seed_from_u64(7);
        let drawn: HashSet<DecayMode> = (0..300).map(|_| DecayMode::sample(&mut rng)).collect();
        assert_eq!(drawn.len(), 3);
    }

    #[test]
    fn infeasible_draws_are_not_retried() {
        // Only beta+ is feasible for a bare proton pair without neutrons.
        let original = atom(2, 0, 2);
        let mut saw_infeasible = false;
        for seed in 0..100u64 {
            let mut rng = ChaChaRng::seed_from_u64(seed);
            let mut a = original.clone();
            match decay(&mut a, &mut rng) {
                DecayOutcome::Decayed(mode) => {
                    assert_eq!(mode, DecayMode::BetaPlus);
                    assert_eq!(counts(&a), (1, 1, 1));
                }
                DecayOutcome::NoDecay(NoDecayReason::Infeasible(mode)) => {
                    assert_ne!(mode, DecayMode::BetaPlus);
                    assert_eq!(a, original);
                    saw_infeasible = true;
                }
                DecayOutcome::NoDecay(NoDecayReason::Stable) => panic!("atom is unstable"),
            }
        }
        assert!(saw_infeasible);
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let run = |seed: u64| {
            let mut rng = ChaChaRng::seed_from_u64(seed);
            let mut a = atom(92, 146, 92);
            let outcomes: Vec<DecayOutcome> = (0..50).map(|_| decay(&mut a, &mut rng)).collect();
            (outcomes, a)
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn outcome_display_names() {
        assert_eq!(DecayOutcome::Decayed(DecayMode::Alpha).to_string(), "alpha");
        assert_eq!(DecayOutcome::Decayed(DecayMode::BetaMinus).to_string(), "beta-");
        assert_eq!(DecayOutcome::Decayed(DecayMode::BetaPlus).to_string(), "beta+");
        assert_eq!(
            DecayOutcome::NoDecay(NoDecayReason::Stable).to_string(),
            "stable"
        );
        assert_eq!(
            DecayOutcome::NoDecay(NoDecayReason::Infeasible(DecayMode::Alpha)).to_string(),
            "infeasible"
        );
    }

    #[test]
    fn outcome_mode_accessor() {
        assert_eq!(
            DecayOutcome::Decayed(DecayMode::BetaPlus).mode(),
            Some(DecayMode::BetaPlus)
        );
        assert_eq!(DecayOutcome::NoDecay(NoDecayReason::Stable).mode(), None);
    }
}
