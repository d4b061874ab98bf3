use std::fmt;
use std::str::FromStr;

use super::error::{ParseAtomError, ValidationError};
use super::types::{Element, Particle};

/// An atom identified purely by its particle counts.
///
/// Every other quantity is derived on demand. The counts can only change
/// through [`decay`](crate::decay). Atoms are deliberately not `Copy`: handing
/// one to a molecule or a bond attempt gives it away.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    pub(crate) protons: u32,
    pub(crate) neutrons: u32,
    pub(crate) electrons: u32,
}

/// Inclusive neutron/proton ratio window for a range of proton counts.
struct StabilityBand {
    protons: (u32, u32),
    ratio: (f64, f64),
}

const STABILITY_BANDS: [StabilityBand; 3] = [
    StabilityBand {
        protons: (1, 20),
        ratio: (0.90, 1.15),
    },
    StabilityBand {
        protons: (21, 40),
        ratio: (1.10, 1.30),
    },
    StabilityBand {
        protons: (41, 83),
        ratio: (1.25, 1.60),
    },
];

/// Snapshot of every derived quantity of one atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomProperties {
    pub mass_number: u64,
    pub atomic_mass: f64,
    pub charge: i64,
    pub valence: u32,
    pub stable: bool,
    pub element: Option<Element>,
}

impl Atom {
    /// Builds an atom from signed counts, rejecting any negative count.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the first offending particle when a
    /// count is negative or larger than `u32::MAX`.
    pub fn new(protons: i64, neutrons: i64, electrons: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            protons: checked_count(Particle::Proton, protons)?,
            neutrons: checked_count(Particle::Neutron, neutrons)?,
            electrons: checked_count(Particle::Electron, electrons)?,
        })
    }

    pub fn from_counts(protons: u32, neutrons: u32, electrons: u32) -> Self {
        Self {
            protons,
            neutrons,
            electrons,
        }
    }

    #[inline]
    pub fn protons(&self) -> u32 {
        self.protons
    }

    #[inline]
    pub fn neutrons(&self) -> u32 {
        self.neutrons
    }

    #[inline]
    pub fn electrons(&self) -> u32 {
        self.electrons
    }

    /// Sum of the particle rest masses, in unified atomic mass units.
    pub fn atomic_mass(&self) -> f64 {
        f64::from(self.protons) * Particle::Proton.mass()
            + f64::from(self.neutrons) * Particle::Neutron.mass()
            + f64::from(self.electrons) * Particle::Electron.mass()
    }

    #[inline]
    pub fn charge(&self) -> i64 {
        i64::from(self.protons) - i64::from(self.electrons)
    }

    #[inline]
    pub fn mass_number(&self) -> u64 {
        u64::from(self.protons) + u64::from(self.neutrons)
    }

    #[inline]
    pub fn is_ion(&self) -> bool {
        self.charge() != 0
    }

    /// Free bonding capacity under a simplified octet rule.
    ///
    /// Hydrogen always has one free slot and helium none. For everything else
    /// the outer-shell count `v` is the electron count when it is at most two,
    /// otherwise `electrons mod 8`; the capacity is `4 - v` up to a half-filled
    /// shell and `8 - v` beyond it. A half-filled shell (`v == 4`) has no
    /// capacity.
    pub fn valence(&self) -> u32 {
        match self.protons {
            1 => 1,
            2 => 0,
            _ => {
                let v = if self.electrons <= 2 {
                    self.electrons
                } else {
                    self.electrons % 8
                };
                if v <= 4 { 4 - v } else { 8 - v }
            }
        }
    }

    /// Whether the neutron/proton ratio sits inside the band for this proton
    /// count. Atoms without protons or above bismuth are never stable.
    pub fn is_stable(&self) -> bool {
        if self.protons == 0 {
            return false;
        }

        let ratio = f64::from(self.neutrons) / f64::from(self.protons);

        STABILITY_BANDS
            .iter()
            .find(|band| (band.protons.0..=band.protons.1).contains(&self.protons))
            .is_some_and(|band| ratio >= band.ratio.0 && ratio <= band.ratio.1)
    }

    #[inline]
    pub fn element(&self) -> Option<Element> {
        Element::from_atomic_number(self.protons)
    }

    pub fn properties(&self) -> AtomProperties {
        AtomProperties {
            mass_number: self.mass_number(),
            atomic_mass: self.atomic_mass(),
            charge: self.charge(),
            valence: self.valence(),
            stable: self.is_stable(),
            element: self.element(),
        }
    }
}

fn checked_count(particle: Particle, value: i64) -> Result<u32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeCount { particle, value });
    }
    u32::try_from(value).map_err(|_| ValidationError::CountTooLarge {
        particle,
        value,
        max: u32::MAX,
    })
}

impl FromStr for Atom {
    type Err = ParseAtomError;

    /// Parses `protons,neutrons,electrons`, e.g. `"8,8,8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let &[protons, neutrons, electrons] = parts.as_slice() else {
            return Err(ParseAtomError::Format(s.to_string()));
        };

        let parse = |part: &str| {
            part.parse::<i64>()
                .map_err(|_| ParseAtomError::Count(part.to_string()))
        };

        Ok(Atom::new(parse(protons)?, parse(neutrons)?, parse(electrons)?)?)
    }
}

impl fmt::Display for Atom {
    /// Writes the counts in the form accepted by [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.protons, self.neutrons, self.electrons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn atom(p: u32, n: u32, e: u32) -> Atom {
        Atom::from_counts(p, n, e)
    }

    #[test]
    fn new_accepts_non_negative_counts() {
        let a = Atom::new(6, 6, 6).unwrap();
        assert_eq!((a.protons(), a.neutrons(), a.electrons()), (6, 6, 6));
        assert_eq!(Atom::new(0, 0, 0).unwrap(), atom(0, 0, 0));
    }

    #[test]
    fn new_rejects_negative_counts() {
        let err = Atom::new(-1, 0, 0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeCount {
                particle: Particle::Proton,
                value: -1
            }
        );

        let err = Atom::new(1, -2, 0).unwrap_err();
        assert_eq!(err.particle(), Particle::Neutron);

        let err = Atom::new(1, 0, -5).unwrap_err();
        assert_eq!(err.particle(), Particle::Electron);
    }

    #[test]
    fn new_rejects_counts_beyond_u32() {
        let err = Atom::new(i64::from(u32::MAX) + 1, 0, 0).unwrap_err();
        assert!(matches!(err, ValidationError::CountTooLarge { .. }));
    }

    #[test]
    fn mass_number_and_charge_are_exact() {
        for p in 1..=30u32 {
            for n in [0, p, p + 3] {
                for e in [0, p, p + 2] {
                    let a = atom(p, n, e);
                    assert_eq!(a.mass_number(), u64::from(p + n));
                    assert_eq!(a.charge(), i64::from(p) - i64::from(e));
                }
            }
        }
    }

    #[test]
    fn charge_can_be_negative() {
        let chloride = atom(17, 18, 18);
        assert_eq!(chloride.charge(), -1);
        assert!(chloride.is_ion());
        assert!(!atom(8, 8, 8).is_ion());
    }

    #[test]
    fn atomic_mass_sums_particle_masses() {
        assert!(approx_eq(atom(1, 0, 1).atomic_mass(), 1.00785, 1e-12));
        assert!(approx_eq(
            atom(8, 8, 8).atomic_mass(),
            8.0 * 1.0073 + 8.0 * 1.0087 + 8.0 * 0.00055,
            1e-12
        ));
        assert_eq!(atom(0, 0, 0).atomic_mass(), 0.0);
    }

    #[test]
    fn valence_special_cases_for_hydrogen_and_helium() {
        assert_eq!(atom(1, 0, 1).valence(), 1);
        assert_eq!(atom(1, 0, 0).valence(), 1);
        assert_eq!(atom(1, 1, 7).valence(), 1);
        assert_eq!(atom(2, 2, 2).valence(), 0);
        assert_eq!(atom(2, 2, 0).valence(), 0);
    }

    #[test]
    fn valence_follows_outer_shell_rule() {
        // C: 6 mod 8 = 6, 8 - 6 = 2
        assert_eq!(atom(6, 6, 6).valence(), 2);
        // N: 7 -> 1, O: 8 mod 8 = 0 -> 4, Cl: 17 mod 8 = 1 -> 3
        assert_eq!(atom(7, 7, 7).valence(), 1);
        assert_eq!(atom(8, 8, 8).valence(), 4);
        assert_eq!(atom(17, 18, 17).valence(), 3);
        // Few electrons are used directly.
        assert_eq!(atom(3, 4, 0).valence(), 4);
        assert_eq!(atom(3, 4, 1).valence(), 3);
        assert_eq!(atom(3, 4, 2).valence(), 2);
    }

    #[test]
    fn valence_of_half_filled_shell_is_zero() {
        assert_eq!(atom(4, 5, 4).valence(), 0);
        assert_eq!(atom(12, 12, 12).valence(), 0);
    }

    #[test]
    fn valence_never_exceeds_four() {
        for e in 0..64 {
            assert!(atom(5, 5, e).valence() <= 4, "electrons = {e}");
        }
    }

    #[test]
    fn stability_uses_ratio_bands() {
        assert!(atom(6, 6, 6).is_stable());
        assert!(atom(1, 1, 1).is_stable());
        assert!(!atom(1, 0, 1).is_stable());
        assert!(!atom(6, 8, 6).is_stable());
        assert!(atom(26, 30, 26).is_stable());
        assert!(atom(50, 70, 50).is_stable());
        assert!(!atom(50, 50, 50).is_stable());
    }

    #[test]
    fn stability_bounds_are_inclusive() {
        // 9/10 = 0.90 and 23/20 = 1.15 in the light band
        assert!(atom(10, 9, 10).is_stable());
        assert!(atom(20, 23, 20).is_stable());
        assert!(!atom(20, 24, 20).is_stable());
        // 1.10 and 1.30 in the middle band
        assert!(atom(30, 33, 30).is_stable());
        assert!(atom(30, 39, 30).is_stable());
        // 1.25 and 1.60 in the heavy band
        assert!(atom(80, 100, 80).is_stable());
        assert!(atom(80, 128, 80).is_stable());
        assert!(!atom(80, 129, 80).is_stable());
    }

    #[test]
    fn heavy_and_proton_free_atoms_are_never_stable() {
        assert!(!atom(92, 146, 92).is_stable());
        assert!(!atom(84, 126, 84).is_stable());
        assert!(!atom(0, 0, 0).is_stable());
        assert!(!atom(0, 4, 0).is_stable());
    }

    #[test]
    fn element_lookup_is_optional() {
        assert_eq!(atom(8, 8, 8).element(), Some(Element::O));
        assert_eq!(atom(26, 30, 26).element(), None);
    }

    #[test]
    fn properties_snapshot_matches_accessors() {
        let a = atom(17, 18, 18);
        let props = a.properties();
        assert_eq!(props.mass_number, 35);
        assert_eq!(props.charge, -1);
        assert_eq!(props.valence, a.valence());
        assert_eq!(props.stable, a.is_stable());
        assert_eq!(props.element, Some(Element::Cl));
        assert_eq!(props.atomic_mass, a.atomic_mass());
    }

    #[test]
    fn derived_values_are_idempotent() {
        let a = atom(11, 12, 10);
        assert_eq!(a.properties(), a.properties());
        assert_eq!(a.valence(), a.valence());
        assert_eq!(a.is_stable(), a.is_stable());
        assert_eq!(a.atomic_mass().to_bits(), a.atomic_mass().to_bits());
    }

    #[test]
    fn from_str_parses_triples() {
        assert_eq!("8,8,8".parse::<Atom>().unwrap(), atom(8, 8, 8));
        assert_eq!(" 1, 0 ,1 ".parse::<Atom>().unwrap(), atom(1, 0, 1));
    }

    #[test]
    fn from_str_reports_malformed_input() {
        assert!(matches!(
            "8,8".parse::<Atom>(),
            Err(ParseAtomError::Format(_))
        ));
        assert!(matches!(
            "8,x,8".parse::<Atom>(),
            Err(ParseAtomError::Count(s)) if s == "x"
        ));
        assert!(matches!(
            "8,-1,8".parse::<Atom>(),
            Err(ParseAtomError::Validation(ValidationError::NegativeCount { .. }))
        ));
    }

    #[test]
    fn display_matches_parse_format() {
        let chlorine = atom(17, 18, 18);
        assert_eq!(chlorine.to_string(), "17,18,18");
        assert_eq!(chlorine.to_string().parse::<Atom>().unwrap(), chlorine);
    }
}
