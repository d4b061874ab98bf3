use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element symbol: '{0}'")]
pub struct ParseElementError(String);

/// The elements the model can name.
///
/// Only a handful of light elements carry a symbol; every other proton count
/// is a valid atom without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He = 2,
    C = 6,
    N = 7,
    O = 8,
    Cl = 17,
}

impl Element {
    pub const ALL: [Element; 6] = [
        Element::H,
        Element::He,
        Element::C,
        Element::N,
        Element::O,
        Element::Cl,
    ];

    #[inline]
    pub fn atomic_number(&self) -> u32 {
        *self as u32
    }

    pub fn from_atomic_number(protons: u32) -> Option<Self> {
        match protons {
            1 => Some(Element::H),
            2 => Some(Element::He),
            6 => Some(Element::C),
            7 => Some(Element::N),
            8 => Some(Element::O),
            17 => Some(Element::Cl),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::He => "He",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::Cl => "Cl",
        }
    }
}

/// Looks up the element symbol for a proton count.
///
/// Unmapped counts yield `None`; that is not an error.
pub fn element_symbol(protons: u32) -> Option<&'static str> {
    Element::from_atomic_number(protons).map(|e| e.symbol())
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Element::H),
            "He" => Ok(Element::He),
            "C" => Ok(Element::C),
            "N" => Ok(Element::N),
            "O" => Ok(Element::O),
            "Cl" => Ok(Element::Cl),
            _ => Err(ParseElementError(s.to_string())),
        }
    }
}

/// The three particle kinds an atom is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Particle {
    Proton,
    Neutron,
    Electron,
}

impl Particle {
    /// Rest mass in unified atomic mass units.
    pub fn mass(&self) -> f64 {
        match self {
            Particle::Proton => 1.0073,
            Particle::Neutron => 1.0087,
            Particle::Electron => 0.00055,
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Particle::Proton => write!(f, "proton"),
            Particle::Neutron => write!(f, "neutron"),
            Particle::Electron => write!(f, "electron"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn element_from_str_valid() {
        assert_eq!(Element::from_str("H").unwrap(), Element::H);
        assert_eq!(Element::from_str("He").unwrap(), Element::He);
        assert_eq!(Element::from_str("Cl").unwrap(), Element::Cl);
    }

    #[test]
    fn element_from_str_invalid_case() {
        let err = Element::from_str("cl").unwrap_err();
        let s = format!("{}", err);
        assert_eq!(s, "invalid or unsupported element symbol: 'cl'");
    }

    #[test]
    fn element_from_str_rejects_unlisted_element() {
        assert!(Element::from_str("Fe").is_err());
    }

    #[test]
    fn symbol_table_matches_atomic_numbers() {
        assert_eq!(element_symbol(1), Some("H"));
        assert_eq!(element_symbol(2), Some("He"));
        assert_eq!(element_symbol(6), Some("C"));
        assert_eq!(element_symbol(7), Some("N"));
        assert_eq!(element_symbol(8), Some("O"));
        assert_eq!(element_symbol(17), Some("Cl"));
    }

    #[test]
    fn unmapped_proton_counts_have_no_symbol() {
        for protons in [0, 3, 4, 5, 9, 16, 18, 26, 92] {
            assert_eq!(element_symbol(protons), None, "protons = {protons}");
        }
    }

    #[test]
    fn atomic_number_round_trips_through_lookup() {
        for el in Element::ALL {
            assert_eq!(Element::from_atomic_number(el.atomic_number()), Some(el));
            assert_eq!(el.to_string(), el.symbol());
        }
    }

    #[test]
    fn particle_masses_and_names() {
        assert_eq!(Particle::Proton.mass(), 1.0073);
        assert_eq!(Particle::Neutron.mass(), 1.0087);
        assert_eq!(Particle::Electron.mass(), 0.00055);
        assert_eq!(Particle::Electron.to_string(), "electron");
    }
}
