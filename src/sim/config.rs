use serde::Deserialize;

use super::error::Error;
use crate::model::atom::Atom;
use crate::model::error::ValidationError;

/// Settings for a batch decay simulation.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration.
///
/// # Examples
///
/// ```
/// use nuclide_forge::SimulationConfig;
///
/// let config = SimulationConfig::from_toml(
///     r#"
///     seed = 7
///     ticks = 100
///
///     [[atoms]]
///     protons = 92
///     neutrons = 146
///     electrons = 92
///     "#,
/// )?;
///
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.atoms.len(), 1);
/// assert_eq!(config.spawn.count, 3);
/// # Ok::<(), nuclide_forge::SimulationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    /// Seed for the single random source shared by spawning and decay.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of decay passes over all atoms.
    #[serde(default = "default_ticks")]
    pub ticks: u32,

    /// How to spawn atoms when no explicit list is given.
    #[serde(default)]
    pub spawn: SpawnConfig,

    /// Explicit starting atoms. When non-empty, spawning is skipped.
    #[serde(default)]
    pub atoms: Vec<AtomSpec>,
}

fn default_seed() -> u64 {
    42
}
fn default_ticks() -> u32 {
    10
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            ticks: default_ticks(),
            spawn: SpawnConfig::default(),
            atoms: Vec::new(),
        }
    }
}

/// Random spawning of neutral atoms with equal proton, neutron, and electron
/// counts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpawnConfig {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_min_protons")]
    pub min_protons: u32,
    #[serde(default = "default_max_protons")]
    pub max_protons: u32,
}

fn default_count() -> usize {
    3
}
fn default_min_protons() -> u32 {
    1
}
fn default_max_protons() -> u32 {
    10
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            min_protons: default_min_protons(),
            max_protons: default_max_protons(),
        }
    }
}

/// One explicitly configured atom. Counts are signed so that negative values
/// in the file are reported as validation errors rather than parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtomSpec {
    pub protons: i64,
    pub neutrons: i64,
    pub electrons: i64,
}

impl AtomSpec {
    pub fn to_atom(&self) -> Result<Atom, ValidationError> {
        Atom::new(self.protons, self.neutrons, self.electrons)
    }
}

impl From<&Atom> for AtomSpec {
    fn from(atom: &Atom) -> Self {
        Self {
            protons: i64::from(atom.protons()),
            neutrons: i64::from(atom.neutrons()),
            electrons: i64::from(atom.electrons()),
        }
    }
}

impl SimulationConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed TOML or unknown keys, and
    /// the errors of [`validate`](Self::validate) otherwise.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the spawn range and every explicit atom.
    pub fn validate(&self) -> Result<(), Error> {
        if self.spawn.min_protons > self.spawn.max_protons {
            return Err(Error::InvalidProtonRange {
                min: self.spawn.min_protons,
                max: self.spawn.max_protons,
            });
        }

        self.explicit_atoms().map(|_| ())
    }

    /// Converts the explicit atom list, failing on the first invalid entry.
    pub fn explicit_atoms(&self) -> Result<Vec<Atom>, Error> {
        self.atoms
            .iter()
            .enumerate()
            .map(|(index, spec)| spec.to_atom().map_err(|e| Error::invalid_atom(index, e)))
            .collect()
    }
}
