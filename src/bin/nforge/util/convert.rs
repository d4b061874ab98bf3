use nuclide_forge::DecayMode;

use crate::cli::DecayModeArg;

impl From<DecayModeArg> for DecayMode {
    fn from(mode: DecayModeArg) -> Self {
        match mode {
            DecayModeArg::Alpha => DecayMode::Alpha,
            DecayModeArg::BetaMinus => DecayMode::BetaMinus,
            DecayModeArg::BetaPlus => DecayMode::BetaPlus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_argument_maps_to_its_channel() {
        assert_eq!(DecayMode::from(DecayModeArg::Alpha), DecayMode::Alpha);
        assert_eq!(DecayMode::from(DecayModeArg::BetaMinus), DecayMode::BetaMinus);
        assert_eq!(DecayMode::from(DecayModeArg::BetaPlus), DecayMode::BetaPlus);
    }
}
