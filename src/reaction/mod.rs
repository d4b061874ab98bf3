mod bond;
mod decay;

pub use bond::{BondOutcome, BondRefusal, BondRefused, OCTET, attempt_bond, can_bond};
pub use decay::{DecayMode, DecayOutcome, NoDecayReason, apply_mode, decay};
