//=========================================================================
// Targets
//=========================================================================
//
// Ghosts the player shoots at, and the factory that places them.
//
//=========================================================================

//=== Module Declarations =================================================

mod factory;
mod ghost;

//=== Public API ==========================================================

pub use factory::TargetFactory;
pub use ghost::{GhostKind, TargetId, TargetableItem};
