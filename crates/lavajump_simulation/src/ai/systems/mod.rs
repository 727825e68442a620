//! AI systems (terrain sensing, FSM transitions, movement planning)

pub mod fsm;
pub mod movement;
pub mod terrain;


// Re-export all systems
pub use fsm::*;
pub use movement::*;
pub use terrain::*;
