//! Combat systems (strategic layer logic)

pub mod contacts;
pub mod damage;
pub mod death;

#[cfg(test)]
mod damage_tests;

// Re-export all systems
pub use contacts::*;
pub use damage::*;
pub use death::*;
