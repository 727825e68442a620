//! ECS Components для боевых entity
//!
//! Организация по доменам:
//! - actor: базовые характеристики (Health, Facing, CombatStats)
//! - combat: damage subscription протокол (DamageChannel)
//! - ai: enemy FSM и aggro (AiState, AggroTarget, GroundEnemy)
//! - movement: планируемая скорость и terrain sensing (Velocity, TerrainSensor, WorldPosition)
//! - player: player control (Player, PlayerInput, PlayerState)

pub mod actor;
pub mod ai;
pub mod combat;
pub mod movement;
pub mod player;

// Re-exports для удобного импорта
pub use actor::*;
pub use ai::*;
pub use combat::*;
pub use movement::*;
pub use player::*;
