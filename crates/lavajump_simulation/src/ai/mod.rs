//! AI decision-making module
//!
//! Enemy FSM (Patrol/Chase/Attack/Dead) + terrain-aware movement planner.
//! Contact события уже обработаны combat-модулем на этом же tick
//! (SimulationSet::Combat идет перед SimulationSet::Ai).

use bevy::prelude::*;

pub mod systems;

// Re-export основных систем
pub use systems::{enemy_state_transitions, plan_enemy_movement, sense_terrain};

use crate::SimulationSet;

/// AI Plugin
///
/// Порядок выполнения (FixedUpdate, chained):
/// 1. sense_terrain — TerrainSensor mirror + patrol разворот у cliff
/// 2. enemy_state_transitions — пересчет AiState
/// 3. plan_enemy_movement — state → Velocity + Facing
pub struct AiPlugin;

impl Plugin for AiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (sense_terrain, enemy_state_transitions, plan_enemy_movement)
                .chain()
                .in_set(SimulationSet::Ai),
        );
    }
}
