//! Player module (input-driven FSM + movement)

use bevy::prelude::*;

pub mod events;
pub mod systems;


// Re-export основных типов
pub use events::JumpIntent;
pub use systems::{handle_jump_intents, plan_player_movement, player_state_transitions};

use crate::SimulationSet;

/// Player Plugin
///
/// Порядок выполнения (FixedUpdate, chained):
/// 1. player_state_transitions — input/Dead → PlayerState
/// 2. plan_player_movement — state + input → Velocity + Facing
/// 3. handle_jump_intents — JumpIntent → вертикальная скорость + Jump trigger
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<JumpIntent>();

        app.add_systems(
            FixedUpdate,
            (
                player_state_transitions,
                plan_player_movement,
                handle_jump_intents,
            )
                .chain()
                .in_set(SimulationSet::Player),
        );
    }
}
