//! Combat module (damage subscription протокол + health tracking)
//!
//! ECS ответственность:
//! - Game state: Health, DamageChannel, Dead
//! - Combat rules: subscription lifecycle, dispatch, death precedence
//! - Events: DamageDealt, EntityDied, HealthChanged
//!
//! Engine ответственность:
//! - Animator: проигрывание Hit/Die triggers
//! - Collision volumes: overlap detection → ContactEvent
//! - Animation damage frame → DamageTick

use bevy::prelude::*;

pub mod events;
pub mod systems;

// Re-export основных типов
pub use events::{ContactEvent, DamageDealt, DamageTick, EntityDied, HealthChanged, LevelReset};
pub use systems::{
    apply_level_reset, dispatch_damage, process_contact_events, report_spawned_health,
    settle_the_dead,
};

use crate::SimulationSet;

/// Combat Plugin
///
/// Порядок выполнения (FixedUpdate, chained):
/// 1. report_spawned_health — первичный report для HUD
/// 2. process_contact_events — subscription/aggro intake
/// 3. dispatch_damage — DamageTick → урон → Hit/Die
/// 4. settle_the_dead — обнуление velocity/каналов умерших
/// 5. apply_level_reset — explicit reset hook
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<ContactEvent>()
            .add_event::<DamageTick>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .add_event::<HealthChanged>()
            .add_event::<LevelReset>();

        // Регистрация систем в FixedUpdate
        app.add_systems(
            FixedUpdate,
            (
                report_spawned_health,
                process_contact_events,
                dispatch_damage,
                settle_the_dead,
                apply_level_reset,
            )
                .chain()
                .in_set(SimulationSet::Combat),
        );
    }
}
