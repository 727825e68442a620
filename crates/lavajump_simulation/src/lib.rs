//! LavaJump Simulation Core
//!
//! ECS-симуляция combat/AI для 2D платформера (strategic layer).
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (game state, damage subscription протокол,
//!   FSM, movement planning)
//! - Engine = tactical layer (physics integration, collision detection,
//!   animation playback, input devices, UI)
//!
//! Связь только через события: ContactEvent/DamageTick/JumpIntent внутрь,
//! AnimationSignal/FacingChanged/HealthChanged/DamageDealt наружу.

use bevy::prelude::*;

// Публичные модули
pub mod ai;
pub mod animation;
pub mod combat;
pub mod components;
pub mod config;
pub mod logger;
pub mod player;

// Re-export базовых типов для удобства
pub use ai::AiPlugin;
pub use animation::{
    AnimationFlags, AnimationParam, AnimationSignal, AnimationTrigger, FacingChanged,
};
pub use combat::{
    CombatPlugin, ContactEvent, DamageDealt, DamageTick, EntityDied, HealthChanged, LevelReset,
};
pub use components::*;
pub use config::{
    ground_enemy_bundle, player_bundle, spawn_ground_enemy, spawn_player, CombatantConfig,
};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger,
    set_logger_if_needed, ConsoleLogger, LogLevel, LogPrinter,
};
pub use player::{JumpIntent, PlayerPlugin};

/// Порядок подсистем внутри одного simulation tick
///
/// Contact события текущего frame обрабатываются ДО state/movement
/// вычислений этого же tick (single-threaded cooperative порядок).
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Combat,
    Ai,
    Player,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Cross-cutting события (animation + facing collaborators)
            .add_event::<AnimationSignal>()
            .add_event::<FacingChanged>();

        // Фиксированный порядок: combat intake → AI → player
        app.configure_sets(
            FixedUpdate,
            (SimulationSet::Combat, SimulationSet::Ai, SimulationSet::Player).chain(),
        );

        // Подсистемы (ECS strategic layer)
        app.add_plugins((CombatPlugin, AiPlugin, PlayerPlugin));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins).add_plugins(SimulationPlugin);

    app
}
