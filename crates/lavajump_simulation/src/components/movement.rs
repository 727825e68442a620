//! Movement компоненты: Velocity, TerrainSensor, WorldPosition
//!
//! Архитектура (engine-driven physics):
//! - ECS пишет Velocity (per-tick план движения)
//! - Engine layer применяет velocity к физическому телу и возвращает
//!   позицию/overlap через WorldPosition и contact события

use bevy::prelude::*;

/// Планируемая скорость на текущий tick
///
/// Planner пишет x; y остается гравитации engine-слоя, кроме прыжка.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Velocity(pub Vec2);

/// Terrain sensing: состояние feet-сенсора (Feet × Floor overlap)
///
/// Сенсор стоит под передней точкой опоры: !on_ground означает cliff
/// впереди (враг) либо airborne (player).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct TerrainSensor {
    pub on_ground: bool,
}

impl Default for TerrainSensor {
    fn default() -> Self {
        Self { on_ground: true } // Спавн на земле
    }
}

/// Зеркало позиции из engine-слоя (core не владеет transform)
///
/// Используется только для chase direction decisions.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct WorldPosition(pub Vec2);
