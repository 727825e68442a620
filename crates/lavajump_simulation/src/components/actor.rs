//! Базовые компоненты бойцов: Health, Dead, Facing, CombatStats

use bevy::prelude::*;

/// Здоровье бойца
///
/// Инвариант: current только уменьшается (regen — non-goal).
/// Floor НЕ зажимается: killing blow может увести current ниже нуля,
/// смерть проверяется через is_depleted(), не через повторное чтение health.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100) // Default 100 HP
    }
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Здоровье исчерпано (≤ 0) — боец должен перейти в Dead
    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    /// Применить урон (без floor clamp, см. инвариант)
    pub fn apply_damage(&mut self, amount: i32) {
        self.current -= amount;
    }

    /// Reset hook для level restart
    pub fn reset(&mut self) {
        self.current = self.max;
    }
}

/// Маркер: боец мертв (health достиг ≤ 0)
///
/// Absorbing state: вставляется ровно один раз, все последующие
/// combat/AI операции над entity с Dead — молчаливые no-op.
#[derive(Component, Debug, Default)]
pub struct Dead;

/// Направление взгляда (presented orientation)
///
/// Flip — дискретное событие (half-turn), не интерполяция.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum Facing {
    Left,
    Right,
}

impl Default for Facing {
    fn default() -> Self {
        Self::Right
    }
}

impl Facing {
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Знак горизонтальной скорости для этого направления
    pub fn sign_x(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Направление к точке по горизонтальной дельте (как в chase)
    pub fn toward_dx(dx: f32) -> Self {
        if dx < 0.0 { Self::Left } else { Self::Right }
    }
}

/// Фиксированные боевые характеристики (инициализируются из CombatantConfig)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct CombatStats {
    /// Горизонтальная скорость (units/sec)
    pub move_speed: f32,
    /// Вертикальная скорость прыжка (player only, у врагов игнорируется)
    pub jump_speed: f32,
    /// Фиксированный урон за один damage tick
    pub hit_damage: i32,
}

impl Default for CombatStats {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            jump_speed: 7.0,
            hit_damage: 10,
        }
    }
}
