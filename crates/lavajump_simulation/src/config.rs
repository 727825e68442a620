//! Фиксированная конфигурация бойцов + spawn bundles
//!
//! Атрибуты (maxHealth, speed, damage) задаются один раз при первой
//! активации entity. Отсутствующий sensor/stats — это configuration bug
//! времени спавна, поэтому bundles всегда несут полный набор компонентов.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::animation::AnimationFlags;
use crate::components::{
    AggroTarget, AiState, CombatStats, DamageChannel, Facing, GroundEnemy, Health, Player,
    PlayerInput, PlayerState, TerrainSensor, Velocity, WorldPosition,
};

/// Конфигурация одного бойца (player или ground enemy)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatantConfig {
    pub max_health: i32,
    pub move_speed: f32,
    pub jump_speed: f32,
    pub hit_damage: i32,
}

impl CombatantConfig {
    pub fn player() -> Self {
        Self {
            max_health: 100,
            move_speed: 5.0,
            jump_speed: 8.0,
            hit_damage: 10,
        }
    }

    pub fn ground_enemy() -> Self {
        Self {
            max_health: 30,
            move_speed: 3.0,
            jump_speed: 0.0, // Наземный враг не прыгает
            hit_damage: 10,
        }
    }

    fn stats(&self) -> CombatStats {
        CombatStats {
            move_speed: self.move_speed,
            jump_speed: self.jump_speed,
            hit_damage: self.hit_damage,
        }
    }
}

/// Полный bundle игрока
pub fn player_bundle(config: &CombatantConfig, position: Vec2) -> impl Bundle {
    (
        Player,
        PlayerState::default(),
        PlayerInput::default(),
        Health::new(config.max_health),
        config.stats(),
        DamageChannel::default(),
        Facing::default(),
        Velocity::default(),
        TerrainSensor::default(),
        WorldPosition(position),
        AnimationFlags::default(),
    )
}

/// Полный bundle наземного врага
pub fn ground_enemy_bundle(config: &CombatantConfig, position: Vec2) -> impl Bundle {
    (
        GroundEnemy,
        AiState::default(),
        AggroTarget::default(),
        Health::new(config.max_health),
        config.stats(),
        DamageChannel::default(),
        Facing::default(),
        Velocity::default(),
        TerrainSensor::default(),
        WorldPosition(position),
        AnimationFlags::default(),
    )
}

pub fn spawn_player(commands: &mut Commands, config: &CombatantConfig, position: Vec2) -> Entity {
    commands.spawn(player_bundle(config, position)).id()
}

pub fn spawn_ground_enemy(
    commands: &mut Commands,
    config: &CombatantConfig,
    position: Vec2,
) -> Entity {
    commands.spawn(ground_enemy_bundle(config, position)).id()
}
