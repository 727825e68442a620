//! Combat события
//!
//! Inbound (engine → core): ContactEvent, DamageTick, LevelReset.
//! Outbound (core → engine): DamageDealt, EntityDied, HealthChanged.

use bevy::prelude::*;

/// Overlap begin/end от spatial contact detector'а engine-слоя
///
/// Core реагирует ровно на четыре tag-категории collision volumes:
/// AttackHitBox, Aggro, Feet/Floor. Остальные контакты фильтрует glue.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEvent {
    /// AttackHitBox атакующего начал пересекать body volume жертвы
    HitboxBegin { attacker: Entity, victim: Entity },

    /// AttackHitBox атакующего перестал пересекать body volume жертвы
    HitboxEnd { attacker: Entity, victim: Entity },

    /// Player вошел в aggro volume врага
    AggroEnter { enemy: Entity, player: Entity },

    /// Player вышел из aggro volume врага
    AggroExit { enemy: Entity, player: Entity },

    /// Feet-сенсор коснулся floor layer
    FeetTouchGround { entity: Entity },

    /// Feet-сенсор покинул floor layer (cliff впереди / airborne)
    FeetLeaveGround { entity: Entity },
}

/// Damage frame атаки (animation event атакующего)
///
/// Attacker-driven: dispatch идет от атакующего, жертва своих
/// атакующих не знает.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageTick {
    pub attacker: Entity,
}

/// Событие: урон применен к жертве
///
/// Для FX, звуков, scoring на engine-стороне.
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub victim: Entity,
    pub amount: i32,
    pub victim_died: bool,
}

/// Событие: боец умер (health ≤ 0), выдается ровно один раз
#[derive(Event, Debug, Clone)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Событие: health изменился (health display collaborator feed)
///
/// Выдается при спавне (max report) и на каждом изменении. current может
/// быть отрицательным — clamp для отображения это presentation concern.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthChanged {
    pub entity: Entity,
    pub current: i32,
    pub max: i32,
}

/// Событие: явный reset hook при рестарте уровня
///
/// Восстанавливает health/каналы/FSM всех бойцов без respawn.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct LevelReset;
