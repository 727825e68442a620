//! AI компоненты врага: AiState, AggroTarget, GroundEnemy

use bevy::prelude::*;

/// Маркер: наземный враг (patrol/chase AI)
#[derive(Component, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct GroundEnemy;

/// Enemy FSM состояния
///
/// Приоритет при пересчете: Dead > Attack > Chase > Patrol.
/// Dead — терминальное: войдя, FSM больше не переключается.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum AiState {
    /// Patrol — ходим в текущем направлении, у cliff разворачиваемся
    Patrol,

    /// Chase — преследуем aggro target (derived: target установлен)
    Chase { target: Entity },

    /// Attack — attack hitbox пересекает хотя бы одну жертву, стоим на месте
    Attack,

    /// Dead — терминальное состояние, AI отключен
    Dead,
}

impl Default for AiState {
    fn default() -> Self {
        Self::Patrol
    }
}

/// Weak ссылка на aggro target (enemy → player)
///
/// Handle + existence check, НЕ владеющая ссылка: системы каждый tick
/// резолвят entity заново и молча сбрасывают handle если player despawned.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AggroTarget(Option<Entity>);

impl AggroTarget {
    pub fn get(&self) -> Option<Entity> {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Захватить target. Если target уже есть — no-op (первый держится,
    /// второй вошедший в aggro volume не перетирает).
    pub fn acquire(&mut self, target: Entity) {
        if self.0.is_none() {
            self.0 = Some(target);
        }
    }

    /// Сбросить target только при совпадении identity.
    /// Stale-event protection: exit второго (уже ушедшего) entity не
    /// сбрасывает текущий target. Возвращает true если сброс произошел.
    pub fn release(&mut self, target: Entity) -> bool {
        if self.0 == Some(target) {
            self.0 = None;
            true
        } else {
            false
        }
    }

    /// Безусловный сброс (смерть владельца, despawn target, level reset)
    pub fn clear(&mut self) {
        self.0 = None;
    }
}
