//! Damage subscription протокол (DamageChannel)
//!
//! Декаплинг "кто бьет" от "кого бьют": пока attack hitbox этого entity
//! пересекает body volume жертвы, жертва подписана на его канал.
//! Damage tick атакующего (dispatch) применяет fixed hit_damage ко всем
//! подписчикам через snapshot — mutate-while-iterate исключен.

use bevy::prelude::*;
use std::collections::HashMap;

/// Запись подписки: маленький data record вместо closure
///
/// Урон фиксируется в момент subscribe (fixed hit_damage владельца канала).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageSubscription {
    pub damage: i32,
}

/// Канал урона entity-атакующего
///
/// Ключи — жертвы, чей body volume сейчас пересекает attack hitbox владельца.
/// Подписка живет строго между overlap begin и overlap end, удаляется ровно
/// один раз. Проверки Dead живут в системах, не в контейнере.
#[derive(Component, Debug, Default)]
pub struct DamageChannel {
    subscribers: HashMap<Entity, DamageSubscription>,
}

impl DamageChannel {
    /// Подписать жертву. Повторный subscribe той же жертвы перезаписывает
    /// запись (idempotent-safe). Возвращает true на переходе 0 → ≥1.
    pub fn subscribe(&mut self, victim: Entity, damage: i32) -> bool {
        let was_empty = self.subscribers.is_empty();
        self.subscribers.insert(victim, DamageSubscription { damage });
        was_empty
    }

    /// Отписать жертву (no-op если записи нет).
    /// Возвращает true на переходе ≥1 → 0 — сигнал "attack ended" для FSM.
    pub fn unsubscribe(&mut self, victim: Entity) -> bool {
        let removed = self.subscribers.remove(&victim).is_some();
        removed && self.subscribers.is_empty()
    }

    /// Канал активен (есть хотя бы один подписчик) → владелец в Attack state
    pub fn is_engaged(&self) -> bool {
        !self.subscribers.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_subscribed(&self, victim: Entity) -> bool {
        self.subscribers.contains_key(&victim)
    }

    /// Snapshot подписчиков для dispatch (итерация по копии)
    pub fn snapshot(&self) -> Vec<(Entity, i32)> {
        self.subscribers
            .iter()
            .map(|(&victim, sub)| (victim, sub.damage))
            .collect()
    }

    /// Сброс канала (смерть владельца или level reset)
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }
}
