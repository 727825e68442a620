//! Animation collaborator интерфейс
//!
//! Core → engine: boolean flags и one-shot triggers. Параметры — compile-time
//! enum (никакого runtime hashing имен). AnimationFlags кэширует последнее
//! отправленное значение: одно уведомление на transition, без redundant pushes.

use bevy::prelude::*;

use crate::components::Facing;

/// Boolean параметры аниматора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum AnimationParam {
    IsWalking,
    IsRunning,
    IsAttacking,
    IsGrounded,
}

/// One-shot triggers аниматора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum AnimationTrigger {
    Hit,
    Die,
    Jump,
}

/// Событие: уведомление animation collaborator'а
///
/// Чисто observational, обратной связи в core нет.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum AnimationSignal {
    Flag {
        entity: Entity,
        param: AnimationParam,
        value: bool,
    },
    Trigger {
        entity: Entity,
        trigger: AnimationTrigger,
    },
}

impl AnimationSignal {
    pub fn flag(entity: Entity, param: AnimationParam, value: bool) -> Self {
        Self::Flag { entity, param, value }
    }

    pub fn trigger(entity: Entity, trigger: AnimationTrigger) -> Self {
        Self::Trigger { entity, trigger }
    }
}

/// Событие: дискретный half-turn flip направления взгляда
///
/// Engine слой поворачивает presented orientation. Выдается максимум один
/// раз на directional decision (flip атомарен с обновлением Facing).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacingChanged {
    pub entity: Entity,
    pub facing: Facing,
}

/// Кэш последних отправленных boolean flags
///
/// set() возвращает true только при смене значения — caller отправляет
/// AnimationSignal::Flag ровно на переходах.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AnimationFlags {
    walking: bool,
    running: bool,
    attacking: bool,
    grounded: bool,
}

impl AnimationFlags {
    pub fn set(&mut self, param: AnimationParam, value: bool) -> bool {
        let slot = match param {
            AnimationParam::IsWalking => &mut self.walking,
            AnimationParam::IsRunning => &mut self.running,
            AnimationParam::IsAttacking => &mut self.attacking,
            AnimationParam::IsGrounded => &mut self.grounded,
        };

        if *slot == value {
            false
        } else {
            *slot = value;
            true
        }
    }

    pub fn get(&self, param: AnimationParam) -> bool {
        match param {
            AnimationParam::IsWalking => self.walking,
            AnimationParam::IsRunning => self.running,
            AnimationParam::IsAttacking => self.attacking,
            AnimationParam::IsGrounded => self.grounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_report_transitions_only() {
        let mut flags = AnimationFlags::default();

        assert!(flags.set(AnimationParam::IsWalking, true)); // false → true
        assert!(!flags.set(AnimationParam::IsWalking, true)); // Без изменения
        assert!(flags.set(AnimationParam::IsWalking, false)); // true → false

        assert!(!flags.set(AnimationParam::IsAttacking, false)); // Уже false
    }

    #[test]
    fn test_flags_slots_independent() {
        let mut flags = AnimationFlags::default();

        flags.set(AnimationParam::IsRunning, true);
        assert!(flags.get(AnimationParam::IsRunning));
        assert!(!flags.get(AnimationParam::IsGrounded));
    }
}
