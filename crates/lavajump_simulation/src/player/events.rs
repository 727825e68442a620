//! Player input события

use bevy::prelude::*;

/// Event: намерение прыгнуть (jump intent)
///
/// Генерируется input glue engine-слоя. Проверка "на земле и жив"
/// выполняется в handle_jump_intents, не на стороне input'а.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpIntent {
    pub entity: Entity,
}
