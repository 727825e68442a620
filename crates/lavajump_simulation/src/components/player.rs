//! Player компоненты: маркер, input state, FSM

use bevy::prelude::*;

/// Маркер: управляемый игрок
#[derive(Component, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct Player;

/// Input state игрока (пишется input glue engine-слоя)
///
/// Дискретные сигналы move/attack; jump идет отдельным JumpIntent event.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PlayerInput {
    /// Направление движения от input device (x используется planner'ом)
    pub move_axis: Vec2,
    /// Attack-intent удерживается (кнопка зажата)
    pub attack_held: bool,
}

/// Player FSM состояния
///
/// Attack — от attack-intent input, не от канала урона (в отличие от врага).
/// Dead — терминальное.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum PlayerState {
    #[default]
    Move,
    Attack,
    Dead,
}
