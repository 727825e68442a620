//! Player systems: FSM, movement planning, прыжки

use bevy::prelude::*;

use crate::animation::{AnimationFlags, AnimationParam, AnimationSignal, AnimationTrigger, FacingChanged};
use crate::components::{
    CombatStats, Dead, Facing, Player, PlayerInput, PlayerState, TerrainSensor, Velocity,
};
use crate::player::JumpIntent;

/// Система: player FSM transitions
///
/// Attack — от удерживаемого attack-intent input'а (в отличие от врага,
/// чей Attack выводится из канала урона). Dead терминален.
pub fn player_state_transitions(
    mut players: Query<
        (
            Entity,
            &mut PlayerState,
            &PlayerInput,
            &mut AnimationFlags,
            Has<Dead>,
        ),
        With<Player>,
    >,
    mut signals: EventWriter<AnimationSignal>,
) {
    for (entity, mut state, input, mut flags, is_dead) in players.iter_mut() {
        if *state == PlayerState::Dead {
            continue;
        }

        let new_state = if is_dead {
            PlayerState::Dead
        } else if input.attack_held {
            PlayerState::Attack
        } else {
            PlayerState::Move
        };

        if *state != new_state {
            let attacking = new_state == PlayerState::Attack;
            if flags.set(AnimationParam::IsAttacking, attacking) {
                signals.write(AnimationSignal::flag(
                    entity,
                    AnimationParam::IsAttacking,
                    attacking,
                ));
            }
            *state = new_state;
        }
    }
}

/// Система: per-tick план движения игрока
///
/// Заземленная атака держит позицию (horizontal factor 0); атака в
/// воздухе движения не ограничивает. Facing flip — по знаку итоговой
/// скорости, с epsilon guard'ами, максимум один на смену направления.
pub fn plan_player_movement(
    mut players: Query<
        (
            Entity,
            &PlayerState,
            &PlayerInput,
            &CombatStats,
            &TerrainSensor,
            &mut Facing,
            &mut Velocity,
            &mut AnimationFlags,
        ),
        With<Player>,
    >,
    mut signals: EventWriter<AnimationSignal>,
    mut facing_events: EventWriter<FacingChanged>,
) {
    for (entity, state, input, stats, sensor, mut facing, mut velocity, mut flags) in
        players.iter_mut()
    {
        if flags.set(AnimationParam::IsGrounded, sensor.on_ground) {
            signals.write(AnimationSignal::flag(
                entity,
                AnimationParam::IsGrounded,
                sensor.on_ground,
            ));
        }

        if *state == PlayerState::Dead {
            velocity.0.x = 0.0;
            if flags.set(AnimationParam::IsRunning, false) {
                signals.write(AnimationSignal::flag(entity, AnimationParam::IsRunning, false));
            }
            continue;
        }

        let holds_position = *state == PlayerState::Attack && sensor.on_ground;
        velocity.0.x = if holds_position {
            0.0
        } else {
            input.move_axis.x * stats.move_speed
        };

        let running = input.move_axis.x.abs() > f32::EPSILON;
        if flags.set(AnimationParam::IsRunning, running) {
            signals.write(AnimationSignal::flag(entity, AnimationParam::IsRunning, running));
        }

        if *facing != Facing::Left && velocity.0.x < -f32::EPSILON {
            *facing = Facing::Left;
            facing_events.write(FacingChanged {
                entity,
                facing: Facing::Left,
            });
        }

        if *facing != Facing::Right && velocity.0.x > f32::EPSILON {
            *facing = Facing::Right;
            facing_events.write(FacingChanged {
                entity,
                facing: Facing::Right,
            });
        }
    }
}

/// Система: обработка JumpIntent
///
/// Прыжок только с земли и только живым; вертикальная скорость
/// выставляется напрямую, Jump trigger уходит аниматору.
pub fn handle_jump_intents(
    mut intents: EventReader<JumpIntent>,
    mut players: Query<
        (&PlayerState, &TerrainSensor, &CombatStats, &mut Velocity),
        With<Player>,
    >,
    mut signals: EventWriter<AnimationSignal>,
) {
    for intent in intents.read() {
        let Ok((state, sensor, stats, mut velocity)) = players.get_mut(intent.entity) else {
            continue;
        };

        if *state == PlayerState::Dead || !sensor.on_ground {
            continue;
        }

        velocity.0.y = stats.jump_speed;
        signals.write(AnimationSignal::trigger(intent.entity, AnimationTrigger::Jump));
    }
}
