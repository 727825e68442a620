//! Movement planner врага: AiState + terrain sensing → Velocity + Facing

use bevy::prelude::*;

use crate::animation::{AnimationFlags, AnimationParam, AnimationSignal, FacingChanged};
use crate::components::{
    AiState, CombatStats, Facing, GroundEnemy, TerrainSensor, Velocity, WorldPosition,
};

/// Система: per-tick план движения врага
///
/// - Dead / Attack: горизонталь в ноль, вертикаль не трогаем (падение
///   остается физике)
/// - Patrol: фиксированная скорость вдоль текущего facing (разворот у
///   cliff уже сделал sense_terrain на edge событии)
/// - Chase: направление к WorldPosition цели; facing flip идет ПЕРЕД
///   выставлением скорости и только при смене направления (idempotent
///   re-evaluation). Cliff впереди → скорость в ноль на этот tick:
///   chase останавливается, а не разворачивается
pub fn plan_enemy_movement(
    mut enemies: Query<
        (
            Entity,
            &AiState,
            &CombatStats,
            &TerrainSensor,
            &WorldPosition,
            &mut Facing,
            &mut Velocity,
            &mut AnimationFlags,
        ),
        With<GroundEnemy>,
    >,
    positions: Query<&WorldPosition>,
    mut signals: EventWriter<AnimationSignal>,
    mut facing_events: EventWriter<FacingChanged>,
) {
    for (entity, state, stats, sensor, position, mut facing, mut velocity, mut flags) in
        enemies.iter_mut()
    {
        match *state {
            AiState::Dead | AiState::Attack => {
                velocity.0.x = 0.0;
            }

            AiState::Patrol => {
                velocity.0.x = stats.move_speed * facing.sign_x();
            }

            AiState::Chase { target } => {
                match positions.get(target) {
                    Ok(target_position) => {
                        let desired = Facing::toward_dx(target_position.0.x - position.0.x);
                        if *facing != desired {
                            *facing = desired;
                            facing_events.write(FacingChanged {
                                entity,
                                facing: desired,
                            });
                        }

                        velocity.0.x = if sensor.on_ground {
                            stats.move_speed * facing.sign_x()
                        } else {
                            // Отказываемся идти в пропасть за целью
                            0.0
                        };
                    }
                    Err(_) => {
                        // Target despawned между FSM шагом и planner'ом
                        velocity.0.x = 0.0;
                    }
                }
            }
        }

        let walking = velocity.0.x.abs() > f32::EPSILON;
        if flags.set(AnimationParam::IsWalking, walking) {
            signals.write(AnimationSignal::flag(
                entity,
                AnimationParam::IsWalking,
                walking,
            ));
        }
    }
}
