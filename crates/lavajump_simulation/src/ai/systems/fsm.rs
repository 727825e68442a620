//! Enemy FSM transitions

use bevy::prelude::*;

use crate::animation::{AnimationFlags, AnimationParam, AnimationSignal};
use crate::components::{AggroTarget, AiState, DamageChannel, Dead, GroundEnemy, Player};

/// Система: пересчет AiState врага
///
/// Приоритет: Dead > Attack > Chase > Patrol.
/// - Dead терминален: войдя, больше не переключаемся
/// - Attack ⇔ канал урона non-empty (monotonic link, проверяется каждый tick)
/// - Chase derived из aggro handle; despawned referent молча сбрасывается
///   (weak reference, владение не удерживается)
///
/// IsAttacking flag уходит аниматору один раз на transition.
pub fn enemy_state_transitions(
    mut enemies: Query<
        (
            Entity,
            &mut AiState,
            &DamageChannel,
            &mut AggroTarget,
            &mut AnimationFlags,
            Has<Dead>,
        ),
        With<GroundEnemy>,
    >,
    players: Query<(), With<Player>>,
    mut signals: EventWriter<AnimationSignal>,
) {
    for (entity, mut state, channel, mut aggro, mut flags, is_dead) in enemies.iter_mut() {
        if *state == AiState::Dead {
            continue;
        }

        let new_state = if is_dead {
            AiState::Dead
        } else if channel.is_engaged() {
            AiState::Attack
        } else if let Some(target) = aggro.get() {
            if players.contains(target) {
                AiState::Chase { target }
            } else {
                // Player entity удален из мира — handle больше не резолвится
                aggro.clear();
                AiState::Patrol
            }
        } else {
            AiState::Patrol
        };

        if *state != new_state {
            let attacking = new_state == AiState::Attack;
            if flags.set(AnimationParam::IsAttacking, attacking) {
                signals.write(AnimationSignal::flag(
                    entity,
                    AnimationParam::IsAttacking,
                    attacking,
                ));
            }

            crate::log(&format!("AI: {entity:?} {:?} → {new_state:?}", *state));
            *state = new_state;
        }
    }
}
