//! Contact intake: hitbox subscription + aggro targeting
//!
//! Contact события текущего frame обрабатываются ДО movement/state
//! вычислений того же tick (порядок закреплен в SimulationPlugin).

use bevy::prelude::*;

use crate::combat::ContactEvent;
use crate::components::{AggroTarget, CombatStats, DamageChannel, Dead};

/// Система: subscribe/unsubscribe по hitbox overlap edges + aggro acquire/release
///
/// Политика no-op (ошибки контрактом не предусмотрены):
/// - Мертвый endpoint → subscription не создается (Dead absorbing, death
///   precedence проверяется первой)
/// - Unsubscribe без записи → молча игнорируется
/// - Aggro release с несовпадающим target → stale event, игнорируется
pub fn process_contact_events(
    mut contacts: EventReader<ContactEvent>,
    mut channels: Query<&mut DamageChannel>,
    mut aggro_targets: Query<&mut AggroTarget>,
    stats: Query<&CombatStats>,
    dead: Query<(), With<Dead>>,
) {
    for event in contacts.read() {
        match *event {
            ContactEvent::HitboxBegin { attacker, victim } => {
                // Смерть проверяется первой: ни мертвый атакующий, ни мертвая
                // жертва подписку не создают
                if dead.contains(attacker) || dead.contains(victim) {
                    continue;
                }

                let Ok(attacker_stats) = stats.get(attacker) else {
                    crate::log_warning(&format!(
                        "HitboxBegin: attacker {attacker:?} has no CombatStats, event dropped"
                    ));
                    continue;
                };
                let Ok(mut channel) = channels.get_mut(attacker) else {
                    crate::log_warning(&format!(
                        "HitboxBegin: attacker {attacker:?} has no DamageChannel, event dropped"
                    ));
                    continue;
                };

                if channel.subscribe(victim, attacker_stats.hit_damage) {
                    crate::log(&format!("Combat: {attacker:?} attack started (first victim {victim:?})"));
                }
            }

            ContactEvent::HitboxEnd { attacker, victim } => {
                // Канал мертвого атакующего уже очищен в settle_the_dead
                if dead.contains(attacker) {
                    continue;
                }

                let Ok(mut channel) = channels.get_mut(attacker) else {
                    continue;
                };

                if channel.unsubscribe(victim) {
                    crate::log(&format!("Combat: {attacker:?} attack ended (last victim {victim:?} left)"));
                }
            }

            ContactEvent::AggroEnter { enemy, player } => {
                if dead.contains(enemy) {
                    continue;
                }

                if let Ok(mut aggro) = aggro_targets.get_mut(enemy) {
                    aggro.acquire(player);
                }
            }

            ContactEvent::AggroExit { enemy, player } => {
                if dead.contains(enemy) {
                    continue;
                }

                if let Ok(mut aggro) = aggro_targets.get_mut(enemy) {
                    if aggro.release(player) {
                        crate::log(&format!("Combat: {enemy:?} lost aggro target {player:?}"));
                    }
                }
            }

            // Terrain события обрабатывает ai::systems::sense_terrain
            ContactEvent::FeetTouchGround { .. } | ContactEvent::FeetLeaveGround { .. } => {}
        }
    }
}
