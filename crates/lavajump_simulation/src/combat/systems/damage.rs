//! Damage dispatch: DamageTick → канал атакующего → health жертв
//!
//! Синхронная цепочка в пределах tick: damage frame атакующего →
//! snapshot подписчиков → применение урона inline. Смерть выдается
//! ровно один раз, дальше все вызовы — no-op.

use bevy::prelude::*;

use crate::animation::{AnimationSignal, AnimationTrigger};
use crate::combat::{DamageDealt, DamageTick, EntityDied, HealthChanged};
use crate::components::{DamageChannel, Dead, Health};

/// Система: применение урона по DamageTick событиям
///
/// 1. Snapshot подписчиков канала атакующего (mutate-while-iterate guard)
/// 2. Каждой живой жертве: health -= записанный fixed damage
/// 3. DamageDealt + HealthChanged на каждое применение
/// 4. Hit trigger пока жива; на первом переходе к ≤0 — Dead marker,
///    Die trigger и EntityDied ровно один раз
///
/// newly_dead трекает смерти внутри текущего прохода: Dead marker из
/// Commands становится видимым только на следующем sync point, а death
/// precedence обязан действовать уже в этом же tick.
pub fn dispatch_damage(
    mut ticks: EventReader<DamageTick>,
    mut commands: Commands,
    channels: Query<&DamageChannel>,
    mut victims: Query<&mut Health>,
    dead: Query<(), With<Dead>>,
    mut dealt: EventWriter<DamageDealt>,
    mut died: EventWriter<EntityDied>,
    mut health_reports: EventWriter<HealthChanged>,
    mut signals: EventWriter<AnimationSignal>,
) {
    let mut newly_dead: Vec<Entity> = Vec::new();

    for DamageTick { attacker } in ticks.read().copied() {
        // Dispatch мертвого атакующего игнорируется
        if dead.contains(attacker) || newly_dead.contains(&attacker) {
            continue;
        }

        let Ok(channel) = channels.get(attacker) else {
            crate::log_warning(&format!(
                "DamageTick: attacker {attacker:?} has no DamageChannel, event dropped"
            ));
            continue;
        };

        for (victim, amount) in channel.snapshot() {
            // Подписка мертвой жертвы могла еще не быть снята engine-слоем
            if dead.contains(victim) || newly_dead.contains(&victim) {
                continue;
            }

            let Ok(mut health) = victims.get_mut(victim) else {
                // Жертва despawned между overlap end и этим tick
                continue;
            };

            health.apply_damage(amount);
            let victim_died = health.is_depleted();

            dealt.write(DamageDealt {
                attacker,
                victim,
                amount,
                victim_died,
            });
            health_reports.write(HealthChanged {
                entity: victim,
                current: health.current,
                max: health.max,
            });

            if victim_died {
                commands.entity(victim).insert(Dead);
                newly_dead.push(victim);

                signals.write(AnimationSignal::trigger(victim, AnimationTrigger::Die));
                died.write(EntityDied {
                    entity: victim,
                    killer: Some(attacker),
                });

                crate::log_info(&format!("Combat: {victim:?} killed by {attacker:?}"));
            } else {
                signals.write(AnimationSignal::trigger(victim, AnimationTrigger::Hit));
            }
        }
    }
}

/// Система: первичный health report для свежезаспавненных бойцов
///
/// Health display получает начальное значение один раз при инициализации:
/// HealthChanged с current == max.
pub fn report_spawned_health(
    spawned: Query<(Entity, &Health), Added<Health>>,
    mut health_reports: EventWriter<HealthChanged>,
) {
    for (entity, health) in spawned.iter() {
        health_reports.write(HealthChanged {
            entity,
            current: health.current,
            max: health.max,
        });
    }
}
