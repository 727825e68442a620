//! Death handling + level reset hook

use bevy::prelude::*;

use crate::animation::AnimationFlags;
use crate::combat::{EntityDied, HealthChanged, LevelReset};
use crate::components::{
    AggroTarget, AiState, DamageChannel, Dead, Health, PlayerState, Velocity,
};

/// Система: успокоение мертвых
///
/// На EntityDied: горизонтальная скорость в ноль (вертикаль остается
/// гравитации — труп падает), канал урона и aggro очищаются. FSM увидит
/// Dead marker на следующем шаге цепочки и сам перейдет в терминал.
pub fn settle_the_dead(
    mut deaths: EventReader<EntityDied>,
    mut deceased: Query<(
        Option<&mut Velocity>,
        Option<&mut DamageChannel>,
        Option<&mut AggroTarget>,
    )>,
) {
    for event in deaths.read() {
        let Ok((velocity, channel, aggro)) = deceased.get_mut(event.entity) else {
            continue;
        };

        if let Some(mut velocity) = velocity {
            velocity.0.x = 0.0;
        }
        if let Some(mut channel) = channel {
            channel.clear();
        }
        if let Some(mut aggro) = aggro {
            aggro.clear();
        }
    }
}

/// Система: явный reset hook при рестарте уровня
///
/// Бойцы не пересоздаются между попытками — восстанавливаем health,
/// каналы, FSM и снимаем Dead. Позиции возвращает engine layer.
pub fn apply_level_reset(
    mut resets: EventReader<LevelReset>,
    mut commands: Commands,
    mut combatants: Query<(
        Entity,
        &mut Health,
        &mut DamageChannel,
        &mut Velocity,
        &mut AnimationFlags,
        Option<&mut AggroTarget>,
        Option<&mut AiState>,
        Option<&mut PlayerState>,
    )>,
    mut health_reports: EventWriter<HealthChanged>,
) {
    if resets.read().last().is_none() {
        return;
    }

    for (entity, mut health, mut channel, mut velocity, mut flags, aggro, ai_state, player_state) in
        combatants.iter_mut()
    {
        health.reset();
        channel.clear();
        velocity.0 = Vec2::ZERO;
        *flags = AnimationFlags::default();

        if let Some(mut aggro) = aggro {
            aggro.clear();
        }
        if let Some(mut ai_state) = ai_state {
            *ai_state = AiState::Patrol;
        }
        if let Some(mut player_state) = player_state {
            *player_state = PlayerState::Move;
        }

        commands.entity(entity).remove::<Dead>();
        health_reports.write(HealthChanged {
            entity,
            current: health.current,
            max: health.max,
        });
    }

    crate::log_info("Combat: level reset applied to all combatants");
}
