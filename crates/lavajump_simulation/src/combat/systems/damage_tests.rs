//! Tests for damage dispatch, death precedence и level reset.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::animation::{AnimationSignal, AnimationTrigger, FacingChanged};
    use crate::combat::systems::{
        apply_level_reset, dispatch_damage, process_contact_events, report_spawned_health,
        settle_the_dead,
    };
    use crate::combat::{
        ContactEvent, DamageDealt, DamageTick, EntityDied, HealthChanged, LevelReset,
    };
    use crate::components::{AiState, DamageChannel, Dead, Health, Velocity};
    use crate::config::{ground_enemy_bundle, player_bundle, CombatantConfig};

    fn app() -> App {
        let mut app = App::new();
        app.add_event::<ContactEvent>()
            .add_event::<DamageTick>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .add_event::<HealthChanged>()
            .add_event::<LevelReset>()
            .add_event::<AnimationSignal>()
            .add_event::<FacingChanged>();
        app.add_systems(
            Update,
            (
                report_spawned_health,
                process_contact_events,
                dispatch_damage,
                settle_the_dead,
                apply_level_reset,
            )
                .chain(),
        );
        app
    }

    fn drain_triggers(app: &mut App, wanted: AnimationTrigger) -> usize {
        app.world_mut()
            .resource_mut::<Events<AnimationSignal>>()
            .drain()
            .filter(|signal| {
                matches!(signal, AnimationSignal::Trigger { trigger, .. } if *trigger == wanted)
            })
            .count()
    }

    /// Контрольный сценарий: 30 HP, два атакующих по 10 урона.
    /// Два dispatch → 10 HP и два Hit; третий → смерть, ровно один Die,
    /// дальнейшие dispatch — no-op.
    #[test]
    fn test_two_attackers_then_death() {
        let mut app = app();
        let a1 = app
            .world_mut()
            .spawn(player_bundle(&CombatantConfig::player(), Vec2::ZERO))
            .id();
        let a2 = app
            .world_mut()
            .spawn(player_bundle(&CombatantConfig::player(), Vec2::ZERO))
            .id();
        let enemy = app
            .world_mut()
            .spawn(ground_enemy_bundle(&CombatantConfig::ground_enemy(), Vec2::X))
            .id();

        // Оба атакующих подписываются в один tick
        app.world_mut().send_event(ContactEvent::HitboxBegin {
            attacker: a1,
            victim: enemy,
        });
        app.world_mut().send_event(ContactEvent::HitboxBegin {
            attacker: a2,
            victim: enemy,
        });
        app.update();
        drain_triggers(&mut app, AnimationTrigger::Hit);

        // Damage tick каждого атакующего
        app.world_mut().send_event(DamageTick { attacker: a1 });
        app.world_mut().send_event(DamageTick { attacker: a2 });
        app.update();

        assert_eq!(app.world().get::<Health>(enemy).unwrap().current, 10);
        assert!(app.world().get::<Dead>(enemy).is_none());
        assert_eq!(drain_triggers(&mut app, AnimationTrigger::Hit), 2);

        // Третий dispatch добивает
        app.world_mut().send_event(DamageTick { attacker: a1 });
        app.update();

        assert_eq!(app.world().get::<Health>(enemy).unwrap().current, 0);
        assert!(app.world().get::<Dead>(enemy).is_some());
        assert_eq!(drain_triggers(&mut app, AnimationTrigger::Die), 1);

        // Dispatch по мертвому — no-op: health не меняется, триггеров нет
        app.world_mut().send_event(DamageTick { attacker: a2 });
        app.update();

        assert_eq!(app.world().get::<Health>(enemy).unwrap().current, 0);
        assert_eq!(drain_triggers(&mut app, AnimationTrigger::Hit), 0);
        assert_eq!(drain_triggers(&mut app, AnimationTrigger::Die), 0);
    }

    #[test]
    fn test_same_tick_overkill_dies_once() {
        let mut app = app();
        let a1 = app
            .world_mut()
            .spawn(player_bundle(&CombatantConfig::player(), Vec2::ZERO))
            .id();
        let a2 = app
            .world_mut()
            .spawn(player_bundle(&CombatantConfig::player(), Vec2::ZERO))
            .id();
        let mut config = CombatantConfig::ground_enemy();
        config.max_health = 10; // Один удар смертелен
        let enemy = app
            .world_mut()
            .spawn(ground_enemy_bundle(&config, Vec2::X))
            .id();

        app.world_mut().send_event(ContactEvent::HitboxBegin {
            attacker: a1,
            victim: enemy,
        });
        app.world_mut().send_event(ContactEvent::HitboxBegin {
            attacker: a2,
            victim: enemy,
        });
        app.update();

        // Оба dispatch в ОДНОМ tick: смерть имеет precedence, второй урон
        // не применяется и Die один
        app.world_mut().send_event(DamageTick { attacker: a1 });
        app.world_mut().send_event(DamageTick { attacker: a2 });
        app.update();

        assert_eq!(app.world().get::<Health>(enemy).unwrap().current, 0);
        assert_eq!(drain_triggers(&mut app, AnimationTrigger::Die), 1);

        let died: Vec<EntityDied> = app
            .world_mut()
            .resource_mut::<Events<EntityDied>>()
            .drain()
            .collect();
        assert_eq!(died.len(), 1);
        assert_eq!(died[0].entity, enemy);
        assert_eq!(died[0].killer, Some(a1));
    }

    #[test]
    fn test_settle_clears_channel_and_velocity() {
        let mut app = app();
        let player = app
            .world_mut()
            .spawn(player_bundle(&CombatantConfig::player(), Vec2::ZERO))
            .id();
        let mut config = CombatantConfig::ground_enemy();
        config.max_health = 10;
        let enemy = app
            .world_mut()
            .spawn(ground_enemy_bundle(&config, Vec2::X))
            .id();

        // Враг сам кого-то бьет и движется
        app.world_mut()
            .get_mut::<DamageChannel>(enemy)
            .unwrap()
            .subscribe(player, 10);
        app.world_mut().get_mut::<Velocity>(enemy).unwrap().0 = Vec2::new(3.0, -1.0);

        app.world_mut().send_event(ContactEvent::HitboxBegin {
            attacker: player,
            victim: enemy,
        });
        app.update();
        app.world_mut().send_event(DamageTick { attacker: player });
        app.update();

        assert!(app.world().get::<Dead>(enemy).is_some());
        assert_eq!(
            app.world()
                .get::<DamageChannel>(enemy)
                .unwrap()
                .subscriber_count(),
            0
        );

        let velocity = app.world().get::<Velocity>(enemy).unwrap().0;
        assert_eq!(velocity.x, 0.0);
        assert_eq!(velocity.y, -1.0); // Вертикаль остается гравитации
    }

    #[test]
    fn test_health_reports_on_spawn_and_damage() {
        let mut app = app();
        let player = app
            .world_mut()
            .spawn(player_bundle(&CombatantConfig::player(), Vec2::ZERO))
            .id();
        let enemy = app
            .world_mut()
            .spawn(ground_enemy_bundle(&CombatantConfig::ground_enemy(), Vec2::X))
            .id();
        app.update();

        // Первичный report: current == max (setMaxHealth аналог)
        let reports: Vec<HealthChanged> = app
            .world_mut()
            .resource_mut::<Events<HealthChanged>>()
            .drain()
            .collect();
        assert!(reports.contains(&HealthChanged {
            entity: player,
            current: 100,
            max: 100
        }));

        app.world_mut().send_event(ContactEvent::HitboxBegin {
            attacker: player,
            victim: enemy,
        });
        app.update();
        app.world_mut()
            .resource_mut::<Events<HealthChanged>>()
            .drain()
            .count();

        app.world_mut().send_event(DamageTick { attacker: player });
        app.update();

        let reports: Vec<HealthChanged> = app
            .world_mut()
            .resource_mut::<Events<HealthChanged>>()
            .drain()
            .collect();
        assert_eq!(
            reports,
            vec![HealthChanged {
                entity: enemy,
                current: 20,
                max: 30
            }]
        );
    }

    #[test]
    fn test_level_reset_revives_combatants() {
        let mut app = app();
        let player = app
            .world_mut()
            .spawn(player_bundle(&CombatantConfig::player(), Vec2::ZERO))
            .id();
        let mut config = CombatantConfig::ground_enemy();
        config.max_health = 10;
        let enemy = app
            .world_mut()
            .spawn(ground_enemy_bundle(&config, Vec2::X))
            .id();

        app.world_mut().send_event(ContactEvent::HitboxBegin {
            attacker: player,
            victim: enemy,
        });
        app.update();
        app.world_mut().send_event(DamageTick { attacker: player });
        app.update();
        assert!(app.world().get::<Dead>(enemy).is_some());

        app.world_mut().send_event(LevelReset);
        app.update();

        assert!(app.world().get::<Dead>(enemy).is_none());
        assert_eq!(app.world().get::<Health>(enemy).unwrap().current, 10);
        assert_eq!(
            *app.world().get::<AiState>(enemy).unwrap(),
            AiState::Patrol
        );
    }
}
