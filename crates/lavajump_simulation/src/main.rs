//! Headless симуляция LavaJump
//!
//! Запускает Bevy App без рендера: скриптованная стычка player vs enemy

use bevy::prelude::*;
use lavajump_simulation::{
    create_headless_app, ground_enemy_bundle, player_bundle, AiState, CombatantConfig,
    ContactEvent, DamageTick, Health,
};

fn main() {
    println!("Starting LavaJump headless simulation");

    let mut app = create_headless_app();

    let player = app
        .world_mut()
        .spawn(player_bundle(&CombatantConfig::player(), Vec2::ZERO))
        .id();
    let enemy = app
        .world_mut()
        .spawn(ground_enemy_bundle(
            &CombatantConfig::ground_enemy(),
            Vec2::new(6.0, 0.0),
        ))
        .id();

    // Скриптованная стычка: aggro, затем melee контакт и damage ticks
    app.world_mut().send_event(ContactEvent::AggroEnter { enemy, player });
    app.world_mut()
        .send_event(ContactEvent::HitboxBegin { attacker: player, victim: enemy });

    for tick in 0..240 {
        if tick % 60 == 0 {
            app.world_mut().send_event(DamageTick { attacker: player });
        }

        app.update();
        // Темп ~60Hz, чтобы FixedUpdate успевал за циклом и события
        // не истекали до обработки
        std::thread::sleep(std::time::Duration::from_millis(16));

        if tick % 60 == 0 {
            let health = app.world().get::<Health>(enemy).map(|h| h.current);
            let state = app.world().get::<AiState>(enemy).copied();
            println!("Tick {}: enemy health {:?}, state {:?}", tick, health, state);
        }
    }

    println!("Simulation complete!");
}
