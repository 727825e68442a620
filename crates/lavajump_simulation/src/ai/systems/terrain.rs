//! Terrain sensing: Feet × Floor контакты → TerrainSensor + patrol разворот

use bevy::prelude::*;

use crate::animation::FacingChanged;
use crate::combat::ContactEvent;
use crate::components::{AiState, Facing, GroundEnemy, TerrainSensor};

/// Система: зеркалирование feet-сенсора + patrol cliff response
///
/// Patrol разворачивается ровно один раз — на edge событии FeetLeaveGround,
/// не по polling'у сенсора (иначе враг, зависший над краем на несколько
/// tick'ов, осциллировал бы). Chase у cliff останавливается, это делает
/// planner по состоянию сенсора.
pub fn sense_terrain(
    mut contacts: EventReader<ContactEvent>,
    mut sensors: Query<&mut TerrainSensor>,
    mut patrollers: Query<(&AiState, &mut Facing), With<GroundEnemy>>,
    mut facing_events: EventWriter<FacingChanged>,
) {
    for event in contacts.read() {
        match *event {
            ContactEvent::FeetTouchGround { entity } => {
                if let Ok(mut sensor) = sensors.get_mut(entity) {
                    sensor.on_ground = true;
                }
            }

            ContactEvent::FeetLeaveGround { entity } => {
                if let Ok(mut sensor) = sensors.get_mut(entity) {
                    sensor.on_ground = false;
                }

                // Cliff во время патруля: разворот, враг не падает с уступа
                // который может почувствовать
                if let Ok((state, mut facing)) = patrollers.get_mut(entity) {
                    if *state == AiState::Patrol {
                        *facing = facing.opposite();
                        facing_events.write(FacingChanged {
                            entity,
                            facing: *facing,
                        });
                        crate::log(&format!("AI: {entity:?} patrol reached cliff, now facing {:?}", *facing));
                    }
                }
            }

            _ => {}
        }
    }
}
