//! Input systems.
//!
//! - [`update_input_state`] reads keyboard and mouse state from Raylib each
//!   frame, updates [`InputState`] and triggers [`InputEvent`]s on edges.
//!   F11 triggers [`SwitchDebugEvent`] instead.
//! - [`update_aim_point`] writes the mouse position, in world space, to
//!   [`AimPoint`].
use bevy_ecs::prelude::*;

use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::aim::AimPoint;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::input::{BoolState, InputState};

fn emit_edges(state: &BoolState, action: InputAction, commands: &mut Commands) {
    if state.just_pressed {
        commands.trigger(InputEvent {
            action,
            pressed: true,
        });
    }
    if state.just_released {
        commands.trigger(InputEvent {
            action,
            pressed: false,
        });
    }
}

/// Poll Raylib for input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let fire_down = rl.is_key_down(input.fire.key_binding)
        || rl.is_mouse_button_down(input.fire_mouse);
    input.fire.update(fire_down);
    let back_down = rl.is_key_down(input.action_back.key_binding);
    input.action_back.update(back_down);
    let debug_down = rl.is_key_down(input.mode_debug.key_binding);
    input.mode_debug.update(debug_down);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    emit_edges(&input.fire, InputAction::Fire, &mut commands);
    emit_edges(&input.action_back, InputAction::Back, &mut commands);
}

/// Track the mouse in world coordinates.
pub fn update_aim_point(
    mut aim: ResMut<AimPoint>,
    camera: Res<Camera2DRes>,
    rl: NonSend<raylib::RaylibHandle>,
) {
    let mouse = rl.get_mouse_position();
    aim.0 = rl.get_screen_to_world2D(mouse, camera.0);
}
