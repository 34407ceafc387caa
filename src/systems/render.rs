//! Drawing.
//!
//! [`render_system`] draws one frame inside raylib's drawing scopes: the
//! world pass (owners, predicted paths, projectiles) under the shared 2D
//! camera, then the screen-space debug overlay when [`DebugMode`] is present.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::chargecontroller::{ChargeController, ChargeState};
use crate::components::launcher::{Dead, LaunchOrigin, Projectile};
use crate::components::mapposition::MapPosition;
use crate::components::orienter::ProjectileOrienter;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::trajectorypath::TrajectoryPath;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;

const OWNER_RADIUS: f32 = 12.0;
const BACKGROUND: Color = Color {
    r: 24,
    g: 26,
    b: 33,
    a: 255,
};
const PATH_COLOR: Color = Color {
    r: 250,
    g: 220,
    b: 90,
    a: 200,
};
const PROJECTILE_COLOR: Color = Color {
    r: 235,
    g: 240,
    b: 250,
    a: 255,
};

fn state_color(state: ChargeState) -> Color {
    match state {
        ChargeState::Idle => Color::SKYBLUE,
        ChargeState::Charging => Color::ORANGE,
        ChargeState::Cooldown => Color::GRAY,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    camera: Res<Camera2DRes>,
    debug: Option<Res<DebugMode>>,
    launchers: Query<(Entity, &ChargeController, &LaunchOrigin, &TrajectoryPath)>,
    owners: Query<(&MapPosition, Has<Dead>), Without<Projectile>>,
    projectiles: Query<(&Projectile, &MapPosition, &Rotation, &RigidBody)>,
    tasks: Query<&ProjectileOrienter>,
) {
    let cam = camera.0;
    let mut d = rl.begin_drawing(&th);
    d.clear_background(BACKGROUND);

    {
        let mut d2 = d.begin_mode2D(cam);

        for (_, controller, origin, path) in launchers.iter() {
            if let Ok((position, dead)) = owners.get(origin.owner) {
                let color = if dead {
                    Color::DARKGRAY
                } else {
                    state_color(controller.state())
                };
                d2.draw_circle_v(position.pos, OWNER_RADIUS, color);
            }
            for segment in path.points.windows(2) {
                d2.draw_line_v(segment[0], segment[1], PATH_COLOR);
            }
        }

        for (projectile, position, rotation, body) in projectiles.iter() {
            let size = projectile.size;
            d2.draw_rectangle_pro(
                Rectangle::new(position.pos.x, position.pos.y, size.x * 2.0, size.y * 2.0),
                size,
                rotation.degrees,
                PROJECTILE_COLOR,
            );
            if debug.is_some() {
                let tip = position.pos + body.velocity.scale_by(0.05);
                d2.draw_line_v(position.pos, tip, Color::RED);
            }
        }
    }

    if debug.is_some() {
        d.draw_fps(10, 10);
        let mut y = 34;
        for (entity, controller, _, path) in launchers.iter() {
            let in_flight = projectiles
                .iter()
                .filter(|(projectile, ..)| projectile.launcher == entity)
                .count();
            let text = format!(
                "{} | speed {:.2} | cooldown {:.2} | path {} | in flight {}",
                controller.state().as_str(),
                controller.charge_level(),
                controller.cooldown_remaining(),
                path.len(),
                in_flight
            );
            d.draw_text(&text, 10, y, 10, Color::RAYWHITE);
            y += 16;
        }
        let text = format!(
            "projectiles {} | orienter tasks {}",
            projectiles.iter().count(),
            tasks.iter().count()
        );
        d.draw_text(&text, 10, y, 10, Color::RAYWHITE);
    }
}
