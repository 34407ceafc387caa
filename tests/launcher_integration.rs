//! Launcher integration tests: input observer, fixed-step charging,
//! cooldowns, projectile spawn, movement, lifetime and orienter tasks driven
//! through the same schedules the binary uses.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use chargeshot::components::chargecontroller::{ChargeController, ChargeState, ChargeTuning};
use chargeshot::components::launcher::{Dead, LauncherSounds, Projectile};
use chargeshot::components::mapposition::MapPosition;
use chargeshot::components::orienter::ProjectileOrienter;
use chargeshot::components::rigidbody::RigidBody;
use chargeshot::components::rotation::Rotation;
use chargeshot::components::signals::Signals;
use chargeshot::components::trajectorypath::TrajectoryPath;
use chargeshot::events::audio::AudioCmd;
use chargeshot::events::input::{InputAction, InputEvent};
use chargeshot::game;
use chargeshot::resources::aim::AimPoint;
use chargeshot::resources::gameconfig::GameConfig;
use chargeshot::resources::physics::PhysicsSettings;
use chargeshot::resources::worldtime::WorldTime;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

struct Harness {
    world: World,
    fixed: Schedule,
    frame: Schedule,
    owner: Entity,
    launcher: Entity,
    timestep: f32,
}

impl Harness {
    fn new(config: GameConfig) -> Self {
        let mut world = World::new();
        game::init_world(&mut world, &config);
        game::register_observers(&mut world);
        let (owner, launcher) = game::spawn_player_and_launcher(
            &mut world,
            &config,
            Vector2 { x: 0.0, y: 0.0 },
            LauncherSounds::new(vec!["charge".into()], vec!["release".into()]),
        );
        world.resource_mut::<AimPoint>().0 = Vector2 { x: 100.0, y: 0.0 };
        Self {
            world,
            fixed: game::build_fixed_schedule(),
            frame: game::build_frame_schedule(false),
            owner,
            launcher,
            timestep: config.physics.timestep,
        }
    }

    fn with_defaults() -> Self {
        Self::new(GameConfig::new())
    }

    fn fire(&mut self, pressed: bool) {
        self.world.trigger(InputEvent {
            action: InputAction::Fire,
            pressed,
        });
        self.world.flush();
    }

    /// Run `n` frames of exactly one fixed step each.
    fn step(&mut self, n: usize) {
        for _ in 0..n {
            let steps =
                game::advance_frame(&mut self.world, &mut self.fixed, &mut self.frame, self.timestep);
            assert_eq!(steps, 1);
        }
    }

    fn frame_only(&mut self, dt: f32) -> u32 {
        game::advance_frame(&mut self.world, &mut self.fixed, &mut self.frame, dt)
    }

    fn controller(&self) -> &ChargeController {
        self.world.get::<ChargeController>(self.launcher).unwrap()
    }

    fn path(&self) -> &TrajectoryPath {
        self.world.get::<TrajectoryPath>(self.launcher).unwrap()
    }

    fn projectiles(&mut self) -> Vec<Entity> {
        let mut q = self.world.query_filtered::<Entity, With<Projectile>>();
        q.iter(&self.world).collect()
    }

    fn orienter_count(&mut self) -> usize {
        let mut q = self.world.query::<&ProjectileOrienter>();
        q.iter(&self.world).count()
    }
}

fn fast_config() -> GameConfig {
    let mut config = GameConfig::new();
    config.tuning = ChargeTuning {
        min_speed: 300.0,
        max_speed: 600.0,
        charge_rate: 300.0,
        prediction_steps: 200,
        ..ChargeTuning::default()
    };
    config.physics = PhysicsSettings::new(Vector2 { x: 0.0, y: 980.0 }, 0.02, 4);
    config.projectile.drag = 0.1;
    config
}

#[test]
fn press_release_press_release_within_cooldown_spawns_once() {
    let mut h = Harness::with_defaults();
    h.fire(true);
    h.step(5);
    h.fire(false);
    h.step(5);
    h.fire(true);
    h.step(5);
    h.fire(false);

    assert_eq!(h.projectiles().len(), 1);
    assert_eq!(h.controller().state(), ChargeState::Cooldown);
}

#[test]
fn charge_grows_linearly_and_caps() {
    let mut h = Harness::with_defaults();
    h.fire(true);
    assert_eq!(h.controller().state(), ChargeState::Charging);
    assert!(approx_eq(h.controller().charge_level(), 1.0));

    h.step(50); // 1.0 s
    assert!(approx_eq(h.controller().charge_level(), 4.0));

    h.step(50); // 2.0 s
    assert!(approx_eq(h.controller().charge_level(), 5.0));
    assert_eq!(h.path().len(), 2000);
}

#[test]
fn path_empty_outside_charging() {
    let mut h = Harness::with_defaults();
    assert!(h.path().is_empty());
    h.step(3);
    assert!(h.path().is_empty());

    h.fire(true);
    h.step(2);
    assert!(!h.path().is_empty());

    h.fire(false);
    assert!(h.path().is_empty());
    assert_eq!(h.controller().state(), ChargeState::Cooldown);
    h.step(3);
    assert!(h.path().is_empty());

    // No-op release still leaves the path empty.
    h.fire(false);
    assert!(h.path().is_empty());
}

#[test]
fn cooldown_returns_to_idle_after_duration() {
    let mut h = Harness::with_defaults();
    h.fire(true);
    h.step(1);
    h.fire(false);
    assert_eq!(h.controller().state(), ChargeState::Cooldown);

    h.step(24);
    assert_eq!(h.controller().state(), ChargeState::Cooldown);
    h.step(1); // 0.5 s total
    assert_eq!(h.controller().state(), ChargeState::Idle);

    h.fire(true);
    assert_eq!(h.controller().state(), ChargeState::Charging);
}

#[test]
fn release_while_idle_does_nothing() {
    let mut h = Harness::with_defaults();
    h.fire(false);
    assert_eq!(h.controller().state(), ChargeState::Idle);
    assert!(approx_eq(h.controller().charge_level(), 1.0));
    assert!(h.projectiles().is_empty());
}

#[test]
fn release_right_after_press_launches_at_min_speed() {
    let mut h = Harness::with_defaults();
    h.fire(true);
    h.fire(false);
    let projectiles = h.projectiles();
    assert_eq!(projectiles.len(), 1);
    let body = h.world.get::<RigidBody>(projectiles[0]).unwrap();
    assert!(approx_eq(body.velocity.x, 1.0));
    assert!(approx_eq(body.velocity.y, 0.0));
}

#[test]
fn projectile_follows_predicted_path() {
    let mut h = Harness::new(fast_config());
    h.world.resource_mut::<AimPoint>().0 = Vector2 { x: 100.0, y: -100.0 };

    h.fire(true);
    h.step(1);
    let predicted = h.path().points.clone();
    let speed = h.controller().charge_level();
    assert!(approx_eq(speed, 306.0));

    h.fire(false);
    let projectile = h.projectiles()[0];
    let body = *h.world.get::<RigidBody>(projectile).unwrap();
    assert!(approx_eq(body.velocity.length(), speed));
    assert!(approx_eq(body.drag, 0.1));

    let iterations = 4;
    for k in 1..=10 {
        h.step(1);
        let pos = h.world.get::<MapPosition>(projectile).unwrap().pos;
        let expected = predicted[k * iterations - 1];
        assert!(
            (pos.x - expected.x).abs() < 1e-2 && (pos.y - expected.y).abs() < 1e-2,
            "step {}: {:?} vs {:?}",
            k,
            pos,
            expected
        );
    }
}

#[test]
fn orienter_task_ends_after_projectile_despawn() {
    let mut h = Harness::with_defaults();
    h.fire(true);
    h.fire(false);
    let projectile = h.projectiles()[0];
    assert_eq!(h.orienter_count(), 1);

    h.step(2);
    assert_eq!(h.orienter_count(), 1);

    h.world.despawn(projectile);
    h.step(2);
    assert_eq!(h.orienter_count(), 0);
}

#[test]
fn orienter_keeps_rotating_while_paused() {
    let mut h = Harness::new(fast_config());
    h.fire(true);
    h.step(1);
    h.fire(false);
    let projectile = h.projectiles()[0];
    let spawn_pos = h.world.get::<MapPosition>(projectile).unwrap().pos;
    let spawn_rot = h.world.get::<Rotation>(projectile).unwrap().degrees;

    h.world.resource_mut::<WorldTime>().time_scale = 0.0;
    let steps = h.frame_only(0.05);
    assert_eq!(steps, 0);

    let pos = h.world.get::<MapPosition>(projectile).unwrap().pos;
    assert_eq!(pos, spawn_pos);
    let body = h.world.get::<RigidBody>(projectile).unwrap();
    let expected = Rotation::facing_velocity(body.velocity.x, body.velocity.y).degrees;
    let rotation = h.world.get::<Rotation>(projectile).unwrap().degrees;
    assert!(approx_eq(rotation, expected));
    assert!(!approx_eq(rotation, spawn_rot));
}

fn same_heading(a: f32, b: f32) -> bool {
    let diff = (a - b).rem_euclid(360.0);
    diff < EPSILON || 360.0 - diff < EPSILON
}

#[test]
fn spawn_rotation_adds_visual_offset_to_launch_angle() {
    let mut config = fast_config();
    config.tuning.visual_rotation_offset = 180.0;
    let mut h = Harness::new(config);
    h.world.resource_mut::<AimPoint>().0 = Vector2 { x: 100.0, y: -100.0 };

    h.fire(true);
    h.fire(false);
    let projectile = h.projectiles()[0];
    assert_eq!(
        h.world.get::<Projectile>(projectile).unwrap().launcher,
        h.launcher
    );

    let angle = h.controller().launch_angle_degrees();
    assert!(approx_eq(angle, -135.0));
    let rotation = h.world.get::<Rotation>(projectile).unwrap().degrees;
    assert!(approx_eq(rotation, angle + 180.0));

    let velocity = h.world.get::<RigidBody>(projectile).unwrap().velocity;
    let facing = Rotation::facing_velocity(velocity.x, velocity.y).degrees;
    assert!(same_heading(rotation, facing), "{} vs {}", rotation, facing);
}

#[test]
fn non_finite_orientation_interval_still_ends_task() {
    let mut config = GameConfig::new();
    config
        .load_from_str("[launcher]\norientation_interval = nan\n")
        .unwrap();
    assert!(config.tuning.orientation_interval.is_finite());

    let mut h = Harness::new(config);
    h.fire(true);
    h.fire(false);
    let projectile = h.projectiles()[0];
    assert_eq!(h.orienter_count(), 1);

    h.world.despawn(projectile);
    h.step(5);
    assert_eq!(h.orienter_count(), 0);
}

#[test]
fn projectiles_expire_and_fall_past_kill_plane() {
    let mut config = fast_config();
    config.projectile.lifetime = 0.1;
    let mut h = Harness::new(config);
    h.fire(true);
    h.fire(false);
    assert_eq!(h.projectiles().len(), 1);
    h.step(4);
    assert_eq!(h.projectiles().len(), 1);
    h.step(2);
    assert!(h.projectiles().is_empty());

    let mut config = fast_config();
    config.projectile.kill_plane = Some(5.0);
    let mut h = Harness::new(config);
    h.world.resource_mut::<AimPoint>().0 = Vector2 { x: 0.0, y: 100.0 };
    h.fire(true);
    h.fire(false);
    h.step(2);
    assert!(h.projectiles().is_empty());
}

#[test]
fn dead_owner_refuses_press() {
    let mut h = Harness::with_defaults();
    h.world.entity_mut(h.owner).insert(Dead);
    h.fire(true);
    assert_eq!(h.controller().state(), ChargeState::Idle);
    h.step(5);
    assert!(h.path().is_empty());
}

#[test]
fn owner_dying_mid_charge_freezes_launcher() {
    let mut h = Harness::with_defaults();
    h.fire(true);
    h.step(5);
    let level = h.controller().charge_level();
    assert!(!h.path().is_empty());

    h.world.entity_mut(h.owner).insert(Dead);
    h.step(5);
    assert!(h.path().is_empty());
    assert!(approx_eq(h.controller().charge_level(), level));

    h.fire(false);
    assert!(h.projectiles().is_empty());
    assert_eq!(h.controller().state(), ChargeState::Charging);
}

#[test]
fn missing_owner_is_terminal() {
    let mut h = Harness::with_defaults();
    h.world.despawn(h.owner);
    h.fire(true);
    assert_eq!(h.controller().state(), ChargeState::Idle);
}

#[test]
fn hooks_publish_signals_and_sounds() {
    let mut h = Harness::with_defaults();
    h.fire(true);
    {
        let signals = h.world.get::<Signals>(h.owner).unwrap();
        assert!(signals.has_flag("attacking"));
        assert!(signals.has_trigger("charge"));
    }
    let cmds: Vec<AudioCmd> = h.world.resource_mut::<Messages<AudioCmd>>().drain().collect();
    assert_eq!(
        cmds,
        vec![AudioCmd::PlayFx {
            id: "charge".into()
        }]
    );

    h.step(1);
    let level = h.world.get::<Signals>(h.owner).unwrap().get_scalar("charge_level");
    assert!(level.is_some_and(|l| l > 1.0));

    h.fire(false);
    let signals = h.world.get::<Signals>(h.owner).unwrap();
    assert!(!signals.has_flag("attacking"));
    assert!(signals.has_trigger("release"));
    let cmds: Vec<AudioCmd> = h.world.resource_mut::<Messages<AudioCmd>>().drain().collect();
    assert_eq!(
        cmds,
        vec![
            AudioCmd::StopFx {
                id: "charge".into()
            },
            AudioCmd::PlayFx {
                id: "release".into()
            },
        ]
    );
}
