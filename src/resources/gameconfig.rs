//! Game configuration resource.
//!
//! Launcher tunables, world physics and window settings loaded from an INI
//! file. Defaults are safe to start with; any key missing from the file keeps
//! its default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//!
//! [physics]
//! gravity_x = 0
//! gravity_y = 980
//! timestep = 0.02
//! velocity_iterations = 8
//!
//! [launcher]
//! min_speed = 1
//! max_speed = 5
//! charge_rate = 3
//! cooldown = 0.5
//! orientation_interval = 0.02
//! prediction_steps = 2000
//! rotation_offset = 0
//!
//! [projectile]
//! gravity_scale = 1
//! drag = 0
//! lifetime = 5
//! kill_plane = 2000
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::chargecontroller::ChargeTuning;
use crate::components::launcher::ProjectileTemplate;
use crate::resources::physics::PhysicsSettings;

const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub physics: PhysicsSettings,
    pub tuning: ChargeTuning,
    pub projectile: ProjectileTemplate,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            physics: PhysicsSettings::default(),
            tuning: ChargeTuning::default(),
            projectile: ProjectileTemplate::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        info!(
            "Loaded config from {:?}: speed {}..{} at {}/s, cooldown {}s, {} prediction steps",
            self.config_path,
            self.tuning.min_speed,
            self.tuning.max_speed,
            self.tuning.charge_rate,
            self.tuning.cooldown_duration,
            self.tuning.prediction_steps
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        let float = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };
        let uint = |section: &str, key: &str| config.getuint(section, key).ok().flatten();

        // [window] section
        if let Some(width) = uint("window", "width") {
            self.window_width = width as u32;
        }
        if let Some(height) = uint("window", "height") {
            self.window_height = height as u32;
        }
        if let Some(fps) = uint("window", "target_fps") {
            self.target_fps = fps as u32;
        }

        // [physics] section
        if let Some(x) = float("physics", "gravity_x") {
            self.physics.gravity.x = x;
        }
        if let Some(y) = float("physics", "gravity_y") {
            self.physics.gravity.y = y;
        }
        if let Some(timestep) = float("physics", "timestep") {
            self.physics.timestep = timestep;
        }
        if let Some(iterations) = uint("physics", "velocity_iterations") {
            self.physics.velocity_iterations = iterations as u32;
        }
        self.physics = self.physics.normalized();

        // [launcher] section
        let mut tuning = self.tuning;
        if let Some(v) = float("launcher", "min_speed") {
            tuning.min_speed = v;
        }
        if let Some(v) = float("launcher", "max_speed") {
            tuning.max_speed = v;
        }
        if let Some(v) = float("launcher", "charge_rate") {
            tuning.charge_rate = v;
        }
        if let Some(v) = float("launcher", "cooldown") {
            tuning.cooldown_duration = v;
        }
        if let Some(v) = float("launcher", "orientation_interval") {
            tuning.orientation_interval = v;
        }
        if let Some(v) = uint("launcher", "prediction_steps") {
            tuning.prediction_steps = v as usize;
        }
        if let Some(v) = float("launcher", "rotation_offset") {
            tuning.visual_rotation_offset = v;
        }
        self.tuning = tuning.normalized();

        // [projectile] section
        if let Some(v) = float("projectile", "gravity_scale") {
            self.projectile.gravity_scale = v;
        }
        if let Some(v) = float("projectile", "drag") {
            self.projectile.drag = v;
        }
        if let Some(v) = float("projectile", "lifetime") {
            self.projectile.lifetime = v;
        }
        if let Some(v) = float("projectile", "kill_plane") {
            self.projectile.kill_plane = Some(v);
        }
        self.projectile = self.projectile.normalized();
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("physics", "gravity_x", Some(self.physics.gravity.x.to_string()));
        config.set("physics", "gravity_y", Some(self.physics.gravity.y.to_string()));
        config.set("physics", "timestep", Some(self.physics.timestep.to_string()));
        config.set(
            "physics",
            "velocity_iterations",
            Some(self.physics.velocity_iterations.to_string()),
        );

        config.set("launcher", "min_speed", Some(self.tuning.min_speed.to_string()));
        config.set("launcher", "max_speed", Some(self.tuning.max_speed.to_string()));
        config.set("launcher", "charge_rate", Some(self.tuning.charge_rate.to_string()));
        config.set(
            "launcher",
            "cooldown",
            Some(self.tuning.cooldown_duration.to_string()),
        );
        config.set(
            "launcher",
            "orientation_interval",
            Some(self.tuning.orientation_interval.to_string()),
        );
        config.set(
            "launcher",
            "prediction_steps",
            Some(self.tuning.prediction_steps.to_string()),
        );
        config.set(
            "launcher",
            "rotation_offset",
            Some(self.tuning.visual_rotation_offset.to_string()),
        );

        config.set(
            "projectile",
            "gravity_scale",
            Some(self.projectile.gravity_scale.to_string()),
        );
        config.set("projectile", "drag", Some(self.projectile.drag.to_string()));
        config.set("projectile", "lifetime", Some(self.projectile.lifetime.to_string()));
        if let Some(kill_plane) = self.projectile.kill_plane {
            config.set("projectile", "kill_plane", Some(kill_plane.to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert!(approx_eq(config.tuning.min_speed, 1.0));
        assert!(approx_eq(config.tuning.max_speed, 5.0));
        assert!(approx_eq(config.tuning.charge_rate, 3.0));
        assert!(approx_eq(config.tuning.cooldown_duration, 0.5));
        assert!(approx_eq(config.tuning.orientation_interval, 0.02));
        assert_eq!(config.tuning.prediction_steps, 2000);
        assert_eq!(config.window_size(), (1280, 720));
        assert!(config.projectile.kill_plane.is_none());
    }

    #[test]
    fn test_load_from_str_overrides_only_present_keys() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[launcher]\nmax_speed = 12\ncooldown = 0.25\n\n[physics]\ngravity_y = -9.8\nvelocity_iterations = 3\n\n[projectile]\ndrag = 0.5\nkill_plane = 900\n",
            )
            .unwrap();
        assert!(approx_eq(config.tuning.max_speed, 12.0));
        assert!(approx_eq(config.tuning.cooldown_duration, 0.25));
        assert!(approx_eq(config.tuning.min_speed, 1.0));
        assert!(approx_eq(config.physics.gravity.y, -9.8));
        assert_eq!(config.physics.velocity_iterations, 3);
        assert!(approx_eq(config.projectile.drag, 0.5));
        assert_eq!(config.projectile.kill_plane, Some(900.0));
    }

    #[test]
    fn test_load_normalizes_tuning() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[launcher]\nmin_speed = 8\nmax_speed = 2\n")
            .unwrap();
        assert!(approx_eq(config.tuning.max_speed, 8.0));
    }

    #[test]
    fn test_load_rejects_non_finite_values() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[launcher]\nmin_speed = nan\norientation_interval = nan\nrotation_offset = inf\n\n[physics]\ntimestep = nan\ngravity_y = inf\n\n[projectile]\nlifetime = nan\nkill_plane = -inf\n",
            )
            .unwrap();
        let defaults = GameConfig::new();
        assert!(approx_eq(config.tuning.min_speed, 1.0));
        assert!(approx_eq(config.tuning.orientation_interval, 0.02));
        assert!(approx_eq(config.tuning.visual_rotation_offset, 0.0));
        assert!(approx_eq(config.physics.timestep, defaults.physics.timestep));
        assert!(approx_eq(config.physics.gravity.y, 980.0));
        assert!(approx_eq(config.projectile.lifetime, 5.0));
        assert!(config.projectile.kill_plane.is_none());
    }

    #[test]
    fn test_load_rejects_non_positive_timestep() {
        let mut config = GameConfig::new();
        config.load_from_str("[physics]\ntimestep = 0\n").unwrap();
        assert!(approx_eq(config.physics.timestep, 0.02));
        config.load_from_str("[physics]\ntimestep = -1\n").unwrap();
        assert!(approx_eq(config.physics.timestep, 0.02));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/dir/chargeshot.ini");
        assert!(config.load_from_file().is_err());
        assert!(approx_eq(config.tuning.max_speed, 5.0));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "chargeshot_config_{}.ini",
            std::process::id()
        ));
        let mut config = GameConfig::with_path(&path);
        config.tuning.charge_rate = 7.5;
        config.tuning.prediction_steps = 300;
        config.projectile.lifetime = 2.0;
        config.physics.timestep = 0.01;
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(approx_eq(loaded.tuning.charge_rate, 7.5));
        assert_eq!(loaded.tuning.prediction_steps, 300);
        assert!(approx_eq(loaded.projectile.lifetime, 2.0));
        assert!(approx_eq(loaded.physics.timestep, 0.01));
    }
}
