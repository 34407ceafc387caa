//! Per-entity animation signals.
//!
//! Launcher hooks publish what an animator needs through [`Signals`]:
//! persistent flags (`"attacking"`), one-shot triggers (`"charge"`,
//! `"release"`) that the animation side consumes with
//! [`Signals::take_trigger`], and scalars such as `"charge_level"`.

use bevy_ecs::prelude::Component;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Component, Default)]
pub struct Signals {
    pub scalars: FxHashMap<String, f32>,
    pub flags: FxHashSet<String>,
    pub triggers: FxHashSet<String>,
}

impl Signals {
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }
    pub fn get_scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
    /// Arm a one-shot trigger.
    pub fn set_trigger(&mut self, key: impl Into<String>) {
        self.triggers.insert(key.into());
    }
    /// Disarm a trigger without firing it.
    pub fn reset_trigger(&mut self, key: &str) {
        self.triggers.remove(key);
    }
    pub fn has_trigger(&self, key: &str) -> bool {
        self.triggers.contains(key)
    }
    /// Consume a trigger. Returns `true` if it was armed.
    pub fn take_trigger(&mut self, key: &str) -> bool {
        self.triggers.remove(key)
    }
}
