//! Launcher events and the hooks that react to them.
//!
//! The launcher systems trigger these events; the observers below translate
//! them into animation signals on the launcher's owner and into sound effect
//! commands. Nothing in the charge logic depends on the hooks: removing an
//! observer silences that side effect and nothing else.
//!
//! - [`ChargeStartedEvent`] – a charge began (Idle -> Charging)
//! - [`ChargeReleasedEvent`] – a projectile was launched
//! - [`LauncherStateChangedEvent`] – any state transition, for UI and logs

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::chargecontroller::ChargeState;
use crate::components::launcher::{LaunchOrigin, LauncherSounds};
use crate::components::signals::Signals;
use crate::events::audio::AudioCmd;

/// A launcher entered `Charging`.
#[derive(Event, Debug, Clone, Copy)]
pub struct ChargeStartedEvent {
    pub launcher: Entity,
}

/// A launcher released its charge and spawned `projectile`.
#[derive(Event, Debug, Clone, Copy)]
pub struct ChargeReleasedEvent {
    pub launcher: Entity,
    pub projectile: Entity,
    pub velocity: Vector2,
}

/// A launcher moved from one [`ChargeState`] to another.
#[derive(Event, Debug, Clone, Copy)]
pub struct LauncherStateChangedEvent {
    pub launcher: Entity,
    pub from: ChargeState,
    pub to: ChargeState,
}

/// Animation hook for the start of a charge.
///
/// On the owner's [`Signals`]: disarms a pending `"release"`, arms
/// `"charge"` and raises the `"attacking"` flag.
pub fn charge_started_signals_observer(
    trigger: On<ChargeStartedEvent>,
    launchers: Query<&LaunchOrigin>,
    mut signals: Query<&mut Signals>,
) {
    let Ok(origin) = launchers.get(trigger.event().launcher) else {
        return;
    };
    if let Ok(mut signals) = signals.get_mut(origin.owner) {
        signals.reset_trigger("release");
        signals.set_trigger("charge");
        signals.set_flag("attacking");
    }
}

/// Animation hook for a release: arms `"release"` and lowers `"attacking"`.
pub fn charge_released_signals_observer(
    trigger: On<ChargeReleasedEvent>,
    launchers: Query<&LaunchOrigin>,
    mut signals: Query<&mut Signals>,
) {
    let Ok(origin) = launchers.get(trigger.event().launcher) else {
        return;
    };
    if let Ok(mut signals) = signals.get_mut(origin.owner) {
        signals.set_trigger("release");
        signals.clear_flag("attacking");
    }
}

/// Sound hook for the start of a charge: plays one charge variant.
pub fn charge_started_audio_observer(
    trigger: On<ChargeStartedEvent>,
    sounds: Query<&LauncherSounds>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let Ok(sounds) = sounds.get(trigger.event().launcher) else {
        return;
    };
    if let Some(id) = sounds.pick_charge() {
        audio_cmd_writer.write(AudioCmd::PlayFx { id: id.to_string() });
    }
}

/// Sound hook for a release: cuts any charge sound, then plays one release
/// variant.
pub fn charge_released_audio_observer(
    trigger: On<ChargeReleasedEvent>,
    sounds: Query<&LauncherSounds>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let Ok(sounds) = sounds.get(trigger.event().launcher) else {
        return;
    };
    for id in &sounds.charge {
        audio_cmd_writer.write(AudioCmd::StopFx { id: id.clone() });
    }
    if let Some(id) = sounds.pick_release() {
        audio_cmd_writer.write(AudioCmd::PlayFx { id: id.to_string() });
    }
}

/// Logs every launcher transition at debug level.
pub fn log_launcher_state_observer(trigger: On<LauncherStateChangedEvent>) {
    let event = trigger.event();
    debug!(
        "launcher {:?}: {} -> {}",
        event.launcher,
        event.from.as_str(),
        event.to.as_str()
    );
}
