//! Bridge to the sound effect thread.
//!
//! The launcher hooks only ever write [`AudioCmd`] messages. Whether anything
//! plays them depends on which of the two setups the world got:
//!
//! - [`setup_audio`] starts the thread and inserts an [`AudioBridge`]; the
//!   frame schedule built with `audio_bridge = true` forwards commands to it.
//! - [`init_audio_messages`] registers the queues alone. Headless worlds run
//!   this way and the commands are simply dropped.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::info;
use std::thread::JoinHandle;

#[derive(Resource)]
pub struct AudioBridge {
    pub tx_cmd: Sender<AudioCmd>,
    pub rx_msg: Receiver<AudioMessage>,
    pub handle: JoinHandle<()>,
}

pub fn init_audio_messages(world: &mut World) {
    world.init_resource::<Messages<AudioMessage>>();
    world.init_resource::<Messages<AudioCmd>>();
}

pub fn setup_audio(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();
    let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));
    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
    init_audio_messages(world);
}

/// Stop the sound thread, if one runs, and wait for it.
///
/// Loaded effects are freed by the thread before it exits.
pub fn shutdown_audio(world: &mut World) {
    let Some(bridge) = world.remove_resource::<AudioBridge>() else {
        return;
    };
    let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
    if bridge.handle.join().is_err() {
        log::error!("Audio thread panicked");
        return;
    }
    info!("Audio thread joined");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_world_accepts_commands() {
        let mut world = World::new();
        init_audio_messages(&mut world);
        world
            .resource_mut::<Messages<AudioCmd>>()
            .write(AudioCmd::PlayFx { id: "charge".into() });
        assert!(world.get_resource::<AudioBridge>().is_none());

        shutdown_audio(&mut world);
        let cmds: Vec<AudioCmd> = world.resource_mut::<Messages<AudioCmd>>().drain().collect();
        assert_eq!(cmds, vec![AudioCmd::PlayFx { id: "charge".into() }]);
    }
}
