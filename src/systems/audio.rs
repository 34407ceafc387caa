//! Sound effects backed by a dedicated thread and Raylib.
//!
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio device
//!   and every loaded [`Sound`], and reacts to [`AudioCmd`] messages.
//! - [`forward_audio_cmds`] sends the commands written by ECS systems and
//!   observers (launcher charge/release hooks) to the thread.
//! - [`poll_audio_messages`] drains the thread's replies into
//!   `Messages<AudioMessage>` and [`log_audio_messages`] reports them.
//!
//! Raylib audio calls stay on one thread; the game thread only touches
//! channels.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::{debug, error, info, trace, warn};
use raylib::core::audio::{RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

/// Drain pending replies from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Log what the audio thread reports back.
///
/// A failed load means the launcher plays silently for that id.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::FxLoaded { id } => debug!("fx '{}' ready", id),
            AudioMessage::FxLoadFailed { id, error } => {
                warn!("fx '{}' unavailable, playing without it: {}", id, error)
            }
            AudioMessage::FxFinished { id } => trace!("fx '{}' finished", id),
        }
    }
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS [`AudioCmd`] messages to the audio thread.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Send fails only after shutdown.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`].
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Entry point of the dedicated audio thread.
///
/// Blocks until it receives [`AudioCmd::Shutdown`] or the command channel
/// disconnects. If the audio device cannot be opened the thread logs the
/// failure and exits; commands sent afterwards are dropped, so the game keeps
/// running silently.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("Failed to initialize audio device: {}", e);
            return;
        }
    };

    info!(
        "Audio thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();
    let mut fx_playing: FxHashSet<String> = FxHashSet::default();

    'run: loop {
        loop {
            let cmd = match rx_cmd.try_recv() {
                Ok(cmd) => cmd,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break 'run,
            };
            match cmd {
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        debug!("fx loaded id='{}' path='{}'", id, path);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_evt.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        warn!("fx load failed id='{}' path='{}' error='{}'", id, path, e);
                        let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        debug!("fx play id='{}'", id);
                        sound.play();
                        fx_playing.insert(id);
                    } else {
                        debug!("fx play skipped id='{}' reason='not loaded'", id);
                    }
                }
                AudioCmd::StopFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        sound.stop();
                    }
                }
                AudioCmd::Shutdown => {
                    info!("Audio shutdown requested");
                    break 'run;
                }
            }
        }

        // Emit FxFinished once per play when Raylib reports the sound stopped.
        let fx_ended: Vec<String> = fx_playing
            .iter()
            .filter(|id| !sounds.get(*id).map(|s| s.is_playing()).unwrap_or(false))
            .cloned()
            .collect();
        for id in fx_ended {
            fx_playing.remove(&id);
            let _ = tx_evt.send(AudioMessage::FxFinished { id });
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    info!(
        "Audio thread exiting (id={:?})",
        std::thread::current().id()
    );
    // Sounds drop before `audio`.
    drop(sounds);
}
