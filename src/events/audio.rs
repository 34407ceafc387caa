//! Messages exchanged with the sound effect thread.
//!
//! Launcher hooks write [`AudioCmd`] into `Messages<AudioCmd>`; the frame
//! schedule forwards them over the bridge channel. [`AudioMessage`] is the
//! thread's reply stream, read back by
//! [`log_audio_messages`](crate::systems::audio::log_audio_messages).

use bevy_ecs::message::Message;

/// Requests for the sound effect thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    /// Cut a playing effect short, e.g. the charge loop on release.
    StopFx { id: String },
    Shutdown,
}

/// Replies from the sound effect thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
    FxFinished { id: String },
}
