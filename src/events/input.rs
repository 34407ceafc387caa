//! Input action events.
//!
//! [`InputEvent`] is triggered when a gameplay-relevant action is pressed or
//! released. The launcher observer listens for [`InputAction::Fire`]; debug
//! toggling has its own [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).

use bevy_ecs::prelude::*;

/// Logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Charge while held, launch on release (default: Space or left mouse).
    Fire,
    /// Back/quit (default: Escape).
    Back,
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}
