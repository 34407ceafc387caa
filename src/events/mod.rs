//! Event types and observers.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`input`] – fire/back press and release events
//! - [`launcher`] – charge started, released and state changes, with hook observers
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod audio;
pub mod input;
pub mod launcher;
pub mod switchdebug;
