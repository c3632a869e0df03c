//! Utility helpers shared across controller modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate environment concerns (storage, timers, client
//! identity) from the controller logic to improve reuse and testability.

pub mod platform;
pub mod storage;
