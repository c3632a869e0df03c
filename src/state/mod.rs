//! Plain value types for page state.
//!
//! DESIGN
//! ======
//! Everything here is free of browser and capability dependencies so the
//! controller can pass values into pure helpers and tests can check them
//! directly.

pub mod contact;
pub mod submission;
pub mod theme;
