//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! Pages only render static markup. Behavior is attached afterwards by the
//! controller, which finds controls through the ids in [`crate::view`].

pub mod contact;
