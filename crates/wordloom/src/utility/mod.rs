//! # Utilities

pub mod timers;
