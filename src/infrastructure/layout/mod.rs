//! Keyboard layout infrastructure module

mod kde;

pub use kde::KdeLayoutIndicator;
