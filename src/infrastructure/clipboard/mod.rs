//! Clipboard infrastructure module
//!
//! Talks to the KDE clipboard manager, which keeps the history the guard
//! has to preserve.

mod klipper;

pub use klipper::KlipperClipboard;
