//! Lipunto - keyboard layout fixer for KDE Plasma on Wayland
//!
//! Converts the last typed word (or the current selection) between the
//! English and Russian QWERTY layouts, pastes it back in place and
//! switches the active keyboard layout. The clipboard manager's history
//! is saved before the clipboard is borrowed and restored afterwards.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Layout tables, key sequences, clipboard snapshots, config and errors
//! - **Application**: The clipboard guard, selection acquisition, the switch use case and port traits
//! - **Infrastructure**: Adapters for qdbus/Klipper, ydotool, wl-paste, notifications and logging
//! - **CLI**: Command-line interface, config subcommand and the run wiring

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
