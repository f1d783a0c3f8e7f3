//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors: the layout tables, key
//! sequences, clipboard snapshots and configuration.
//! This layer has no dependencies on external systems.

pub mod clipboard;
pub mod config;
pub mod conversion;
pub mod error;
pub mod keys;
pub mod layout;
pub mod selection;

// Re-export common types
pub use clipboard::ClipboardSnapshot;
pub use config::AppConfig;
pub use conversion::ConversionResult;
pub use error::*;
pub use keys::{KeyEvent, KeySequence};
pub use layout::{LayoutPair, LayoutTable};
pub use selection::{SelectionMode, SelectionSource};
