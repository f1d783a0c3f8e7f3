//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces, wrapping
//! qdbus, ydotool, wl-paste, which and the desktop notification service.

pub mod clipboard;
pub mod command;
pub mod config;
pub mod dependency;
pub mod input;
pub mod layout;
pub mod logging;
pub mod notification;
pub mod selection;

// Re-export adapters
pub use clipboard::KlipperClipboard;
pub use command::CommandRunner;
pub use config::XdgConfigStore;
pub use dependency::WhichDependencyChecker;
pub use input::YdotoolInput;
pub use layout::KdeLayoutIndicator;
pub use logging::{init_logging, LoggingError, LoggingGuard, LoggingOptions};
pub use notification::{create_notifier, KdialogNotifier, NotifierKind, NotifyRustNotifier};
pub use selection::WlPasteSelection;
