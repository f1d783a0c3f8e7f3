//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod dependency;
pub mod input;
pub mod layout_indicator;
pub mod notifier;
pub mod selection;
pub mod tool;

// Re-export common types
pub use clipboard::ClipboardService;
pub use config::ConfigStore;
pub use dependency::DependencyChecker;
pub use input::InputInjector;
pub use layout_indicator::LayoutIndicator;
pub use notifier::{NotificationError, NotificationIcon, Notifier};
pub use selection::SelectionReader;
pub use tool::ToolError;
