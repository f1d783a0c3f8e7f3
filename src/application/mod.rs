//! Application layer - Use cases and port interfaces
//!
//! Contains the clipboard guard, selection acquisition, the switch
//! workflow and the trait definitions for external tools.

pub mod acquire;
pub mod guard;
pub mod ports;
pub mod switch;

#[cfg(test)]
mod testing;

// Re-export use cases
pub use acquire::SelectionAcquirer;
pub use guard::ClipboardGuard;
pub use switch::{SwitchError, SwitchInput, SwitchLayoutUseCase, SwitchOutcome};
