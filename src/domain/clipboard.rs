//! Clipboard snapshot value object

/// Upper bound on history entries read in one snapshot (Klipper's maximum)
pub const MAX_HISTORY_ITEMS: usize = 2048;

/// Clipboard state captured at one instant.
///
/// Lives only between the capture and restore steps of a single guarded
/// operation; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    /// Current clipboard item (may be empty)
    pub last_item: String,
    /// History entries, most recent first
    pub history: Vec<String>,
}

impl ClipboardSnapshot {
    pub fn new(last_item: String, history: Vec<String>) -> Self {
        Self { last_item, history }
    }

    /// History entries oldest first, the order they must be re-inserted in
    /// so the newest ends up on top again
    pub fn reinsertion_order(&self) -> impl Iterator<Item = &str> {
        self.history.iter().rev().map(String::as_str)
    }

    /// Whether there is a current item to put back
    pub fn has_last_item(&self) -> bool {
        !self.last_item.is_empty()
    }
}
