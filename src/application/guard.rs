//! Clipboard history guard
//!
//! Borrows the system clipboard for one transient value and puts the
//! user's clipboard history back afterwards, on success and on failure.

use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::clipboard::{ClipboardSnapshot, MAX_HISTORY_ITEMS};
use crate::domain::config::Delays;
use crate::domain::keys::KeySequence;

use super::ports::{ClipboardService, InputInjector, ToolError};

/// Per-run session that owns the clipboard snapshot.
///
/// The snapshot slot is filled by a capture and emptied by the matching
/// restore, so it is `None` whenever no guarded operation is in progress.
pub struct ClipboardGuard<'a, C, I>
where
    C: ClipboardService,
    I: InputInjector,
{
    clipboard: &'a C,
    input: &'a I,
    delays: Delays,
    snapshot: Option<ClipboardSnapshot>,
}

impl<'a, C, I> ClipboardGuard<'a, C, I>
where
    C: ClipboardService,
    I: InputInjector,
{
    /// Start a session with no snapshot held
    pub fn new(clipboard: &'a C, input: &'a I, delays: Delays) -> Self {
        Self {
            clipboard,
            input,
            delays,
            snapshot: None,
        }
    }

    /// Whether a snapshot is currently held
    pub fn holds_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Put `text` on the clipboard, paste it into the focused window,
    /// then restore the previous clipboard state.
    ///
    /// Restoration runs whether or not the paste succeeded. An error from
    /// the paste step wins over an error from the restore step.
    #[tracing::instrument(skip_all, fields(chars = text.chars().count()))]
    pub async fn guarded_replace(&mut self, text: &str) -> Result<(), ToolError> {
        self.capture().await?;
        let pasted = self.paste_transient(text).await;
        let restored = self.restore().await;
        combine(pasted, restored)
    }

    /// Copy the selection of the focused window through the clipboard,
    /// read it, then restore the previous clipboard state.
    #[tracing::instrument(skip_all)]
    pub async fn guarded_capture(&mut self) -> Result<String, ToolError> {
        self.capture().await?;
        let copied = self.copy_transient().await;
        let restored = self.restore().await;
        combine(copied, restored)
    }

    /// Read the current item and the full history into the snapshot slot.
    ///
    /// Nothing is mutated here, so a failure needs no restore.
    async fn capture(&mut self) -> Result<(), ToolError> {
        // A stale snapshot would mean a previous restore never ran
        if self.snapshot.take().is_some() {
            warn!("discarding clipboard snapshot left by an earlier operation");
        }

        let last_item = self.clipboard.current().await?;
        let history = self.read_history().await?;
        debug!(history_len = history.len(), "captured clipboard state");

        self.snapshot = Some(ClipboardSnapshot::new(last_item, history));
        Ok(())
    }

    async fn read_history(&self) -> Result<Vec<String>, ToolError> {
        let mut history = Vec::new();
        while history.len() < MAX_HISTORY_ITEMS {
            match self.clipboard.history_item(history.len()).await? {
                Some(item) => history.push(item),
                None => return Ok(history),
            }
        }
        warn!(limit = MAX_HISTORY_ITEMS, "clipboard history truncated");
        Ok(history)
    }

    async fn paste_transient(&self, text: &str) -> Result<(), ToolError> {
        self.clipboard.set_current(text).await?;
        pause("clipboard_set", self.delays.clipboard_set).await;

        self.input.send_keys(&KeySequence::paste()).await?;
        pause("paste", self.delays.paste).await;
        Ok(())
    }

    /// The current item is emptied first so that a copy with nothing
    /// selected reads back as empty instead of the previous item.
    async fn copy_transient(&self) -> Result<String, ToolError> {
        self.clipboard.clear_current().await?;
        self.input.send_keys(&KeySequence::copy()).await?;
        pause("clipboard_get", self.delays.clipboard_get).await;
        self.clipboard.current().await
    }

    /// Clear the manager's history, re-insert the saved entries oldest
    /// first, then put back the saved current item.
    ///
    /// Best effort: every step is attempted and the first error returned.
    async fn restore(&mut self) -> Result<(), ToolError> {
        let Some(snapshot) = self.snapshot.take() else {
            return Ok(());
        };

        let mut first_error = None;
        let mut record = |result: Result<(), ToolError>| {
            if let Err(e) = result {
                warn!(error = %e, "clipboard restore step failed");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        };

        record(self.clipboard.clear_history().await);
        for item in snapshot.reinsertion_order() {
            record(self.clipboard.set_current(item).await);
        }
        if snapshot.has_last_item() {
            record(self.clipboard.set_current(&snapshot.last_item).await);
        }
        debug!(history_len = snapshot.history.len(), "restored clipboard state");

        first_error.map_or(Ok(()), Err)
    }
}

/// Combine the guarded step with its restore
fn combine<T>(step: Result<T, ToolError>, restored: Result<(), ToolError>) -> Result<T, ToolError> {
    match (step, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(restore_err)) => Err(restore_err),
        (Err(step_err), Ok(())) => Err(step_err),
        (Err(step_err), Err(restore_err)) => {
            warn!(error = %restore_err, "clipboard restore failed after an earlier error");
            Err(step_err)
        }
    }
}

async fn pause(step: &'static str, delay: Duration) {
    if delay.is_zero() {
        return;
    }
    debug!(step, delay_ms = delay.as_millis() as u64, "waiting for target application");
    tokio::time::sleep(delay).await;
}
