//! Selection acquisition
//!
//! Turns "last word" and "current selection" into one text-producing step.

use std::time::Duration;

use tracing::debug;

use crate::domain::keys::KeySequence;
use crate::domain::selection::{SelectionMode, SelectionSource};

use super::guard::ClipboardGuard;
use super::ports::{ClipboardService, InputInjector, SelectionReader, ToolError};

/// Reads the text to convert from the focused application.
///
/// `LastWord` injects Ctrl+Shift+Left first, which really moves the
/// selection in the target application.
pub struct SelectionAcquirer<'a, I, S>
where
    I: InputInjector,
    S: SelectionReader,
{
    input: &'a I,
    reader: &'a S,
    source: SelectionSource,
    settle: Duration,
}

impl<'a, I, S> SelectionAcquirer<'a, I, S>
where
    I: InputInjector,
    S: SelectionReader,
{
    /// `settle` is the wait between selecting the word and reading it
    pub fn new(input: &'a I, reader: &'a S, source: SelectionSource, settle: Duration) -> Self {
        Self {
            input,
            reader,
            source,
            settle,
        }
    }

    /// Get the text for `mode`.
    ///
    /// # Returns
    /// An empty string when nothing is selected; whitespace-only text
    /// counts as nothing.
    #[tracing::instrument(skip(self, guard), fields(source = %self.source))]
    pub async fn acquire<C>(
        &self,
        mode: SelectionMode,
        guard: &mut ClipboardGuard<'_, C, I>,
    ) -> Result<String, ToolError>
    where
        C: ClipboardService,
    {
        if mode == SelectionMode::LastWord {
            self.input
                .send_keys(&KeySequence::select_previous_word())
                .await?;
            if !self.settle.is_zero() {
                debug!(delay_ms = self.settle.as_millis() as u64, "waiting for selection");
                tokio::time::sleep(self.settle).await;
            }
        }

        let text = match self.source {
            SelectionSource::Primary => self.reader.primary_selection().await?,
            SelectionSource::Clipboard => guard.guarded_capture().await?,
        };

        if text.trim().is_empty() {
            debug!("selection is empty");
            return Ok(String::new());
        }
        debug!(chars = text.chars().count(), "selection acquired");
        Ok(text)
    }
}
