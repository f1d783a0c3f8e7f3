//! Switch layout use case

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::domain::config::Delays;
use crate::domain::conversion::ConversionResult;
use crate::domain::error::LayoutTableError;
use crate::domain::layout::LayoutPair;
use crate::domain::selection::{SelectionMode, SelectionSource};

use super::acquire::SelectionAcquirer;
use super::guard::ClipboardGuard;
use super::ports::{
    ClipboardService, DependencyChecker, InputInjector, LayoutIndicator, NotificationIcon,
    Notifier, SelectionReader, ToolError,
};

const NOTIFICATION_TITLE: &str = "Lipunto";

/// Errors from the switch layout use case
#[derive(Debug, Error)]
pub enum SwitchError {
    #[error("Missing required tools: {}", tools.join(", "))]
    DependencyMissing { tools: Vec<String> },

    #[error("External command failed: {0}")]
    ExternalCommandFailed(ToolError),

    #[error("Invalid layout table: {0}")]
    LayoutTable(#[from] LayoutTableError),
}

impl From<ToolError> for SwitchError {
    fn from(e: ToolError) -> Self {
        match e {
            ToolError::NotFound { tool } => Self::DependencyMissing { tools: vec![tool] },
            other => Self::ExternalCommandFailed(other),
        }
    }
}

/// Input parameters for one run
#[derive(Debug, Clone)]
pub struct SwitchInput {
    /// Convert the last word or the current selection
    pub mode: SelectionMode,
    /// Conversion direction
    pub pair: LayoutPair,
    /// Where the selected text is read from
    pub source: SelectionSource,
    /// Settle delays around each external step
    pub delays: Delays,
    /// Whether to show desktop notifications
    pub enable_notify: bool,
    /// Executables that must be installed before anything is touched
    pub required_tools: Vec<String>,
}

impl Default for SwitchInput {
    fn default() -> Self {
        Self {
            mode: SelectionMode::default(),
            pair: LayoutPair::default(),
            source: SelectionSource::default(),
            delays: Delays::default(),
            enable_notify: false,
            required_tools: Vec::new(),
        }
    }
}

/// How a run ended when no error occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// There was no text to convert; nothing was touched
    NothingSelected,
    /// Text was converted and pasted back
    Converted(ConversionResult),
}

/// Text seen so far, for reporting a failed run
#[derive(Default)]
struct Attempt {
    original: String,
    converted: String,
}

/// One-shot layout switch use case
pub struct SwitchLayoutUseCase<C, I, S, L, N, D>
where
    C: ClipboardService,
    I: InputInjector,
    S: SelectionReader,
    L: LayoutIndicator,
    N: Notifier,
    D: DependencyChecker,
{
    clipboard: C,
    input: I,
    selection: S,
    layout: L,
    notifier: N,
    dependencies: D,
}

impl<C, I, S, L, N, D> SwitchLayoutUseCase<C, I, S, L, N, D>
where
    C: ClipboardService,
    I: InputInjector,
    S: SelectionReader,
    L: LayoutIndicator,
    N: Notifier,
    D: DependencyChecker,
{
    /// Create a new use case instance
    pub fn new(
        clipboard: C,
        input: I,
        selection: S,
        layout: L,
        notifier: N,
        dependencies: D,
    ) -> Self {
        Self {
            clipboard,
            input,
            selection,
            layout,
            notifier,
            dependencies,
        }
    }

    /// Execute the switch workflow.
    ///
    /// Every outcome, including errors, is notified when notifications
    /// are enabled.
    pub async fn execute(&self, input: SwitchInput) -> Result<SwitchOutcome, SwitchError> {
        let started = Instant::now();
        info!(mode = input.mode.as_str(), pair = %input.pair, "switch started");

        let mut attempt = Attempt::default();
        let result = self.run(&input, &mut attempt).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(SwitchOutcome::NothingSelected) => info!(elapsed_ms, "nothing selected"),
            Ok(SwitchOutcome::Converted(_)) => info!(elapsed_ms, "switch finished"),
            Err(e) => error!(elapsed_ms, error = %e, "switch failed"),
        }

        if input.enable_notify {
            self.report(&result, attempt).await;
        }
        result
    }

    async fn run(
        &self,
        input: &SwitchInput,
        attempt: &mut Attempt,
    ) -> Result<SwitchOutcome, SwitchError> {
        let missing = self.dependencies.missing(&input.required_tools).await;
        if !missing.is_empty() {
            return Err(SwitchError::DependencyMissing { tools: missing });
        }

        let mut guard = ClipboardGuard::new(&self.clipboard, &self.input, input.delays);
        let acquirer = SelectionAcquirer::new(
            &self.input,
            &self.selection,
            input.source,
            input.delays.text_process,
        );

        let text = acquirer.acquire(input.mode, &mut guard).await?;
        if text.is_empty() {
            return Ok(SwitchOutcome::NothingSelected);
        }
        attempt.original.clone_from(&text);

        let converted = input.pair.convert(&text)?;
        attempt.converted.clone_from(&converted);
        debug!(
            chars = text.chars().count(),
            pair = %input.pair,
            "text converted"
        );

        guard.guarded_replace(&converted).await?;

        let mut result = ConversionResult::succeeded(text, converted);
        if let Err(e) = self.layout.advance_to_next_layout().await {
            warn!(error = %e, "could not advance keyboard layout");
            result = result.with_warning(format!("Layout not switched: {}", e));
        }
        Ok(SwitchOutcome::Converted(result))
    }

    async fn report(&self, result: &Result<SwitchOutcome, SwitchError>, attempt: Attempt) {
        let (message, icon) = match result {
            Ok(SwitchOutcome::NothingSelected) => {
                ("Nothing selected".to_string(), NotificationIcon::Warning)
            }
            Ok(SwitchOutcome::Converted(conversion)) => {
                let icon = if conversion.warning.is_some() {
                    NotificationIcon::Warning
                } else {
                    NotificationIcon::Success
                };
                (conversion.summary(), icon)
            }
            Err(e) if attempt.original.is_empty() => (e.to_string(), NotificationIcon::Error),
            Err(e) => {
                let failed =
                    ConversionResult::failed(attempt.original, attempt.converted, e.to_string());
                (failed.summary(), NotificationIcon::Error)
            }
        };

        if let Err(e) = self
            .notifier
            .notify(NOTIFICATION_TITLE, &message, icon)
            .await
        {
            warn!(error = %e, "notification failed");
        }
    }
}
