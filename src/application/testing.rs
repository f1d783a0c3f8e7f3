//! In-memory port implementations shared by the use case tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::keys::KeySequence;

use super::ports::{
    ClipboardService, DependencyChecker, InputInjector, LayoutIndicator, NotificationError,
    NotificationIcon, Notifier, SelectionReader, ToolError,
};

/// Clipboard manager calls, in the order they were made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Current,
    SetCurrent(String),
    ClearCurrent,
    HistoryItem(usize),
    ClearHistory,
}

#[derive(Default)]
struct ClipState {
    current: String,
    history: Vec<String>,
    calls: Vec<Call>,
    fail_reads: bool,
    fail_clear: bool,
}

impl ClipState {
    /// Klipper keeps entries unique and moves a re-set entry to the top
    fn push(&mut self, text: &str) {
        self.history.retain(|item| item != text);
        self.history.insert(0, text.to_string());
        self.current = text.to_string();
    }
}

/// Simulated history-keeping clipboard manager
#[derive(Clone, Default)]
pub struct FakeClipboard {
    state: Arc<Mutex<ClipState>>,
}

impl FakeClipboard {
    /// History most recent first; the current item is the newest entry
    pub fn with_history(items: &[&str]) -> Self {
        let state = ClipState {
            current: items.first().map(|s| s.to_string()).unwrap_or_default(),
            history: items.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn fail_reads(&self) {
        self.state.lock().unwrap().fail_reads = true;
    }

    pub fn fail_clear(&self) {
        self.state.lock().unwrap().fail_clear = true;
    }

    pub fn history(&self) -> Vec<String> {
        self.state.lock().unwrap().history.clone()
    }

    pub fn current_item(&self) -> String {
        self.state.lock().unwrap().current.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Whether anything was ever written to the clipboard
    pub fn was_mutated(&self) -> bool {
        self.calls()
            .iter()
            .any(|c| matches!(c, Call::SetCurrent(_) | Call::ClearCurrent | Call::ClearHistory))
    }

    /// What a target application does on Ctrl+C
    fn copy_from_app(&self, text: &str) {
        self.state.lock().unwrap().push(text);
    }
}

fn clipboard_failure() -> ToolError {
    ToolError::failed("fake-clipboard", "simulated failure")
}

#[async_trait]
impl ClipboardService for FakeClipboard {
    async fn current(&self) -> Result<String, ToolError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Current);
        if state.fail_reads {
            return Err(clipboard_failure());
        }
        Ok(state.current.clone())
    }

    async fn set_current(&self, text: &str) -> Result<(), ToolError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::SetCurrent(text.to_string()));
        state.push(text);
        Ok(())
    }

    async fn clear_current(&self) -> Result<(), ToolError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::ClearCurrent);
        state.current.clear();
        Ok(())
    }

    async fn history_item(&self, index: usize) -> Result<Option<String>, ToolError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::HistoryItem(index));
        if state.fail_reads {
            return Err(clipboard_failure());
        }
        Ok(state.history.get(index).cloned())
    }

    async fn clear_history(&self) -> Result<(), ToolError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::ClearHistory);
        if state.fail_clear {
            return Err(clipboard_failure());
        }
        state.history.clear();
        state.current.clear();
        Ok(())
    }
}

/// Simulated keystroke injector
#[derive(Clone, Default)]
pub struct FakeInput {
    sent: Arc<Mutex<Vec<&'static str>>>,
    pasted: Arc<Mutex<Vec<String>>>,
    fail_on: Option<&'static str>,
    clipboard: Option<FakeClipboard>,
    copy_text: Option<String>,
}

impl FakeInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails when the sequence called `name` is sent
    pub fn failing(name: &'static str) -> Self {
        Self {
            fail_on: Some(name),
            ..Default::default()
        }
    }

    /// Records the clipboard content at each paste
    pub fn attached(clipboard: &FakeClipboard) -> Self {
        Self {
            clipboard: Some(clipboard.clone()),
            ..Default::default()
        }
    }

    /// Behaves like an application whose selection is `text` on copy
    pub fn copying(clipboard: &FakeClipboard, text: &str) -> Self {
        Self {
            clipboard: Some(clipboard.clone()),
            copy_text: Some(text.to_string()),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<&'static str> {
        self.sent.lock().unwrap().clone()
    }

    pub fn pasted(&self) -> Vec<String> {
        self.pasted.lock().unwrap().clone()
    }
}

#[async_trait]
impl InputInjector for FakeInput {
    async fn send_keys(&self, keys: &KeySequence) -> Result<(), ToolError> {
        self.sent.lock().unwrap().push(keys.name());
        if self.fail_on == Some(keys.name()) {
            return Err(ToolError::failed("fake-input", "simulated failure"));
        }
        if let Some(ref clipboard) = self.clipboard {
            if keys == &KeySequence::paste() {
                self.pasted.lock().unwrap().push(clipboard.current_item());
            }
            if keys == &KeySequence::copy() {
                if let Some(ref text) = self.copy_text {
                    clipboard.copy_from_app(text);
                }
            }
        }
        Ok(())
    }
}

/// Simulated primary selection
#[derive(Clone)]
pub struct FakeSelection {
    text: String,
    reads: Arc<Mutex<usize>>,
}

impl FakeSelection {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            reads: Arc::new(Mutex::new(0)),
        }
    }

    pub fn reads(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

#[async_trait]
impl SelectionReader for FakeSelection {
    async fn primary_selection(&self) -> Result<String, ToolError> {
        *self.reads.lock().unwrap() += 1;
        Ok(self.text.clone())
    }
}

/// Simulated layout indicator
#[derive(Clone, Default)]
pub struct FakeLayout {
    advanced: Arc<Mutex<usize>>,
    fail: bool,
}

impl FakeLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn advanced(&self) -> usize {
        *self.advanced.lock().unwrap()
    }
}

#[async_trait]
impl LayoutIndicator for FakeLayout {
    async fn advance_to_next_layout(&self) -> Result<(), ToolError> {
        if self.fail {
            return Err(ToolError::not_found("qdbus"));
        }
        *self.advanced.lock().unwrap() += 1;
        Ok(())
    }
}

/// Notifier that records every notification
#[derive(Clone, Default)]
pub struct FakeNotifier {
    shown: Arc<Mutex<Vec<(String, NotificationIcon)>>>,
}

impl FakeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<(String, NotificationIcon)> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn notify(
        &self,
        _title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        self.shown.lock().unwrap().push((message.to_string(), icon));
        Ok(())
    }
}

/// Dependency checker with a fixed set of missing tools
#[derive(Default)]
pub struct FakeDependencies {
    missing: Vec<String>,
}

impl FakeDependencies {
    pub fn all_installed() -> Self {
        Self::default()
    }

    pub fn with_missing(tools: &[&str]) -> Self {
        Self {
            missing: tools.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
impl DependencyChecker for FakeDependencies {
    async fn missing(&self, tools: &[String]) -> Vec<String> {
        tools
            .iter()
            .filter(|t| self.missing.contains(*t))
            .cloned()
            .collect()
    }
}
