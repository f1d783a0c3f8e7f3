//! End-to-end switch workflow against simulated desktop tools

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use lipunto::application::ports::{
    ClipboardService, DependencyChecker, InputInjector, LayoutIndicator, NotificationError,
    NotificationIcon, Notifier, SelectionReader, ToolError,
};
use lipunto::application::{SwitchError, SwitchInput, SwitchLayoutUseCase, SwitchOutcome};
use lipunto::domain::config::Delays;
use lipunto::domain::keys::KeySequence;
use lipunto::domain::selection::{SelectionMode, SelectionSource};

/// Shared state of the simulated desktop
#[derive(Default)]
struct Desktop {
    clipboard: String,
    history: Vec<String>,
    selection: String,
    pasted: Vec<String>,
    keys: Vec<&'static str>,
    layout: u32,
    fail_paste: bool,
}

#[derive(Clone, Default)]
struct Sim(Arc<Mutex<Desktop>>);

impl Sim {
    fn with(history: &[&str], selection: &str) -> Self {
        let desktop = Desktop {
            clipboard: history.first().map(|s| s.to_string()).unwrap_or_default(),
            history: history.iter().map(|s| s.to_string()).collect(),
            selection: selection.to_string(),
            ..Default::default()
        };
        Self(Arc::new(Mutex::new(desktop)))
    }

    fn state(&self) -> std::sync::MutexGuard<'_, Desktop> {
        self.0.lock().unwrap()
    }
}

#[async_trait]
impl ClipboardService for Sim {
    async fn current(&self) -> Result<String, ToolError> {
        Ok(self.state().clipboard.clone())
    }

    async fn set_current(&self, text: &str) -> Result<(), ToolError> {
        let mut state = self.state();
        state.history.retain(|item| item != text);
        state.history.insert(0, text.to_string());
        state.clipboard = text.to_string();
        Ok(())
    }

    async fn clear_current(&self) -> Result<(), ToolError> {
        self.state().clipboard.clear();
        Ok(())
    }

    async fn history_item(&self, index: usize) -> Result<Option<String>, ToolError> {
        Ok(self.state().history.get(index).cloned())
    }

    async fn clear_history(&self) -> Result<(), ToolError> {
        let mut state = self.state();
        state.history.clear();
        state.clipboard.clear();
        Ok(())
    }
}

#[async_trait]
impl InputInjector for Sim {
    async fn send_keys(&self, keys: &KeySequence) -> Result<(), ToolError> {
        let mut state = self.state();
        state.keys.push(keys.name());
        if keys == &KeySequence::paste() {
            if state.fail_paste {
                return Err(ToolError::failed("ydotool", "failed to connect socket"));
            }
            let text = state.clipboard.clone();
            state.pasted.push(text);
        }
        Ok(())
    }
}

#[async_trait]
impl SelectionReader for Sim {
    async fn primary_selection(&self) -> Result<String, ToolError> {
        Ok(self.state().selection.clone())
    }
}

#[async_trait]
impl LayoutIndicator for Sim {
    async fn advance_to_next_layout(&self) -> Result<(), ToolError> {
        let mut state = self.state();
        state.layout = (state.layout + 1) % 2;
        Ok(())
    }
}

#[async_trait]
impl Notifier for Sim {
    async fn notify(
        &self,
        _title: &str,
        _message: &str,
        _icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        Err(NotificationError::ToolNotFound("notification daemon".into()))
    }
}

struct Installed(Vec<&'static str>);

#[async_trait]
impl DependencyChecker for Installed {
    async fn missing(&self, tools: &[String]) -> Vec<String> {
        tools
            .iter()
            .filter(|t| !self.0.contains(&t.as_str()))
            .cloned()
            .collect()
    }
}

fn use_case(
    sim: &Sim,
    installed: Installed,
) -> SwitchLayoutUseCase<Sim, Sim, Sim, Sim, Sim, Installed> {
    SwitchLayoutUseCase::new(
        sim.clone(),
        sim.clone(),
        sim.clone(),
        sim.clone(),
        sim.clone(),
        installed,
    )
}

fn input() -> SwitchInput {
    SwitchInput {
        mode: SelectionMode::LastWord,
        source: SelectionSource::Primary,
        delays: Delays::none(),
        enable_notify: true,
        required_tools: vec!["qdbus".into(), "ydotool".into(), "wl-paste".into()],
        ..Default::default()
    }
}

fn everything() -> Installed {
    Installed(vec!["qdbus", "ydotool", "wl-paste"])
}

#[tokio::test]
async fn ghbdtn_becomes_privet_and_history_survives() {
    let sim = Sim::with(&["older copy", "oldest copy"], "ghbdtn");

    let outcome = use_case(&sim, everything()).execute(input()).await.unwrap();

    let SwitchOutcome::Converted(result) = outcome else {
        panic!("expected a conversion");
    };
    assert_eq!(result.converted, "привет");
    // A failing notifier does not fail the run
    assert!(result.success);

    let state = sim.state();
    assert_eq!(state.pasted, ["привет"]);
    assert_eq!(state.history, ["older copy", "oldest copy"]);
    assert_eq!(state.clipboard, "older copy");
    assert_eq!(state.layout, 1);
    assert_eq!(state.keys, ["select-previous-word", "paste"]);
}

#[tokio::test]
async fn nothing_selected_is_not_an_error() {
    let sim = Sim::with(&["keep me"], "");

    let outcome = use_case(&sim, everything()).execute(input()).await.unwrap();

    assert_eq!(outcome, SwitchOutcome::NothingSelected);
    let state = sim.state();
    assert!(state.pasted.is_empty());
    assert_eq!(state.history, ["keep me"]);
    assert_eq!(state.layout, 0);
}

#[tokio::test]
async fn missing_tool_stops_the_run() {
    let sim = Sim::with(&["keep me"], "ghbdtn");

    let err = use_case(&sim, Installed(vec!["qdbus"]))
        .execute(input())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SwitchError::DependencyMissing { ref tools } if tools == &["ydotool", "wl-paste"]
    ));
    assert!(sim.state().keys.is_empty());
}

#[tokio::test]
async fn failed_paste_still_restores_history() {
    let sim = Sim::with(&["a", "b", "c"], "ghbdtn");
    sim.state().fail_paste = true;

    let err = use_case(&sim, everything())
        .execute(input())
        .await
        .unwrap_err();

    assert!(matches!(err, SwitchError::ExternalCommandFailed(_)));
    let state = sim.state();
    assert_eq!(state.history, ["a", "b", "c"]);
    assert_eq!(state.clipboard, "a");
    assert_eq!(state.layout, 0);
}

#[tokio::test]
async fn clipboard_source_with_nothing_selected_pastes_nothing() {
    let sim = Sim::with(&["my password", "older"], "");
    let input = SwitchInput {
        mode: SelectionMode::Selected,
        source: SelectionSource::Clipboard,
        required_tools: vec!["qdbus".into(), "ydotool".into()],
        ..input()
    };

    let outcome = use_case(&sim, everything()).execute(input).await.unwrap();

    assert_eq!(outcome, SwitchOutcome::NothingSelected);
    let state = sim.state();
    assert!(state.pasted.is_empty());
    assert_eq!(state.keys, ["copy"]);
    assert_eq!(state.history, ["my password", "older"]);
    assert_eq!(state.clipboard, "my password");
}
