//! Ydotool input adapter for Wayland support

use async_trait::async_trait;

use crate::application::ports::{InputInjector, ToolError};
use crate::domain::keys::KeySequence;
use crate::infrastructure::command::CommandRunner;

/// Ydotool adapter sending raw evdev key events
///
/// Requires ydotoold daemon to be running and user to be in the input group.
pub struct YdotoolInput {
    ydotool: CommandRunner,
}

impl YdotoolInput {
    pub fn new(ydotool: impl Into<String>) -> Self {
        Self {
            ydotool: CommandRunner::new(ydotool),
        }
    }
}

impl Default for YdotoolInput {
    fn default() -> Self {
        Self::new("ydotool")
    }
}

/// `ydotool key` arguments, e.g. `42:1 110:1 110:0 42:0`
fn key_args(keys: &KeySequence) -> Vec<String> {
    keys.events().iter().map(ToString::to_string).collect()
}

#[async_trait]
impl InputInjector for YdotoolInput {
    async fn send_keys(&self, keys: &KeySequence) -> Result<(), ToolError> {
        let events = key_args(keys);
        let mut args = vec!["key"];
        args.extend(events.iter().map(String::as_str));
        self.ydotool.run(&args).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paste_is_shift_insert() {
        assert_eq!(
            key_args(&KeySequence::paste()),
            ["42:1", "110:1", "110:0", "42:0"]
        );
    }

    #[test]
    fn select_previous_word_is_ctrl_shift_left() {
        assert_eq!(
            key_args(&KeySequence::select_previous_word()),
            ["29:1", "42:1", "105:1", "105:0", "42:0", "29:0"]
        );
    }

    #[tokio::test]
    async fn missing_ydotool_is_not_found() {
        let input = YdotoolInput::new("lipunto-no-such-ydotool");
        let err = input.send_keys(&KeySequence::copy()).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
