//! Desktop notification adapter using notify-rust

use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

/// Freedesktop notifier using notify-rust
pub struct NotifyRustNotifier {
    /// Application name for notifications
    app_name: String,
    timeout: Duration,
}

impl NotifyRustNotifier {
    /// Create a notifier whose popups close after `timeout`
    pub fn new(timeout: Duration) -> Self {
        Self {
            app_name: "Lipunto".to_string(),
            timeout,
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>, timeout: Duration) -> Self {
        Self {
            app_name: app_name.into(),
            timeout,
        }
    }

    fn timeout_ms(&self) -> u32 {
        u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX)
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        let title = title.to_owned();
        let message = message.to_owned();
        let app_name = self.app_name.clone();
        let icon_name = icon.icon_name().to_string();
        let timeout_ms = self.timeout_ms();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&title)
                .body(&message)
                .icon(&icon_name)
                .timeout(notify_rust::Timeout::Milliseconds(timeout_ms))
                .show()
                .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}
