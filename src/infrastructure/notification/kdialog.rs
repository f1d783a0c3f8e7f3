//! kdialog passive popup adapter

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

/// KDE passive popup via `kdialog --passivepopup`
pub struct KdialogNotifier {
    timeout: Duration,
}

impl KdialogNotifier {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn args(&self, title: &str, message: &str, icon: NotificationIcon) -> Vec<String> {
        let title = if icon.is_error() {
            format!("{} Error", title)
        } else {
            title.to_string()
        };
        vec![
            "--title".to_string(),
            title,
            "--passivepopup".to_string(),
            message.to_string(),
            self.timeout.as_secs().max(1).to_string(),
        ]
    }
}

#[async_trait]
impl Notifier for KdialogNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        let status = Command::new("kdialog")
            .args(self.args(title, message, icon))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::ToolNotFound("kdialog".to_string())
                } else {
                    NotificationError::SendFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::SendFailed(format!(
                "kdialog exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
