//! Single-slot notification mailbox.
//!
//! Posting replaces whatever is shown and restarts the dismissal timer;
//! the timer only clears the slot if it still holds the notification it
//! was started for.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(3000);

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    fn new(kind: NotificationKind, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message,
            created_at: Utc::now(),
        }
    }
}

#[derive(Default)]
struct Slot {
    current: Option<Notification>,
    timer: Option<JoinHandle<()>>,
}

pub struct Notifier {
    dismiss_after: Duration,
    slot: Arc<Mutex<Slot>>,
}

impl Notifier {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            dismiss_after,
            slot: Arc::new(Mutex::new(Slot::default())),
        }
    }

    /// Must be called from within a tokio runtime.
    pub async fn post(&self, kind: NotificationKind, message: impl Into<String>) -> Notification {
        let notification = Notification::new(kind, message.into());
        let id = notification.id;

        let mut slot = self.slot.lock().await;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.current = Some(notification.clone());

        let shared = Arc::clone(&self.slot);
        let delay = self.dismiss_after;
        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut slot = shared.lock().await;
            if slot.current.as_ref().map(|n| n.id) == Some(id) {
                slot.current = None;
                slot.timer = None;
                tracing::debug!(%id, "Notification dismissed");
            }
        }));

        tracing::debug!(%id, kind = ?kind, message = %notification.message, "Notification posted");
        notification
    }

    pub async fn current(&self) -> Option<Notification> {
        self.slot.lock().await.current.clone()
    }

    pub async fn dismiss(&self) {
        let mut slot = self.slot.lock().await;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.current = None;
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_AFTER)
    }
}
