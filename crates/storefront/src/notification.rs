use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationAction {
    Login,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub description: Option<String>,
    pub action: Option<NotificationAction>,
}

/// Transient toast bus. Remote-call failures are converted into these instead
/// of propagating; a send with no subscribers is silently dropped.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.publish(Notification {
            level: NotificationLevel::Success,
            message: message.into(),
            description: None,
            action: None,
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.publish(Notification {
            level: NotificationLevel::Error,
            message: message.into(),
            description: None,
            action: None,
        });
    }

    pub fn error_with(
        &self,
        message: impl Into<String>,
        description: Option<String>,
        action: Option<NotificationAction>,
    ) {
        self.publish(Notification {
            level: NotificationLevel::Error,
            message: message.into(),
            description,
            action,
        });
    }

    fn publish(&self, notification: Notification) {
        let _ = self.tx.send(notification);
    }
}
