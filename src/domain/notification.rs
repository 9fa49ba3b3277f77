// Notification domain model
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Warning,
    Info,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub read: bool,
    pub priority: Priority,
}

impl Notification {
    pub fn new(
        id: u32,
        kind: NotificationKind,
        title: &str,
        message: &str,
        time: &str,
        read: bool,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
            time: time.to_string(),
            read,
            priority,
        }
    }
}
