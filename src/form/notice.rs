//! Blocking notifications raised by the form controller

use serde::Serialize;

pub const TITLE_SUCCESS: &str = "Éxito";
pub const TITLE_ERROR: &str = "Error";
pub const TITLE_DATABASE_ERROR: &str = "Error de base de datos";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message the operator must acknowledge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Presents notices to the operator.
///
/// The controller never decides how a notice looks; the terminal shell
/// prints and waits, tests just record.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Keeps every notice in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn take(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
