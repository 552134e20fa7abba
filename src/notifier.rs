//! User-facing notifications.
//!
//! The sync engine reports transient status (a file was mirrored, the config
//! was reloaded) and errors (a target failed) through a [`Notifier`]. The
//! engine never prints directly; the front end decides where messages go.

use std::sync::Mutex;

/// Sink for user-visible messages.
pub trait Notifier: Send + Sync {
    /// A transient, informational message.
    fn status(&self, message: &str);

    /// A failure the user should see.
    fn error(&self, message: &str);
}

/// Writes notifications to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier {
    /// Suppress status messages, keeping only errors.
    pub quiet: bool,
}

impl Notifier for ConsoleNotifier {
    fn status(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn error(&self, message: &str) {
        eprintln!("Error: {}", message);
    }
}

/// A single recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Status(String),
    Error(String),
}

/// Keeps every notification in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far.
    pub fn messages(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|n| match n {
                Notification::Error(m) => Some(m.clone()),
                Notification::Status(_) => None,
            })
            .collect()
    }

    pub fn statuses(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|n| match n {
                Notification::Status(m) => Some(m.clone()),
                Notification::Error(_) => None,
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.messages.lock().unwrap_or_else(|poison| poison.into_inner())
    }
}

impl Notifier for RecordingNotifier {
    fn status(&self, message: &str) {
        self.lock().push(Notification::Status(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.lock().push(Notification::Error(message.to_string()));
    }
}
