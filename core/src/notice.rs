//! Transient error notification.
//!
//! A `Notice` holds at most one message together with its expiry. Reading it
//! after the expiry yields nothing, so no timer task is needed to clear it;
//! a front end that wants to repaint on expiry can wait on `expires_at()`.

use std::fmt;
use std::time::Duration;

use tokio::time::Instant;

/// How long an error stays visible unless dismissed.
pub const ERROR_DISPLAY: Duration = Duration::from_secs(3);

/// Every message the list can show. Network details never reach the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorMessage {
    LoadTodos,
    AddTodo,
    DeleteTodo,
    UpdateTodo,
    EmptyTitle,
}

impl ErrorMessage {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorMessage::LoadTodos => "Unable to load todos",
            ErrorMessage::AddTodo => "Unable to add a todo",
            ErrorMessage::DeleteTodo => "Unable to delete a todo",
            ErrorMessage::UpdateTodo => "Unable to update a todo",
            ErrorMessage::EmptyTitle => "Title should not be empty",
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Notice {
    current: Option<(ErrorMessage, Instant)>,
    display_for: Duration,
}

impl Default for Notice {
    fn default() -> Self {
        Self::new(ERROR_DISPLAY)
    }
}

impl Notice {
    pub fn new(display_for: Duration) -> Self {
        Self {
            current: None,
            display_for,
        }
    }

    /// Replaces whatever is shown and restarts the display window.
    pub fn show(&mut self, message: ErrorMessage) {
        self.current = Some((message, Instant::now() + self.display_for));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn message(&self) -> Option<ErrorMessage> {
        self.message_at(Instant::now())
    }

    pub fn message_at(&self, now: Instant) -> Option<ErrorMessage> {
        match self.current {
            Some((message, expires_at)) if now < expires_at => Some(message),
            _ => None,
        }
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.current.map(|(_, expires_at)| expires_at)
    }
}
