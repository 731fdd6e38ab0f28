//! Feedback Form Logic
//!
//! Validation and the message lifecycle for the contact form.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::FeedbackError;
use crate::models::FeedbackEntry;

pub const SUCCESS_TEXT: &str = "Сообщение отправлено! Я свяжусь с вами в ближайшее время.";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn email_re() -> Option<&'static Regex> {
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// A pattern that fails to compile rejects every address
pub fn is_valid_email(email: &str) -> bool {
    email_re().is_some_and(|re| re.is_match(email))
}

pub fn validate(name: &str, email: &str, message: &str) -> Result<(), FeedbackError> {
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(FeedbackError::MissingField);
    }
    if !is_valid_email(email) {
        return Err(FeedbackError::InvalidEmail);
    }
    Ok(())
}

/// Validate and build the entry to persist
pub fn accept(name: &str, email: &str, message: &str, timestamp: String) -> Result<FeedbackEntry, FeedbackError> {
    validate(name, email, message)?;
    Ok(FeedbackEntry {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
        timestamp,
    })
}

/// Current time as `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

// ========================
// Message Lifecycle
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagePhase {
    Visible,
    Fading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub kind: MessageKind,
    pub phase: MessagePhase,
}

/// Single message slot. Every `show` bumps the generation; timer callbacks
/// carry the generation they were scheduled for and are ignored once stale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageBoard {
    message: Option<FormMessage>,
    generation: u64,
}

impl MessageBoard {
    pub fn show(&mut self, text: impl Into<String>, kind: MessageKind) -> u64 {
        self.generation += 1;
        self.message = Some(FormMessage { text: text.into(), kind, phase: MessagePhase::Visible });
        self.generation
    }

    pub fn begin_fade(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        if let Some(msg) = self.message.as_mut() {
            msg.phase = MessagePhase::Fading;
        }
    }

    pub fn clear(&mut self, generation: u64) {
        if generation == self.generation {
            self.message = None;
        }
    }

    /// `form-message`, plus the kind while a message is present
    pub fn class(&self) -> String {
        match &self.message {
            Some(msg) => format!("form-message {}", msg.kind.as_str()),
            None => "form-message".to_string(),
        }
    }

    pub fn opacity(&self) -> &'static str {
        match self.message.as_ref().map(|m| m.phase) {
            Some(MessagePhase::Fading) => "opacity: 0",
            _ => "opacity: 1",
        }
    }

    pub fn text(&self) -> String {
        self.message.as_ref().map(|m| m.text.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{append_feedback, load_feedbacks, MemoryStore};

    #[test]
    fn test_empty_message_rejected() {
        assert_eq!(validate("Anna", "a@b.com", ""), Err(FeedbackError::MissingField));
        assert_eq!(validate("", "a@b.com", "hi"), Err(FeedbackError::MissingField));
    }

    #[test]
    fn test_email_without_tld_rejected() {
        assert_eq!(validate("Anna", "a@b", "hi"), Err(FeedbackError::InvalidEmail));
        assert_eq!(validate("Anna", "a b@c.com", "hi"), Err(FeedbackError::InvalidEmail));
        assert_eq!(validate("Anna", "ab.com", "hi"), Err(FeedbackError::InvalidEmail));
    }

    #[test]
    fn test_valid_email_accepted() {
        assert!(validate("Anna", "a@b.com", "hi").is_ok());
        assert!(is_valid_email("first.last@mail.example.ru"));
    }

    #[test]
    fn test_email_pattern_compiles() {
        assert!(email_re().is_some());
        assert!(Regex::new(EMAIL_PATTERN).is_ok());
    }

    #[test]
    fn test_error_text_is_localized() {
        assert_eq!(FeedbackError::MissingField.to_string(), "Пожалуйста, заполните все поля формы.");
    }

    #[test]
    fn test_accepted_entry_is_persisted_once() {
        let store = MemoryStore::default();
        assert!(accept("Anna", "a@b", "hi", timestamp_now()).is_err());
        assert!(load_feedbacks(&store).unwrap().is_empty());

        let entry = accept("Anna", "a@b.com", "hi", timestamp_now()).unwrap();
        append_feedback(&store, entry).unwrap();
        let saved = load_feedbacks(&store).unwrap();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].timestamp.ends_with('Z'));
        assert_eq!(saved[0].email, "a@b.com");
    }

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp_now();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
        // 2026-10-14T09:30:00.000Z
        assert_eq!(ts.len(), 24);
    }

    #[test]
    fn test_message_fades_then_clears() {
        let mut board = MessageBoard::default();
        let generation = board.show("ok", MessageKind::Success);
        assert_eq!(board.class(), "form-message success");
        board.begin_fade(generation);
        assert_eq!(board.opacity(), "opacity: 0");
        board.clear(generation);
        assert_eq!(board.class(), "form-message");
        assert_eq!(board.opacity(), "opacity: 1");
        assert_eq!(board.text(), "");
    }

    #[test]
    fn test_stale_timers_do_not_touch_newer_message() {
        let mut board = MessageBoard::default();
        let first = board.show("first", MessageKind::Error);
        let second = board.show("second", MessageKind::Success);
        board.begin_fade(first);
        board.clear(first);
        assert_eq!(board.text(), "second");
        assert_eq!(board.opacity(), "opacity: 1");
        board.clear(second);
        assert_eq!(board.text(), "");
        assert_eq!(board.class(), "form-message");
    }
}
