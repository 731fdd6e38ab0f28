//! Error Types

use thiserror::Error;

/// Local storage failures. Never fatal; callers log and keep going.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read key `{0}`")]
    Read(String),
    #[error("failed to write key `{0}`")]
    Write(String),
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Feedback form rejections. `Display` is the text shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Пожалуйста, заполните все поля формы.")]
    MissingField,
    #[error("Пожалуйста, введите корректный email адрес.")]
    InvalidEmail,
}
