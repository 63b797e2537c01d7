//! Transient success/error feedback shown under forms.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use crate::credentials::CredentialError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

/// A message with a kind. Replaced wholesale on every submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    /// BEM modifier class for the banner.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NotificationKind::Error => "notification notification--error",
            NotificationKind::Success => "notification notification--success",
        }
    }
}

impl From<CredentialError> for Notification {
    fn from(err: CredentialError) -> Self {
        Self::error(err.to_string())
    }
}
