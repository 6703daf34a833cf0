use serde::Serialize;

/// Result of one reconciliation: whether remote state changed, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub changed: bool,
    pub subject: String,
    pub message: String,
}

impl Outcome {
    pub fn changed(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            changed: true,
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn unchanged(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            changed: false,
            subject: subject.into(),
            message: message.into(),
        }
    }
}
