//! Diagnostics produced during emission and validation.

use std::fmt;

/// Severity of a [`Diagnostic`].
///
/// `Note` covers compiler output lines that carry no recognizable marker;
/// they are reported but never fail an emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

/// A single tagged message produced while emitting or validating source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Create an untagged pass-through diagnostic.
    pub fn note(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Note,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "error: {}", self.message),
            Severity::Warning => write!(f, "warning: {}", self.message),
            Severity::Note => write!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_prefix_convention() {
        assert_eq!(Diagnostic::error("boom").to_string(), "error: boom");
        assert_eq!(Diagnostic::warning("hmm").to_string(), "warning: hmm");
        assert_eq!(Diagnostic::note("fyi").to_string(), "fyi");
    }

    #[test]
    fn test_is_error() {
        assert!(Diagnostic::error("x").is_error());
        assert!(!Diagnostic::warning("x").is_error());
        assert!(!Diagnostic::note("x").is_error());
    }
}
