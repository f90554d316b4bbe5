//! The two-phase emit result gate.

use thiserror::Error;
use tsmith_core::Diagnostic;

/// Raised by [`OptionalEmit::validate`] when the emit did not succeed.
#[derive(Debug, Clone, Error)]
#[error("emit did not produce valid code: {summary}")]
pub struct GateError {
    summary: String,
    diagnostics: Vec<Diagnostic>,
}

impl GateError {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// The weak half of the result gate: an emit that may have failed.
///
/// Code and diagnostics coexist; validated-but-flawed source still
/// carries its text so callers can inspect what was produced.
#[derive(Debug, Clone)]
pub struct OptionalEmit {
    code: Option<String>,
    diagnostics: Vec<Diagnostic>,
}

impl OptionalEmit {
    pub(crate) fn new(code: Option<String>, diagnostics: Vec<Diagnostic>) -> Self {
        Self { code, diagnostics }
    }

    pub(crate) fn failure(diagnostic: Diagnostic) -> Self {
        Self {
            code: None,
            diagnostics: vec![diagnostic],
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether code was produced and no diagnostic is an error.
    pub fn success(&self) -> bool {
        self.code.is_some() && !self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Gate this result into a [`ValidEmit`].
    ///
    /// This is the only failure propagation point downstream of emit:
    /// callers that demand guaranteed-valid code call this and handle (or
    /// bubble) the error.
    pub fn validate(self) -> Result<ValidEmit, GateError> {
        if !self.success() {
            let summary = self
                .diagnostics
                .iter()
                .filter(|d| d.is_error())
                .map(Diagnostic::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            let summary = if summary.is_empty() {
                "no code was produced".to_string()
            } else {
                summary
            };
            return Err(GateError {
                summary,
                diagnostics: self.diagnostics,
            });
        }
        // success() guarantees code is present
        let code = self.code.unwrap_or_default();
        Ok(ValidEmit {
            code,
            diagnostics: self.diagnostics,
        })
    }
}

/// The strong half of the result gate: code is guaranteed present and
/// free of error diagnostics.
///
/// Only [`OptionalEmit::validate`] can construct this.
#[derive(Debug, Clone)]
pub struct ValidEmit {
    code: String,
    diagnostics: Vec<Diagnostic>,
}

impl ValidEmit {
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Non-error diagnostics (warnings, pass-through notes) retained for
    /// reporting.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_code(self) -> String {
        self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_requires_code_and_no_errors() {
        let ok = OptionalEmit::new(Some("class A {}".into()), vec![]);
        assert!(ok.success());

        let warned = OptionalEmit::new(
            Some("class A {}".into()),
            vec![Diagnostic::warning("style")],
        );
        assert!(warned.success());

        let errored = OptionalEmit::new(
            Some("class A {}".into()),
            vec![Diagnostic::error("TS2322")],
        );
        assert!(!errored.success());

        let empty = OptionalEmit::new(None, vec![]);
        assert!(!empty.success());
    }

    #[test]
    fn test_validate_passes_code_through() {
        let emit = OptionalEmit::new(
            Some("export class A {}".into()),
            vec![Diagnostic::warning("w")],
        );
        let expected = emit.code().unwrap().to_string();
        let valid = emit.validate().unwrap();
        assert_eq!(valid.code(), expected);
        assert_eq!(valid.diagnostics().len(), 1);
    }

    #[test]
    fn test_validate_fails_on_error_diagnostic() {
        let emit = OptionalEmit::new(
            Some("class A {}".into()),
            vec![Diagnostic::error("bad")],
        );
        let err = emit.validate().unwrap_err();
        assert!(err.to_string().contains("bad"));
        assert_eq!(err.diagnostics().len(), 1);
    }

    #[test]
    fn test_validate_fails_on_missing_code() {
        let emit = OptionalEmit::new(None, vec![]);
        let err = emit.validate().unwrap_err();
        assert!(err.to_string().contains("no code was produced"));
    }
}
