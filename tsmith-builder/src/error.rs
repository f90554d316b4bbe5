use thiserror::Error;

/// Precondition failures raised by builder factory constructors.
///
/// These fail fast at construction time; they are never deferred into
/// emit diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    #[error("{kind} name must not be blank")]
    BlankName { kind: &'static str },

    #[error("type annotation for {kind} '{name}' must not be blank")]
    BlankType { kind: &'static str, name: String },
}

pub(crate) fn require_name(kind: &'static str, name: &str) -> Result<(), BuilderError> {
    if name.trim().is_empty() {
        Err(BuilderError::BlankName { kind })
    } else {
        Ok(())
    }
}

pub(crate) fn require_type(
    kind: &'static str,
    name: &str,
    ty: &str,
) -> Result<(), BuilderError> {
    if ty.trim().is_empty() {
        Err(BuilderError::BlankType {
            kind,
            name: name.to_string(),
        })
    } else {
        Ok(())
    }
}
