//! Deterministic rendering of tsmith builder models into TypeScript
//! source, plus the two-phase emit result gate.
//!
//! The [`Emitter`] is a pure function from a root
//! [`TypeBuilder`](tsmith_builder::TypeBuilder) and [`EmitOptions`] to an
//! [`OptionalEmit`]: rendered source (or nothing) plus diagnostics. An
//! [`OptionalEmit`] must be explicitly gated through
//! [`OptionalEmit::validate`] to obtain a [`ValidEmit`], whose code is
//! guaranteed present.
//!
//! Validation against a real compiler is an injected capability: pass any
//! [`Checker`](tsmith_core::Checker) (e.g. `TscChecker` from
//! `tsmith-check`) to [`Emitter::with_checker`] and set
//! [`ValidationLevel::Syntax`].

mod emitter;
mod formatter;
mod options;
mod result;

pub use emitter::Emitter;
pub use formatter::Formatter;
pub use options::{EmitOptions, EndOfLine, ValidationLevel};
pub use result::{GateError, OptionalEmit, ValidEmit};
