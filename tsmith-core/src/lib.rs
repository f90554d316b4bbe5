//! Shared primitives for the tsmith TypeScript source generator.
//!
//! This crate holds the pieces every other tsmith crate builds on:
//!
//! - [`Indent`] - indentation unit configuration
//! - [`CodeWriter`] - level-tracked line writer used by the emitter
//! - [`Severity`] / [`Diagnostic`] - tagged messages produced during
//!   emission and validation
//! - [`Checker`] - the injected "confirm this source compiles" capability

mod checker;
mod diagnostic;
mod indent;
mod writer;

pub use checker::Checker;
pub use diagnostic::{Diagnostic, Severity};
pub use indent::Indent;
pub use writer::CodeWriter;
