//! External-process validation for the tsmith TypeScript source
//! generator.
//!
//! [`TscChecker`] implements the [`Checker`](tsmith_core::Checker)
//! capability by writing emitted source into a throwaway single-file
//! project and running `tsc` in check-only mode over it. The TypeScript
//! compiler is never a hard dependency: resolution falls back from the
//! bare tool to `npx`, and [`TscChecker::is_available`] lets callers
//! skip validation when no compiler is installed.

mod parse;
mod tsc;

pub use parse::parse_tsc_output;
pub use tsc::TscChecker;
