//! The injected compile-check capability.

use crate::Diagnostic;

/// Confirms a finished piece of source text compiles under the target
/// language's own toolchain.
///
/// The emitter only ever sees this trait, so tests can substitute a stub
/// instead of spawning real compiler processes. Implementations must be
/// self-contained per call: no shared state, no retained files.
pub trait Checker {
    /// Check the given source, returning any diagnostics the toolchain
    /// reported. An empty vector means the source was confirmed valid.
    ///
    /// Implementations never panic and never return transport errors;
    /// failures to run the toolchain at all surface as error diagnostics.
    fn check(&self, source: &str) -> Vec<Diagnostic>;

    /// Whether the backing toolchain is installed and runnable.
    ///
    /// Callers use this to skip validation gracefully instead of failing
    /// an entire generation run on a missing compiler.
    fn is_available(&self) -> bool {
        true
    }
}

impl<T: Checker + ?Sized> Checker for &T {
    fn check(&self, source: &str) -> Vec<Diagnostic> {
        (*self).check(source)
    }

    fn is_available(&self) -> bool {
        (*self).is_available()
    }
}
