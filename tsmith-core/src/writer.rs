//! Level-tracked line writer for generated source.

use crate::Indent;

/// Accumulates generated source line by line with indentation tracking.
///
/// # Example
///
/// ```
/// use tsmith_core::{CodeWriter, Indent};
///
/// let mut w = CodeWriter::new(Indent::TWO_SPACES, "\n");
/// w.line("export class Foo {");
/// w.indent();
/// w.line("bar: string;");
/// w.dedent();
/// w.line("}");
///
/// assert_eq!(w.finish(), "export class Foo {\n  bar: string;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    level: usize,
    indent: Indent,
    eol: String,
    buffer: String,
}

impl CodeWriter {
    /// Create a writer with the given indentation unit and line ending.
    pub fn new(indent: Indent, eol: impl Into<String>) -> Self {
        Self {
            level: 0,
            indent,
            eol: eol.into(),
            buffer: String::new(),
        }
    }

    /// Append one line at the current indentation level.
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push_str(&self.eol);
    }

    /// Append a blank line (no indentation).
    pub fn blank(&mut self) {
        self.buffer.push_str(&self.eol);
    }

    /// Append a pre-rendered, possibly multi-line chunk.
    ///
    /// Every line of `text` is prefixed with the current indentation;
    /// internal indentation inside `text` is preserved as-is, so nesting
    /// is purely additive. Blank lines stay blank.
    pub fn lines(&mut self, text: &str) {
        for line in text.lines() {
            if line.is_empty() {
                self.blank();
            } else {
                self.line(line);
            }
        }
    }

    /// Increase the indentation level.
    pub fn indent(&mut self) {
        self.level += 1;
    }

    /// Decrease the indentation level.
    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Append `header`, run `f` one level deeper, then append `close`.
    pub fn block(&mut self, header: &str, close: &str, f: impl FnOnce(&mut Self)) {
        self.line(header);
        self.indent();
        f(self);
        self.dedent();
        self.line(close);
    }

    /// Whether anything has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the writer and return the accumulated source.
    pub fn finish(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new(Indent::default(), "\n")
    }
}
