//! Optional text post-pass over emitted source.

use crate::options::EndOfLine;

/// Reformats emitted text per style options.
///
/// This pass operates on finished text only: it normalizes line endings,
/// trims trailing whitespace, collapses runs of blank lines, and
/// guarantees a single trailing newline. It never re-indents; indentation
/// is fixed by the emitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    eol: EndOfLine,
}

impl Formatter {
    pub fn new(eol: EndOfLine) -> Self {
        Self { eol }
    }

    pub fn format(&self, source: &str) -> String {
        let normalized = source.replace("\r\n", "\n");
        let mut lines: Vec<&str> = normalized.lines().map(str::trim_end).collect();

        while lines.first().is_some_and(|l| l.is_empty()) {
            lines.remove(0);
        }
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let eol = self.eol.as_str();
        let mut out = String::new();
        let mut previous_blank = false;
        for line in lines {
            if line.is_empty() {
                if previous_blank {
                    continue;
                }
                previous_blank = true;
            } else {
                previous_blank = false;
            }
            out.push_str(line);
            out.push_str(eol);
        }
        out
    }
}
