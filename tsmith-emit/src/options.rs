//! Options controlling how a builder model is rendered.

use tsmith_core::Indent;

/// Line-ending style for emitted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndOfLine {
    #[default]
    Lf,
    CrLf,
}

impl EndOfLine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// How far an emit should go in confirming its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationLevel {
    /// No external validation.
    #[default]
    None,
    /// Run the injected checker over the finished source.
    Syntax,
}

/// Options for one emit call.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Indentation unit for emitted declarations.
    ///
    /// Statement blocks inside a `BodyBuilder` are pre-rendered when the
    /// body is built and keep their own unit; pair a non-default setting
    /// here with `BodyBuilder::with_indent` to keep nesting uniform.
    pub indent: Indent,
    /// Line-ending style.
    pub eol: EndOfLine,
    /// Comment text prepended to the output, one `//` line per input line.
    pub header: Option<String>,
    /// Whether declaration lines end in semicolons.
    pub semicolons: bool,
    /// Whether the last enum member gets a trailing comma.
    pub trailing_commas: bool,
    /// Whether to run the formatter post-pass over the output.
    pub format_output: bool,
    /// Whether to run the injected checker over the output.
    pub validation: ValidationLevel,
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn eol(mut self, eol: EndOfLine) -> Self {
        self.eol = eol;
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn semicolons(mut self, on: bool) -> Self {
        self.semicolons = on;
        self
    }

    pub fn trailing_commas(mut self, on: bool) -> Self {
        self.trailing_commas = on;
        self
    }

    pub fn format_output(mut self, on: bool) -> Self {
        self.format_output = on;
        self
    }

    pub fn validation(mut self, level: ValidationLevel) -> Self {
        self.validation = level;
        self
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            eol: EndOfLine::default(),
            header: None,
            semicolons: true,
            trailing_commas: false,
            format_output: false,
            validation: ValidationLevel::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = EmitOptions::default();
        assert_eq!(opts.indent, Indent::TWO_SPACES);
        assert_eq!(opts.eol, EndOfLine::Lf);
        assert!(opts.semicolons);
        assert!(!opts.trailing_commas);
        assert_eq!(opts.validation, ValidationLevel::None);
    }

    #[test]
    fn test_chained_setters() {
        let opts = EmitOptions::new()
            .trailing_commas(true)
            .eol(EndOfLine::CrLf)
            .header("generated");
        assert!(opts.trailing_commas);
        assert_eq!(opts.eol.as_str(), "\r\n");
        assert_eq!(opts.header.as_deref(), Some("generated"));
    }
}
