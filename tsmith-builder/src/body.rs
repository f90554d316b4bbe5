//! Ordered statement sequences with structured control flow.

use tsmith_core::Indent;

/// An ordered, append-only sequence of statement strings forming a
/// method or accessor body.
///
/// Structured constructs ([`if_block`](Self::if_block),
/// [`for_of`](Self::for_of), [`try_catch`](Self::try_catch), ...) build a
/// fresh child body through a caller closure and pre-render it into a
/// single brace-delimited block string, so arbitrary nesting depth needs
/// no shared mutable state: each level owns its own body.
///
/// # Example
///
/// ```
/// use tsmith_builder::BodyBuilder;
///
/// let body = BodyBuilder::new()
///     .statement("const names: string[] = []")
///     .for_of("user", "users", |b| b.statement("names.push(user.name)"));
///
/// assert_eq!(body.statements().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BodyBuilder {
    statements: Vec<String>,
    indent: Indent,
}

impl BodyBuilder {
    /// Create an empty body using the default two-space block indent.
    ///
    /// Nested blocks are rendered with this builder's own indent unit
    /// the moment they are built, not at emit time; when emitting with a
    /// non-default indent, construct the body via
    /// [`with_indent`](Self::with_indent) so the two units agree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty body whose nested blocks indent with `indent`.
    pub fn with_indent(indent: Indent) -> Self {
        Self {
            statements: Vec::new(),
            indent,
        }
    }

    /// Append one statement.
    ///
    /// A line already ending in a statement or block terminator is kept
    /// untouched; otherwise a `;` is appended, so callers may pass either
    /// bare expressions or pre-formatted multi-line snippets.
    pub fn statement(mut self, stmt: impl Into<String>) -> Self {
        let stmt: String = stmt.into();
        let trimmed = stmt.trim_end().to_string();
        if trimmed.ends_with(';') || trimmed.ends_with('}') {
            self.statements.push(trimmed);
        } else {
            self.statements.push(format!("{};", trimmed));
        }
        self
    }

    /// Append an `if` block whose body is built by `then`.
    pub fn if_block(self, condition: &str, then: impl FnOnce(Self) -> Self) -> Self {
        let block = self.render_child(then);
        let stmt = format!("if ({}) {}", condition, block);
        self.push(stmt)
    }

    /// Append an `if`/`else` pair.
    pub fn if_else(
        self,
        condition: &str,
        then: impl FnOnce(Self) -> Self,
        otherwise: impl FnOnce(Self) -> Self,
    ) -> Self {
        let then_block = self.render_child(then);
        let else_block = self.render_child(otherwise);
        let stmt = format!("if ({}) {} else {}", condition, then_block, else_block);
        self.push(stmt)
    }

    /// Append a `for...of` loop binding each element to `binding`.
    pub fn for_of(
        self,
        binding: &str,
        iterable: &str,
        body: impl FnOnce(Self) -> Self,
    ) -> Self {
        let block = self.render_child(body);
        let stmt = format!("for (const {} of {}) {}", binding, iterable, block);
        self.push(stmt)
    }

    /// Append a `while` loop.
    pub fn while_block(self, condition: &str, body: impl FnOnce(Self) -> Self) -> Self {
        let block = self.render_child(body);
        let stmt = format!("while ({}) {}", condition, block);
        self.push(stmt)
    }

    /// Append a `try`/`catch` with the error bound to `binding`.
    pub fn try_catch(
        self,
        attempt: impl FnOnce(Self) -> Self,
        binding: &str,
        rescue: impl FnOnce(Self) -> Self,
    ) -> Self {
        let try_block = self.render_child(attempt);
        let catch_block = self.render_child(rescue);
        let stmt = format!("try {} catch ({}) {}", try_block, binding, catch_block);
        self.push(stmt)
    }

    /// Whether no statements have been added.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Number of top-level statements (nested blocks count as one).
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// The accumulated statement strings, in insertion order.
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    fn push(mut self, stmt: String) -> Self {
        self.statements.push(stmt);
        self
    }

    /// Build a child body via `f` and render it as one brace-delimited
    /// block, `{ }` when empty.
    fn render_child(&self, f: impl FnOnce(Self) -> Self) -> String {
        let child = f(Self::with_indent(self.indent));
        if child.is_empty() {
            return "{ }".to_string();
        }
        let mut out = String::from("{\n");
        for stmt in &child.statements {
            for line in stmt.lines() {
                out.push_str(self.indent.as_str());
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push('}');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_appended_to_bare_expression() {
        let body = BodyBuilder::new().statement("return 1");
        assert_eq!(body.statements(), ["return 1;"]);
    }

    #[test]
    fn test_terminated_statement_untouched() {
        let body = BodyBuilder::new()
            .statement("return 1;")
            .statement("if (x) { y(); }");
        assert_eq!(body.statements(), ["return 1;", "if (x) { y(); }"]);
    }

    #[test]
    fn test_is_empty() {
        assert!(BodyBuilder::new().is_empty());
        assert!(!BodyBuilder::new().statement("x()").is_empty());
    }

    #[test]
    fn test_if_block() {
        let body = BodyBuilder::new().if_block("ready", |b| b.statement("start()"));
        assert_eq!(body.statements(), ["if (ready) {\n  start();\n}"]);
    }

    #[test]
    fn test_empty_child_renders_inline_braces() {
        let body = BodyBuilder::new().if_block("ready", |b| b);
        assert_eq!(body.statements(), ["if (ready) { }"]);
    }

    #[test]
    fn test_if_else() {
        let body = BodyBuilder::new().if_else(
            "ok",
            |b| b.statement("pass()"),
            |b| b.statement("fail()"),
        );
        assert_eq!(
            body.statements(),
            ["if (ok) {\n  pass();\n} else {\n  fail();\n}"]
        );
    }

    #[test]
    fn test_nested_blocks_are_additive() {
        let body = BodyBuilder::new().for_of("item", "items", |b| {
            b.if_block("item.active", |b| b.statement("count += 1"))
        });
        assert_eq!(
            body.statements(),
            ["for (const item of items) {\n  if (item.active) {\n    count += 1;\n  }\n}"]
        );
    }

    #[test]
    fn test_try_catch() {
        let body = BodyBuilder::new().try_catch(
            |b| b.statement("risky()"),
            "err",
            |b| b.statement("console.error(err)"),
        );
        assert_eq!(
            body.statements(),
            ["try {\n  risky();\n} catch (err) {\n  console.error(err);\n}"]
        );
    }

    #[test]
    fn test_while_block() {
        let body = BodyBuilder::new().while_block("queue.length > 0", |b| {
            b.statement("queue.pop()")
        });
        assert_eq!(
            body.statements(),
            ["while (queue.length > 0) {\n  queue.pop();\n}"]
        );
    }
}
