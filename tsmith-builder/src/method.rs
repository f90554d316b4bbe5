//! Method declaration builder.

use crate::{
    body::BodyBuilder,
    error::require_name,
    modifiers::Accessibility,
    parameter::ParameterBuilder,
    BuilderError,
};

/// The body form of a method.
#[derive(Debug, Clone)]
pub enum MethodBody {
    /// A single expression, rendered as one `return` statement in braces.
    Expression(String),
    /// A full statement block.
    Block(BodyBuilder),
}

/// A method declaration.
///
/// A method with no body (and any abstract or interface method) renders
/// signature-only, terminated, with no braces.
#[derive(Debug, Clone)]
pub struct MethodBuilder {
    name: String,
    doc: Option<String>,
    accessibility: Option<Accessibility>,
    is_static: bool,
    is_abstract: bool,
    is_override: bool,
    is_async: bool,
    type_parameters: Vec<String>,
    parameters: Vec<ParameterBuilder>,
    return_type: Option<String>,
    body: Option<MethodBody>,
}

impl MethodBuilder {
    /// Create a method. Fails fast on a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, BuilderError> {
        let name = name.into();
        require_name("method", &name)?;
        Ok(Self {
            name,
            doc: None,
            accessibility: None,
            is_static: false,
            is_abstract: false,
            is_override: false,
            is_async: false,
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            return_type: None,
            body: None,
        })
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn override_(mut self) -> Self {
        self.is_override = true;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Append a type parameter, e.g. `T` or `K extends string`.
    pub fn type_parameter(mut self, param: impl Into<String>) -> Self {
        self.type_parameters.push(param.into());
        self
    }

    /// Append a parameter. Duplicate names are preserved as inserted.
    pub fn parameter(mut self, parameter: ParameterBuilder) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Give the method an expression body.
    pub fn expression_body(mut self, expr: impl Into<String>) -> Self {
        self.body = Some(MethodBody::Expression(expr.into()));
        self
    }

    /// Give the method a block body.
    pub fn body(mut self, body: BodyBuilder) -> Self {
        self.body = Some(MethodBody::Block(body));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn get_accessibility(&self) -> Option<Accessibility> {
        self.accessibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_override(&self) -> bool {
        self.is_override
    }

    pub fn is_async(&self) -> bool {
        self.is_async
    }

    pub fn type_parameters(&self) -> &[String] {
        &self.type_parameters
    }

    pub fn parameters(&self) -> &[ParameterBuilder] {
        &self.parameters
    }

    pub fn get_return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    pub fn get_body(&self) -> Option<&MethodBody> {
        self.body.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_fails_fast() {
        assert!(MethodBuilder::new("").is_err());
    }

    #[test]
    fn test_signature_only_by_default() {
        let m = MethodBuilder::new("run").unwrap();
        assert!(m.get_body().is_none());
    }

    #[test]
    fn test_expression_body() {
        let m = MethodBuilder::new("greet")
            .unwrap()
            .returns("string")
            .expression_body("`hi`");
        assert!(matches!(m.get_body(), Some(MethodBody::Expression(e)) if e == "`hi`"));
    }

    #[test]
    fn test_block_body() {
        let m = MethodBuilder::new("run")
            .unwrap()
            .body(BodyBuilder::new().statement("this.start()"));
        assert!(matches!(m.get_body(), Some(MethodBody::Block(b)) if b.len() == 1));
    }
}
