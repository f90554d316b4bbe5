//! Constructor declaration builder.

use crate::{body::BodyBuilder, modifiers::Accessibility, parameter::ParameterBuilder};

/// A constructor declaration.
///
/// A constructor without a body renders signature-only, as in ambient
/// (`declare`) classes.
#[derive(Debug, Clone, Default)]
pub struct ConstructorBuilder {
    accessibility: Option<Accessibility>,
    parameters: Vec<ParameterBuilder>,
    body: Option<BodyBuilder>,
}

impl ConstructorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    /// Append a parameter. Duplicate names are preserved as inserted.
    pub fn parameter(mut self, parameter: ParameterBuilder) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn body(mut self, body: BodyBuilder) -> Self {
        self.body = Some(body);
        self
    }

    pub fn get_accessibility(&self) -> Option<Accessibility> {
        self.accessibility
    }

    pub fn parameters(&self) -> &[ParameterBuilder] {
        &self.parameters
    }

    pub fn get_body(&self) -> Option<&BodyBuilder> {
        self.body.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_keep_insertion_order() {
        let ctor = ConstructorBuilder::new()
            .parameter(ParameterBuilder::typed("b", "string").unwrap())
            .parameter(ParameterBuilder::typed("a", "string").unwrap());
        let names: Vec<&str> = ctor.parameters().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn test_bodyless_by_default() {
        assert!(ConstructorBuilder::new().get_body().is_none());
    }
}
