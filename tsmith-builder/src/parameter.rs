//! Constructor and method parameter builder.

use crate::{
    error::require_name,
    modifiers::Accessibility,
    BuilderError,
};

/// A single parameter of a constructor or method.
///
/// Setting an accessibility modifier or `readonly` turns a constructor
/// parameter into a TypeScript parameter property.
#[derive(Debug, Clone)]
pub struct ParameterBuilder {
    name: String,
    ty: Option<String>,
    accessibility: Option<Accessibility>,
    readonly: bool,
    optional: bool,
    default_value: Option<String>,
}

impl ParameterBuilder {
    /// Create a parameter. Fails fast on a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, BuilderError> {
        let name = name.into();
        require_name("parameter", &name)?;
        Ok(Self {
            name,
            ty: None,
            accessibility: None,
            readonly: false,
            optional: false,
            default_value: None,
        })
    }

    /// Create a typed parameter. Fails fast on a blank name or type.
    pub fn typed(
        name: impl Into<String>,
        ty: impl Into<String>,
    ) -> Result<Self, BuilderError> {
        let param = Self::new(name)?;
        param.of_type(ty)
    }

    /// Set the type annotation.
    pub fn of_type(mut self, ty: impl Into<String>) -> Result<Self, BuilderError> {
        let ty = ty.into();
        crate::error::require_type("parameter", &self.name, &ty)?;
        self.ty = Some(ty);
        Ok(self)
    }

    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn default_value(mut self, expr: impl Into<String>) -> Self {
        self.default_value = Some(expr.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> Option<&str> {
        self.ty.as_deref()
    }

    pub fn get_accessibility(&self) -> Option<Accessibility> {
        self.accessibility
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn get_default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_fails_fast() {
        assert!(ParameterBuilder::new("  ").is_err());
    }

    #[test]
    fn test_blank_type_fails_fast() {
        assert!(ParameterBuilder::typed("id", "").is_err());
    }

    #[test]
    fn test_typed_parameter() {
        let p = ParameterBuilder::typed("id", "string").unwrap();
        assert_eq!(p.name(), "id");
        assert_eq!(p.ty(), Some("string"));
        assert!(!p.is_optional());
    }

    #[test]
    fn test_parameter_property() {
        let p = ParameterBuilder::typed("id", "string")
            .unwrap()
            .accessibility(Accessibility::Private)
            .readonly();
        assert_eq!(p.get_accessibility(), Some(Accessibility::Private));
        assert!(p.is_readonly());
    }
}
