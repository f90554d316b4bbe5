//! Field declaration builder.

use crate::{
    error::{require_name, require_type},
    modifiers::Accessibility,
    BuilderError,
};

/// A field declaration on a class or interface.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    name: String,
    ty: String,
    doc: Option<String>,
    accessibility: Option<Accessibility>,
    is_static: bool,
    readonly: bool,
    optional: bool,
    declared: bool,
    initializer: Option<String>,
}

impl FieldBuilder {
    /// Create a field. Fails fast on a blank name or type annotation.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Result<Self, BuilderError> {
        let name = name.into();
        let ty = ty.into();
        require_name("field", &name)?;
        require_type("field", &name, &ty)?;
        Ok(Self {
            name,
            ty,
            doc: None,
            accessibility: None,
            is_static: false,
            readonly: false,
            optional: false,
            declared: false,
            initializer: None,
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

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn declared(mut self) -> Self {
        self.declared = true;
        self
    }

    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &str {
        &self.ty
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

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_declared(&self) -> bool {
        self.declared
    }

    pub fn get_initializer(&self) -> Option<&str> {
        self.initializer.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_fails_fast() {
        assert!(matches!(
            FieldBuilder::new("", "string"),
            Err(BuilderError::BlankName { kind: "field" })
        ));
    }

    #[test]
    fn test_blank_type_fails_fast() {
        assert!(FieldBuilder::new("id", " ").is_err());
    }

    #[test]
    fn test_each_mutator_changes_one_property() {
        let base = FieldBuilder::new("id", "string").unwrap();
        let readonly = base.clone().readonly();
        assert!(readonly.is_readonly());
        assert!(!base.is_readonly());
        assert_eq!(base.name(), readonly.name());
    }

    #[test]
    fn test_initializer() {
        let f = FieldBuilder::new("count", "number").unwrap().initializer("0");
        assert_eq!(f.get_initializer(), Some("0"));
    }
}
