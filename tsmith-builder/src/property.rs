//! Property declaration builder.

use crate::{
    body::BodyBuilder,
    error::{require_name, require_type},
    modifiers::Accessibility,
    BuilderError,
};

/// A property declaration, rendered either as a single declaration line
/// or as an explicit accessor pair.
///
/// Which form the emitter picks is presence-based: any getter or setter
/// content produces accessor blocks, otherwise one declaration line with
/// the optional initializer.
#[derive(Debug, Clone)]
pub struct PropertyBuilder {
    name: String,
    ty: String,
    doc: Option<String>,
    accessibility: Option<Accessibility>,
    is_static: bool,
    readonly: bool,
    optional: bool,
    initializer: Option<String>,
    getter: Option<BodyBuilder>,
    setter: Option<BodyBuilder>,
}

impl PropertyBuilder {
    /// Create a property. Fails fast on a blank name or type annotation.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Result<Self, BuilderError> {
        let name = name.into();
        let ty = ty.into();
        require_name("property", &name)?;
        require_type("property", &name, &ty)?;
        Ok(Self {
            name,
            ty,
            doc: None,
            accessibility: None,
            is_static: false,
            readonly: false,
            optional: false,
            initializer: None,
            getter: None,
            setter: None,
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

    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    /// Give the property a getter body, switching it to accessor form.
    pub fn getter(mut self, body: BodyBuilder) -> Self {
        self.getter = Some(body);
        self
    }

    /// Give the property a setter body, switching it to accessor form.
    pub fn setter(mut self, body: BodyBuilder) -> Self {
        self.setter = Some(body);
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

    pub fn get_initializer(&self) -> Option<&str> {
        self.initializer.as_deref()
    }

    pub fn get_getter(&self) -> Option<&BodyBuilder> {
        self.getter.as_ref()
    }

    pub fn get_setter(&self) -> Option<&BodyBuilder> {
        self.setter.as_ref()
    }

    /// Whether any accessor content is present.
    pub fn has_accessors(&self) -> bool {
        self.getter.is_some() || self.setter.is_some()
    }
}
