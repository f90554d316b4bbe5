//! Root type declaration builder.

use crate::{
    constructor::ConstructorBuilder, field::FieldBuilder, method::MethodBuilder,
    property::PropertyBuilder,
};

/// The declaration kind of a [`TypeBuilder`].
///
/// The kind gates which member collections the emitter inspects; members
/// inapplicable to the kind are silently omitted from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
    TypeAlias,
    Enum,
    ConstEnum,
}

/// One member of an enum declaration.
#[derive(Debug, Clone)]
pub struct EnumMember {
    name: String,
    initializer: Option<String>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initializer: None,
        }
    }

    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_initializer(&self) -> Option<&str> {
        self.initializer.as_deref()
    }
}

/// An index signature, e.g. `[key: string]: number`.
#[derive(Debug, Clone)]
pub struct IndexSignature {
    key_name: String,
    key_type: String,
    value_type: String,
    readonly: bool,
}

impl IndexSignature {
    pub fn new(
        key_name: impl Into<String>,
        key_type: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Self {
        Self {
            key_name: key_name.into(),
            key_type: key_type.into(),
            value_type: value_type.into(),
            readonly: false,
        }
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    pub fn key_type(&self) -> &str {
        &self.key_type
    }

    pub fn value_type(&self) -> &str {
        &self.value_type
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }
}

/// The root of a declaration model: one class, interface, type alias, or
/// enum, with its members and nested types.
///
/// The name is deliberately not validated here; the emitter reports a
/// blank name as an `error` diagnostic rather than a construction
/// failure, so a blank-named builder can still travel through code that
/// fills the name in later.
///
/// All member collections are append-only and insertion-ordered.
/// Duplicate names are never deduplicated; both entries are emitted.
#[derive(Debug, Clone)]
pub struct TypeBuilder {
    kind: TypeKind,
    name: String,
    exported: bool,
    declared: bool,
    is_abstract: bool,
    type_parameters: Vec<String>,
    extends: Vec<String>,
    implements: Vec<String>,
    decorators: Vec<String>,
    comment: Option<String>,
    index_signatures: Vec<IndexSignature>,
    fields: Vec<FieldBuilder>,
    constructors: Vec<ConstructorBuilder>,
    properties: Vec<PropertyBuilder>,
    methods: Vec<MethodBuilder>,
    enum_members: Vec<EnumMember>,
    nested: Vec<TypeBuilder>,
    alias_of: Option<String>,
}

impl TypeBuilder {
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            exported: false,
            declared: false,
            is_abstract: false,
            type_parameters: Vec::new(),
            extends: Vec::new(),
            implements: Vec::new(),
            decorators: Vec::new(),
            comment: None,
            index_signatures: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            enum_members: Vec::new(),
            nested: Vec::new(),
            alias_of: None,
        }
    }

    /// Shorthand for a type alias with its raw definition.
    pub fn alias(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self::new(TypeKind::TypeAlias, name).alias_of(definition)
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    pub fn declared(mut self) -> Self {
        self.declared = true;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Append a type parameter, e.g. `T` or `K extends keyof T`.
    pub fn type_parameter(mut self, param: impl Into<String>) -> Self {
        self.type_parameters.push(param.into());
        self
    }

    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.extends.push(base.into());
        self
    }

    pub fn implements(mut self, contract: impl Into<String>) -> Self {
        self.implements.push(contract.into());
        self
    }

    /// Append a decorator, with or without its leading `@`.
    pub fn decorator(mut self, decorator: impl Into<String>) -> Self {
        self.decorators.push(decorator.into());
        self
    }

    /// Set the doc comment block rendered above the declaration.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn index_signature(mut self, signature: IndexSignature) -> Self {
        self.index_signatures.push(signature);
        self
    }

    pub fn field(mut self, field: FieldBuilder) -> Self {
        self.fields.push(field);
        self
    }

    pub fn constructor(mut self, constructor: ConstructorBuilder) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn property(mut self, property: PropertyBuilder) -> Self {
        self.properties.push(property);
        self
    }

    pub fn method(mut self, method: MethodBuilder) -> Self {
        self.methods.push(method);
        self
    }

    pub fn enum_member(mut self, member: EnumMember) -> Self {
        self.enum_members.push(member);
        self
    }

    pub fn nested_type(mut self, nested: TypeBuilder) -> Self {
        self.nested.push(nested);
        self
    }

    /// Set the raw definition string for a type alias.
    pub fn alias_of(mut self, definition: impl Into<String>) -> Self {
        self.alias_of = Some(definition.into());
        self
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_exported(&self) -> bool {
        self.exported
    }

    pub fn is_declared(&self) -> bool {
        self.declared
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn type_parameters(&self) -> &[String] {
        &self.type_parameters
    }

    pub fn extends_clauses(&self) -> &[String] {
        &self.extends
    }

    pub fn implements_clauses(&self) -> &[String] {
        &self.implements
    }

    pub fn decorators(&self) -> &[String] {
        &self.decorators
    }

    pub fn get_comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn index_signatures(&self) -> &[IndexSignature] {
        &self.index_signatures
    }

    pub fn fields(&self) -> &[FieldBuilder] {
        &self.fields
    }

    pub fn constructors(&self) -> &[ConstructorBuilder] {
        &self.constructors
    }

    pub fn properties(&self) -> &[PropertyBuilder] {
        &self.properties
    }

    pub fn methods(&self) -> &[MethodBuilder] {
        &self.methods
    }

    pub fn enum_members(&self) -> &[EnumMember] {
        &self.enum_members
    }

    pub fn nested_types(&self) -> &[TypeBuilder] {
        &self.nested
    }

    pub fn get_alias_of(&self) -> Option<&str> {
        self.alias_of.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldBuilder;

    #[test]
    fn test_builders_are_forkable() {
        let base = TypeBuilder::new(TypeKind::Class, "Widget").exported();
        let with_field = base
            .clone()
            .field(FieldBuilder::new("id", "string").unwrap());
        assert_eq!(base.fields().len(), 0);
        assert_eq!(with_field.fields().len(), 1);
    }

    #[test]
    fn test_duplicate_members_preserved() {
        let ty = TypeBuilder::new(TypeKind::Class, "Widget")
            .field(FieldBuilder::new("id", "string").unwrap())
            .field(FieldBuilder::new("id", "number").unwrap());
        assert_eq!(ty.fields().len(), 2);
        assert_eq!(ty.fields()[0].ty(), "string");
        assert_eq!(ty.fields()[1].ty(), "number");
    }

    #[test]
    fn test_alias_shorthand() {
        let ty = TypeBuilder::alias("UserId", "string");
        assert_eq!(ty.kind(), TypeKind::TypeAlias);
        assert_eq!(ty.get_alias_of(), Some("string"));
    }

    #[test]
    fn test_blank_name_allowed_at_construction() {
        let ty = TypeBuilder::new(TypeKind::Class, "");
        assert_eq!(ty.name(), "");
    }
}
