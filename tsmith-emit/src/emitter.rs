//! Kind-dispatched rendering of builder models into TypeScript source.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tsmith_builder::{
    BodyBuilder, FieldBuilder, MethodBody, MethodBuilder, ParameterBuilder, PropertyBuilder,
    TypeBuilder, TypeKind,
};
use tsmith_core::{Checker, CodeWriter, Diagnostic};

use crate::{
    formatter::Formatter,
    options::{EmitOptions, ValidationLevel},
    result::OptionalEmit,
};

/// Render-time failures. These never escape [`Emitter::emit`]; they are
/// converted into error diagnostics with no code.
#[derive(Debug, Error)]
enum EmitError {
    #[error("type declaration has a blank name")]
    BlankTypeName,

    #[error("type alias '{name}' has no definition")]
    MissingAliasDefinition { name: String },
}

/// Renders a root [`TypeBuilder`] into source text.
///
/// Emission is a pure transformation: the same builder graph with the
/// same options always yields byte-identical output. The only non-pure
/// step is the optional injected [`Checker`], which runs over the
/// finished text when [`ValidationLevel::Syntax`] is set.
///
/// The emitter is also the sole enforcement point for kind/member
/// combinations: members that do not apply to the declaration kind (a
/// constructor on an interface, methods on an enum) are silently
/// omitted rather than rejected.
pub struct Emitter<'a> {
    options: EmitOptions,
    checker: Option<&'a dyn Checker>,
}

impl<'a> Emitter<'a> {
    pub fn new(options: EmitOptions) -> Self {
        Self {
            options,
            checker: None,
        }
    }

    /// Inject a compile checker consulted when validation is enabled.
    pub fn with_checker(mut self, checker: &'a dyn Checker) -> Self {
        self.checker = Some(checker);
        self
    }

    /// Render `ty` into source text plus diagnostics.
    ///
    /// Rendering failures (including panics) are caught here and become
    /// one `error` diagnostic with no code; they never propagate.
    pub fn emit(&self, ty: &TypeBuilder) -> OptionalEmit {
        let rendered = panic::catch_unwind(AssertUnwindSafe(|| self.render(ty)));
        let code = match rendered {
            Ok(Ok(code)) => code,
            Ok(Err(err)) => return OptionalEmit::failure(Diagnostic::error(err.to_string())),
            Err(payload) => {
                return OptionalEmit::failure(Diagnostic::error(format!(
                    "emit aborted: {}",
                    panic_message(payload.as_ref())
                )));
            }
        };

        let code = if self.options.format_output {
            Formatter::new(self.options.eol).format(&code)
        } else {
            code
        };

        let mut diagnostics = Vec::new();
        if self.options.validation == ValidationLevel::Syntax {
            if let Some(checker) = self.checker {
                diagnostics.extend(checker.check(&code));
            }
        }

        OptionalEmit::new(Some(code), diagnostics)
    }

    fn render(&self, ty: &TypeBuilder) -> Result<String, EmitError> {
        let mut w = CodeWriter::new(self.options.indent, self.options.eol.as_str());
        if let Some(header) = &self.options.header {
            for line in header.lines() {
                w.line(&format!("// {}", line));
            }
        }
        self.render_type(&mut w, ty)?;
        Ok(w.finish())
    }

    fn render_type(&self, w: &mut CodeWriter, ty: &TypeBuilder) -> Result<(), EmitError> {
        if ty.name().trim().is_empty() {
            return Err(EmitError::BlankTypeName);
        }

        if let Some(comment) = ty.get_comment() {
            self.render_doc(w, comment);
        }
        for decorator in ty.decorators() {
            let name = decorator.strip_prefix('@').unwrap_or(decorator);
            w.line(&format!("@{}", name));
        }

        match ty.kind() {
            TypeKind::TypeAlias => self.render_alias(w, ty),
            TypeKind::Enum | TypeKind::ConstEnum => {
                self.render_enum(w, ty);
                Ok(())
            }
            TypeKind::Class | TypeKind::Interface => self.render_structure(w, ty),
        }
    }

    fn render_alias(&self, w: &mut CodeWriter, ty: &TypeBuilder) -> Result<(), EmitError> {
        let definition = ty
            .get_alias_of()
            .ok_or_else(|| EmitError::MissingAliasDefinition {
                name: ty.name().to_string(),
            })?;
        w.line(&format!(
            "{}type {}{} = {}{}",
            self.leading_modifiers(ty),
            ty.name(),
            type_parameter_list(ty.type_parameters()),
            definition,
            self.terminator(),
        ));
        Ok(())
    }

    fn render_enum(&self, w: &mut CodeWriter, ty: &TypeBuilder) {
        let keyword = if ty.kind() == TypeKind::ConstEnum {
            "const enum"
        } else {
            "enum"
        };
        let header = format!("{}{} {}", self.leading_modifiers(ty), keyword, ty.name());

        let members = ty.enum_members();
        if members.is_empty() {
            w.line(&format!("{} {{}}", header));
            return;
        }

        w.line(&format!("{} {{", header));
        w.indent();
        for (index, member) in members.iter().enumerate() {
            let last = index + 1 == members.len();
            let comma = if !last || self.options.trailing_commas {
                ","
            } else {
                ""
            };
            match member.get_initializer() {
                Some(init) => w.line(&format!("{} = {}{}", member.name(), init, comma)),
                None => w.line(&format!("{}{}", member.name(), comma)),
            }
        }
        w.dedent();
        w.line("}");
    }

    fn render_structure(&self, w: &mut CodeWriter, ty: &TypeBuilder) -> Result<(), EmitError> {
        let is_class = ty.kind() == TypeKind::Class;
        let keyword = if is_class { "class" } else { "interface" };

        let mut header = format!(
            "{}{} {}{}",
            self.leading_modifiers(ty),
            keyword,
            ty.name(),
            type_parameter_list(ty.type_parameters()),
        );
        if !ty.extends_clauses().is_empty() {
            header.push_str(&format!(" extends {}", ty.extends_clauses().join(", ")));
        }
        if is_class && !ty.implements_clauses().is_empty() {
            header.push_str(&format!(
                " implements {}",
                ty.implements_clauses().join(", ")
            ));
        }

        // Fixed category order; a blank line goes between two adjacent
        // non-empty categories only, never leading or trailing.
        let mut chunks = vec![
            self.index_signature_chunk(ty),
            self.field_chunk(ty),
        ];
        if is_class {
            chunks.push(self.constructor_chunk(ty));
        }
        chunks.push(self.property_chunk(ty));
        chunks.push(self.method_chunk(ty));
        chunks.push(self.nested_chunk(ty)?);

        let non_empty: Vec<String> = chunks.into_iter().filter(|c| !c.is_empty()).collect();
        if non_empty.is_empty() {
            w.line(&format!("{} {{}}", header));
            return Ok(());
        }

        w.line(&format!("{} {{", header));
        w.indent();
        for (index, chunk) in non_empty.iter().enumerate() {
            if index > 0 {
                w.blank();
            }
            w.lines(chunk);
        }
        w.dedent();
        w.line("}");
        Ok(())
    }

    fn index_signature_chunk(&self, ty: &TypeBuilder) -> String {
        let mut w = self.chunk_writer();
        for sig in ty.index_signatures() {
            let readonly = if sig.is_readonly() { "readonly " } else { "" };
            w.line(&format!(
                "{}[{}: {}]: {}{}",
                readonly,
                sig.key_name(),
                sig.key_type(),
                sig.value_type(),
                self.terminator(),
            ));
        }
        w.finish()
    }

    fn field_chunk(&self, ty: &TypeBuilder) -> String {
        let is_class = ty.kind() == TypeKind::Class;
        let mut w = self.chunk_writer();
        for field in ty.fields() {
            if let Some(doc) = field.get_doc() {
                self.render_doc(&mut w, doc);
            }
            w.line(&self.field_line(field, is_class));
        }
        w.finish()
    }

    fn field_line(&self, field: &FieldBuilder, is_class: bool) -> String {
        let mut line = String::new();
        if is_class {
            if let Some(access) = field.get_accessibility() {
                line.push_str(access.keyword());
                line.push(' ');
            }
            if field.is_declared() {
                line.push_str("declare ");
            }
            if field.is_static() {
                line.push_str("static ");
            }
        }
        if field.is_readonly() {
            line.push_str("readonly ");
        }
        line.push_str(field.name());
        if field.is_optional() {
            line.push('?');
        }
        line.push_str(": ");
        line.push_str(field.ty());
        if is_class {
            if let Some(init) = field.get_initializer() {
                line.push_str(" = ");
                line.push_str(init);
            }
        }
        line.push_str(self.terminator());
        line
    }

    fn constructor_chunk(&self, ty: &TypeBuilder) -> String {
        let mut w = self.chunk_writer();
        for ctor in ty.constructors() {
            let mut signature = String::new();
            if let Some(access) = ctor.get_accessibility() {
                signature.push_str(access.keyword());
                signature.push(' ');
            }
            signature.push_str(&format!(
                "constructor({})",
                parameter_list(ctor.parameters())
            ));
            match ctor.get_body() {
                Some(body) => self.write_body_block(&mut w, &signature, body),
                None => w.line(&format!("{}{}", signature, self.terminator())),
            }
        }
        w.finish()
    }

    fn property_chunk(&self, ty: &TypeBuilder) -> String {
        let is_class = ty.kind() == TypeKind::Class;
        let mut w = self.chunk_writer();
        for property in ty.properties() {
            if let Some(doc) = property.get_doc() {
                self.render_doc(&mut w, doc);
            }
            // Accessor output only applies to classes; interfaces get the
            // single-line signature either way.
            if is_class && property.has_accessors() {
                self.render_accessors(&mut w, property);
            } else {
                w.line(&self.property_line(property, is_class));
            }
        }
        w.finish()
    }

    fn property_line(&self, property: &PropertyBuilder, is_class: bool) -> String {
        let mut line = String::new();
        if is_class {
            if let Some(access) = property.get_accessibility() {
                line.push_str(access.keyword());
                line.push(' ');
            }
            if property.is_static() {
                line.push_str("static ");
            }
        }
        if property.is_readonly() {
            line.push_str("readonly ");
        }
        line.push_str(property.name());
        if property.is_optional() {
            line.push('?');
        }
        line.push_str(": ");
        line.push_str(property.ty());
        if is_class {
            if let Some(init) = property.get_initializer() {
                line.push_str(" = ");
                line.push_str(init);
            }
        }
        line.push_str(self.terminator());
        line
    }

    fn render_accessors(&self, w: &mut CodeWriter, property: &PropertyBuilder) {
        let mut modifiers = String::new();
        if let Some(access) = property.get_accessibility() {
            modifiers.push_str(access.keyword());
            modifiers.push(' ');
        }
        if property.is_static() {
            modifiers.push_str("static ");
        }

        if let Some(getter) = property.get_getter() {
            let signature = format!("{}get {}(): {}", modifiers, property.name(), property.ty());
            self.write_body_block(w, &signature, getter);
        }
        if let Some(setter) = property.get_setter() {
            let signature = format!(
                "{}set {}(value: {})",
                modifiers,
                property.name(),
                property.ty()
            );
            self.write_body_block(w, &signature, setter);
        }
    }

    fn method_chunk(&self, ty: &TypeBuilder) -> String {
        let is_interface = ty.kind() == TypeKind::Interface;
        let mut w = self.chunk_writer();
        for method in ty.methods() {
            if let Some(doc) = method.get_doc() {
                self.render_doc(&mut w, doc);
            }
            let signature = self.method_signature(method, is_interface);

            let signature_only =
                is_interface || method.is_abstract() || method.get_body().is_none();
            if signature_only {
                w.line(&format!("{}{}", signature, self.terminator()));
                continue;
            }
            match method.get_body() {
                Some(MethodBody::Expression(expr)) => {
                    let body = BodyBuilder::new().statement(format!("return {}", expr));
                    self.write_body_block(&mut w, &signature, &body);
                }
                Some(MethodBody::Block(body)) => {
                    self.write_body_block(&mut w, &signature, body);
                }
                None => unreachable!("signature-only methods handled above"),
            }
        }
        w.finish()
    }

    fn method_signature(&self, method: &MethodBuilder, is_interface: bool) -> String {
        let mut signature = String::new();
        if !is_interface {
            if let Some(access) = method.get_accessibility() {
                signature.push_str(access.keyword());
                signature.push(' ');
            }
            if method.is_static() {
                signature.push_str("static ");
            }
            if method.is_abstract() {
                signature.push_str("abstract ");
            }
            if method.is_override() {
                signature.push_str("override ");
            }
            if method.is_async() {
                signature.push_str("async ");
            }
        }
        signature.push_str(method.name());
        signature.push_str(&type_parameter_list(method.type_parameters()));
        signature.push_str(&format!("({})", parameter_list(method.parameters())));
        if let Some(ret) = method.get_return_type() {
            signature.push_str(": ");
            signature.push_str(ret);
        }
        signature
    }

    fn nested_chunk(&self, ty: &TypeBuilder) -> Result<String, EmitError> {
        let mut w = self.chunk_writer();
        for nested in ty.nested_types() {
            self.render_type(&mut w, nested)?;
        }
        Ok(w.finish())
    }

    /// Write `signature` followed by a brace-delimited body.
    ///
    /// Body statements keep their internal newlines and are re-indented
    /// by exactly one additional level; an empty body renders `{ }` on
    /// the signature line.
    fn write_body_block(&self, w: &mut CodeWriter, signature: &str, body: &BodyBuilder) {
        if body.is_empty() {
            w.line(&format!("{} {{ }}", signature));
            return;
        }
        w.line(&format!("{} {{", signature));
        w.indent();
        for stmt in body.statements() {
            w.lines(stmt);
        }
        w.dedent();
        w.line("}");
    }

    fn render_doc(&self, w: &mut CodeWriter, text: &str) {
        if !text.contains('\n') {
            w.line(&format!("/** {} */", text));
            return;
        }
        w.line("/**");
        for line in text.lines() {
            if line.is_empty() {
                w.line(" *");
            } else {
                w.line(&format!(" * {}", line));
            }
        }
        w.line(" */");
    }

    fn leading_modifiers(&self, ty: &TypeBuilder) -> String {
        let mut modifiers = String::new();
        if ty.is_exported() {
            modifiers.push_str("export ");
        }
        if ty.is_declared() {
            modifiers.push_str("declare ");
        }
        if ty.is_abstract() && ty.kind() == TypeKind::Class {
            modifiers.push_str("abstract ");
        }
        modifiers
    }

    fn terminator(&self) -> &'static str {
        if self.options.semicolons { ";" } else { "" }
    }

    fn chunk_writer(&self) -> CodeWriter {
        // Chunks are rendered at level zero and re-indented additively
        // when spliced into the enclosing braces.
        CodeWriter::new(self.options.indent, "\n")
    }
}

fn type_parameter_list(params: &[String]) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("<{}>", params.join(", "))
    }
}

fn parameter_list(params: &[ParameterBuilder]) -> String {
    params
        .iter()
        .map(|param| {
            let mut s = String::new();
            if let Some(access) = param.get_accessibility() {
                s.push_str(access.keyword());
                s.push(' ');
            }
            if param.is_readonly() {
                s.push_str("readonly ");
            }
            s.push_str(param.name());
            if param.is_optional() {
                s.push('?');
            }
            if let Some(ty) = param.ty() {
                s.push_str(": ");
                s.push_str(ty);
            }
            if let Some(default) = param.get_default_value() {
                s.push_str(" = ");
                s.push_str(default);
            }
            s
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
