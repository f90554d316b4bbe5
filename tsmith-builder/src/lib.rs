//! Immutable declaration builders for the tsmith TypeScript source generator.
//!
//! Callers assemble an in-memory model of one type declaration and its
//! members out of small value builders, then hand the root [`TypeBuilder`]
//! to the emitter. Every mutator consumes `self` and returns a new value;
//! nothing is ever mutated in place, so a half-built builder can be cloned
//! and forked freely.
//!
//! # Example
//!
//! ```
//! use tsmith_builder::{FieldBuilder, MethodBuilder, TypeBuilder, TypeKind};
//!
//! let ty = TypeBuilder::new(TypeKind::Class, "Person")
//!     .exported()
//!     .field(FieldBuilder::new("id", "string").unwrap().readonly())
//!     .method(
//!         MethodBuilder::new("greet")
//!             .unwrap()
//!             .returns("string")
//!             .expression_body("`Hello, ${this.id}`"),
//!     );
//!
//! assert_eq!(ty.fields().len(), 1);
//! assert_eq!(ty.methods().len(), 1);
//! ```
//!
//! Builders perform no cross-member validation; the emitter is the sole
//! enforcement point and silently omits output that does not apply to the
//! declaration kind.

mod body;
mod constructor;
mod error;
mod field;
mod method;
mod modifiers;
mod parameter;
mod property;
mod type_builder;

pub use body::BodyBuilder;
pub use constructor::ConstructorBuilder;
pub use error::BuilderError;
pub use field::FieldBuilder;
pub use method::{MethodBody, MethodBuilder};
pub use modifiers::Accessibility;
pub use parameter::ParameterBuilder;
pub use property::PropertyBuilder;
pub use type_builder::{EnumMember, IndexSignature, TypeBuilder, TypeKind};
