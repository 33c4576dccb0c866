//! Schema normalization
//!
//! Raw schema trees become the closed [`Schema`] sum type; reference targets
//! are collected in a [`SchemaCatalog`] so every `Reference` in the model has
//! exactly one normalized target.

pub mod catalog;
pub mod model;
pub mod normalizer;

pub use catalog::SchemaCatalog;
pub use model::{
    AdditionalProperties, CompositeSchema, CompositionKind, ObjectSchema, PrimitiveKind,
    PrimitiveSchema, Schema, SchemaKind,
};
pub use normalizer::SchemaNormalizer;
