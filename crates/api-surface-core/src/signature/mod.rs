//! Signature-JSON codebase interchange.
//!
//! Stands in for the parsing front-ends: a serde DTO layer plus a
//! validating loader that builds a [`Codebase`](crate::model::Codebase)
//! through the [`CodebaseBuilder`](crate::model::CodebaseBuilder). The
//! domain model itself stays serde-free.

mod dto;
mod loader;

pub use dto::{
    ClassDto, CodebaseDto, FieldDto, MethodDto, ModifiersDto, PackageDto, ParameterDto,
    PropertyDto, TypeDto,
};
pub use loader::{load, load_str, LoadError};
