//! Configen IR - data model for configuration code generation
//!
//! This crate contains the types the generator consumes:
//! - `TypeTag`: the closed set of semantic types a variable can have
//! - `VariableSpec` and `Mapping`: the ordered list of declared variables
//! - `Value` and `ValueSource`: per-environment values keyed by variable name
//!
//! It also owns the two input parsers (mapping text, value-source JSON) since
//! both produce nothing but these types.
//!
//! # Design Philosophy
//!
//! - **Order is data**: mappings and value sources keep insertion order, and
//!   output line order is derived from it.
//! - **Tagged values**: booleans and numbers are distinct `Value` variants, so
//!   rendering never has to guess whether `0` meant `false`.

mod mapping;
mod spec;
mod type_tag;
mod value;
mod value_source;

pub use mapping::{Mapping, MappingError};
pub use spec::VariableSpec;
pub use type_tag::TypeTag;
pub use value::Value;
pub use value_source::{ValueSource, ValueSourceError};
