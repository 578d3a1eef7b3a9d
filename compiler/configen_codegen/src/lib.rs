//! Configen code generation engine
//!
//! Turns a `Mapping` (ordered, type-tagged variable declarations) and a
//! `ValueSource` (per-environment values) into declarations and definitions
//! text for a target language.
//!
//! # Architecture
//!
//! ```text
//! Mapping + ValueSource
//!        ↓
//!   EncryptionSetup     (find the key field, derive the IV, synthesize `<key>IV`)
//!        ↓
//!   merged specs/values
//!        ↓
//!   render_literal      (per-type value coercion, byte arrays, encryption)
//!        ↓
//!   Template            (token substitution into line patterns and skeleton)
//!        ↓
//!   GeneratedFile(s)
//! ```
//!
//! Every failure is fatal for the pass; there is no partial output.

pub mod bytes;
pub mod encryption;
mod engine;
mod error;
pub mod literal;
pub mod targets;
mod template;

pub use encryption::{EncryptionConfig, EncryptionSetup};
pub use engine::{
    auto_generation_notice, render_declarations, render_definitions, GeneratedFile, Generator,
};
pub use error::{ErrorCode, GenerateError};
pub use targets::Target;
pub use template::{
    DictionaryStyle, LinePatterns, Template, BODY_TOKEN, CUSTOM_TYPE_TOKEN, VALUE_TOKEN,
    VARIABLE_NAME_TOKEN,
};
