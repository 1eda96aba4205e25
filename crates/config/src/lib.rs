//! Configuration model for the generation pass.
//!
//! This crate provides the input side of component generation:
//! - [`ConfigValue`]: tagged values appearing in a configuration mapping
//! - [`ConfigMap`]: an ordered key/value mapping as produced by a host loader
//! - [`Schema`], [`FieldDef`], [`FieldKind`]: typed field descriptors, each
//!   carrying its own validator
//! - [`Ident`]: validated identifier tokens for declarations and references
//!
//! Validation is pure: [`Schema::validate`] never mutates anything, so the
//! same mapping validated twice yields the same verdict.

mod error;
mod ident;
mod map;
mod schema;
pub mod validators;
mod value;

pub use error::{ConfigError, IdentError, ValueError};
pub use ident::Ident;
pub use map::ConfigMap;
pub use schema::{FieldDef, FieldKind, Schema, Validator};
pub use value::ConfigValue;
