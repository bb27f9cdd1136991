//! Schema model and the ways of building one.

pub mod builder;
pub mod descriptor;
pub mod example;
pub mod schema;
pub mod validate;
pub mod walker;

pub use builder::{SchemaBuilder, S};
pub use schema::*;
pub use validate::validate_schema;
pub use walker::{SchemaStats, Walker};
