pub mod value;

pub use value::TypedValue;
