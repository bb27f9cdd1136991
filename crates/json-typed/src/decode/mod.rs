//! Schema-directed decoder.

pub mod config;
pub mod decoder;

pub use config::{DecoderConfig, UnknownFieldStrategy};
pub use decoder::{decode, decode_node, decode_with};
