//! Decoder configuration.

/// What to do with object keys the struct schema does not name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFieldStrategy {
    /// Skip them (default). The schema projects a subset of the object.
    #[default]
    Ignore,
    /// Fail the decode with `DecodeError::UnknownField`.
    Reject,
}

/// Options for [`decode_with`](super::decode_with).
///
/// The default configuration is the plain [`decode`](super::decode)
/// behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    pub unknown_fields: UnknownFieldStrategy,
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unknown_fields(mut self, unknown_fields: UnknownFieldStrategy) -> Self {
        self.unknown_fields = unknown_fields;
        self
    }
}
