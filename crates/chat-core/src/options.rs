//! Per-call sampling parameters.

/// Sampling parameters for a single completion call.
///
/// Backends skip fields that are `None`, letting the endpoint apply its own
/// defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionOptions {
    /// Temperature for generation (0.0 - 2.0).
    pub temperature: Option<f32>,
    /// Maximum tokens for the reply.
    pub max_tokens: Option<u32>,
}

impl CompletionOptions {
    /// Set the temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the max tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}
