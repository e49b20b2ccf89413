//! Guide configuration.

/// Configuration for [`crate::TourGuide`].
///
/// There is exactly one of these per process: prompt templates, trigger
/// tokens, and fallback behavior all live here, so every entry point speaks
/// with the same voice.
#[derive(Debug, Clone)]
pub struct GuideConfig {
    /// Sentinel user messages that request a scene mini-description instead
    /// of a chat reply. Clients have historically sent both single and
    /// double underscore forms.
    pub mini_info_triggers: Vec<String>,

    /// Minimum count of target-language characters for a reply to pass
    /// validation.
    pub min_native_chars: usize,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            mini_info_triggers: vec!["_mini_info_".to_string(), "__mini_info__".to_string()],
            min_native_chars: 3,
        }
    }
}

impl GuideConfig {
    /// Whether a user message is a mini-info request.
    pub fn is_mini_info(&self, message: &str) -> bool {
        self.mini_info_triggers.iter().any(|t| t == message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_trigger_spellings_recognized() {
        let config = GuideConfig::default();
        assert!(config.is_mini_info("_mini_info_"));
        assert!(config.is_mini_info("__mini_info__"));
        assert!(!config.is_mini_info("расскажи про кампус"));
        assert!(!config.is_mini_info(""));
    }
}
