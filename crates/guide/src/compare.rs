//! University-comparison orchestrator.

use std::sync::Arc;

use chat_core::{ChatBackend, CompletionOptions};
use database::University;
use tracing::{debug, error};

use crate::error::GuideError;
use crate::prompt;

/// Sampling parameters for comparison calls: low temperature for a steady,
/// factual tone, bounded length.
const COMPARE_TEMPERATURE: f32 = 0.3;
const COMPARE_MAX_TOKENS: u32 = 900;

/// Compares two university records through the chat backend.
///
/// Precondition checks (distinct ids, both records present) belong to the
/// web layer; this type assumes it is handed two valid records.
pub struct UniversityComparer {
    chat: Arc<dyn ChatBackend>,
}

impl UniversityComparer {
    /// Create a new comparer around an injected backend.
    pub fn new(chat: Arc<dyn ChatBackend>) -> Self {
        Self { chat }
    }

    /// Compare two universities, optionally toward an applicant goal.
    ///
    /// Issues exactly one chat call. Any backend failure is logged here and
    /// surfaced as the generic [`GuideError::Upstream`].
    pub async fn compare(
        &self,
        first: &University,
        second: &University,
        goal: Option<&str>,
    ) -> Result<String, GuideError> {
        let messages = prompt::build_comparison_messages(first, second, goal);
        let options = CompletionOptions::default()
            .with_temperature(COMPARE_TEMPERATURE)
            .with_max_tokens(COMPARE_MAX_TOKENS);

        debug!(first = %first.name, second = %second.name, "Requesting comparison");

        let reply = self
            .chat
            .complete(&messages, &options)
            .await
            .map_err(|err| {
                error!(error = %err, "Comparison request failed");
                GuideError::Upstream
            })?;

        Ok(reply.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_chat::{FailingChat, ScriptedChat};

    fn sample(name: &str) -> University {
        University {
            id: 1,
            name: name.to_string(),
            city: None,
            kind: None,
            rating: Some(7.0),
            tuition_fee: None,
            programs: vec![],
            languages: vec![],
            international_score: None,
            employment_rate: None,
            reviews: vec![],
            image_url: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_single_call_and_trimmed_output() {
        let chat = Arc::new(ScriptedChat::new());
        chat.push_reply("  Итоговая рекомендация: SDU.  \n");
        let comparer = UniversityComparer::new(chat.clone());

        let text = comparer
            .compare(&sample("SDU"), &sample("KBTU"), Some("IT"))
            .await
            .unwrap();

        assert_eq!(text, "Итоговая рекомендация: SDU.");
        assert_eq!(chat.call_count(), 1);
        assert!(chat.calls()[0][1].content.contains("Цель абитуриента: IT"));
    }

    #[tokio::test]
    async fn test_backend_failure_is_generic_upstream_error() {
        let comparer = UniversityComparer::new(Arc::new(FailingChat::new()));

        let err = comparer
            .compare(&sample("A"), &sample("B"), None)
            .await
            .unwrap_err();

        assert!(matches!(&err, GuideError::Upstream));
        // "connection refused" must not leak through the error display
        assert_eq!(err.to_string(), "AI request failed");
    }
}
