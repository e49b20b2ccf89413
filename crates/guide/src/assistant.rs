//! Tour-guide orchestrator.
//!
//! Per request the guide walks a fixed pipeline:
//! resolve the tour, short-circuit mini-info requests, otherwise run a
//! general chat turn, validate the reply language, retry at most once with a
//! stricter prompt, and finally mask persistent failure with a fixed apology.

use std::sync::Arc;

use chat_core::{ChatBackend, ChatMessage, CompletionOptions};
use tours::{Tour, TourError, TourRegistry};
use tracing::{debug, info, warn};

use crate::config::GuideConfig;
use crate::error::GuideError;
use crate::language::looks_native;
use crate::prompt;

/// One assistant request from the tour viewer.
#[derive(Debug, Clone)]
pub struct TourRequest {
    /// Tour the user is walking through.
    pub tour_id: String,
    /// Scene the viewer currently shows, if known.
    pub current_scene: Option<String>,
    /// Raw user message (or a mini-info sentinel token).
    pub message: String,
}

/// The conversational tour guide.
///
/// Holds an injected chat backend, the tour registry, and the single
/// process-wide [`GuideConfig`]. Stateless across requests: every call
/// rebuilds its prompts from scratch and nothing is cached.
pub struct TourGuide {
    chat: Arc<dyn ChatBackend>,
    tours: TourRegistry,
    config: GuideConfig,
}

impl TourGuide {
    /// Create a new guide.
    pub fn new(chat: Arc<dyn ChatBackend>, tours: TourRegistry, config: GuideConfig) -> Self {
        Self {
            chat,
            tours,
            config,
        }
    }

    /// The tour registry this guide reads from.
    pub fn tours(&self) -> &TourRegistry {
        &self.tours
    }

    /// Answer one assistant request.
    ///
    /// The only hard error is a missing or invalid tour; everything past
    /// that point resolves to some text, with chat failures masked by
    /// fallbacks (availability over content correctness).
    pub async fn respond(&self, request: &TourRequest) -> Result<String, GuideError> {
        let tour = match self.tours.load(&request.tour_id).await {
            Ok(Some(tour)) => tour,
            Ok(None) => {
                return Err(GuideError::TourNotFound {
                    id: request.tour_id.clone(),
                })
            }
            // A rejected id gets the same user-facing treatment as a
            // missing file.
            Err(TourError::InvalidId { id }) => return Err(GuideError::TourNotFound { id }),
            Err(err) => return Err(GuideError::Tour(err)),
        };

        let message = request.message.trim();

        if self.config.is_mini_info(message) {
            debug!(tour_id = %request.tour_id, scene = ?request.current_scene, "Mini-info request");
            return Ok(self
                .mini_info(&tour, request.current_scene.as_deref())
                .await);
        }

        Ok(self
            .general_chat(&tour, request.current_scene.as_deref(), message)
            .await)
    }

    /// Mini-info: stored description verbatim, else one synthesis call,
    /// else a templated fallback.
    async fn mini_info(&self, tour: &Tour, current_scene: Option<&str>) -> String {
        let Some(scene) = current_scene.and_then(|id| tour.scene(id)) else {
            return prompt::MISSING_SCENE_FALLBACK.to_string();
        };

        if let Some(description) = scene.stored_description() {
            return description.to_string();
        }

        let messages = prompt::build_scene_description_prompt(&scene.title);
        match self
            .chat
            .complete(&messages, &CompletionOptions::default())
            .await
        {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, scene = %scene.title, "Scene description synthesis failed, using fallback");
                prompt::synthesized_description_fallback(&scene.title)
            }
        }
    }

    /// General chat with bounded-retry-then-fallback language validation.
    async fn general_chat(&self, tour: &Tour, current_scene: Option<&str>, message: &str) -> String {
        let current = current_scene.unwrap_or(&tour.start_scene);
        let system_prompt = prompt::build_system_prompt(tour, current);

        if let Some(reply) = self.ask(&system_prompt, message).await {
            return reply;
        }

        info!("Reply failed language check, retrying with strict prompt");

        let strict_prompt = prompt::build_strict_retry_prompt();
        if let Some(reply) = self.ask(&strict_prompt, message).await {
            return reply;
        }

        warn!("Retry also failed language check, using apology fallback");
        prompt::APOLOGY_FALLBACK.to_string()
    }

    /// One system+user turn; `None` when the call fails or the reply does
    /// not pass the language check.
    async fn ask(&self, system_prompt: &str, message: &str) -> Option<String> {
        let messages = [
            ChatMessage::system(system_prompt),
            ChatMessage::user(message),
        ];

        match self
            .chat
            .complete(&messages, &CompletionOptions::default())
            .await
        {
            Ok(reply) if looks_native(&reply, self.config.min_native_chars) => Some(reply),
            Ok(reply) => {
                debug!(reply = %reply, "Reply failed language check");
                None
            }
            Err(err) => {
                warn!(error = %err, "Chat backend failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_core::ChatError;
    use mock_chat::ScriptedChat;

    const TOUR: &str = r#"{
        "title": "Кампус",
        "startScene": "entrance",
        "scenes": {
            "entrance": {"title": "Главный вход", "description": "Парадный вход университета."},
            "lab": {"title": "Лаборатория", "description": ""}
        }
    }"#;

    fn guide_with_script() -> (tempfile::TempDir, Arc<ScriptedChat>, TourGuide) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("campus.json"), TOUR).unwrap();

        let chat = Arc::new(ScriptedChat::new());
        let guide = TourGuide::new(
            chat.clone(),
            TourRegistry::new(dir.path()),
            GuideConfig::default(),
        );
        (dir, chat, guide)
    }

    fn request(scene: &str, message: &str) -> TourRequest {
        TourRequest {
            tour_id: "campus".to_string(),
            current_scene: Some(scene.to_string()),
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_tour_is_not_found() {
        let (_dir, chat, guide) = guide_with_script();

        let result = guide
            .respond(&TourRequest {
                tour_id: "nope".to_string(),
                current_scene: None,
                message: "привет".to_string(),
            })
            .await;

        assert!(matches!(result, Err(GuideError::TourNotFound { .. })));
        assert_eq!(chat.call_count(), 0);
    }

    #[tokio::test]
    async fn test_traversal_tour_id_is_not_found() {
        let (_dir, chat, guide) = guide_with_script();

        let result = guide
            .respond(&TourRequest {
                tour_id: "../campus".to_string(),
                current_scene: None,
                message: "привет".to_string(),
            })
            .await;

        assert!(matches!(result, Err(GuideError::TourNotFound { .. })));
        assert_eq!(chat.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mini_info_returns_stored_description_verbatim() {
        let (_dir, chat, guide) = guide_with_script();

        let text = guide
            .respond(&request("entrance", "__mini_info__"))
            .await
            .unwrap();

        assert_eq!(text, "Парадный вход университета.");
        assert_eq!(chat.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mini_info_missing_scene_uses_fixed_sentence() {
        let (_dir, chat, guide) = guide_with_script();

        let text = guide
            .respond(&request("no-such-scene", "_mini_info_"))
            .await
            .unwrap();

        assert_eq!(text, prompt::MISSING_SCENE_FALLBACK);
        assert_eq!(chat.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mini_info_empty_description_synthesizes_once() {
        let (_dir, chat, guide) = guide_with_script();
        chat.push_reply("Здесь проводят опыты и практикумы.");

        let text = guide
            .respond(&request("lab", "__mini_info__"))
            .await
            .unwrap();

        assert_eq!(text, "Здесь проводят опыты и практикумы.");
        assert_eq!(chat.call_count(), 1);

        // The synthesis prompt carries the scene title only, not the tour
        let calls = chat.calls();
        assert!(calls[0][1].content.contains("Лаборатория"));
        assert!(!calls[0][1].content.contains("Главный вход"));
    }

    #[tokio::test]
    async fn test_mini_info_failed_synthesis_uses_templated_fallback() {
        let (_dir, chat, guide) = guide_with_script();
        chat.push_error(ChatError::Network("down".to_string()));

        let text = guide
            .respond(&request("lab", "__mini_info__"))
            .await
            .unwrap();

        assert_eq!(text, prompt::synthesized_description_fallback("Лаборатория"));
        assert_eq!(chat.call_count(), 1);
    }

    #[tokio::test]
    async fn test_general_chat_valid_reply_passes_through() {
        let (_dir, chat, guide) = guide_with_script();
        chat.push_reply("Вы стоите у главного входа.");

        let text = guide
            .respond(&request("entrance", "где я?"))
            .await
            .unwrap();

        assert_eq!(text, "Вы стоите у главного входа.");
        assert_eq!(chat.call_count(), 1);
    }

    #[tokio::test]
    async fn test_wrong_language_reply_retries_once_with_strict_prompt() {
        let (_dir, chat, guide) = guide_with_script();
        chat.push_reply("You are at the main entrance.");
        chat.push_reply("Вы у главного входа.");

        let text = guide
            .respond(&request("entrance", "где я?"))
            .await
            .unwrap();

        assert_eq!(text, "Вы у главного входа.");
        assert_eq!(chat.call_count(), 2);

        let calls = chat.calls();
        // First call carries the full tour prompt, the retry a strict one
        assert!(calls[0][0].content.contains("=== ЛОКАЦИИ ==="));
        assert!(calls[1][0].content.contains("ТОЛЬКО на чистом русском"));
        // Same user message both times
        assert_eq!(calls[0][1].content, "где я?");
        assert_eq!(calls[1][1].content, "где я?");
    }

    #[tokio::test]
    async fn test_double_failure_yields_apology_and_no_third_call() {
        let (_dir, chat, guide) = guide_with_script();
        chat.push_reply("still english");
        chat.push_reply("😀");

        let text = guide
            .respond(&request("entrance", "где я?"))
            .await
            .unwrap();

        assert_eq!(text, prompt::APOLOGY_FALLBACK);
        assert_eq!(chat.call_count(), 2);
    }

    #[tokio::test]
    async fn test_transport_failure_counts_as_failed_check() {
        let (_dir, chat, guide) = guide_with_script();
        chat.push_error(ChatError::Network("down".to_string()));
        chat.push_error(ChatError::Network("down".to_string()));

        let text = guide
            .respond(&request("entrance", "где я?"))
            .await
            .unwrap();

        assert_eq!(text, prompt::APOLOGY_FALLBACK);
        assert_eq!(chat.call_count(), 2);
    }

    #[tokio::test]
    async fn test_unknown_current_scene_defaults_to_start_scene() {
        let (_dir, chat, guide) = guide_with_script();
        chat.push_reply("Добро пожаловать!");

        let text = guide
            .respond(&TourRequest {
                tour_id: "campus".to_string(),
                current_scene: None,
                message: "привет".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(text, "Добро пожаловать!");
        let calls = chat.calls();
        assert!(calls[0][0].content.ends_with("Текущая сцена: entrance\n"));
    }
}
