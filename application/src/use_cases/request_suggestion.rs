//! Request Suggestion use case.
//!
//! Sends the current selection to the styling service and settles the
//! session's suggestion status with the result.

use crate::config::BehaviorConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::SuggestionProgress;
use crate::ports::stylist_gateway::{GatewayError, StylistGateway};
use crate::session::WardrobeSession;
use std::sync::Arc;
use tracing::{debug, info, warn};
use wardrobe_domain::{BeginSuggestion, SuggestionFailure, truncate};

/// How a suggestion request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    /// The service answered; the text is now the session's result
    Suggested(String),
    /// The call failed; the session shows the fallback message
    Failed(SuggestionFailure),
    /// Nothing was selected; no call was made
    NoSelection,
    /// Another request was already in flight; nothing happened
    Skipped,
}

/// Use case for requesting a styling suggestion.
///
/// Executes:
/// 1. Move the session to `Loading` (or bail out: nothing selected / already loading)
/// 2. Exactly one gateway call with every selected image
/// 3. Store the text, or the fallback message on any failure
pub struct RequestSuggestionUseCase {
    gateway: Arc<dyn StylistGateway>,
    behavior: BehaviorConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RequestSuggestionUseCase {
    pub fn new(gateway: Arc<dyn StylistGateway>) -> Self {
        Self {
            gateway,
            behavior: BehaviorConfig::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub async fn execute(
        &self,
        session: &WardrobeSession,
        progress: &dyn SuggestionProgress,
    ) -> SuggestionOutcome {
        let request = match session.update(|state| state.begin_suggestion()) {
            BeginSuggestion::Ready(request) => request,
            BeginSuggestion::AlreadyInFlight => {
                debug!("Suggestion already in flight; ignoring request");
                return SuggestionOutcome::Skipped;
            }
            BeginSuggestion::NoSelection => {
                info!("Suggestion requested with an empty selection");
                return SuggestionOutcome::NoSelection;
            }
        };

        let image_count = request.image_count();
        info!(
            "Requesting outfit suggestion from {} with {} image(s)",
            self.gateway.model_name(),
            image_count
        );
        self.conversation_logger.log(ConversationEvent::new(
            "suggestion_request",
            serde_json::json!({
                "model": self.gateway.model_name(),
                "images": image_count,
                "mime_types": request.images.iter().map(|i| i.mime_type.as_str()).collect::<Vec<_>>(),
                "prompt": request.user_prompt,
            }),
        ));

        progress.on_request_start(image_count);
        let outcome = self
            .call_gateway(&request)
            .await
            .and_then(|text| {
                if text.trim().is_empty() {
                    Err(GatewayError::MalformedResponse(
                        "response contained no text".to_string(),
                    ))
                } else {
                    Ok(text)
                }
            })
            .map_err(SuggestionFailure::from);
        progress.on_request_complete(outcome.is_ok());

        session.update(|state| {
            state.complete_suggestion(outcome.clone());
        });

        match outcome {
            Ok(text) => {
                info!("Suggestion received ({} bytes)", text.len());
                debug!("Suggestion preview: {}", truncate(&text, 120));
                self.conversation_logger.log(ConversationEvent::new(
                    "suggestion_response",
                    serde_json::json!({
                        "model": self.gateway.model_name(),
                        "bytes": text.len(),
                        "text": text,
                    }),
                ));
                SuggestionOutcome::Suggested(text)
            }
            Err(failure) => {
                warn!("Suggestion failed ({}): {}", failure.kind, failure.detail);
                self.conversation_logger.log(ConversationEvent::new(
                    "suggestion_failed",
                    serde_json::json!({
                        "model": self.gateway.model_name(),
                        "kind": failure.kind.as_str(),
                        "detail": failure.detail,
                    }),
                ));
                SuggestionOutcome::Failed(failure)
            }
        }
    }

    async fn call_gateway(
        &self,
        request: &wardrobe_domain::OutfitRequest,
    ) -> Result<String, GatewayError> {
        match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, self.gateway.suggest_outfit(request))
                .await
                .unwrap_or(Err(GatewayError::Timeout)),
            None => self.gateway.suggest_outfit(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;
    use wardrobe_domain::{
        Category, FALLBACK_MESSAGE, ImageBlob, NO_SELECTION_MESSAGE, OutfitRequest,
        SuggestionFailureKind, SuggestionStatus,
    };

    // ==================== Test Mocks ====================

    enum Reply {
        Text(String),
        Fail(fn() -> GatewayError),
        Hang,
    }

    struct MockGateway {
        reply: Reply,
        calls: AtomicUsize,
        requests: Mutex<Vec<OutfitRequest>>,
        release: Notify,
    }

    impl MockGateway {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
                release: Notify::new(),
            }
        }

        fn text(text: &str) -> Self {
            Self::new(Reply::Text(text.to_string()))
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StylistGateway for MockGateway {
        fn model_name(&self) -> &str {
            "mock-stylist"
        }

        async fn suggest_outfit(&self, request: &OutfitRequest) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());
            match &self.reply {
                Reply::Text(text) => Ok(text.clone()),
                Reply::Fail(make) => Err(make()),
                Reply::Hang => {
                    self.release.notified().await;
                    Ok("released".to_string())
                }
            }
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl SuggestionProgress for RecordingProgress {
        fn on_request_start(&self, image_count: usize) {
            self.events.lock().unwrap().push(format!("start:{}", image_count));
        }

        fn on_request_complete(&self, success: bool) {
            self.events.lock().unwrap().push(format!("complete:{}", success));
        }
    }

    fn session_with_selection(selected: usize) -> WardrobeSession {
        let session = WardrobeSession::default();
        session.update(|state| {
            for (i, category) in [Category::Tops, Category::Bottoms, Category::Shoes]
                .into_iter()
                .enumerate()
            {
                let id = state
                    .add_item(category, &ImageBlob::new(vec![i as u8 + 1; 8], "image/png"))
                    .unwrap()
                    .id()
                    .clone();
                if i < selected {
                    state.toggle(&id).unwrap();
                }
            }
        });
        session
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_empty_selection_makes_no_call() {
        let gateway = Arc::new(MockGateway::text("unused"));
        let use_case = RequestSuggestionUseCase::new(gateway.clone());
        let session = session_with_selection(0);

        let outcome = use_case.execute(&session, &NoProgress).await;

        assert_eq!(outcome, SuggestionOutcome::NoSelection);
        assert_eq!(gateway.calls(), 0);
        assert_eq!(
            session.read(|s| s.suggestion().clone()),
            SuggestionStatus::Error(NO_SELECTION_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_success_stores_result() {
        let gateway = Arc::new(MockGateway::text("X"));
        let use_case = RequestSuggestionUseCase::new(gateway.clone());
        let session = session_with_selection(2);
        let progress = RecordingProgress::default();

        let outcome = use_case.execute(&session, &progress).await;

        assert_eq!(outcome, SuggestionOutcome::Suggested("X".to_string()));
        session.read(|state| {
            assert_eq!(state.suggestion().result(), Some("X"));
            assert_eq!(state.suggestion().error(), None);
            assert!(!state.is_loading());
        });
        assert_eq!(gateway.calls(), 1);
        assert_eq!(
            *progress.events.lock().unwrap(),
            vec!["start:2".to_string(), "complete:true".to_string()]
        );
    }

    #[tokio::test]
    async fn test_request_bundles_every_selected_image() {
        let gateway = Arc::new(MockGateway::text("ok"));
        let use_case = RequestSuggestionUseCase::new(gateway.clone());
        let session = session_with_selection(3);
        let expected: Vec<_> = session.read(|state| {
            state
                .selected_items()
                .into_iter()
                .map(|item| item.image().clone())
                .collect()
        });

        use_case.execute(&session, &NoProgress).await;

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].images, expected);
        assert_eq!(
            requests[0].user_prompt,
            wardrobe_domain::StylistPrompt::user_prompt()
        );
    }

    #[tokio::test]
    async fn test_failure_stores_fallback() {
        let gateway = Arc::new(MockGateway::new(Reply::Fail(|| {
            GatewayError::Connection("connection refused".to_string())
        })));
        let use_case = RequestSuggestionUseCase::new(gateway);
        let session = session_with_selection(1);

        let outcome = use_case.execute(&session, &NoProgress).await;

        let SuggestionOutcome::Failed(failure) = outcome else {
            panic!("expected failure");
        };
        assert_eq!(failure.kind, SuggestionFailureKind::Network);
        session.read(|state| {
            assert_eq!(state.suggestion().error(), Some(FALLBACK_MESSAGE));
            assert_eq!(state.suggestion().result(), None);
            assert!(!state.is_loading());
        });
    }

    #[tokio::test]
    async fn test_blank_text_counts_as_malformed() {
        let gateway = Arc::new(MockGateway::text("   \n"));
        let use_case = RequestSuggestionUseCase::new(gateway);
        let session = session_with_selection(1);
        let progress = RecordingProgress::default();

        let outcome = use_case.execute(&session, &progress).await;

        assert_eq!(
            *progress.events.lock().unwrap(),
            vec!["start:1".to_string(), "complete:false".to_string()]
        );

        assert!(matches!(
            outcome,
            SuggestionOutcome::Failed(SuggestionFailure {
                kind: SuggestionFailureKind::MalformedResponse,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_double_invocation_issues_one_call() {
        let gateway = Arc::new(MockGateway::new(Reply::Hang));
        let use_case = RequestSuggestionUseCase::new(gateway.clone());
        let session = session_with_selection(1);

        let (first, second) = tokio::join!(use_case.execute(&session, &NoProgress), async {
            let outcome = use_case.execute(&session, &NoProgress).await;
            gateway.release.notify_one();
            outcome
        });

        assert_eq!(second, SuggestionOutcome::Skipped);
        assert_eq!(first, SuggestionOutcome::Suggested("released".to_string()));
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_settles_as_failure() {
        let gateway = Arc::new(MockGateway::new(Reply::Hang));
        let use_case = RequestSuggestionUseCase::new(gateway)
            .with_behavior(BehaviorConfig::with_timeout_seconds(5));
        let session = session_with_selection(1);

        let outcome = tokio::time::timeout(
            Duration::from_secs(60),
            use_case.execute(&session, &NoProgress),
        )
        .await
        .unwrap();

        assert!(matches!(
            outcome,
            SuggestionOutcome::Failed(SuggestionFailure {
                kind: SuggestionFailureKind::Timeout,
                ..
            })
        ));
        assert!(!session.read(|state| state.is_loading()));
    }
}
