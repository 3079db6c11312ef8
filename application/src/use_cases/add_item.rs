//! Add Item use case.
//!
//! Validates an incoming image, tags it with a category and appends it to
//! the catalog.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::image_loader::{ImageLoader, ImageSource, IntakeError};
use crate::session::WardrobeSession;
use std::sync::Arc;
use tracing::{info, warn};
use wardrobe_domain::{Category, DomainError, ImageBlob, InlineImage, ItemId};

/// Input for the [`AddItemUseCase`].
#[derive(Debug, Clone)]
pub struct AddItemInput {
    pub category: Category,
    pub image: ImageSource,
}

impl AddItemInput {
    pub fn new(category: Category, image: ImageSource) -> Self {
        Self { category, image }
    }

    pub fn blob(category: Category, blob: ImageBlob) -> Self {
        Self {
            category,
            image: ImageSource::Blob(blob),
        }
    }

    pub fn inline(category: Category, image: InlineImage) -> Self {
        Self {
            category,
            image: ImageSource::Inline(image),
        }
    }
}

/// Use case for item intake.
///
/// Oversized or empty images are rejected with the catalog untouched; the
/// state keeps the inline message for the presentation layer.
pub struct AddItemUseCase {
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Default for AddItemUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl AddItemUseCase {
    pub fn new() -> Self {
        Self {
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Load `source` through `loader`, then add it like [`execute`](Self::execute).
    pub fn execute_source(
        &self,
        session: &WardrobeSession,
        loader: &dyn ImageLoader,
        category: Category,
        source: &str,
    ) -> Result<ItemId, IntakeError> {
        let image = loader.load(source).inspect_err(|e| {
            warn!("Could not load {} image from {}: {}", category, source, e);
        })?;
        Ok(self.execute(session, AddItemInput::new(category, image))?)
    }

    pub fn execute(
        &self,
        session: &WardrobeSession,
        input: AddItemInput,
    ) -> Result<ItemId, DomainError> {
        let category = input.category;
        let result = session.update(|state| -> Result<(ItemId, String, usize), DomainError> {
            let item = match &input.image {
                ImageSource::Blob(blob) => state.add_item(category, blob)?,
                ImageSource::Inline(image) => state.add_inline(category, image.clone())?,
            };
            Ok((item.id().clone(), item.image().mime_type.clone(), item.image().decoded_len()))
        });

        match result {
            Ok((id, mime_type, bytes)) => {
                info!("Added {} item {} ({} bytes)", category, id, bytes);
                self.conversation_logger.log(ConversationEvent::new(
                    "item_added",
                    serde_json::json!({
                        "id": id.as_str(),
                        "category": category.as_str(),
                        "mime_type": mime_type,
                        "bytes": bytes,
                    }),
                ));
                Ok(id)
            }
            Err(e) => {
                warn!("Rejected {} item: {}", category, e);
                self.conversation_logger.log(ConversationEvent::new(
                    "item_rejected",
                    serde_json::json!({
                        "category": category.as_str(),
                        "reason": e.to_string(),
                    }),
                ));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use wardrobe_domain::MAX_IMAGE_BYTES;

    /// Serves data URLs and pretends every other source is missing
    struct DataUrlOnly;

    impl ImageLoader for DataUrlOnly {
        fn load(&self, source: &str) -> Result<ImageSource, IntakeError> {
            if source.starts_with("data:") {
                Ok(ImageSource::Inline(InlineImage::from_data_url(source)?))
            } else {
                Err(IntakeError::Io {
                    path: PathBuf::from(source),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
            }
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    #[test]
    fn test_adds_blob_item() {
        let session = WardrobeSession::default();
        let use_case = AddItemUseCase::new();

        let id = use_case
            .execute(
                &session,
                AddItemInput::blob(Category::Bottoms, ImageBlob::new(vec![7; 64], "image/jpeg")),
            )
            .unwrap();

        session.read(|state| {
            assert_eq!(state.len(), 1);
            let item = state.item(&id).unwrap();
            assert_eq!(item.category(), Category::Bottoms);
            assert_eq!(item.image().mime_type, "image/jpeg");
        });
    }

    #[test]
    fn test_adds_inline_item() {
        let session = WardrobeSession::default();
        let image = InlineImage::from_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();

        let id = AddItemUseCase::new()
            .execute(&session, AddItemInput::inline(Category::Shoes, image.clone()))
            .unwrap();

        session.read(|state| assert_eq!(state.item(&id).unwrap().image(), &image));
    }

    #[test]
    fn test_oversized_blob_leaves_catalog_unchanged() {
        let session = WardrobeSession::default();
        let logger = Arc::new(RecordingLogger::default());
        let use_case = AddItemUseCase::new().with_conversation_logger(logger.clone());

        use_case
            .execute(
                &session,
                AddItemInput::blob(Category::Tops, ImageBlob::new(vec![1; 10], "image/png")),
            )
            .unwrap();
        let err = use_case
            .execute(
                &session,
                AddItemInput::blob(
                    Category::Tops,
                    ImageBlob::new(vec![1; MAX_IMAGE_BYTES + 1], "image/png"),
                ),
            )
            .unwrap_err();

        assert!(matches!(err, DomainError::PayloadTooLarge { .. }));
        assert_eq!(session.read(|state| state.len()), 1);
        assert_eq!(
            *logger.events.lock().unwrap(),
            vec!["item_added", "item_rejected"]
        );
    }

    #[test]
    fn test_execute_source_through_loader() {
        let session = WardrobeSession::default();
        let use_case = AddItemUseCase::new();

        let id = use_case
            .execute_source(
                &session,
                &DataUrlOnly,
                Category::Tops,
                "data:image/webp;base64,UklGRg==",
            )
            .unwrap();
        session.read(|state| {
            assert_eq!(state.item(&id).unwrap().image().mime_type, "image/webp");
        });

        let err = use_case
            .execute_source(&session, &DataUrlOnly, Category::Tops, "missing.png")
            .unwrap_err();
        assert!(matches!(err, IntakeError::Io { .. }));

        let err = use_case
            .execute_source(&session, &DataUrlOnly, Category::Tops, "data:image/png;base64,")
            .unwrap_err();
        assert!(matches!(err, IntakeError::Rejected(DomainError::InvalidImage(_))));
        assert_eq!(session.read(|state| state.len()), 1);
    }

    #[test]
    fn test_garbage_data_url_is_rejected() {
        let session = WardrobeSession::default();
        let logger = Arc::new(RecordingLogger::default());
        let use_case = AddItemUseCase::new().with_conversation_logger(logger.clone());

        let err = use_case
            .execute_source(
                &session,
                &DataUrlOnly,
                Category::Tops,
                "data:image/png;base64,not base64 at all!!",
            )
            .unwrap_err();

        assert!(matches!(err, IntakeError::Rejected(DomainError::InvalidImage(_))));
        session.read(|state| {
            assert!(state.is_empty());
            assert!(state.intake_error().is_some());
        });
        assert_eq!(*logger.events.lock().unwrap(), vec!["item_rejected"]);
    }
}
