//! Application layer for wardrobe-stylist
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    image_loader::{ImageLoader, ImageSource, IntakeError},
    progress::{NoProgress, SuggestionProgress},
    stylist_gateway::{GatewayError, StylistGateway},
};
pub use session::WardrobeSession;
pub use use_cases::add_item::{AddItemInput, AddItemUseCase};
pub use use_cases::request_suggestion::{RequestSuggestionUseCase, SuggestionOutcome};
pub use use_cases::toggle_selection::{ToggleOutput, ToggleSelectionUseCase};
