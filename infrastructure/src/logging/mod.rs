//! Styling transcript logging.
//!
//! Provides [`JsonlConversationLogger`], which appends one JSON object per
//! transcript event and implements the
//! [`ConversationLogger`](wardrobe_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
