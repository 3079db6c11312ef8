//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod conversation_logger;
pub mod image_loader;
pub mod progress;
pub mod stylist_gateway;
