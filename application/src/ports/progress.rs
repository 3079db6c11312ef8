//! Progress notification port
//!
//! Lets the presentation layer show that a suggestion request is in flight.

/// Callback for suggestion request progress
///
/// Implementations live in the presentation layer (spinner, plain text, ...).
pub trait SuggestionProgress: Send + Sync {
    /// Called right before the outbound call is made
    fn on_request_start(&self, image_count: usize);

    /// Called once the call settles
    fn on_request_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SuggestionProgress for NoProgress {
    fn on_request_start(&self, _image_count: usize) {}
    fn on_request_complete(&self, _success: bool) {}
}
