//! Toggle Selection use case.

use crate::session::WardrobeSession;
use tracing::debug;
use wardrobe_domain::{DomainError, ItemId};

/// Result of a toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutput {
    pub id: ItemId,
    /// Whether the item is selected after the toggle
    pub selected: bool,
}

/// Use case for moving an item in or out of the selection.
///
/// Items are referenced either by their display number in the grouped
/// catalog view or by id.
pub struct ToggleSelectionUseCase;

impl ToggleSelectionUseCase {
    pub fn execute(
        &self,
        session: &WardrobeSession,
        reference: &str,
    ) -> Result<ToggleOutput, DomainError> {
        session.update(|state| -> Result<ToggleOutput, DomainError> {
            let id = state.resolve(reference)?;
            let selected = state.toggle(&id)?;
            debug!(
                "{} {} ({} selected)",
                if selected { "Selected" } else { "Deselected" },
                id,
                state.selection().len()
            );
            Ok(ToggleOutput { id, selected })
        })
    }
}
