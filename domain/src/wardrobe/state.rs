//! Wardrobe state container
//!
//! [`WardrobeState`] is the single place session state lives: the catalog,
//! the selection, the suggestion status and the last intake error. It is only
//! mutated through the operations below, so every transition can be tested
//! without a UI or a network.

use super::category::Category;
use super::grouping::{CategoryGroup, group_by_category};
use super::image::{ImageBlob, InlineImage, MAX_IMAGE_BYTES};
use super::item::{ClothingItem, ItemId};
use super::selection::Selection;
use super::suggestion::{
    FALLBACK_MESSAGE, NO_SELECTION_MESSAGE, SuggestionFailure, SuggestionStatus,
};
use crate::core::error::DomainError;
use crate::prompt::OutfitRequest;

const MIB: usize = 1024 * 1024;

const EMPTY_IMAGE_MESSAGE: &str = "Please select an image to save.";
const UNREADABLE_IMAGE_MESSAGE: &str = "That image could not be read. Please choose another one.";

/// Result of trying to start a suggestion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginSuggestion {
    /// State moved to `Loading`; send this request
    Ready(OutfitRequest),
    /// A request is already in flight; nothing changed
    AlreadyInFlight,
    /// Nothing selected; status now holds the inline message
    NoSelection,
}

/// Session state: catalog, selection, request status
#[derive(Debug, Clone)]
pub struct WardrobeState {
    items: Vec<ClothingItem>,
    selection: Selection,
    suggestion: SuggestionStatus,
    intake_error: Option<String>,
    max_image_bytes: usize,
}

impl Default for WardrobeState {
    fn default() -> Self {
        Self::new()
    }
}

impl WardrobeState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selection: Selection::new(),
            suggestion: SuggestionStatus::Idle,
            intake_error: None,
            max_image_bytes: MAX_IMAGE_BYTES,
        }
    }

    /// Lower the intake size limit. Values above [`MAX_IMAGE_BYTES`] are clamped.
    pub fn with_max_image_bytes(mut self, limit: usize) -> Self {
        self.max_image_bytes = limit.min(MAX_IMAGE_BYTES);
        self
    }

    pub fn max_image_bytes(&self) -> usize {
        self.max_image_bytes
    }

    // ==================== Item Intake ====================

    /// Validate and append a raw image.
    ///
    /// On failure the catalog is unchanged and [`Self::intake_error`] holds the
    /// message to show next to the form.
    pub fn add_item(
        &mut self,
        category: Category,
        blob: &ImageBlob,
    ) -> Result<&ClothingItem, DomainError> {
        self.check_image_size(blob.len())?;
        let image = InlineImage::encode(&blob.bytes, blob.mime_type.clone());
        Ok(self.push_item(category, image))
    }

    /// Append an image that is already base64-encoded (e.g. from a data URL).
    ///
    /// The payload must decode; the size limit applies to the decoded bytes.
    pub fn add_inline(
        &mut self,
        category: Category,
        image: InlineImage,
    ) -> Result<&ClothingItem, DomainError> {
        let bytes = image.decode().inspect_err(|_| {
            self.intake_error = Some(UNREADABLE_IMAGE_MESSAGE.to_string());
        })?;
        self.check_image_size(bytes.len())?;
        Ok(self.push_item(category, image))
    }

    fn check_image_size(&mut self, size: usize) -> Result<(), DomainError> {
        if size == 0 {
            self.intake_error = Some(EMPTY_IMAGE_MESSAGE.to_string());
            return Err(DomainError::InvalidImage("image is empty".to_string()));
        }
        if size > self.max_image_bytes {
            self.intake_error = Some(format!(
                "Image size cannot exceed {}.",
                format_limit(self.max_image_bytes)
            ));
            return Err(DomainError::PayloadTooLarge {
                size,
                limit: self.max_image_bytes,
            });
        }
        Ok(())
    }

    fn push_item(&mut self, category: Category, image: InlineImage) -> &ClothingItem {
        self.intake_error = None;
        self.items.push(ClothingItem::new(category, image));
        &self.items[self.items.len() - 1]
    }

    pub fn intake_error(&self) -> Option<&str> {
        self.intake_error.as_deref()
    }

    // ==================== Catalog ====================

    /// All items in insertion order
    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn item(&self, id: &ItemId) -> Option<&ClothingItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Catalog partitioned by category (Tops, Bottoms, Shoes)
    pub fn groups(&self) -> Vec<CategoryGroup<'_>> {
        group_by_category(&self.items)
    }

    /// Items in the order the grouped view lists them.
    ///
    /// Display numbers (1-based) index into this list.
    pub fn display_order(&self) -> Vec<&ClothingItem> {
        self.groups()
            .into_iter()
            .flat_map(|group| group.items)
            .collect()
    }

    /// Resolve a display number, an item id or a unique id prefix to an id in the catalog
    pub fn resolve(&self, reference: &str) -> Result<ItemId, DomainError> {
        let reference = reference.trim();
        if let Ok(number) = reference.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|index| self.display_order().get(index).map(|item| item.id().clone()))
                .ok_or_else(|| DomainError::UnknownItem(reference.to_string()));
        }
        if let Some(item) = self.item(&ItemId::from(reference)) {
            return Ok(item.id().clone());
        }

        // Shortened ids from the listing ("item-1a2b3c4d...") resolve by unique prefix
        let prefix = reference.trim_end_matches("...");
        if prefix.is_empty() {
            return Err(DomainError::UnknownItem(reference.to_string()));
        }
        let mut matches = self
            .items
            .iter()
            .filter(|item| item.id().as_str().starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(item), None) => Ok(item.id().clone()),
            (Some(_), Some(_)) => Err(DomainError::AmbiguousItem(reference.to_string())),
            _ => Err(DomainError::UnknownItem(reference.to_string())),
        }
    }

    // ==================== Selection ====================

    /// Toggle an item in or out of the selection.
    ///
    /// Returns `true` when the item is selected afterwards. Ids outside the
    /// catalog are rejected so the selection never references a missing item.
    pub fn toggle(&mut self, id: &ItemId) -> Result<bool, DomainError> {
        if self.item(id).is_none() {
            return Err(DomainError::UnknownItem(id.to_string()));
        }
        Ok(self.selection.toggle(id))
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selection.contains(id)
    }

    /// Selected items in selection order
    pub fn selected_items(&self) -> Vec<&ClothingItem> {
        self.selection.iter().filter_map(|id| self.item(id)).collect()
    }

    // ==================== Suggestion ====================

    pub fn suggestion(&self) -> &SuggestionStatus {
        &self.suggestion
    }

    pub fn is_loading(&self) -> bool {
        self.suggestion.is_loading()
    }

    /// Try to enter `Loading`.
    ///
    /// While a request is in flight this is a no-op. With an empty selection
    /// the status becomes the inline "no selection" error and no request is
    /// produced.
    pub fn begin_suggestion(&mut self) -> BeginSuggestion {
        if self.suggestion.is_loading() {
            return BeginSuggestion::AlreadyInFlight;
        }
        if self.selection.is_empty() {
            self.suggestion = SuggestionStatus::Error(NO_SELECTION_MESSAGE.to_string());
            return BeginSuggestion::NoSelection;
        }

        let images = self
            .selected_items()
            .into_iter()
            .map(|item| item.image().clone())
            .collect();
        self.suggestion = SuggestionStatus::Loading;
        BeginSuggestion::Ready(OutfitRequest::new(images))
    }

    /// Settle the in-flight request.
    ///
    /// Failures of any kind collapse to [`FALLBACK_MESSAGE`].
    pub fn complete_suggestion(
        &mut self,
        outcome: Result<String, SuggestionFailure>,
    ) -> &SuggestionStatus {
        self.suggestion = match outcome {
            Ok(text) => SuggestionStatus::Result(text),
            Err(_) => SuggestionStatus::Error(FALLBACK_MESSAGE.to_string()),
        };
        &self.suggestion
    }
}

fn format_limit(limit: usize) -> String {
    if limit >= MIB && limit % MIB == 0 {
        format!("{}MB", limit / MIB)
    } else {
        format!("{} bytes", limit)
    }
}
