//! Stylist prompt templates

use crate::wardrobe::image::InlineImage;
use serde::{Deserialize, Serialize};

/// Fixed instructions for the styling service
pub struct StylistPrompt;

impl StylistPrompt {
    /// System instruction: fashion-stylist persona and task rules
    pub fn system_instruction() -> &'static str {
        r#"You are a world-class fashion stylist. Your goal is to help users create stylish outfits from their wardrobe.
Analyze the provided images of clothing items.
1. Create a cohesive and stylish outfit combination using ONLY the provided items.
2. Provide a detailed explanation for your choice, highlighting why the items work well together (e.g., color theory, style contrast, silhouette balance).
3. Suggest 2-3 specific accessories (like a watch, necklace, bag, or hat) that would complement the outfit. Do not include images of accessories.
4. Keep your response concise, friendly, and encouraging. Use markdown for formatting (e.g., headings, bold text, lists)."#
    }

    /// User prompt sent after the images
    pub fn user_prompt() -> &'static str {
        "Please create a stylish outfit from the clothing items I've provided. Explain your choices and suggest some accessories."
    }
}

/// One outbound styling request: the fixed prompts plus one image per
/// selected item, in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRequest {
    pub system_instruction: String,
    pub user_prompt: String,
    pub images: Vec<InlineImage>,
}

impl OutfitRequest {
    pub fn new(images: Vec<InlineImage>) -> Self {
        Self {
            system_instruction: StylistPrompt::system_instruction().to_string(),
            user_prompt: StylistPrompt::user_prompt().to_string(),
            images,
        }
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}
