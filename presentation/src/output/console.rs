//! Console output formatter for the wardrobe and suggestions

use crate::output::markdown;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Display;
use wardrobe_domain::{
    ClothingItem, OutputFormat, SuggestionStatus, WardrobeState, truncate,
};

/// Length of an item id as shown in listings
const SHORT_ID_LEN: usize = 16;

/// Formats wardrobe state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Catalog grouped by category, with display numbers and selection marks
    pub fn catalog(state: &WardrobeState) -> String {
        let mut output = Self::header("Your Wardrobe");
        output.push('\n');

        let mut number = 0;
        for group in state.groups() {
            output.push_str(&Self::section_header(group.category.as_str()));
            if group.is_empty() {
                output.push_str(&format!(
                    "  {}\n",
                    format!("No {} yet.", group.category.as_str().to_lowercase()).dimmed()
                ));
                continue;
            }
            for item in group.items {
                number += 1;
                output.push_str(&Self::item_line(number, item, state.is_selected(item.id())));
            }
        }

        if let Some(message) = state.intake_error() {
            output.push_str(&format!("\n{}\n", Self::error_line(message)));
        }

        output
    }

    /// Selected items in selection order
    pub fn selection(state: &WardrobeState) -> String {
        let selected = state.selected_items();
        if selected.is_empty() {
            return format!("{}\n", "Nothing selected.".dimmed());
        }

        let order = state.display_order();
        let mut output = format!(
            "{} {}\n",
            "Selected:".cyan().bold(),
            selected.len()
        );
        for item in selected {
            let number = order
                .iter()
                .position(|candidate| candidate.id() == item.id())
                .map_or(0, |index| index + 1);
            output.push_str(&Self::item_line(number, item, true));
        }
        output
    }

    /// One-line description of the suggestion status
    pub fn status(status: &SuggestionStatus) -> String {
        match status {
            SuggestionStatus::Idle => format!(
                "{} Select items, then run `suggest`.",
                "Idle.".dimmed()
            ),
            SuggestionStatus::Loading => "Mixing and matching...".yellow().to_string(),
            SuggestionStatus::Result(_) => "Suggestion ready.".green().to_string(),
            SuggestionStatus::Error(message) => Self::error_line(message),
        }
    }

    /// The suggestion (or its error) in the requested format
    pub fn suggestion(state: &WardrobeState, format: OutputFormat) -> String {
        match (format, state.suggestion()) {
            (OutputFormat::Json, _) => Self::format_json(state),
            (OutputFormat::Raw, SuggestionStatus::Result(text)) => text.clone(),
            (OutputFormat::Rendered, SuggestionStatus::Result(text)) => format!(
                "{}\n\n{}\n{}",
                Self::header("Your Outfit"),
                markdown::render(text),
                Self::footer()
            ),
            (_, status) => Self::status(status),
        }
    }

    /// Wardrobe summary as JSON; image payloads are left out
    pub fn format_json(state: &WardrobeState) -> String {
        let summary = WardrobeSummary::from(state);
        serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "{}".to_string())
    }

    /// Full-screen message for fatal configuration problems
    pub fn configuration_error(error: &dyn Display) -> String {
        let line = "=".repeat(60);
        format!(
            "{}\n{:^60}\n{}\n\n{}\n\n{}\n",
            line.red(),
            "Configuration Error".red().bold(),
            line.red(),
            error,
            "Set API_KEY (or GEMINI_API_KEY) and check your wardrobe.toml, then try again."
                .dimmed()
        )
    }

    pub fn error_line(message: &str) -> String {
        format!("{} {}", "x".red().bold(), message.red())
    }

    pub fn success_line(message: &str) -> String {
        format!("{} {}", "v".green().bold(), message)
    }

    fn item_line(number: usize, item: &ClothingItem, selected: bool) -> String {
        let mark = if selected {
            "[x]".green().bold().to_string()
        } else {
            "[ ]".dimmed().to_string()
        };
        format!(
            "  {} {:>2}. {}  {}\n",
            mark,
            number,
            truncate(item.id().as_str(), SHORT_ID_LEN),
            format!(
                "{} · {}",
                item.image().mime_type,
                Self::human_size(item.image().decoded_len())
            )
            .dimmed()
        )
    }

    fn human_size(bytes: usize) -> String {
        const KIB: f64 = 1024.0;
        let bytes = bytes as f64;
        if bytes >= KIB * KIB {
            format!("{:.1} MB", bytes / (KIB * KIB))
        } else if bytes >= KIB {
            format!("{:.1} KB", bytes / KIB)
        } else {
            format!("{} B", bytes)
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", title.cyan().bold())
    }

    fn footer() -> String {
        "=".repeat(60).cyan().to_string()
    }
}

#[derive(Serialize)]
struct WardrobeSummary<'a> {
    items: Vec<ItemSummary<'a>>,
    selected: Vec<&'a str>,
    suggestion: &'a SuggestionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    intake_error: Option<&'a str>,
}

#[derive(Serialize)]
struct ItemSummary<'a> {
    number: usize,
    id: &'a str,
    category: &'a str,
    mime_type: &'a str,
    bytes: usize,
    selected: bool,
}

impl<'a> From<&'a WardrobeState> for WardrobeSummary<'a> {
    fn from(state: &'a WardrobeState) -> Self {
        let items = state
            .display_order()
            .into_iter()
            .enumerate()
            .map(|(index, item)| ItemSummary {
                number: index + 1,
                id: item.id().as_str(),
                category: item.category().as_str(),
                mime_type: &item.image().mime_type,
                bytes: item.image().decoded_len(),
                selected: state.is_selected(item.id()),
            })
            .collect();

        Self {
            items,
            selected: state.selection().iter().map(|id| id.as_str()).collect(),
            suggestion: state.suggestion(),
            intake_error: state.intake_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_domain::{Category, ImageBlob, MAX_IMAGE_BYTES};

    fn wardrobe() -> WardrobeState {
        let mut state = WardrobeState::new();
        state
            .add_item(Category::Shoes, &ImageBlob::new(vec![1; 2048], "image/png"))
            .unwrap();
        state
            .add_item(Category::Tops, &ImageBlob::new(vec![2; 10], "image/jpeg"))
            .unwrap();
        state
    }

    #[test]
    fn test_catalog_lists_groups_and_empty_messages() {
        let state = wardrobe();
        let out = ConsoleFormatter::catalog(&state);

        assert!(out.contains("Tops"));
        assert!(out.contains("No bottoms yet."));
        assert!(out.contains("image/png"));
        assert!(out.contains("2.0 KB"));
        assert!(!out.contains("No tops yet."));

        let tops = out.find("Tops").unwrap();
        let shoes = out.find("Shoes").unwrap();
        assert!(tops < shoes);
    }

    #[test]
    fn test_catalog_shows_intake_error() {
        let mut state = wardrobe();
        let _ = state.add_item(
            Category::Tops,
            &ImageBlob::new(vec![0; MAX_IMAGE_BYTES + 1], "image/png"),
        );
        assert!(ConsoleFormatter::catalog(&state).contains("Image size cannot exceed 4MB."));
    }

    #[test]
    fn test_selection_uses_display_numbers() {
        let mut state = wardrobe();
        let shoe = state.resolve("2").unwrap();
        state.toggle(&shoe).unwrap();

        let out = ConsoleFormatter::selection(&state);
        assert!(out.contains(" 2. "));
        assert!(ConsoleFormatter::selection(&WardrobeState::new()).contains("Nothing selected."));
    }

    #[test]
    fn test_suggestion_formats() {
        let mut state = wardrobe();
        let top = state.resolve("1").unwrap();
        state.toggle(&top).unwrap();
        state.begin_suggestion();
        state.complete_suggestion(Ok("## Look\n- **Shirt**".to_string()));

        assert_eq!(
            ConsoleFormatter::suggestion(&state, OutputFormat::Raw),
            "## Look\n- **Shirt**"
        );
        let rendered = ConsoleFormatter::suggestion(&state, OutputFormat::Rendered);
        assert!(rendered.contains("Shirt"));
        assert!(!rendered.contains("**"));
    }

    #[test]
    fn test_json_summary_has_no_image_data() {
        let mut state = wardrobe();
        let top = state.resolve("1").unwrap();
        state.toggle(&top).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&state)).unwrap();
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
        assert_eq!(json["items"][0]["category"], "Tops");
        assert_eq!(json["items"][0]["selected"], true);
        assert_eq!(json["selected"][0], top.as_str());
        assert_eq!(json["suggestion"]["status"], "idle");
        assert!(json["items"][0].get("data").is_none());
    }

    #[test]
    fn test_error_status_shows_message() {
        let status = SuggestionStatus::Error("try again".to_string());
        assert!(ConsoleFormatter::status(&status).contains("try again"));
    }

    #[test]
    fn test_configuration_error_screen() {
        let out = ConsoleFormatter::configuration_error(&"API key missing");
        assert!(out.contains("Configuration Error"));
        assert!(out.contains("API key missing"));
    }
}
