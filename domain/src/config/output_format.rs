//! Output format value object

use serde::{Deserialize, Serialize};

/// How a suggestion is written to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown rendered with terminal styling (default)
    #[default]
    Rendered,
    /// The markdown text exactly as the service returned it
    Raw,
    /// Session summary and status as JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_rendered() {
        assert_eq!(OutputFormat::default(), OutputFormat::Rendered);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Raw).unwrap();
        assert_eq!(json, "\"raw\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
