//! Append-only JSONL transcript of intake and styling events.
//!
//! Every record carries `type` and `timestamp` next to the event's own
//! fields. Image payloads are never written; callers log counts and MIME
//! types instead.

use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::warn;
use wardrobe_application::{ConversationEvent, ConversationLogger};

/// Transcript writer backed by a single file.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open `path` for appending, creating it and its parent directories.
    ///
    /// Returns `None` (after a warning) when the file cannot be opened, so a
    /// bad log path never stops the stylist from starting.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(Self {
                writer: Mutex::new(BufWriter::new(file)),
                path: path.to_path_buf(),
            }),
            Err(e) => {
                warn!("Could not open transcript {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: ConversationEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut record = match event.payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        record.insert("type".to_string(), Value::from(event.event_type));
        record.insert("timestamp".to_string(), Value::from(timestamp));
        Value::Object(record)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            warn!("Failed to write transcript {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        let writer = self.writer.get_mut().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_record_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stylist.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new(
            "item_added",
            json!({"id": "item-1", "category": "tops", "bytes": 1024}),
        ));
        logger.log(ConversationEvent::new(
            "suggestion_request",
            json!({"model": "gemini-2.5-flash", "images": 2}),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "item_added");
        assert_eq!(records[0]["category"], "tops");
        assert_eq!(records[1]["type"], "suggestion_request");
        assert_eq!(records[1]["images"], 2);
        assert!(records.iter().all(|r| r["timestamp"].is_string()));
    }

    #[test]
    fn test_scalar_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scalar.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new("note", json!("plain text")));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "note");
        assert_eq!(records[0]["data"], "plain text");
    }

    #[test]
    fn test_reopening_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("stylist.jsonl");

        for _ in 0..2 {
            let logger = JsonlConversationLogger::open(&path).unwrap();
            logger.log(ConversationEvent::new("suggestion_failed", json!({"kind": "timeout"})));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        assert!(JsonlConversationLogger::open(blocker.join("log.jsonl")).is_none());
    }
}
