//! Structured log-attribute builder.
//!
//! [`LogBuilder`] collects the attributes of one unit of work (an action
//! name, free-form key-values, an accumulated message, tags, and an
//! execution timer) and renders them as a single JSON object through the
//! `log` facade.

use std::collections::HashMap;
use std::time::Instant;

use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attribute key holding the action name.
pub const ACTION: &str = "action";
/// Attribute key holding the accumulated message.
pub const MESSAGE: &str = "message";
/// Attribute key holding the tag list.
pub const TAGS: &str = "tags";
/// Attribute key holding the elapsed milliseconds.
pub const EXECUTION_TIME: &str = "execution_time";

/// A named action tag, typically implemented by a caller enum.
pub trait Action {
    fn name(&self) -> &str;
}

/// Current status of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityStatus {
    Started,
    Processing,
    Completed,
    Failed,
    ProcessingWithError,
    CompletedWithError,
}

/// Collects log attributes for one unit of work.
pub struct LogBuilder {
    attributes: HashMap<String, Value>,
    message_parts: Vec<String>,
    tags: Vec<String>,
    started: Option<Instant>,
}

impl LogBuilder {
    /// Starts a builder for the given action; the action name is stored
    /// under the [`ACTION`] attribute.
    pub fn new(action: &dyn Action) -> Self {
        let mut attributes = HashMap::new();
        attributes.insert(ACTION.to_string(), Value::String(action.name().to_string()));
        Self {
            attributes,
            message_parts: Vec::new(),
            tags: Vec::new(),
            started: None,
        }
    }

    /// Puts a key-value attribute.
    pub fn put(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// The attribute under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Replaces the message, discarding previously accumulated parts.
    pub fn set_message(&mut self, message: &str) {
        self.message_parts = vec![message.to_string()];
        self.attributes
            .insert(MESSAGE.to_string(), Value::String(message.to_string()));
    }

    /// Appends one line to the message. Use for step by step execution
    /// where the final message reads as a single block.
    pub fn build_message(&mut self, part: impl ToString) {
        self.message_parts.push(part.to_string());
        self.attributes.insert(
            MESSAGE.to_string(),
            Value::String(self.message_parts.join("\n")),
        );
    }

    /// Appends a `key : value` line to the message.
    pub fn build_message_kv(&mut self, key: impl ToString, value: impl ToString) {
        self.build_message(format!("{} : {}", key.to_string(), value.to_string()));
    }

    /// The accumulated message, if any part was added.
    pub fn message(&self) -> Option<String> {
        if self.message_parts.is_empty() {
            None
        } else {
            Some(self.message_parts.join("\n"))
        }
    }

    /// Adds a tag; the list is mirrored under the [`TAGS`] attribute.
    pub fn add_tag(&mut self, tag: &str) {
        self.tags.push(tag.to_string());
        self.attributes.insert(
            TAGS.to_string(),
            Value::Array(self.tags.iter().cloned().map(Value::String).collect()),
        );
    }

    /// Marks the start of the timed section.
    pub fn start_timer(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Records the elapsed milliseconds under [`EXECUTION_TIME`]. Does
    /// nothing when the timer was never started.
    pub fn stop_timer(&mut self) {
        if let Some(started) = self.started {
            self.attributes.insert(
                EXECUTION_TIME.to_string(),
                Value::from(started.elapsed().as_millis() as u64),
            );
        }
    }

    /// All collected attributes.
    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }

    /// Renders the attributes as one JSON object at info level.
    pub fn emit(&self) {
        match serde_json::to_string(&self.attributes) {
            Ok(rendered) => info!("{rendered}"),
            Err(error) => info!("unserializable log attributes: {error}"),
        }
    }
}
