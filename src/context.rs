//! Execution context carried through a unit of work.
//!
//! An [`ExecutionContext`] identifies one request (with a generated id when
//! the caller does not bring one), names the action being performed, and
//! carries free-form metadata plus a retry budget. Contexts are built
//! through [`ExecutionContextBuilder`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::id;
use crate::logging::{Action, ActivityStatus};

const DEFAULT_MAX_RETRIES: u32 = 5;

/// Context of one unit of work.
///
/// `T` is the caller's reference-id type (an order number, a document id),
/// `V` the caller's user-context type.
#[derive(Debug, Serialize)]
pub struct ExecutionContext<T, V> {
    request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_id: Option<T>,
    #[serde(rename = "user", skip_serializing_if = "Option::is_none")]
    user_context: Option<V>,
    action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    activity_status: Option<ActivityStatus>,
    meta: HashMap<String, Value>,
    max_retries: u32,
    retries_attempted: u32,
    created_at: DateTime<Utc>,
}

impl<T, V> ExecutionContext<T, V> {
    /// A context for `action` with a generated request id.
    pub fn new(action: &dyn Action) -> Self {
        ExecutionContextBuilder::new(action).build()
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn reference_id(&self) -> Option<&T> {
        self.reference_id.as_ref()
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn user_context(&self) -> Option<&V> {
        self.user_context.as_ref()
    }

    pub fn set_user_context(&mut self, user_context: V) {
        self.user_context = Some(user_context);
    }

    pub fn activity_status(&self) -> Option<ActivityStatus> {
        self.activity_status
    }

    pub fn set_activity_status(&mut self, status: ActivityStatus) {
        self.activity_status = Some(status);
    }

    pub fn meta(&self) -> &HashMap<String, Value> {
        &self.meta
    }

    /// Stores a metadata value.
    pub fn put_meta(&mut self, key: &str, value: impl Into<Value>) {
        self.meta.insert(key.to_string(), value.into());
    }

    /// The metadata value under `key`, or `default`.
    pub fn opt_meta(&self, key: &str, default: Value) -> Value {
        self.meta.get(key).cloned().unwrap_or(default)
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn retries_attempted(&self) -> u32 {
        self.retries_attempted
    }

    /// Records `count` additional retry attempts.
    pub fn add_retries_attempted(&mut self, count: u32) {
        self.retries_attempted += count;
    }

    /// Whether the retry budget allows another attempt.
    pub fn can_retry(&self) -> bool {
        self.retries_attempted < self.max_retries
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Builder for [`ExecutionContext`].
pub struct ExecutionContextBuilder<T> {
    request_id: Option<String>,
    reference_id: Option<T>,
    action: String,
    max_retries: u32,
}

impl<T> ExecutionContextBuilder<T> {
    pub fn new(action: &dyn Action) -> Self {
        Self {
            request_id: None,
            reference_id: None,
            action: action.name().to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Uses the caller's request id instead of generating one.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn reference_id(mut self, reference_id: T) -> Self {
        self.reference_id = Some(reference_id);
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn build<V>(self) -> ExecutionContext<T, V> {
        ExecutionContext {
            request_id: self.request_id.unwrap_or_else(id::generate),
            reference_id: self.reference_id,
            user_context: None,
            action: self.action,
            activity_status: None,
            meta: HashMap::new(),
            max_retries: self.max_retries,
            retries_attempted: 0,
            created_at: Utc::now(),
        }
    }
}
