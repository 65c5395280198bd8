//! Core data types for the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier assigned by the store
    pub id: Uuid,

    /// Free-form entry text
    pub content: String,

    /// When this entry was written
    pub timestamp: DateTime<Utc>,
}

/// Builder for creating new entries.
#[derive(Debug, Clone)]
pub struct NewEntry {
    /// Entry text
    pub content: String,

    /// Creation instant (defaults to now)
    pub timestamp: DateTime<Utc>,
}

impl NewEntry {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Filter for querying entries.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Case-sensitive substring the content must contain
    pub contains: Option<String>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to entries containing `fragment`.
    ///
    /// An empty fragment matches everything, so it is dropped.
    pub fn contains(mut self, fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        self.contains = if fragment.is_empty() {
            None
        } else {
            Some(fragment)
        };
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether `content` passes this filter.
    pub fn matches(&self, content: &str) -> bool {
        match self.contains {
            Some(ref fragment) => content.contains(fragment.as_str()),
            None => true,
        }
    }
}
