//! Pure mapping from share records to table rows.

use chrono::{DateTime, Utc};
use serde::Serialize;

use sharedesk_core::types::{ShareId, ShareRecord};

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days until `expires_at`, rounded up and never negative.
pub fn days_remaining(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let seconds = (expires_at - now).num_seconds();
    if seconds <= 0 {
        0
    } else {
        (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
    }
}

/// One rendered share.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareRow {
    /// Share identifier.
    pub share_id: ShareId,
    /// Display name, unescaped; adapters escape for their medium.
    pub video_name: String,
    /// Source video identifier.
    pub stash_video_id: i64,
    /// Expiry instant.
    pub expires_at: DateTime<Utc>,
    /// Expiry formatted for display.
    pub expires_display: String,
    /// Days left before expiry, at build time.
    pub days_remaining: i64,
    /// Whether the link has already expired.
    pub expired: bool,
    /// Hit counter.
    pub hits: i64,
    /// Absolute share URL.
    pub share_url: String,
}

impl ShareRow {
    /// Build a row from a backend record.
    pub fn from_record(record: &ShareRecord, now: DateTime<Utc>, share_base: &str) -> Self {
        Self {
            share_id: record.share_id.clone(),
            video_name: record.video_name.clone(),
            stash_video_id: record.stash_video_id,
            expires_at: record.expires_at,
            expires_display: record.expires_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            days_remaining: days_remaining(record.expires_at, now),
            expired: record.expires_at <= now,
            hits: record.hits,
            share_url: record.share_url(share_base),
        }
    }
}

/// The share table: either rows or a single error row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShareTable {
    /// Rows in backend order.
    pub rows: Vec<ShareRow>,
    /// Set when the listing could not be fetched.
    pub error: Option<String>,
}

impl ShareTable {
    /// Map records to rows.
    pub fn build(records: &[ShareRecord], now: DateTime<Utc>, share_base: &str) -> Self {
        Self {
            rows: records
                .iter()
                .map(|record| ShareRow::from_record(record, now, share_base))
                .collect(),
            error: None,
        }
    }

    /// A table showing a single error row.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            error: Some(message.into()),
        }
    }

    /// Find a row by identifier.
    pub fn find(&self, id: &ShareId) -> Option<&ShareRow> {
        self.rows.iter().find(|row| &row.share_id == id)
    }

    /// Whether a row with `id` is present.
    pub fn contains(&self, id: &ShareId) -> bool {
        self.find(id).is_some()
    }
}
