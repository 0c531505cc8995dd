//! Inbox message model shared by sources, the filter and sinks.

use serde::{Deserialize, Serialize};

/// A single inbox message as produced by a [`MessageSource`](crate::MessageSource).
///
/// Field names follow the inbox projection (`body`, `date`, `address`) on the
/// wire so consumers of the bridge keep seeing the same mapping keys.
/// Any field may be absent; absent fields never satisfy the classification
/// predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Message text. Arbitrary Unicode.
    #[serde(default)]
    pub body: Option<String>,

    /// Milliseconds since the Unix epoch, as reported by the device.
    #[serde(rename = "date", default)]
    pub timestamp: Option<i64>,

    /// Sender identifier: a short code or phone number. Compared verbatim.
    #[serde(rename = "address", default)]
    pub sender: Option<String>,
}

/// A message classified as a mobile-money transaction notification.
///
/// Classification adds no fields, so this is the same shape as [`RawMessage`].
pub type TransactionMessage = RawMessage;

impl RawMessage {
    /// Creates a message with all fields present.
    pub fn new(sender: impl Into<String>, body: impl Into<String>, timestamp: i64) -> Self {
        RawMessage {
            body: Some(body.into()),
            timestamp: Some(timestamp),
            sender: Some(sender.into()),
        }
    }

    /// Returns `true` if any of `body`, `date` or `address` is missing.
    pub fn is_malformed(&self) -> bool {
        self.body.is_none() || self.timestamp.is_none() || self.sender.is_none()
    }
}
