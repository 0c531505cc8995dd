//! Mobile-money transaction classification.
//!
//! A message is a transaction notification when its sender equals the
//! configured identifier exactly and its body contains one of the configured
//! keywords, ignoring case. Records missing a body, sender or date never match.
//!
//! The filter is a pure projection: it performs no I/O and no logging, and
//! its output is always a subsequence of its input.

use crate::config::FilterConfig;
use crate::error::ConfigError;
use crate::message::{RawMessage, TransactionMessage};

/// Classifies inbox messages as mobile-money transactions.
///
/// Immutable after construction, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct TransactionMessageFilter {
    sender: String,
    /// Keywords folded to lowercase once at construction.
    keywords: Vec<String>,
}

impl TransactionMessageFilter {
    /// Builds a filter from a validated config.
    pub fn new(config: FilterConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut keywords: Vec<String> =
            config.keywords.iter().map(|k| k.to_lowercase()).collect();
        keywords.sort();
        keywords.dedup();

        Ok(TransactionMessageFilter {
            sender: config.sender,
            keywords,
        })
    }

    /// The sender identifier this filter accepts.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns `true` if the message is a transaction notification.
    pub fn is_transaction(&self, message: &RawMessage) -> bool {
        let (Some(sender), Some(body), Some(_)) =
            (&message.sender, &message.body, message.timestamp)
        else {
            return false;
        };

        if *sender != self.sender {
            return false;
        }

        let body = body.to_lowercase();
        self.keywords.iter().any(|k| body.contains(k.as_str()))
    }

    /// Returns the matching messages, borrowed, in input order.
    pub fn filter<'a, I>(&self, messages: I) -> Vec<&'a TransactionMessage>
    where
        I: IntoIterator<Item = &'a RawMessage>,
    {
        messages
            .into_iter()
            .filter(|m| self.is_transaction(m))
            .collect()
    }

    /// Consumes the input and returns the matching messages in input order.
    pub fn filter_owned(&self, messages: Vec<RawMessage>) -> Vec<TransactionMessage> {
        messages
            .into_iter()
            .filter(|m| self.is_transaction(m))
            .collect()
    }
}

impl Default for TransactionMessageFilter {
    fn default() -> Self {
        let config = FilterConfig::default();
        TransactionMessageFilter {
            sender: config.sender,
            keywords: config.keywords,
        }
    }
}
