//! Method-call adapter between a host application and the filter.
//!
//! A host (mobile shell, desktop UI, test harness) forwards method calls by
//! name. `getSmsMessages` reads the inbox, keeps the mobile-money transactions
//! and replies with them; read failures come back as a structured error reply
//! instead of unwinding into the host.

use crate::filter::TransactionMessageFilter;
use crate::message::TransactionMessage;
use crate::source::MessageSource;
use log::{debug, error};

/// Channel the host registers the bridge under.
pub const CHANNEL: &str = "com.example.momoapp/sms";

/// Method that returns the filtered transaction messages.
pub const GET_SMS_MESSAGES: &str = "getSmsMessages";

/// Reply to a single method call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeReply {
    /// Matching messages, newest first.
    Success(Vec<TransactionMessage>),

    /// The call failed. `code` is machine-readable.
    Error { code: String, message: String },

    /// The method name is not handled by this bridge.
    NotImplemented,
}

/// Dispatches host method calls to a message source and the filter.
pub struct SmsBridge<S> {
    source: S,
    filter: TransactionMessageFilter,
}

impl<S: MessageSource> SmsBridge<S> {
    pub fn new(source: S, filter: TransactionMessageFilter) -> Self {
        SmsBridge { source, filter }
    }

    /// Handles one method call.
    pub fn handle(&mut self, method: &str) -> BridgeReply {
        match method {
            GET_SMS_MESSAGES => self.get_sms_messages(),
            other => {
                debug!("Method {} not implemented on {}", other, CHANNEL);
                BridgeReply::NotImplemented
            }
        }
    }

    fn get_sms_messages(&mut self) -> BridgeReply {
        let inbox = match self.source.read_inbox_messages() {
            Ok(inbox) => inbox,
            Err(e) => {
                error!("Error reading SMS: {}", e);
                return BridgeReply::Error {
                    code: e.code().to_string(),
                    message: e.to_string(),
                };
            }
        };

        let transactions = self.filter.filter_owned(inbox);
        for message in &transactions {
            debug!(
                "Added {} transaction: {}",
                self.filter.sender(),
                message.body.as_deref().unwrap_or_default()
            );
        }
        debug!("Found {} messages", transactions.len());

        BridgeReply::Success(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadError;
    use crate::message::RawMessage;
    use crate::source::InMemorySource;

    struct DeniedSource;

    impl MessageSource for DeniedSource {
        fn read_inbox_messages(&mut self) -> Result<Vec<RawMessage>, ReadError> {
            Err(ReadError::PermissionDenied("READ_SMS not granted".to_string()))
        }
    }

    #[test]
    fn test_get_sms_messages_filters_newest_first() {
        let source = InMemorySource::new(vec![
            RawMessage::new("M-Money", "You received 100 RWF", 1),
            RawMessage::new("Bank", "You received 100 RWF", 2),
            RawMessage::new("M-Money", "Payment of 50 RWF done", 3),
            RawMessage::new("M-Money", "Dial *182# for offers", 4),
        ]);
        let mut bridge = SmsBridge::new(source, TransactionMessageFilter::default());

        let reply = bridge.handle(GET_SMS_MESSAGES);
        assert_eq!(
            reply,
            BridgeReply::Success(vec![
                RawMessage::new("M-Money", "Payment of 50 RWF done", 3),
                RawMessage::new("M-Money", "You received 100 RWF", 1),
            ])
        );
    }

    #[test]
    fn test_read_failure_becomes_error_reply() {
        let mut bridge = SmsBridge::new(DeniedSource, TransactionMessageFilter::default());

        match bridge.handle(GET_SMS_MESSAGES) {
            BridgeReply::Error { code, message } => {
                assert_eq!(code, "SMS_READ_ERROR");
                assert!(message.contains("READ_SMS not granted"));
            }
            other => panic!("Expected Error reply, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_method_not_implemented() {
        let mut bridge = SmsBridge::new(InMemorySource::default(), TransactionMessageFilter::default());
        assert_eq!(bridge.handle("getContacts"), BridgeReply::NotImplemented);
    }

    #[test]
    fn test_empty_inbox() {
        let mut bridge = SmsBridge::new(InMemorySource::default(), TransactionMessageFilter::default());
        assert_eq!(bridge.handle(GET_SMS_MESSAGES), BridgeReply::Success(vec![]));
    }
}
