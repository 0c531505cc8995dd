//! # MoMo SMS Filter
//!
//! Picks mobile-money transaction notifications out of an SMS inbox.
//!
//! ## Design Principles
//!
//! - **Pure classification**: [`TransactionMessageFilter`] does no I/O and never
//!   reorders, alters or invents records
//! - **Exact sender match**: the configured sender is compared verbatim
//! - **Case-insensitive keywords**: any configured phrase in the body matches
//! - **Fail closed**: records missing a body, sender or date are excluded
//! - **Stable output keys**: results serialize as `body`, `date`, `address`
//!
//! ## Example
//!
//! ```
//! use momo_sms_filter::{RawMessage, TransactionMessageFilter};
//!
//! let inbox = vec![
//!     RawMessage::new("M-Money", "You transferred to John 2000 RWF", 100),
//!     RawMessage::new("Bank", "payment of 500 received", 200),
//! ];
//! let filter = TransactionMessageFilter::default();
//! assert_eq!(filter.filter(&inbox), vec![&inbox[0]]);
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod filter;
pub mod message;
pub mod sink;
pub mod source;

pub use bridge::{BridgeReply, SmsBridge};
pub use config::FilterConfig;
pub use error::{AppError, ConfigError, ReadError, Result};
pub use filter::TransactionMessageFilter;
pub use message::{RawMessage, TransactionMessage};
pub use sink::{CsvSink, JsonSink, MemorySink, ResultSink};
pub use source::{CsvInboxSource, InMemorySource, MessageSource};
