//! Inbox message sources.
//!
//! A source returns every inbox message, newest first. The CSV source reads
//! an inbox export whose header carries the `body`, `date` and `address`
//! columns; rows are read one at a time and undecodable rows are logged and
//! skipped. Header names are trimmed, field values are kept verbatim.

use crate::error::ReadError;
use crate::message::RawMessage;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::cmp::Reverse;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Columns every inbox export must provide.
pub const INBOX_COLUMNS: [&str; 3] = ["body", "date", "address"];

/// Reads all inbox messages.
pub trait MessageSource {
    /// Returns the inbox contents ordered newest first.
    fn read_inbox_messages(&mut self) -> Result<Vec<RawMessage>, ReadError>;
}

/// Sorts newest first. Messages without a date go last, in their original order.
pub fn sort_newest_first(messages: &mut [RawMessage]) {
    messages.sort_by_key(|m| (m.timestamp.is_none(), Reverse(m.timestamp)));
}

/// Inbox export in CSV form.
pub struct CsvInboxSource<R> {
    reader: Option<R>,
}

impl<R: Read> CsvInboxSource<R> {
    /// Wraps a reader positioned at the header row.
    pub fn new(reader: R) -> Self {
        CsvInboxSource {
            reader: Some(reader),
        }
    }
}

impl CsvInboxSource<BufReader<File>> {
    /// Opens an inbox export on disk.
    pub fn open(path: &Path) -> Result<Self, ReadError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::PermissionDenied => {
                ReadError::PermissionDenied(format!("{}: {}", path.display(), e))
            }
            io::ErrorKind::NotFound => ReadError::Unavailable(format!("{}: {}", path.display(), e)),
            _ => ReadError::Io(e),
        })?;
        Ok(CsvInboxSource::new(BufReader::new(file)))
    }
}

impl<R: Read> MessageSource for CsvInboxSource<R> {
    /// Reads the export. The underlying reader is consumed by the first call;
    /// later calls report the source as unavailable.
    fn read_inbox_messages(&mut self) -> Result<Vec<RawMessage>, ReadError> {
        let reader = self
            .reader
            .take()
            .ok_or_else(|| ReadError::Unavailable("inbox export already consumed".to_string()))?;

        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let missing: Vec<&str> = INBOX_COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if !missing.is_empty() {
            return Err(ReadError::MissingColumns(missing.join(", ")));
        }

        let mut messages = Vec::new();
        for (row_idx, result) in csv_reader.deserialize::<RawMessage>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(message) => messages.push(message),
                Err(e) => warn!("Row {}: CSV parse error: {}", row_num, e),
            }
        }

        debug!("Total SMS messages in inbox: {}", messages.len());
        sort_newest_first(&mut messages);
        Ok(messages)
    }
}

/// Source backed by a fixed list of messages.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    messages: Vec<RawMessage>,
}

impl InMemorySource {
    pub fn new(messages: Vec<RawMessage>) -> Self {
        InMemorySource { messages }
    }
}

impl MessageSource for InMemorySource {
    fn read_inbox_messages(&mut self) -> Result<Vec<RawMessage>, ReadError> {
        let mut messages = self.messages.clone();
        sort_newest_first(&mut messages);
        Ok(messages)
    }
}
