//! Consumers of the filtered message list.
//!
//! Every sink emits mappings keyed `body`, `date`, `address`, in the order
//! the messages were handed over.

use crate::error::Result;
use crate::message::TransactionMessage;
use crate::source::INBOX_COLUMNS;
use csv::WriterBuilder;
use std::io::Write;

/// Receives the classified transaction messages.
pub trait ResultSink {
    fn accept(&mut self, messages: &[&TransactionMessage]) -> Result<()>;
}

/// Writes a JSON array of `{ "body", "date", "address" }` objects.
pub struct JsonSink<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        JsonSink {
            writer,
            pretty: false,
        }
    }

    /// Indents the output.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

impl<W: Write> ResultSink for JsonSink<W> {
    fn accept(&mut self, messages: &[&TransactionMessage]) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, messages)?;
        } else {
            serde_json::to_writer(&mut self.writer, messages)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes CSV with a `body,date,address` header.
///
/// The header is written even when no message matched.
pub struct CsvSink<W: Write> {
    writer: W,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        CsvSink { writer }
    }
}

impl<W: Write> ResultSink for CsvSink<W> {
    fn accept(&mut self, messages: &[&TransactionMessage]) -> Result<()> {
        let mut csv_writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut self.writer);

        csv_writer.write_record(INBOX_COLUMNS)?;
        for message in messages {
            csv_writer.serialize(message)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

/// Keeps owned copies of everything it receives.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub messages: Vec<TransactionMessage>,
}

impl ResultSink for MemorySink {
    fn accept(&mut self, messages: &[&TransactionMessage]) -> Result<()> {
        self.messages.extend(messages.iter().map(|m| (*m).clone()));
        Ok(())
    }
}
