use crate::domain::payment::Transaction;
use crate::error::Result;
use std::io::Write;

/// Writes the final transaction statement as CSV.
pub struct StatementWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StatementWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Serializes the transactions in the order given (most recent first).
    pub fn write_statement(&mut self, transactions: Vec<Transaction>) -> Result<()> {
        for tx in transactions {
            self.writer.serialize(tx)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
