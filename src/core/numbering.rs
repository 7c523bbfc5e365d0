//! Serial number generation for invoices and quotations.
//!
//! Serials have the form `{PREFIX}-{n:06}` — `TAX-000001` for tax invoices,
//! `INV-000001` for proforma invoices, `QTN-000001` for quotations — where
//! `n` is one past the number of documents already stored for that series.
//!
//! This is a convenience generator, not a uniqueness guarantee: counting
//! existing documents and then formatting `count + 1` is a read-then-write
//! pattern, and two concurrent creators that observe the same count will
//! produce the same serial. The storage layer must keep a unique index on
//! the serial column and retry on conflict.

use super::types::InvoiceKind;

/// Serial-number prefix for quotations.
pub const QUOTATION_PREFIX: &str = "QTN";

const DEFAULT_PADDING: usize = 6;

/// Sequential serial-number generator for one document series.
#[derive(Debug, Clone)]
pub struct SerialSequence {
    prefix: String,
    next: u64,
    zero_pad: usize,
}

impl SerialSequence {
    /// Create a new sequence starting at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
            zero_pad: DEFAULT_PADDING,
        }
    }

    /// Create a sequence continuing after `count` existing documents.
    pub fn from_count(prefix: impl Into<String>, count: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: count + 1,
            zero_pad: DEFAULT_PADDING,
        }
    }

    /// Sequence for an invoice series (`TAX-` or `INV-`).
    pub fn invoices(kind: InvoiceKind, count: u64) -> Self {
        Self::from_count(kind.serial_prefix(), count)
    }

    /// Sequence for the quotation series (`QTN-`).
    pub fn quotations(count: u64) -> Self {
        Self::from_count(QUOTATION_PREFIX, count)
    }

    /// Set zero-padding width (default: 6, so "000001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next serial and advance the sequence.
    pub fn next_serial(&mut self) -> String {
        let serial = self.peek();
        self.next += 1;
        serial
    }

    /// Preview the next serial without consuming it.
    pub fn peek(&self) -> String {
        format!(
            "{}-{:0>width$}",
            self.prefix,
            self.next,
            width = self.zero_pad
        )
    }

    /// The next raw counter value (without prefix/formatting).
    pub fn next_raw(&self) -> u64 {
        self.next
    }
}

/// One-shot serial after `count` existing documents of an invoice series.
pub fn invoice_serial(kind: InvoiceKind, count: u64) -> String {
    SerialSequence::invoices(kind, count).peek()
}

/// One-shot serial after `count` existing quotations.
pub fn quotation_serial(count: u64) -> String {
    SerialSequence::quotations(count).peek()
}
