//! Handler trait for log destinations

use super::{error::Result, record::Record};
use std::sync::Arc;

/// A sink that accepts single records or batches
///
/// Handlers take `&self` and guard their own state, so one instance can be
/// shared by several loggers or router branches behind an `Arc`.
pub trait Handler: Send + Sync {
    fn handle(&self, record: &Record) -> Result<()>;

    /// Process records in order
    ///
    /// The default forwards to [`Handler::handle`] one record at a time and
    /// stops at the first error.
    fn handle_batch(&self, records: &[Record]) -> Result<()> {
        records.iter().try_for_each(|record| self.handle(record))
    }
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn handle(&self, record: &Record) -> Result<()> {
        (**self).handle(record)
    }

    fn handle_batch(&self, records: &[Record]) -> Result<()> {
        (**self).handle_batch(records)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&self, record: &Record) -> Result<()> {
        (**self).handle(record)
    }

    fn handle_batch(&self, records: &[Record]) -> Result<()> {
        (**self).handle_batch(records)
    }
}
