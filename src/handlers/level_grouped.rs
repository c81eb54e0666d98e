//! Level-based routing handler

use crate::core::{Handler, Level, LoggerError, Record, Result};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Routing rule: records with any of `levels` go to `handler`
#[derive(Clone)]
pub struct LevelGroup {
    pub levels: Vec<Level>,
    pub handler: Arc<dyn Handler>,
}

impl LevelGroup {
    pub fn new<H: Handler + 'static>(levels: impl IntoIterator<Item = Level>, handler: H) -> Self {
        Self {
            levels: levels.into_iter().collect(),
            handler: Arc::new(handler),
        }
    }
}

/// Dispatches each record to the handlers registered for its level
///
/// Levels without a group go to the fallback handler. When several groups
/// name the same level, all of their handlers run in registration order.
/// Dispatch is fail-fast: the first failing handler stops the remaining
/// ones for that call.
///
/// The routing table is fixed at construction, so the router needs no lock
/// of its own; concurrent calls only meet at the handlers' own locks.
///
/// # Example
///
/// ```
/// use level_router_log::prelude::*;
/// use std::sync::Arc;
///
/// let errors = Arc::new(InMemoryHandler::new(0));
/// let everything_else = Arc::new(InMemoryHandler::new(0));
///
/// let router = LevelGroupedHandler::new(
///     Arc::clone(&everything_else),
///     vec![LevelGroup::new([Level::ERROR, Level::CRITICAL], Arc::clone(&errors))],
/// );
/// let logger = Logger::new(router);
///
/// logger.info("hello", &[]);
/// logger.error("failed", &[]);
///
/// assert_eq!(errors.pop().message, "failed");
/// assert_eq!(everything_else.pop().message, "hello");
/// ```
pub struct LevelGroupedHandler {
    handlers: HashMap<Level, Vec<Arc<dyn Handler>>>,
    fallback: Arc<dyn Handler>,
}

impl LevelGroupedHandler {
    pub fn new<H: Handler + 'static>(fallback: H, groups: impl IntoIterator<Item = LevelGroup>) -> Self {
        let mut handlers: HashMap<Level, Vec<Arc<dyn Handler>>> = HashMap::new();
        for group in groups {
            for level in group.levels {
                handlers
                    .entry(level)
                    .or_default()
                    .push(Arc::clone(&group.handler));
            }
        }

        Self {
            handlers,
            fallback: Arc::new(fallback),
        }
    }

    fn handlers_for(&self, level: Level) -> Option<&[Arc<dyn Handler>]> {
        self.handlers
            .get(&level)
            .map(Vec::as_slice)
            .filter(|handlers| !handlers.is_empty())
    }

    /// Levels that have at least one registered handler, ascending
    pub fn routed_levels(&self) -> Vec<Level> {
        let mut levels: Vec<Level> = self.handlers.keys().copied().collect();
        levels.sort();
        levels
    }
}

impl Handler for LevelGroupedHandler {
    fn handle(&self, record: &Record) -> Result<()> {
        match self.handlers_for(record.level) {
            None => self
                .fallback
                .handle(record)
                .map_err(LoggerError::fallback_failed),
            Some(handlers) => handlers
                .iter()
                .try_for_each(|handler| handler.handle(record))
                .map_err(LoggerError::handler_failed),
        }
    }

    /// Route each level's sub-batch, lowest severity first
    ///
    /// Records keep their relative order within a level. Levels already
    /// handled when an error occurs are not rolled back.
    fn handle_batch(&self, records: &[Record]) -> Result<()> {
        let mut by_level: BTreeMap<Level, Vec<Record>> = BTreeMap::new();
        for record in records {
            by_level.entry(record.level).or_default().push(record.clone());
        }

        for (level, batch) in &by_level {
            match self.handlers_for(*level) {
                None => self
                    .fallback
                    .handle_batch(batch)
                    .map_err(LoggerError::fallback_failed)?,
                Some(handlers) => handlers
                    .iter()
                    .try_for_each(|handler| handler.handle_batch(batch))
                    .map_err(LoggerError::handler_failed)?,
            }
        }

        Ok(())
    }
}
