//! Handler implementations

pub mod file;
pub mod level_grouped;
pub mod memory;
pub mod writer;

#[cfg(feature = "console")]
pub mod console;

pub use file::FileHandler;
pub use level_grouped::{LevelGroup, LevelGroupedHandler};
pub use memory::InMemoryHandler;
pub use writer::WriterHandler;

#[cfg(feature = "console")]
pub use console::ConsoleHandler;

pub use crate::core::Handler;
