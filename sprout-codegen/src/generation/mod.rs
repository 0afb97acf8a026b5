//! Output management.
//!
//! - [`FileRegistry`] - collects rendered files and writes them in one pass
//! - [`ImportCollector`] - deduplicates type imports

mod imports;
mod registry;

pub use imports::{ImportCollector, simple_name, split_qualified};
pub use registry::{FileCategory, FileEntry, FileRegistry, PreviewEntry, WriteStats};
