pub mod cache;
pub mod dialects;
pub mod error;
pub mod extractor;
pub mod models;
pub mod parser;

pub use cache::{ExtractCache, DEFAULT_CACHE_CAPACITY};
pub use dialects::{Dialect, ScriptTarget};
pub use error::{ExtractError, Result};
pub use extractor::{extract, extract_with, ExportCandidate};
pub use models::{ExportKind, ExtractOptions, MethodRecord, ModuleSurface};
pub use parser::{ParsedSource, Parser};
