// file: src/parser/mod.rs
// description: document splitting, header parsing, clause segmentation and rendering exports
// reference: internal module structure

pub mod markdown;
pub mod metadata;
pub mod sanitizer;
pub mod segmenter;
pub mod splitter;

pub use markdown::MarkupRenderer;
pub use metadata::MetadataParser;
pub use sanitizer::Sanitizer;
pub use segmenter::ClauseSegmenter;
pub use splitter::{DocumentSplitter, SplitDocument};
