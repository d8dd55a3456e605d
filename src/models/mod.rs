// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod parsed;
pub mod record;

pub use document::{Clause, DocumentHeader, RenderedClause};
pub use parsed::Parsed;
pub use record::IndexRecord;
