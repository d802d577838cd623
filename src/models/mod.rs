//! Data models for numbered documents.

pub mod document;
pub mod numbered;

pub use document::{prompt_text, FrontMatter};
pub use numbered::{file_name, parse_number, validate_name, SequenceNumber};
