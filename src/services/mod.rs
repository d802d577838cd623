//! Backend services.

pub mod clipboard;
pub mod creator;
pub mod scanner;

pub use clipboard::SystemClipboard;
pub use creator::{Created, FileCreator};
