//! Content of a new document and the follow-up clipboard prompt.

/// Default phrase appended to the title on the clipboard.
pub const DEFAULT_SUFFIX: &str = "详细讲讲";

/// Front matter block at the top of a new document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    pub title: &'a str,
}

impl<'a> FrontMatter<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Render the full file body: the block followed by one blank line.
    pub fn render(&self) -> String {
        format!("---\ntitle: {}\n---\n\n", self.title)
    }
}

/// Text left on the clipboard after the file is created.
pub fn prompt_text(title: &str, suffix: &str) -> String {
    format!("{} {}", title, suffix)
}
