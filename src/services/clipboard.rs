//! Clipboard operations.
//!
//! The creator only sees the [`Clipboard`] trait, so tests can swap the
//! system clipboard for an in-memory fake.

use thiserror::Error;

/// Failure talking to a clipboard backend.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error(transparent)]
    System(#[from] arboard::Error),
    #[error("{0}")]
    Other(String),
}

/// Read/write access to a text clipboard.
pub trait Clipboard {
    /// Current clipboard text. A clipboard holding no text reads as `""`.
    fn get_text(&mut self) -> Result<String, ClipboardError>;

    /// Replace the clipboard contents.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard, via arboard. Opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Other("clipboard not initialized".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        match self.handle()?.get_text() {
            Ok(text) => Ok(text),
            // Empty clipboard, or one holding only an image
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?.set_text(text)?;
        Ok(())
    }
}

/// In-memory clipboard for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub text: String,
    pub reads: usize,
    pub writes: Vec<String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.reads += 1;
        if self.fail_reads {
            return Err(ClipboardError::Other("clipboard locked".to_string()));
        }
        Ok(self.text.clone())
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail_writes {
            return Err(ClipboardError::Other("clipboard locked".to_string()));
        }
        self.text = text.to_string();
        self.writes.push(text.to_string());
        Ok(())
    }
}
