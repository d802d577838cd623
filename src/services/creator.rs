//! File creator - turns the clipboard title into the next numbered document.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::CreateError;
use crate::models::{file_name, prompt_text, validate_name, FrontMatter, SequenceNumber};
use crate::services::clipboard::Clipboard;
use crate::services::scanner::highest_number;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    /// File name relative to the target directory
    pub file_name: String,
    /// Text now on the clipboard
    pub clipboard_text: String,
}

/// Creates numbered documents in one directory.
pub struct FileCreator {
    dir: PathBuf,
    suffix: String,
    overwrite: bool,
}

impl FileCreator {
    /// Create a file creator for `dir` using the given configuration.
    pub fn new(dir: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            dir: dir.into(),
            suffix: config.prompt.suffix.clone(),
            overwrite: config.files.overwrite,
        }
    }

    /// Validate `name`, read the title, write the next file, update the clipboard.
    ///
    /// Steps run strictly in that order and the first failure ends the run,
    /// so an empty clipboard never leads to a write.
    pub fn create(
        &self,
        name: &str,
        clipboard: &mut dyn Clipboard,
    ) -> Result<Created, CreateError> {
        validate_name(name).map_err(|reason| CreateError::InvalidName {
            name: name.to_string(),
            reason,
        })?;

        let raw = clipboard.get_text().map_err(CreateError::ClipboardRead)?;
        let title = raw.trim();
        if title.is_empty() {
            return Err(CreateError::EmptyClipboard);
        }
        debug!(title, "read title from clipboard");

        let max = highest_number(&self.dir)?;
        let number = SequenceNumber::next_after(max);
        let file_name = file_name(number, name);
        let path = self.dir.join(&file_name);
        debug!(max, next = number.value(), "computed next number");

        self.write(&path, &FrontMatter::new(title).render())?;
        info!(path = %path.display(), "created document");

        let clipboard_text = prompt_text(title, &self.suffix);
        clipboard
            .set_text(&clipboard_text)
            .map_err(|source| CreateError::ClipboardWrite { path, source })?;

        Ok(Created {
            file_name,
            clipboard_text,
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), CreateError> {
        let mut options = OpenOptions::new();
        options.write(true);
        if self.overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let mut file = options
            .open(path)
            .map_err(|e| CreateError::from_write(path.to_path_buf(), e))?;
        file.write_all(content.as_bytes())
            .map_err(|source| CreateError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}
