//! Directory scan for the highest existing sequence number.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::error::CreateError;
use crate::models::parse_number;

/// Highest numeric prefix among the numbered entries of `dir`, or 0.
///
/// Non-recursive. Files and directories both count, only the name matters.
pub fn highest_number(dir: &Path) -> Result<u32, CreateError> {
    scan(dir).map_err(|source| CreateError::Scan {
        dir: dir.to_path_buf(),
        source,
    })
}

fn scan(dir: &Path) -> io::Result<u32> {
    let mut max = 0;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();

        let Some(name) = file_name.to_str() else {
            debug!(name = ?file_name, "skipping non-UTF-8 entry");
            continue;
        };

        if let Some(number) = parse_number(name) {
            debug!(name, number, "found numbered entry");
            max = max.max(number);
        }
    }

    Ok(max)
}
