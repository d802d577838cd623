//! Numbered file names of the form `NNN-<name>.mdx`.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Extension of every document this tool creates.
pub const EXTENSION: &str = "mdx";

/// Longest file name most filesystems accept, in bytes.
const MAX_FILE_NAME_BYTES: usize = 255;

/// Room left for the name once a four-digit number, `-` and `.mdx` are added.
pub const MAX_NAME_BYTES: usize = MAX_FILE_NAME_BYTES - "0000-.".len() - EXTENSION.len();

static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{3})-.+\.mdx$").expect("numbered file pattern"));

/// Extract the numeric prefix of a numbered file name.
///
/// Only names of exactly three ASCII digits, a hyphen, at least one more
/// character and the `.mdx` suffix count. Everything else returns `None`.
pub fn parse_number(file_name: &str) -> Option<u32> {
    let caps = NUMBERED_RE.captures(file_name)?;
    caps.get(1).and_then(|m| m.as_str().parse().ok())
}

/// Position of a document in the numbered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceNumber(u32);

impl SequenceNumber {
    /// The number following the highest one found (0 when none were found).
    pub fn next_after(max: u32) -> Self {
        Self(max.saturating_add(1))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SequenceNumber {
    /// Zero-padded to a minimum of three digits; 1000 and up print as is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// Build the file name for a new document.
pub fn file_name(number: SequenceNumber, name: &str) -> String {
    format!("{}-{}.{}", number, name, EXTENSION)
}

/// Check that a name is safe to embed in a file name.
///
/// Allowed: Unicode letters and digits, `-`, `_` and `.`, not starting
/// with a dot, at most [`MAX_NAME_BYTES`] bytes of UTF-8. Returns the rule
/// that failed.
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("name is empty");
    }
    if name.len() > MAX_NAME_BYTES {
        return Err("name is too long for a file name");
    }
    if name.starts_with('.') {
        return Err("name must not start with '.'");
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(if matches!(bad, '/' | '\\') {
            "name must not contain path separators"
        } else if bad.is_whitespace() {
            "name must not contain whitespace"
        } else {
            "only letters, digits, '-', '_' and '.' are allowed"
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_matches() {
        assert_eq!(parse_number("005-foo.mdx"), Some(5));
        assert_eq!(parse_number("012-bar.mdx"), Some(12));
        assert_eq!(parse_number("000-x.mdx"), Some(0));
        assert_eq!(parse_number("999-a-b-c.mdx"), Some(999));
        assert_eq!(parse_number("042-介绍.mdx"), Some(42));
    }

    #[test]
    fn test_parse_number_rejects() {
        assert_eq!(parse_number("12-foo.mdx"), None);
        assert_eq!(parse_number("100-foo.txt"), None);
        assert_eq!(parse_number("abc-foo.mdx"), None);
        assert_eq!(parse_number("0001-foo.mdx"), None);
        assert_eq!(parse_number("001-.mdx"), None);
        assert_eq!(parse_number("001foo.mdx"), None);
        assert_eq!(parse_number("001-foo.mdx.bak"), None);
        // Full-width digits are not ASCII digits
        assert_eq!(parse_number("００１-foo.mdx"), None);
    }

    #[test]
    fn test_sequence_number_padding() {
        assert_eq!(SequenceNumber::next_after(0).to_string(), "001");
        assert_eq!(SequenceNumber::next_after(12).to_string(), "013");
        assert_eq!(SequenceNumber::next_after(998).to_string(), "999");
        assert_eq!(SequenceNumber::next_after(999).to_string(), "1000");
    }

    #[test]
    fn test_file_name() {
        let n = SequenceNumber::next_after(0);
        assert_eq!(file_name(n, "intro"), "001-intro.mdx");
    }

    #[test]
    fn test_file_name_round_trip() {
        for max in [0, 1, 41, 500, 998] {
            let created = file_name(SequenceNumber::next_after(max), "intro");
            let parsed = parse_number(&created).unwrap();
            assert_eq!(parsed, max + 1);
            assert_eq!(SequenceNumber::next_after(parsed).value(), max + 2);
        }
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("intro").is_ok());
        assert!(validate_name("part_2-setup.v1").is_ok());
        assert!(validate_name("入门").is_ok());

        assert_eq!(validate_name(""), Err("name is empty"));
        assert_eq!(validate_name(".."), Err("name must not start with '.'"));
        assert_eq!(validate_name(".hidden"), Err("name must not start with '.'"));
        assert_eq!(
            validate_name("../escape"),
            Err("name must not start with '.'")
        );
        assert_eq!(
            validate_name("a/b"),
            Err("name must not contain path separators")
        );
        assert_eq!(
            validate_name("a\\b"),
            Err("name must not contain path separators")
        );
        assert_eq!(validate_name("a b"), Err("name must not contain whitespace"));
        assert!(validate_name("a:b").is_err());
    }

    #[test]
    fn test_validate_name_length() {
        assert_eq!(MAX_NAME_BYTES, 246);
        assert!(validate_name(&"a".repeat(MAX_NAME_BYTES)).is_ok());
        assert_eq!(
            validate_name(&"a".repeat(MAX_NAME_BYTES + 1)),
            Err("name is too long for a file name")
        );
        // Three bytes per char, so 83 chars overflow
        assert!(validate_name(&"入".repeat(82)).is_ok());
        assert!(validate_name(&"入".repeat(83)).is_err());

        let longest = file_name(SequenceNumber::next_after(9998), &"a".repeat(MAX_NAME_BYTES));
        assert_eq!(longest.len(), 255);
        assert!(validate_name("a*b").is_err());
    }
}
