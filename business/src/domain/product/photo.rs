use std::fmt;

use uuid::Uuid;

use super::errors::PhotoError;

/// Characters removed from an uploaded filename before it is stored.
const STRIPPED: [char; 5] = [' ', ':', '\\', '/', '\0'];

/// A photo filename that is safe to resolve inside the upload directory.
///
/// It is always a single path segment: no separators, no `.`/`..`, no NUL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoName(String);

impl PhotoName {
    /// Builds the stored name for an upload: `<uuid>-<original without stripped chars>`.
    ///
    /// Returns `None` when the browser sent no filename, i.e. no file was chosen.
    pub fn for_upload(original: &str) -> Option<Self> {
        if original.is_empty() {
            return None;
        }

        let cleaned: String = original.chars().filter(|c| !STRIPPED.contains(c)).collect();
        Some(Self(format!("{}-{}", Uuid::new_v4(), cleaned)))
    }

    /// Validates a name taken from a request path or a stored record.
    pub fn parse(name: &str) -> Result<Self, PhotoError> {
        let invalid = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('\0')
            || name.contains('/')
            || name.contains('\\');

        if invalid {
            return Err(PhotoError::InvalidName);
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased extension, if any.
    pub fn extension(&self) -> Option<String> {
        self.0
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

impl fmt::Display for PhotoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
