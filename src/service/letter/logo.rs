//! Optional institution logo for the letter header.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// A logo file that was found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub path: PathBuf,
}

/// Resolve the configured logo, if any.
///
/// A missing or unreadable file is logged and treated as "no logo"; it never
/// stops a letter from being rendered.
pub fn load(path: Option<&Path>) -> Option<Logo> {
    let path = path?;

    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => {
            debug!(path = %path.display(), "Using letter logo");
            Some(Logo { path: path.to_path_buf() })
        }
        Ok(_) => {
            warn!(path = %path.display(), "Logo path is not a file, rendering without logo");
            None
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "Logo not readable, rendering without logo");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_configured_logo() {
        assert_eq!(load(None), None);
    }

    #[test]
    fn missing_logo_degrades_to_none() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(load(Some(dir.path().join("logo.png").as_path())), None);
        assert_eq!(load(Some(dir.path())), None);
    }

    #[test]
    fn existing_logo_is_used() {
        let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();

        assert_eq!(load(Some(file.path())), Some(Logo { path: file.path().to_path_buf() }));
    }
}
