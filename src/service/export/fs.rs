//! Filesystem export sink.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use tracing::{info, instrument};

use crate::{
    base::{config::Config, types::Res},
    service::letter::Document,
};

use super::{ExportClient, GenericExportSink};

// Extra methods on `ExportClient` applied by the filesystem implementation.

impl ExportClient {
    pub fn fs(config: &Config) -> Self {
        Self::new(Arc::new(FsExportSink::new(config.output_dir.clone())))
    }
}

/// Writes documents into a directory, creating it if needed.
#[derive(Debug, Clone)]
pub struct FsExportSink {
    dir: PathBuf,
}

impl FsExportSink {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl GenericExportSink for FsExportSink {
    #[instrument(name = "FsExportSink::export", skip_all, fields(filename = %document.filename))]
    fn export(&self, document: &Document) -> Res<PathBuf> {
        std::fs::create_dir_all(&self.dir).with_context(|| format!("Failed to create output directory {}", self.dir.display()))?;

        let path = self.dir.join(&document.filename);
        std::fs::write(&path, &document.bytes).with_context(|| format!("Failed to write {}", path.display()))?;

        info!(path = %path.display(), bytes = document.bytes.len(), "Letter exported");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Document {
        Document {
            filename: "screening-letter-2026-10-19.md".to_string(),
            content_type: "text/markdown".to_string(),
            bytes: b"# Letter\n".to_vec(),
        }
    }

    #[test]
    fn writes_into_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FsExportSink::new(dir.path().join("letters"));

        let path = sink.export(&document()).unwrap();

        assert_eq!(path, dir.path().join("letters/screening-letter-2026-10-19.md"));
        assert_eq!(std::fs::read(&path).unwrap(), b"# Letter\n");
    }

    #[test]
    fn unwritable_directory_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        // A regular file cannot be used as a directory.
        let sink = FsExportSink::new(file.path().to_path_buf());

        let err = sink.export(&document()).unwrap_err();

        assert!(err.to_string().contains("Failed to create output directory"));
    }
}
