pub mod fs;

use std::{ops::Deref, path::PathBuf, sync::Arc};

use crate::{base::types::Res, service::letter::Document};

// Traits.

/// Generic export sink trait that sinks must implement.
///
/// A sink takes a rendered document and stores it somewhere the respondent
/// can pick it up, returning where it went.
pub trait GenericExportSink: Send + Sync + 'static {
    /// Store the document.
    fn export(&self, document: &Document) -> Res<PathBuf>;
}

// Structs.

/// Export client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ExportClient {
    inner: Arc<dyn GenericExportSink>,
}

impl Deref for ExportClient {
    type Target = dyn GenericExportSink;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ExportClient {
    pub fn new(inner: Arc<dyn GenericExportSink>) -> Self {
        Self { inner }
    }
}
