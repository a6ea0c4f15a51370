pub mod logo;
pub mod markdown;

use std::{ops::Deref, sync::Arc};

use chrono::NaiveDate;
use crate::{
    base::types::{Locale, Outcome, Res},
    interaction::form::RespondentProfile,
};

// Types.

/// A rendered, ready to save document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Suggested file name, derived from the letter date.
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Everything a letter shows.
#[derive(Debug, Clone, Copy)]
pub struct LetterRequest<'a> {
    pub respondent: &'a RespondentProfile,
    pub outcome: &'a Outcome,
    pub date: NaiveDate,
    pub locale: Locale,
}

// Traits.

/// Generic letter renderer trait that renderers must implement.
///
/// Renderers are pure formatting: they must not make any triage decision and
/// must render every evaluation of the outcome, upper tract first.
pub trait GenericLetterRenderer: Send + Sync + 'static {
    /// Render the letter for one screening.
    fn render(&self, request: &LetterRequest<'_>) -> Res<Document>;
}

// Structs.

/// Letter renderer for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct LetterRenderer {
    inner: Arc<dyn GenericLetterRenderer>,
}

impl Deref for LetterRenderer {
    type Target = dyn GenericLetterRenderer;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl LetterRenderer {
    pub fn new(inner: Arc<dyn GenericLetterRenderer>) -> Self {
        Self { inner }
    }
}
