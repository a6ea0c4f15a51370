//! Runtime services and shared state for endoscopy-triage.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::{
    engine::{self, Settings},
    interaction::form::Submission,
    service::{
        export::ExportClient,
        letter::{LetterRenderer, LetterRequest},
    },
};
use crate::prelude::*;

/// Runtime service context that can be shared across the application.
///
/// This struct holds the configuration, the letter renderer and the export sink.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The letter renderer instance.
    pub letters: LetterRenderer,
    /// The export sink instance.
    pub export: ExportClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Initialize the letter renderer.
        let letters = LetterRenderer::markdown(&config);

        // Initialize the export sink.
        let export = ExportClient::fs(&config);

        Ok(Self { config, letters, export })
    }

    /// Engine settings derived from the configuration.
    pub fn settings(&self) -> Settings {
        Settings::from(&self.config)
    }

    /// Evaluate a submission.
    #[instrument(skip_all, fields(age = ?submission.respondent.age))]
    pub fn screen(&self, submission: &Submission, variant: Variant) -> Outcome {
        let outcome = engine::screen(variant, &submission.answers, submission.respondent.age, &self.settings());

        for evaluation in outcome.evaluations() {
            info!(organ = ?evaluation.organ, verdict = ?evaluation.verdict, "Screening complete");
        }

        outcome
    }

    /// Render the letter for an already computed outcome and hand it to the export sink.
    #[instrument(skip_all, fields(date = %date))]
    pub fn export_letter(&self, submission: &Submission, outcome: &Outcome, date: NaiveDate) -> Res<PathBuf> {
        let request = LetterRequest {
            respondent: &submission.respondent,
            outcome,
            date,
            locale: self.config.locale,
        };

        let document = self.letters.render(&request)?;

        self.export.export(&document)
    }
}
