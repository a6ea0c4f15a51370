//! One screening from submission to screen (and optionally to a letter).

use std::io::Write;

use chrono::NaiveDate;
use tracing::{error, instrument};

use crate::{
    base::{
        copy,
        types::{Outcome, Res, Variant},
    },
    interaction::{form::Submission, report},
    runtime::Runtime,
};

/// How the outcome is shown and whether a letter is exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentOptions {
    pub json: bool,
    pub letter: bool,
}

/// Screen `submission`, write the outcome to `out`, then export the letter if asked.
///
/// The outcome is always written before the export is attempted, so a failed
/// export never hides the result; the export error is still returned.
#[instrument(skip_all, fields(variant = ?variant))]
pub fn present<W: Write>(runtime: &Runtime, submission: &Submission, variant: Variant, options: PresentOptions, date: NaiveDate, out: &mut W) -> Res<Outcome> {
    let outcome = runtime.screen(submission, variant);

    if options.json {
        writeln!(out, "{}", report::render_json(&outcome)?)?;
    } else {
        write!(out, "{}", report::render_text(&outcome, runtime.config.locale))?;
    }

    out.flush()?;

    if options.letter {
        match runtime.export_letter(submission, &outcome, date) {
            Ok(path) => writeln!(out, "\n{} {}", copy::LETTER_SAVED.get(runtime.config.locale), path.display())?,
            Err(err) => {
                error!("Letter export failed: {:#}", err);
                return Err(err.context("Letter export failed"));
            }
        }
    }

    Ok(outcome)
}
