//! On-screen rendering of a screening outcome.

use std::fmt::Write;

use crate::base::{
    catalog, copy,
    types::{Evaluation, Locale, Outcome, Res, Variant},
};

/// Render an outcome as plain text: one badge, advice and reason list per organ.
pub fn render_text(outcome: &Outcome, locale: Locale) -> String {
    let mut out = String::new();

    // Writing into a `String` cannot fail.
    let _ = writeln!(out, "{}\n", copy::RESULT_HEADING.get(locale));

    for evaluation in outcome.evaluations() {
        if matches!(outcome, Outcome::Dual { .. }) {
            let _ = writeln!(out, "{}", catalog::questionnaire_for(evaluation.organ).title.get(locale));
        }

        render_evaluation(&mut out, evaluation, locale);
        out.push('\n');
    }

    let _ = writeln!(out, "{}", copy::DISCLAIMER.get(locale));

    out
}

/// Render an outcome as pretty JSON.
pub fn render_json(outcome: &Outcome) -> Res<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

/// Render the questionnaire of `variant` for review, with each question's id and tier.
pub fn render_questions(variant: Variant, locale: Locale) -> String {
    let mut out = String::new();

    for questionnaire in catalog::questionnaires(variant) {
        let _ = writeln!(out, "# {}", questionnaire.title.get(locale));

        for section in questionnaire.sections {
            let _ = writeln!(out, "\n## {}", section.title.get(locale));

            for question in section.questions {
                let _ = writeln!(out, "- [{}] ({:?}) {}", question.id, question.tier, question.text.get(locale));
            }
        }

        out.push('\n');
    }

    out
}

fn render_evaluation(out: &mut String, evaluation: &Evaluation, locale: Locale) {
    let _ = writeln!(out, "[{} {}] ({})", evaluation.verdict.icon(), evaluation.label, evaluation.style);
    let _ = writeln!(out, "{}: {}", copy::ADVICE_HEADING.get(locale), evaluation.advice);
    let _ = writeln!(out, "{}:", copy::REASONS_HEADING.get(locale));

    for reason in &evaluation.reasons {
        let _ = writeln!(out, "  - {reason}");
    }
}
