//! Markdown letter renderer.
//!
//! The layout is fixed: institution header, title, identity fields, one
//! section per evaluated organ and the disclaimer footer.

use std::{fmt::Write, sync::Arc};

use tracing::instrument;

use crate::base::{catalog, config::Config, copy, types::Res};

use super::{
    Document, GenericLetterRenderer, LetterRenderer, LetterRequest,
    logo::{self, Logo},
};

pub const CONTENT_TYPE: &str = "text/markdown";

// Extra methods on `LetterRenderer` applied by the markdown implementation.

impl LetterRenderer {
    pub fn markdown(config: &Config) -> Self {
        Self::new(Arc::new(MarkdownLetterRenderer::new(config)))
    }
}

/// Markdown implementation of [`GenericLetterRenderer`].
#[derive(Debug, Clone)]
pub struct MarkdownLetterRenderer {
    institution_name: String,
    address_lines: Vec<String>,
    logo: Option<Logo>,
}

impl MarkdownLetterRenderer {
    #[instrument(name = "MarkdownLetterRenderer::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        Self {
            institution_name: config.institution_name.clone(),
            address_lines: config.address_lines().into_iter().map(str::to_string).collect(),
            logo: logo::load(config.logo_path.as_deref()),
        }
    }

    fn header(&self, out: &mut String) {
        if let Some(logo) = &self.logo {
            let _ = writeln!(out, "![logo]({})\n", logo.path.display());
        }

        let _ = writeln!(out, "**{}**  ", escape(&self.institution_name));

        for line in &self.address_lines {
            let _ = writeln!(out, "{}  ", escape(line));
        }

        out.push_str("\n---\n\n");
    }

    fn identity(&self, out: &mut String, request: &LetterRequest<'_>) {
        let respondent = request.respondent;
        let locale = request.locale;
        let not_filled = copy::NOT_FILLED.get(locale);

        let name = respondent.name.as_deref().map(escape).unwrap_or_else(|| not_filled.to_string());
        let age = respondent
            .age
            .map(|age| format!("{age} {}", copy::YEARS.get(locale)))
            .unwrap_or_else(|| not_filled.to_string());

        let _ = writeln!(out, "- **{}:** {name}", copy::LETTER_NAME.get(locale));
        let _ = writeln!(out, "- **{}:** {age}", copy::LETTER_AGE.get(locale));
        let _ = writeln!(out, "- **{}:** {}", copy::LETTER_SEX.get(locale), respondent.sex.label(locale));
        let _ = writeln!(out, "- **{}:** {}\n", copy::LETTER_DATE.get(locale), request.date.format("%Y-%m-%d"));
    }
}

impl GenericLetterRenderer for MarkdownLetterRenderer {
    #[instrument(name = "MarkdownLetterRenderer::render", skip_all, fields(date = %request.date))]
    fn render(&self, request: &LetterRequest<'_>) -> Res<Document> {
        let locale = request.locale;
        let mut out = String::new();

        self.header(&mut out);

        let _ = writeln!(out, "# {}\n", copy::LETTER_TITLE.get(locale));

        self.identity(&mut out, request);

        for evaluation in request.outcome.evaluations() {
            let _ = writeln!(out, "## {}\n", catalog::questionnaire_for(evaluation.organ).title.get(locale));
            let _ = writeln!(out, "**{} {}**\n", evaluation.verdict.icon(), evaluation.label);
            let _ = writeln!(out, "**{}:** {}\n", copy::ADVICE_HEADING.get(locale), evaluation.advice);
            let _ = writeln!(out, "**{}:**\n", copy::REASONS_HEADING.get(locale));

            for reason in &evaluation.reasons {
                let _ = writeln!(out, "- {}", escape(reason));
            }

            out.push('\n');
        }

        let _ = writeln!(out, "---\n\n_{}_", copy::DISCLAIMER.get(locale));

        Ok(Document {
            filename: format!("screening-letter-{}.md", request.date.format("%Y-%m-%d")),
            content_type: CONTENT_TYPE.to_string(),
            bytes: out.into_bytes(),
        })
    }
}

/// Escape characters that markdown would otherwise interpret.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '#' | '<' | '>') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use chrono::NaiveDate;

    use super::*;
    use crate::{
        base::{
            config::ConfigInner,
            types::{Answers, Locale, Outcome, Variant},
        },
        engine::{self, Settings},
        interaction::form::{RespondentProfile, Sex},
    };

    fn config(logo_path: Option<std::path::PathBuf>) -> Config {
        Config {
            inner: Arc::new(ConfigInner {
                institution_name: "RSUP Dr. Kariadi".to_string(),
                institution_address: "Jl. Dr. Sutomo No. 16\nSemarang".to_string(),
                logo_path,
                ..Default::default()
            }),
        }
    }

    fn render(outcome: &Outcome, respondent: &RespondentProfile, logo_path: Option<std::path::PathBuf>) -> (Document, String) {
        let renderer = LetterRenderer::markdown(&config(logo_path));
        let request = LetterRequest {
            respondent,
            outcome,
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            locale: Locale::En,
        };

        let document = renderer.render(&request).unwrap();
        let text = String::from_utf8(document.bytes.clone()).unwrap();

        (document, text)
    }

    #[test]
    fn letter_has_the_fixed_layout() {
        let answers: Answers = [("q1", true)].into_iter().collect();
        let outcome = engine::screen(Variant::Colonoscopy, &answers, Some(52), &Settings::default());
        let respondent = RespondentProfile {
            name: Some("Siti".to_string()),
            age: Some(52),
            sex: Sex::Female,
        };

        let (document, text) = render(&outcome, &respondent, None);

        assert_eq!(document.filename, "screening-letter-2026-10-19.md");
        assert_eq!(document.content_type, "text/markdown");

        let header = text.find("**RSUP Dr. Kariadi**").unwrap();
        let title = text.find("# Endoscopy Self-Screening Result").unwrap();
        let identity = text.find("- **Name:** Siti").unwrap();
        let verdict = text.find("**⏱️ SEE A DOCTOR SOON**").unwrap();
        let footer = text.find(copy::DISCLAIMER.en).unwrap();

        assert!(header < title && title < identity && identity < verdict && verdict < footer);
        assert!(text.contains("Semarang  \n"));
        assert!(text.contains("- **Age:** 52 years"));
        assert!(text.contains("- **Sex:** Female"));
        assert!(text.contains("- **Date:** 2026-10-19"));
        assert!(!text.contains("![logo]"));
    }

    #[test]
    fn dual_letter_has_two_sections() {
        let answers: Answers = [("u1", true)].into_iter().collect();
        let outcome = engine::screen(Variant::Dual, &answers, None, &Settings::default());

        let (_, text) = render(&outcome, &RespondentProfile::default(), None);

        assert!(text.contains("## Upper endoscopy (EGD)"));
        assert!(text.contains("## Colonoscopy"));
        assert!(text.contains("- **Name:** Not filled in"));
        assert!(text.contains("- **Age:** Not filled in"));
    }

    #[test]
    fn logo_is_included_when_present() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"png").unwrap();

        let outcome = engine::screen(Variant::Colonoscopy, &Answers::new(), Some(60), &Settings::default());
        let (_, text) = render(&outcome, &RespondentProfile::default(), Some(file.path().to_path_buf()));

        assert!(text.starts_with("![logo]("));
    }

    #[test]
    fn missing_logo_still_renders() {
        let outcome = engine::screen(Variant::Colonoscopy, &Answers::new(), Some(60), &Settings::default());
        let (_, text) = render(&outcome, &RespondentProfile::default(), Some("/nonexistent/logo.png".into()));

        assert!(text.starts_with("**RSUP Dr. Kariadi**"));
    }

    #[test]
    fn names_are_escaped() {
        assert_eq!(escape("*Budi* [x]"), "\\*Budi\\* \\[x\\]");
    }
}
