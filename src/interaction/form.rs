//! Input collection: respondent data, answer files and the interactive prompt.
//!
//! Everything that can be malformed is checked here, so the engine only ever
//! sees well formed answers and an age inside `0..=MAX_AGE`.

use std::{
    io::{BufRead, Write},
    path::Path,
};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::{debug, instrument};

use crate::base::{
    catalog::{self, Text},
    copy,
    types::{Answers, Locale, Res, Variant},
};

/// Oldest age the form accepts.
pub const MAX_AGE: u8 = 120;

/// Respondent sex as asked on the form. Not used by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    NotSpecified,
    Male,
    Female,
}

impl Sex {
    pub fn label(&self, locale: Locale) -> &'static str {
        let text = match self {
            Sex::NotSpecified => copy::NOT_FILLED,
            Sex::Male => Text::new("Male", "Laki-laki"),
            Sex::Female => Text::new("Female", "Perempuan"),
        };

        text.get(locale)
    }
}

/// Optional identity fields. Only `age` is used by the engine.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentProfile {
    pub name: Option<String>,
    pub age: Option<u8>,
    #[serde(default)]
    pub sex: Sex,
}

impl RespondentProfile {
    /// Reject ages outside `0..=MAX_AGE` and blank names.
    pub fn validated(mut self) -> Res<Self> {
        if let Some(age) = self.age {
            if age > MAX_AGE {
                return Err(anyhow!("Age must be between 0 and {MAX_AGE}, got {age}."));
            }
        }

        self.name = self.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());

        Ok(self)
    }
}

/// One filled in form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub respondent: RespondentProfile,
    #[serde(default)]
    pub answers: Answers,
}

impl Submission {
    /// Load a submission from a TOML or JSON file (format chosen by extension).
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path, variant: Variant) -> Res<Self> {
        let submission: Submission = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()))
            .build()?
            .try_deserialize()?;

        submission.validated(variant)
    }

    /// Check the respondent fields and that every answered id exists in `variant`.
    pub fn validated(self, variant: Variant) -> Res<Self> {
        let respondent = self.respondent.validated()?;

        let unknown: Vec<&str> = self
            .answers
            .ids()
            .filter(|id| !catalog::questionnaires(variant).iter().any(|q| q.question(id).is_some()))
            .collect();

        if !unknown.is_empty() {
            return Err(anyhow!("Unknown question ids for the {variant:?} questionnaire: {}.", unknown.join(", ")));
        }

        debug!(answered = self.answers.ids().count(), "Submission accepted");

        Ok(Self { respondent, answers: self.answers })
    }
}

/// Ask every question of `variant` on `output` and read the replies from `input`.
///
/// `y`/`yes`/`ya` count as yes, `n`/`no`/`tidak` and a blank line as no; any
/// other reply asks again. The respondent fields are asked last and may be
/// left blank.
pub fn ask<R: BufRead, W: Write>(variant: Variant, locale: Locale, input: &mut R, output: &mut W) -> Res<Submission> {
    let mut answers = Answers::new();

    writeln!(output, "{}\n", copy::INTRO.get(locale))?;

    for questionnaire in catalog::questionnaires(variant) {
        writeln!(output, "# {}", questionnaire.title.get(locale))?;

        for section in questionnaire.sections {
            writeln!(output, "\n## {}", section.title.get(locale))?;

            for question in section.questions {
                let yes = ask_yes_no(&format!("[{}] {}", question.id, question.text.get(locale)), locale, input, output)?;
                answers.set(question.id, yes);
            }

            if let Some(note) = section.note {
                writeln!(output, "{}", note.get(locale))?;
            }
        }

        writeln!(output)?;
    }

    let respondent = ask_profile(locale, input, output)?;

    Submission { respondent, answers }.validated(variant)
}

fn ask_yes_no<R: BufRead, W: Write>(prompt: &str, locale: Locale, input: &mut R, output: &mut W) -> Res<bool> {
    loop {
        write!(output, "{prompt} {} ", copy::YES_NO_HINT.get(locale))?;
        output.flush()?;

        let line = read_line(input)?;

        match line.to_lowercase().as_str() {
            "y" | "yes" | "ya" => return Ok(true),
            "" | "n" | "no" | "tidak" => return Ok(false),
            _ => writeln!(output, "{}", copy::ANSWER_YES_NO.get(locale))?,
        }
    }
}

fn ask_profile<R: BufRead, W: Write>(locale: Locale, input: &mut R, output: &mut W) -> Res<RespondentProfile> {
    write!(output, "{}: ", copy::LETTER_NAME.get(locale))?;
    output.flush()?;
    let name = Some(read_line(input)?).filter(|n| !n.is_empty());

    let age = loop {
        write!(output, "{} (0-{MAX_AGE}): ", copy::LETTER_AGE.get(locale))?;
        output.flush()?;

        let line = read_line(input)?;

        if line.is_empty() {
            break None;
        }

        match line.parse::<u8>() {
            Ok(age) if age <= MAX_AGE => break Some(age),
            _ => writeln!(output, "{}", copy::answer_age(MAX_AGE, locale))?,
        }
    };

    let sex = loop {
        write!(
            output,
            "{} [1 = {}, 2 = {}, {} = {}]: ",
            copy::LETTER_SEX.get(locale),
            Sex::Male.label(locale),
            Sex::Female.label(locale),
            copy::BLANK.get(locale),
            Sex::NotSpecified.label(locale)
        )?;
        output.flush()?;

        match read_line(input)?.as_str() {
            "" => break Sex::NotSpecified,
            "1" => break Sex::Male,
            "2" => break Sex::Female,
            _ => writeln!(output, "{}", copy::ANSWER_SEX.get(locale))?,
        }
    };

    Ok(RespondentProfile { name, age, sex })
}

fn read_line<R: BufRead>(input: &mut R) -> Res<String> {
    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Err(anyhow!("Input ended before the questionnaire was complete."));
    }

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write as _};

    use super::*;

    #[test]
    fn age_above_limit_is_rejected() {
        let profile = RespondentProfile { age: Some(121), ..Default::default() };

        assert!(profile.validated().is_err());
    }

    #[test]
    fn blank_name_becomes_none() {
        let profile = RespondentProfile { name: Some("   ".to_string()), age: Some(120), ..Default::default() }.validated().unwrap();

        assert_eq!(profile.name, None);
        assert_eq!(profile.age, Some(120));
    }

    #[test]
    fn unknown_ids_are_rejected_for_the_variant() {
        let submission = Submission {
            answers: [("q1", true), ("u1", true)].into_iter().collect(),
            ..Default::default()
        };

        let err = submission.clone().validated(Variant::Colonoscopy).unwrap_err();
        assert!(err.to_string().contains("u1"));

        let err = submission.validated(Variant::Dual).unwrap_err();
        assert!(err.to_string().contains("q1"));
    }

    #[test]
    fn submission_loads_from_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[respondent]
name = "Siti"
age = 52
sex = "female"

[answers]
q8 = true
q12 = false
"#
        )
        .unwrap();

        let submission = Submission::load(file.path(), Variant::Colonoscopy).unwrap();

        assert_eq!(submission.respondent.name.as_deref(), Some("Siti"));
        assert_eq!(submission.respondent.age, Some(52));
        assert_eq!(submission.respondent.sex, Sex::Female);
        assert!(submission.answers.is_yes("q8"));
        assert!(!submission.answers.is_yes("q12"));
    }

    #[test]
    fn submission_loads_from_json_without_respondent() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "answers": {{ "u3": true }} }}"#).unwrap();

        let submission = Submission::load(file.path(), Variant::Dual).unwrap();

        assert_eq!(submission.respondent, RespondentProfile::default());
        assert!(submission.answers.is_yes("u3"));
    }

    #[test]
    fn interactive_prompt_collects_answers_and_profile() {
        // 17 questions: yes to q1, an invalid reply then no to q2, blank for the rest.
        let mut replies = vec!["y", "maybe", "n"];
        replies.extend(std::iter::repeat_n("", 15));
        replies.extend(["Budi", "200", "38", "1"]);

        let mut input = Cursor::new(replies.join("\n") + "\n");
        let mut output = Vec::new();

        let submission = ask(Variant::Colonoscopy, Locale::En, &mut input, &mut output).unwrap();
        let printed = String::from_utf8(output).unwrap();

        assert!(submission.answers.is_yes("q1"));
        assert!(!submission.answers.is_yes("q2"));
        assert_eq!(submission.answers.ids().count(), 17);
        assert_eq!(submission.respondent.name.as_deref(), Some("Budi"));
        assert_eq!(submission.respondent.age, Some(38));
        assert_eq!(submission.respondent.sex, Sex::Male);
        assert!(printed.contains("Please answer y or n."));
        assert!(printed.contains("Please enter a whole number"));
    }

    #[test]
    fn interactive_prompt_speaks_indonesian() {
        let mut replies = vec!["mungkin", "ya"];
        replies.extend(std::iter::repeat_n("tidak", 16));
        replies.extend(["", "abc", "", "3", "2"]);

        let mut input = Cursor::new(replies.join("\n") + "\n");
        let mut output = Vec::new();

        let submission = ask(Variant::Colonoscopy, Locale::Id, &mut input, &mut output).unwrap();
        let printed = String::from_utf8(output).unwrap();

        assert!(submission.answers.is_yes("q1"));
        assert_eq!(submission.respondent.age, None);
        assert_eq!(submission.respondent.sex, Sex::Female);
        assert!(printed.contains("[ya/tidak] Mohon jawab ya atau tidak."));
        assert!(printed.contains("Mohon isi bilangan bulat antara 0 dan 120."));
        assert!(printed.contains("kosong = Tidak diisi"));
        assert!(printed.contains("Mohon isi 1, 2 atau kosongkan."));
        assert!(!printed.contains("Please"));
        assert!(!printed.contains("[y/N]"));
    }

    #[test]
    fn interactive_prompt_fails_on_truncated_input() {
        let mut input = Cursor::new("y\n");
        let mut output = Vec::new();

        assert!(ask(Variant::Colonoscopy, Locale::En, &mut input, &mut output).is_err());
    }
}
