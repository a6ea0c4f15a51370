use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Severity tier of an indicator.
///
/// Declaration order is severity order, so `Tier::Emergent < Tier::Soft` and
/// iterating [`Tier::ALL`] walks from the most to the least severe tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Emergent,
    Urgent,
    Screening,
    Soft,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Emergent, Tier::Urgent, Tier::Screening, Tier::Soft];
}

/// Display style of a verdict badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Danger,
    Warn,
    Info,
    Muted,
    Ok,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Danger => "danger",
            Style::Warn => "warn",
            Style::Info => "info",
            Style::Muted => "muted",
            Style::Ok => "ok",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final triage classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Emergency,
    UrgentReferral,
    ScreeningEligible,
    RoutineFollowup,
    CurrentlySafe,
    NoUrgentNeed,
}

impl Verdict {
    pub fn style(&self) -> Style {
        match self {
            Verdict::Emergency => Style::Danger,
            Verdict::UrgentReferral => Style::Warn,
            Verdict::ScreeningEligible => Style::Info,
            Verdict::RoutineFollowup => Style::Muted,
            Verdict::CurrentlySafe | Verdict::NoUrgentNeed => Style::Ok,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Verdict::Emergency => "🚑",
            Verdict::UrgentReferral => "⏱️",
            Verdict::ScreeningEligible => "📅",
            Verdict::RoutineFollowup => "ℹ️",
            Verdict::CurrentlySafe | Verdict::NoUrgentNeed => "✅",
        }
    }
}

/// Organ system a questionnaire section refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Organ {
    /// Lower GI tract (colonoscopy).
    Lower,
    /// Upper GI tract (EGD).
    Upper,
}

/// Questionnaire flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Colonoscopy only: four tiers plus the age-based fallback.
    #[default]
    Colonoscopy,
    /// EGD and colonoscopy, evaluated independently with three tiers each.
    Dual,
}

/// Language of every user facing string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Id,
}

/// How the fallback rule treats a respondent who did not give an age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownAgePolicy {
    /// Unknown age is assumed to be below the screening threshold.
    #[default]
    BelowThreshold,
    /// Unknown age is assumed to be exactly the screening threshold.
    AtThreshold,
}

/// Yes/no answers keyed by question id.
///
/// A question that is absent counts as answered "no".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, bool>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier one for the same question.
    pub fn set(&mut self, id: impl Into<String>, yes: bool) {
        self.0.insert(id.into(), yes);
    }

    pub fn is_yes(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    /// Question ids that were answered, in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Answers {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, yes)| (id.into(), yes)).collect())
    }
}

/// Result of evaluating one organ's indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub organ: Organ,
    pub verdict: Verdict,
    pub style: Style,
    /// Localized verdict label, e.g. `EMERGENCY`.
    pub label: String,
    pub advice: String,
    pub reasons: Vec<String>,
}

/// Everything one screening produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum Outcome {
    Single(Evaluation),
    Dual { upper: Evaluation, lower: Evaluation },
}

impl Outcome {
    /// The evaluations in display order (upper tract first).
    pub fn evaluations(&self) -> Vec<&Evaluation> {
        match self {
            Outcome::Single(evaluation) => vec![evaluation],
            Outcome::Dual { upper, lower } => vec![upper, lower],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered_by_severity() {
        assert!(Tier::Emergent < Tier::Urgent);
        assert!(Tier::Urgent < Tier::Screening);
        assert!(Tier::Screening < Tier::Soft);

        let mut sorted = Tier::ALL;
        sorted.sort();
        assert_eq!(sorted, Tier::ALL);
    }

    #[test]
    fn verdict_styles_match_badges() {
        assert_eq!(Verdict::Emergency.style(), Style::Danger);
        assert_eq!(Verdict::UrgentReferral.style(), Style::Warn);
        assert_eq!(Verdict::ScreeningEligible.style(), Style::Info);
        assert_eq!(Verdict::RoutineFollowup.style(), Style::Muted);
        assert_eq!(Verdict::CurrentlySafe.style(), Style::Ok);
        assert_eq!(Verdict::NoUrgentNeed.style(), Style::Ok);
    }

    #[test]
    fn outcome_serializes_with_variant_tag() {
        let evaluation = Evaluation {
            organ: Organ::Lower,
            verdict: Verdict::Emergency,
            style: Style::Danger,
            label: "EMERGENCY".to_string(),
            advice: "Go now.".to_string(),
            reasons: vec!["Bleeding.".to_string()],
        };

        let value = serde_json::to_value(Outcome::Single(evaluation)).unwrap();

        assert_eq!(value["variant"], "single");
        assert_eq!(value["verdict"], "EMERGENCY");
        assert_eq!(value["style"], "danger");
    }
}
