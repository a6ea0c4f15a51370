//! The triage decision engine.
//!
//! Evaluation walks the tiers of a questionnaire from the most to the least
//! severe and stops at the first tier with at least one "yes". Only that
//! tier's verdict, advice and reasons are reported. When no tier is active the
//! colonoscopy questionnaire falls back to an age rule, while each organ of the
//! dual questionnaire reports that there is no urgent need.
//!
//! Everything here is a pure function of its arguments.

use tracing::{debug, instrument};

use crate::base::{
    catalog::{self, Question, Questionnaire},
    config::Config,
    copy,
    types::{Answers, Evaluation, Locale, Organ, Outcome, Tier, UnknownAgePolicy, Variant, Verdict},
};

/// Parameters of the age fallback and the output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub screening_age_threshold: u8,
    pub unknown_age_policy: UnknownAgePolicy,
    pub locale: Locale,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screening_age_threshold: 45,
            unknown_age_policy: UnknownAgePolicy::default(),
            locale: Locale::default(),
        }
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            screening_age_threshold: config.screening_age_threshold,
            unknown_age_policy: config.unknown_age_policy,
            locale: config.locale,
        }
    }
}

impl Tier {
    /// Verdict reported when this tier is the first active one.
    pub fn verdict(&self) -> Verdict {
        match self {
            Tier::Emergent => Verdict::Emergency,
            Tier::Urgent => Verdict::UrgentReferral,
            Tier::Screening => Verdict::ScreeningEligible,
            Tier::Soft => Verdict::RoutineFollowup,
        }
    }
}

/// Screen a respondent with the questionnaires of `variant`.
#[instrument(skip_all, fields(variant = ?variant))]
pub fn screen(variant: Variant, answers: &Answers, age: Option<u8>, settings: &Settings) -> Outcome {
    match variant {
        Variant::Colonoscopy => Outcome::Single(evaluate(&catalog::COLONOSCOPY, answers, age, settings)),
        Variant::Dual => evaluate_dual(answers, settings),
    }
}

/// Evaluate a single organ questionnaire, falling back to the age rule when no
/// tier is active.
pub fn evaluate(questionnaire: &Questionnaire, answers: &Answers, age: Option<u8>, settings: &Settings) -> Evaluation {
    if let Some(evaluation) = evaluate_tiers(questionnaire, answers, settings) {
        return evaluation;
    }

    let threshold = settings.screening_age_threshold;
    let locale = settings.locale;
    let mut reasons = Vec::new();

    let below_threshold = match (age, settings.unknown_age_policy) {
        (Some(age), _) => age < threshold,
        (None, UnknownAgePolicy::BelowThreshold) => {
            reasons.push(copy::UNKNOWN_AGE_BELOW.get(locale).to_string());
            true
        }
        (None, UnknownAgePolicy::AtThreshold) => {
            reasons.push(copy::UNKNOWN_AGE_AT.get(locale).to_string());
            false
        }
    };

    debug!(?age, below_threshold, "No tier active, using the age rule");

    let verdict = if below_threshold {
        if age.is_some() {
            reasons.push(copy::below_threshold_reason(threshold, locale));
        }
        Verdict::RoutineFollowup
    } else {
        reasons.push(copy::NOTHING_TRIGGERED.get(locale).to_string());
        Verdict::CurrentlySafe
    };

    build(questionnaire.organ, verdict, reasons, settings)
}

/// Evaluate the upper and lower tract independently.
pub fn evaluate_dual(answers: &Answers, settings: &Settings) -> Outcome {
    let organ = |questionnaire: &Questionnaire| {
        evaluate_tiers(questionnaire, answers, settings).unwrap_or_else(|| {
            build(questionnaire.organ, Verdict::NoUrgentNeed, vec![copy::NO_INDICATION.get(settings.locale).to_string()], settings)
        })
    };

    Outcome::Dual {
        upper: organ(&catalog::UPPER),
        lower: organ(&catalog::LOWER),
    }
}

/// The most severe tier with at least one "yes", with the questions that fired.
pub fn active_tier(questionnaire: &Questionnaire, answers: &Answers) -> Option<(Tier, Vec<&'static Question>)> {
    Tier::ALL.into_iter().find_map(|tier| {
        let triggered: Vec<_> = questionnaire.questions().filter(|q| q.tier == tier && answers.is_yes(q.id)).collect();

        if triggered.is_empty() { None } else { Some((tier, triggered)) }
    })
}

fn evaluate_tiers(questionnaire: &Questionnaire, answers: &Answers, settings: &Settings) -> Option<Evaluation> {
    let (tier, triggered) = active_tier(questionnaire, answers)?;

    debug!(organ = ?questionnaire.organ, ?tier, count = triggered.len(), "Tier active");

    let locale = settings.locale;
    let mut reasons = vec![copy::tier_reason(questionnaire.organ, tier, locale).to_string()];
    reasons.extend(triggered.iter().map(|q| format!("{}: {}", q.id, q.text.get(locale))));

    Some(build(questionnaire.organ, tier.verdict(), reasons, settings))
}

fn build(organ: Organ, verdict: Verdict, reasons: Vec<String>, settings: &Settings) -> Evaluation {
    Evaluation {
        organ,
        verdict,
        style: verdict.style(),
        label: copy::verdict_label(verdict, settings.locale).to_string(),
        advice: copy::advice(organ, verdict, settings.screening_age_threshold, settings.locale),
        reasons,
    }
}
