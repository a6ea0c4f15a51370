//! Property tests for the tier precedence of the triage engine.

use endoscopy_triage::{
    base::{
        catalog::{self, Questionnaire},
        types::{Answers, Outcome, Tier, Verdict},
    },
    engine::{self, Settings},
};
use proptest::prelude::*;

fn answers_for(questionnaire: &Questionnaire, flags: &[bool]) -> Answers {
    questionnaire.questions().zip(flags.iter()).map(|(q, yes)| (q.id, *yes)).collect()
}

fn any_yes(questionnaire: &Questionnaire, answers: &Answers, tier: Tier) -> bool {
    questionnaire.ids_in(tier).iter().any(|id| answers.is_yes(id))
}

fn colonoscopy_input() -> impl Strategy<Value = (Vec<bool>, Option<u8>)> {
    (prop::collection::vec(any::<bool>(), 17), prop::option::of(0u8..=120))
}

proptest! {
    #[test]
    fn emergent_answer_always_wins((flags, age) in colonoscopy_input()) {
        let questionnaire = catalog::COLONOSCOPY;
        let answers = answers_for(&questionnaire, &flags);
        prop_assume!(any_yes(&questionnaire, &answers, Tier::Emergent));

        let evaluation = engine::evaluate(&questionnaire, &answers, age, &Settings::default());

        prop_assert_eq!(evaluation.verdict, Verdict::Emergency);
    }

    #[test]
    fn verdict_follows_the_first_active_tier((flags, age) in colonoscopy_input()) {
        let questionnaire = catalog::COLONOSCOPY;
        let answers = answers_for(&questionnaire, &flags);

        let evaluation = engine::evaluate(&questionnaire, &answers, age, &Settings::default());
        let first_active = Tier::ALL.into_iter().find(|tier| any_yes(&questionnaire, &answers, *tier));

        match first_active {
            Some(tier) => {
                prop_assert_eq!(evaluation.verdict, tier.verdict());

                // Every listed question belongs to the winning tier.
                let ids = questionnaire.ids_in(tier);
                for reason in evaluation.reasons.iter().skip(1) {
                    let id = reason.split(':').next().unwrap();
                    prop_assert!(ids.iter().any(|i| *i == id));
                }
            }
            None => {
                let expected = match age {
                    Some(age) if age >= 45 => Verdict::CurrentlySafe,
                    _ => Verdict::RoutineFollowup,
                };
                prop_assert_eq!(evaluation.verdict, expected);
            }
        }
    }

    #[test]
    fn evaluation_is_idempotent((flags, age) in colonoscopy_input()) {
        let questionnaire = catalog::COLONOSCOPY;
        let answers = answers_for(&questionnaire, &flags);
        let settings = Settings::default();

        prop_assert_eq!(
            engine::evaluate(&questionnaire, &answers, age, &settings),
            engine::evaluate(&questionnaire, &answers, age, &settings)
        );
    }

    #[test]
    fn dual_organs_never_influence_each_other(upper in prop::collection::vec(any::<bool>(), 11), lower in prop::collection::vec(any::<bool>(), 11)) {
        let mut both = answers_for(&catalog::UPPER, &upper);
        for (question, yes) in catalog::LOWER.questions().zip(&lower) {
            both.set(question.id, *yes);
        }

        let upper_only = answers_for(&catalog::UPPER, &upper);
        let lower_only = answers_for(&catalog::LOWER, &lower);
        let settings = Settings::default();

        let Outcome::Dual { upper: upper_together, lower: lower_together } = engine::evaluate_dual(&both, &settings) else {
            panic!("expected a dual outcome");
        };
        let Outcome::Dual { upper: upper_alone, .. } = engine::evaluate_dual(&upper_only, &settings) else {
            panic!("expected a dual outcome");
        };
        let Outcome::Dual { lower: lower_alone, .. } = engine::evaluate_dual(&lower_only, &settings) else {
            panic!("expected a dual outcome");
        };

        prop_assert_eq!(upper_together, upper_alone);
        prop_assert_eq!(lower_together, lower_alone);
    }
}
