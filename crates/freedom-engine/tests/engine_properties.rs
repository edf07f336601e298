use freedom_engine::selection::FixedSelector;
use freedom_engine::workflows::assessment::{
    answer_key, score_answers, AnswerSheet, CategoryId, Questionnaire, LIKERT_SCORES,
};
use freedom_engine::workflows::decision::{rank_options, DecisionOption};
use freedom_engine::workflows::learning::{synthesize, Skill, MINIMUM_WEEKS};
use freedom_engine::workflows::opportunities::{
    match_opportunities, OpportunityCatalog, RiskTolerance, UserProfile,
};
use freedom_engine::workflows::Priority;
use proptest::prelude::*;

fn likert() -> impl Strategy<Value = u8> {
    prop::sample::select(LIKERT_SCORES.to_vec())
}

fn tolerance() -> impl Strategy<Value = RiskTolerance> {
    prop_oneof![
        Just(RiskTolerance::Low),
        Just(RiskTolerance::Medium),
        Just(RiskTolerance::High),
    ]
}

fn decision_option() -> impl Strategy<Value = DecisionOption> {
    (
        "[a-z]{1,8}",
        1u8..=10,
        0.0f64..100_000.0,
        0.5f64..500.0,
        0.0f64..=1.0,
    )
        .prop_map(
            |(name, risk_level, potential_return, time_investment, success_probability)| {
                DecisionOption {
                    description: format!("{name} option"),
                    name,
                    risk_level,
                    potential_return,
                    time_investment,
                    success_probability,
                }
            },
        )
}

const SKILL_POOL: [&str; 6] = [
    "Programming",
    "Writing",
    "Marketing",
    "Teaching",
    "Data Analysis",
    "Python",
];

fn profile(
    skills: Vec<&str>,
    risk_tolerance: RiskTolerance,
    time_available: u32,
    investment_capacity: u32,
) -> UserProfile {
    UserProfile {
        skills: skills.into_iter().map(str::to_string).collect(),
        interests: vec!["independence".to_string()],
        experience: Default::default(),
        time_available,
        risk_tolerance,
        investment_capacity,
    }
}

proptest! {
    #[test]
    fn category_score_is_the_rounded_mean(scores in prop::collection::vec(likert(), 1..=3)) {
        let questionnaire = Questionnaire::standard();
        let sheet = AnswerSheet::from_pairs(
            scores
                .iter()
                .enumerate()
                .map(|(index, score)| (answer_key(CategoryId::Financial, index), *score)),
        );

        let result = score_answers(&questionnaire, &sheet).expect("valid answers");
        let sum: u32 = scores.iter().map(|score| u32::from(*score)).sum();
        let expected = (f64::from(sum) / scores.len() as f64).round() as u8;

        prop_assert_eq!(result.score_for(CategoryId::Financial), Some(expected));
        prop_assert!(result.overall <= 100);
    }

    #[test]
    fn fully_answered_overall_is_mean_of_categories(
        answers in prop::collection::vec(likert(), 15)
    ) {
        let questionnaire = Questionnaire::standard();
        let mut sheet = AnswerSheet::new();
        let mut answers = answers.into_iter();
        for category in questionnaire.categories() {
            for index in 0..category.questions.len() {
                let score = answers.next().unwrap_or(LIKERT_SCORES[0]);
                sheet
                    .record(&questionnaire, category.id, index, score)
                    .expect("valid answer");
            }
        }

        let scores = score_answers(&questionnaire, &sheet).expect("valid answers");
        let sum: u32 = scores.categories.iter().map(|c| u32::from(c.score)).sum();
        let expected = (f64::from(sum) / scores.categories.len() as f64).round() as u8;
        prop_assert_eq!(scores.overall, expected);
    }

    #[test]
    fn ranking_is_idempotent(options in prop::collection::vec(decision_option(), 2..6)) {
        let first = rank_options(&options).expect("valid options");
        let second = rank_options(&options).expect("valid options");
        prop_assert_eq!(&first, &second);
        prop_assert!(first
            .ranked()
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn matches_respect_the_risk_ceiling(
        skills in prop::sample::subsequence(SKILL_POOL.to_vec(), 1..=SKILL_POOL.len()),
        tolerance in tolerance(),
        time_available in 0u32..40,
        investment_capacity in 0u32..20_000,
    ) {
        let catalog = OpportunityCatalog::standard();
        let matches = match_opportunities(
            catalog.opportunities(),
            &profile(skills, tolerance, time_available, investment_capacity),
        )
        .expect("valid profile");

        for opportunity in &matches {
            prop_assert!(tolerance.admits(opportunity.risk_level));
            prop_assert!(opportunity.requirements.time_commitment <= time_available);
            prop_assert!(opportunity.requirements.initial_investment <= investment_capacity);
        }
    }

    #[test]
    fn more_capital_never_loses_matches(
        skills in prop::sample::subsequence(SKILL_POOL.to_vec(), 1..=SKILL_POOL.len()),
        tolerance in tolerance(),
        capacity in 0u32..10_000,
        extra in 0u32..10_000,
    ) {
        let catalog = OpportunityCatalog::standard();
        let ids = |capacity: u32| -> Vec<u32> {
            match_opportunities(
                catalog.opportunities(),
                &profile(skills.clone(), tolerance, 30, capacity),
            )
            .expect("valid profile")
            .into_iter()
            .map(|opportunity| opportunity.id)
            .collect()
        };

        let richer = ids(capacity + extra);
        for id in ids(capacity) {
            prop_assert!(richer.contains(&id));
        }
    }

    #[test]
    fn learning_paths_last_at_least_eight_weeks(current in 1u8..=10, target in 1u8..=10) {
        let skill = Skill {
            name: "Negotiation".to_string(),
            category: "business".to_string(),
            current_level: current,
            target_level: target,
            priority: Priority::Medium,
            market_demand: 5,
        };
        let path = synthesize(&skill, None, &mut FixedSelector(0)).expect("valid skill");

        prop_assert!(path.total_weeks >= MINIMUM_WEEKS);
        let phase_weeks: u32 = path.phases.iter().map(|phase| phase.weeks).sum();
        prop_assert!(phase_weeks >= path.total_weeks);
        prop_assert!(phase_weeks <= path.total_weeks + 2);
        prop_assert_eq!(path.milestones.last().map(|m| m.week), Some(path.total_weeks));
    }
}
