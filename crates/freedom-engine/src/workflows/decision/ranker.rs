use serde::Serialize;

use super::domain::{DecisionError, DecisionOption};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredOption {
    /// Position in the submitted option list.
    pub index: usize,
    pub name: String,
    pub score: f64,
}

/// Only built by [`rank_options`], which guarantees at least two entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionRanking {
    /// Highest score first; equal scores keep submission order.
    ranked: Vec<ScoredOption>,
}

impl DecisionRanking {
    pub fn ranked(&self) -> &[ScoredOption] {
        &self.ranked
    }

    pub fn into_ranked(self) -> Vec<ScoredOption> {
        self.ranked
    }

    pub fn best(&self) -> &ScoredOption {
        &self.ranked[0]
    }

    pub fn runner_up(&self) -> Option<&ScoredOption> {
        self.ranked.get(1)
    }
}

/// `(return / time) * probability * (1 - risk / 10)`.
pub fn option_score(option: &DecisionOption) -> f64 {
    (option.potential_return / option.time_investment)
        * option.success_probability
        * (1.0 - f64::from(option.risk_level) / 10.0)
}

pub fn rank_options(options: &[DecisionOption]) -> Result<DecisionRanking, DecisionError> {
    if options.len() < 2 {
        return Err(DecisionError::TooFewOptions(options.len()));
    }
    for option in options {
        option.validate()?;
    }

    let mut ranked = Vec::with_capacity(options.len());
    for (index, option) in options.iter().enumerate() {
        // In-range inputs can still overflow to inf, and inf * 0 is NaN.
        let score = option_score(option);
        if !score.is_finite() {
            return Err(DecisionError::DegenerateScore {
                option: option.name.clone(),
            });
        }
        ranked.push(ScoredOption {
            index,
            name: option.name.clone(),
            score,
        });
    }

    // Stable sort: the first-seen option wins exact ties.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(DecisionRanking { ranked })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(
        name: &str,
        potential_return: f64,
        time_investment: f64,
        success_probability: f64,
        risk_level: u8,
    ) -> DecisionOption {
        DecisionOption {
            name: name.to_string(),
            description: format!("{name} description"),
            risk_level,
            potential_return,
            time_investment,
            success_probability,
        }
    }

    #[test]
    fn higher_yield_option_wins() {
        let options = vec![
            option("A", 10_000.0, 100.0, 0.8, 3),
            option("B", 5_000.0, 20.0, 0.9, 2),
        ];

        let ranking = rank_options(&options).expect("valid options");

        assert!((ranking.ranked()[1].score - 56.0).abs() < 1e-9);
        assert!((ranking.best().score - 180.0).abs() < 1e-9);
        assert_eq!(ranking.best().name, "B");
        assert_eq!(ranking.best().index, 1);
    }

    #[test]
    fn first_seen_option_wins_exact_ties() {
        let options = vec![
            option("first", 1_000.0, 10.0, 0.5, 5),
            option("second", 1_000.0, 10.0, 0.5, 5),
            option("third", 10.0, 10.0, 0.5, 5),
        ];

        let ranking = rank_options(&options).expect("valid options");
        assert_eq!(ranking.best().name, "first");
        assert_eq!(ranking.runner_up().map(|o| o.name.as_str()), Some("second"));
    }

    #[test]
    fn rejects_fewer_than_two_options() {
        assert_eq!(rank_options(&[]), Err(DecisionError::TooFewOptions(0)));
        assert_eq!(
            rank_options(&[option("solo", 1.0, 1.0, 0.5, 5)]),
            Err(DecisionError::TooFewOptions(1))
        );
    }

    #[test]
    fn rejects_zero_time_investment_instead_of_ranking_nan() {
        let options = vec![
            option("A", 10_000.0, 0.0, 0.8, 3),
            option("B", 5_000.0, 20.0, 0.9, 2),
        ];
        assert_eq!(
            rank_options(&options),
            Err(DecisionError::NonPositiveTimeInvestment {
                option: "A".to_string()
            })
        );
    }

    #[test]
    fn rejects_scores_that_overflow_to_nan() {
        let zero_probability = vec![
            option("A", 1e308, 1e-10, 0.0, 5),
            option("B", 100.0, 10.0, 0.5, 5),
        ];
        assert_eq!(
            rank_options(&zero_probability),
            Err(DecisionError::DegenerateScore {
                option: "A".to_string()
            })
        );

        let maximum_risk = vec![
            option("B", 100.0, 10.0, 0.5, 5),
            option("A", 1e308, 1e-10, 0.5, 10),
        ];
        assert_eq!(
            rank_options(&maximum_risk),
            Err(DecisionError::DegenerateScore {
                option: "A".to_string()
            })
        );

        let infinite_yield = vec![
            option("A", 1e308, 1e-10, 0.5, 5),
            option("B", 100.0, 10.0, 0.5, 5),
        ];
        assert!(matches!(
            rank_options(&infinite_yield),
            Err(DecisionError::DegenerateScore { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_inputs() {
        let risky = vec![option("A", 1.0, 1.0, 0.5, 11), option("B", 1.0, 1.0, 0.5, 1)];
        assert!(matches!(
            rank_options(&risky),
            Err(DecisionError::RiskOutOfRange { risk_level: 11, .. })
        ));

        let unlikely = vec![option("A", 1.0, 1.0, 1.5, 1), option("B", 1.0, 1.0, 0.5, 1)];
        assert!(matches!(
            rank_options(&unlikely),
            Err(DecisionError::ProbabilityOutOfRange { .. })
        ));

        let negative = vec![option("A", -1.0, 1.0, 0.5, 1), option("B", 1.0, 1.0, 0.5, 1)];
        assert!(matches!(
            rank_options(&negative),
            Err(DecisionError::NegativeReturn { .. })
        ));
    }
}
