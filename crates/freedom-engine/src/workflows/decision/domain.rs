use serde::{Deserialize, Serialize};

/// A user-entered alternative to compare against the others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub name: String,
    pub description: String,
    /// 1 (safe) to 10 (reckless).
    pub risk_level: u8,
    pub potential_return: f64,
    /// Hours the option demands; must be positive.
    pub time_investment: f64,
    /// Probability in `[0, 1]`.
    pub success_probability: f64,
}

impl DecisionOption {
    pub fn validate(&self) -> Result<(), DecisionError> {
        if !(1..=10).contains(&self.risk_level) {
            return Err(DecisionError::RiskOutOfRange {
                option: self.name.clone(),
                risk_level: self.risk_level,
            });
        }
        if !self.potential_return.is_finite() || self.potential_return < 0.0 {
            return Err(DecisionError::NegativeReturn {
                option: self.name.clone(),
            });
        }
        if !self.time_investment.is_finite() || self.time_investment <= 0.0 {
            return Err(DecisionError::NonPositiveTimeInvestment {
                option: self.name.clone(),
            });
        }
        if !(0.0..=1.0).contains(&self.success_probability) {
            return Err(DecisionError::ProbabilityOutOfRange {
                option: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// Append-only list of options, mirroring the "add option" form.
#[derive(Debug, Clone, Default)]
pub struct DecisionBoard {
    options: Vec<DecisionOption>,
}

impl DecisionBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, option: DecisionOption) -> Result<&DecisionOption, DecisionError> {
        if option.name.trim().is_empty() {
            return Err(DecisionError::MissingField("name"));
        }
        if option.description.trim().is_empty() {
            return Err(DecisionError::MissingField("description"));
        }
        option.validate()?;
        self.options.push(option);
        Ok(&self.options[self.options.len() - 1])
    }

    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("add at least 2 options to compare (got {0})")]
    TooFewOptions(usize),
    #[error("option field '{0}' must not be empty")]
    MissingField(&'static str),
    #[error("option '{option}' has risk level {risk_level}; expected 1 to 10")]
    RiskOutOfRange { option: String, risk_level: u8 },
    #[error("option '{option}' must have a non-negative potential return")]
    NegativeReturn { option: String },
    #[error("option '{option}' must have a time investment greater than zero")]
    NonPositiveTimeInvestment { option: String },
    #[error("option '{option}' must have a success probability between 0 and 1")]
    ProbabilityOutOfRange { option: String },
    #[error("option '{option}' produces a score that is not a finite number")]
    DegenerateScore { option: String },
}
