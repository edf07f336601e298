//! Opportunity discovery: the bundled catalog and profile-based matching.

mod catalog;
pub mod domain;
mod matcher;

pub use catalog::OpportunityCatalog;
pub use domain::{
    Difficulty, ExperienceLevel, IncomeRange, MarketTrend, Opportunity, OpportunityCategory,
    Requirements, RiskTolerance, UserProfile,
};
pub use matcher::{
    explain_matches, match_opportunities, Exclusion, ExclusionReason, MatchError, MatchReport,
};
