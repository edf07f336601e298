//! Decision support: composite option scoring and the recommendation narrative.

mod domain;
mod ranker;
mod recommendation;

pub use domain::{DecisionBoard, DecisionError, DecisionOption};
pub use ranker::{option_score, rank_options, DecisionRanking, ScoredOption};
pub use recommendation::{recommend, DecisionRecommendation, RiskBand, RECOMMENDATION_CONFIDENCE};
