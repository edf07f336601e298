//! Scoring, matching, and recommendation engine behind the freedom self-assessment.
//!
//! Every workflow is a pure function over immutable inputs. The HTTP router and the
//! [`analysis`] gate are the only pieces that touch async runtime state.

pub mod analysis;
pub mod config;
pub mod error;
pub mod router;
pub mod selection;
pub mod telemetry;
pub mod workflows;
