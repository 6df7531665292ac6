//! Likelihood scoring for generated candidates
//!
//! Every candidate is checked against a fixed battery of heuristic rules
//! (see [`rules`]) and receives the sum of the matching deltas. Higher
//! scores mean more likely to be in real-world use; scores may be negative.

pub mod rules;
mod scorer;

pub use scorer::Scorer;

use crate::error::Result;

/// Score one candidate against a company, optional city and current year
pub fn score(candidate: &str, company: &str, city: Option<&str>, current_year: i32) -> Result<i64> {
    Scorer::new(company, city, current_year).score(candidate)
}
