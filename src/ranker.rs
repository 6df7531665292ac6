//! Ranking: orders scored candidates for output

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{Datelike, Local};

use crate::error::Result;
use crate::scoring::Scorer;
use crate::types::{Context, ScoredCandidate, WordlistConfig};
use crate::wordlist;

/// Descending score, then ascending candidate
pub fn rank_order(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.candidate.cmp(&b.candidate))
}

/// Score every candidate and sort by `(-score, candidate)`
pub fn rank(candidates: HashSet<String>, scorer: &Scorer) -> Result<Vec<ScoredCandidate>> {
    let mut scored = candidates
        .into_iter()
        .map(|candidate| -> Result<ScoredCandidate> {
            let score = scorer.score(&candidate)?;
            Ok(ScoredCandidate { candidate, score })
        })
        .collect::<Result<Vec<_>>>()?;

    scored.sort_by(rank_order);

    if let Some(top) = scored.first() {
        tracing::debug!(
            total = scored.len(),
            top = %top.candidate,
            top_score = top.score,
            "Ranked candidates"
        );
    }

    Ok(scored)
}

/// Current calendar year from the local clock
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Generate, score and rank with an explicit current year
pub fn generate_scored_list(
    company: &str,
    config: &WordlistConfig,
    current_year: i32,
) -> Result<Vec<ScoredCandidate>> {
    let ctx = Context::resolve(company, config, current_year)?;
    let candidates = wordlist::generate(&ctx);
    rank(candidates, &Scorer::from_context(&ctx))
}

/// Ranked candidate strings for an explicit current year
pub fn generate_ranked_list_at(
    company: &str,
    config: &WordlistConfig,
    current_year: i32,
) -> Result<Vec<String>> {
    Ok(generate_scored_list(company, config, current_year)?
        .into_iter()
        .map(|scored| scored.candidate)
        .collect())
}

/// Ranked candidate strings, using the wall-clock year.
///
/// `base_year` defaults to the previous year. Fails with `InvalidInput` when
/// `company` is blank.
pub fn generate_ranked_list(company: &str, config: &WordlistConfig) -> Result<Vec<String>> {
    generate_ranked_list_at(company, config, current_year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(candidate: &str, score: i64) -> ScoredCandidate {
        ScoredCandidate {
            candidate: candidate.to_string(),
            score,
        }
    }

    #[test]
    fn test_rank_order_ties_break_alphabetically() {
        let mut list = vec![scored("b", 10), scored("a", 10), scored("c", 50), scored("A", 10)];
        list.sort_by(rank_order);
        let names: Vec<_> = list.iter().map(|s| s.candidate.as_str()).collect();
        assert_eq!(names, vec!["c", "A", "a", "b"]);
    }

    #[test]
    fn test_rank_scores_descending() {
        let candidates: HashSet<String> = ["acme", "Password1", "letmein", "acme2023!"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let ranked = rank(candidates, &Scorer::new("Acme", None, 2024)).unwrap();

        assert_eq!(ranked[0].candidate, "Password1");
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_rank_rejects_empty_candidate() {
        let candidates: HashSet<String> = ["acme", ""].iter().map(|s| s.to_string()).collect();
        assert!(rank(candidates, &Scorer::new("Acme", None, 2024)).is_err());
    }

    #[test]
    fn test_blank_company_fails() {
        let config = WordlistConfig::default();
        assert!(generate_ranked_list("   ", &config).unwrap_err().is_invalid_input());
    }
}
