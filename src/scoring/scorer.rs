//! Heuristic likelihood scorer

use std::sync::OnceLock;

use regex::Regex;

use super::rules::*;
use crate::error::Result;
use crate::invalid_input;
use crate::types::{short_year, Context};
use crate::wordlist::SEASON_WORDS;

static SEASONAL_EXACT: OnceLock<Regex> = OnceLock::new();

/// `{season}@{digits}` or `{season}{digits}!`, anchored
fn seasonal_pattern() -> &'static Regex {
    SEASONAL_EXACT.get_or_init(|| {
        let pattern = format!(r"^(?:{})(?:@(\d+)|(\d+)!)$", SEASON_WORDS.join("|"));
        Regex::new(&pattern).expect("seasonal pattern is built from constant season words")
    })
}

/// Scores candidates for one company/city/year context.
///
/// Lowercased company and city plus the recent-year strings are computed
/// once, so scoring a whole candidate set only lowercases each candidate.
#[derive(Debug, Clone)]
pub struct Scorer {
    company: Option<String>,
    city: Option<String>,
    full_years: Vec<String>,
    short_years: Vec<String>,
}

impl Scorer {
    pub fn new(company: &str, city: Option<&str>, current_year: i32) -> Self {
        let lower = |s: &str| Some(s.to_lowercase()).filter(|s| !s.is_empty());
        let recent = current_year.saturating_sub(1)..=current_year.saturating_add(1);

        Self {
            company: lower(company),
            city: city.and_then(lower),
            full_years: recent.clone().map(|y| y.to_string()).collect(),
            short_years: recent.map(short_year).collect(),
        }
    }

    pub fn from_context(ctx: &Context) -> Self {
        Self::new(&ctx.company, ctx.city.as_deref(), ctx.current_year)
    }

    /// Sum of all matching rule deltas. Fails with `InvalidInput` on an empty candidate.
    pub fn score(&self, candidate: &str) -> Result<i64> {
        if candidate.is_empty() {
            return Err(invalid_input!("cannot score an empty candidate"));
        }

        let lower = candidate.to_lowercase();
        let mut score = 0;

        if lower.starts_with(BASE_WORD) {
            score += BASE_WORD_PREFIX;
        }
        if let Some(company) = &self.company {
            if lower.starts_with(company.as_str()) {
                score += COMPANY_PREFIX;
            }
            if lower.contains(company.as_str()) {
                score += COMPANY_SUBSTRING;
            }
        }
        if SEASON_WORDS.iter().any(|s| lower.starts_with(s)) {
            score += SEASON_PREFIX;
        }
        if let Some(city) = &self.city {
            if lower.starts_with(city.as_str()) {
                score += CITY_PREFIX;
            }
            if lower.contains(city.as_str()) {
                score += CITY_SUBSTRING;
            }
        }
        if candidate.contains('@') {
            score += AT_SIGN;
        }

        score += self.recent_year(&lower);
        score += suffix_weight(candidate);

        if candidate.ends_with(LONG_DIGIT_TAIL) {
            score += LONG_DIGIT_TAIL_PENALTY;
        }
        if candidate == TOP_ONE_OFF {
            score += TOP_ONE_OFF_BONUS;
        } else if COMMON_ONE_OFFS.iter().any(|o| *o == candidate) {
            score += COMMON_ONE_OFF;
        }

        score += capitalization(candidate);
        score += self.themed_pattern(candidate, &lower);
        score += self.seasonal_exact(&lower);
        score += self.company_year_tail(&lower);
        score += self.weak_exact_pattern(&lower);
        score += length_adjustment(candidate);

        Ok(score)
    }

    /// Years are tried oldest first; for each, the four-digit form before the
    /// two-digit one. The first hit decides.
    fn recent_year(&self, lower: &str) -> i64 {
        for (full, short) in self.full_years.iter().zip(&self.short_years) {
            if lower.contains(full.as_str()) {
                return RECENT_YEAR_FULL;
            }
            if lower.contains(short.as_str()) {
                return RECENT_YEAR_SHORT;
            }
        }
        0
    }

    fn themed_pattern(&self, candidate: &str, lower: &str) -> i64 {
        let themed = self
            .company
            .iter()
            .chain(self.city.iter())
            .any(|token| lower.contains(token.as_str()))
            || SEASON_WORDS.iter().any(|s| lower.contains(s));
        if !themed {
            return 0;
        }

        let mut bonus = 0;
        if candidate.chars().any(|c| c.is_ascii_digit()) {
            bonus += THEMED_WITH_DIGIT;
        }
        if candidate.contains(SPECIAL_CHARS) {
            bonus += THEMED_WITH_SPECIAL;
        }
        bonus
    }

    fn seasonal_exact(&self, lower: &str) -> i64 {
        let Some(caps) = seasonal_pattern().captures(lower) else {
            return 0;
        };
        let Some(year) = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str()) else {
            return 0;
        };

        if self.full_years.iter().any(|y| y == year) {
            SEASONAL_EXACT_FULL
        } else if self.short_years.iter().any(|y| y == year) {
            SEASONAL_EXACT_SHORT
        } else {
            0
        }
    }

    fn company_year_tail(&self, lower: &str) -> i64 {
        match &self.company {
            Some(company) if lower.contains(company.as_str()) => {}
            _ => return 0,
        }

        let before_special = lower.strip_suffix(SPECIAL_CHARS);
        let tiers = [
            (&self.full_years, COMPANY_YEAR_TAIL_FULL, COMPANY_YEAR_SPECIAL_TAIL_FULL),
            (&self.short_years, COMPANY_YEAR_TAIL_SHORT, COMPANY_YEAR_SPECIAL_TAIL_SHORT),
        ];
        for (years, plain, special) in tiers {
            for year in years {
                if lower.ends_with(year.as_str()) {
                    return plain;
                }
                if before_special.is_some_and(|rest| rest.ends_with(year.as_str())) {
                    return special;
                }
            }
        }
        0
    }

    /// `{company}@{year}` followed by one of `@`, `#`, `$`
    fn weak_exact_pattern(&self, lower: &str) -> i64 {
        let year = self
            .company
            .as_deref()
            .and_then(|company| lower.strip_prefix(company))
            .and_then(|rest| rest.strip_prefix('@'))
            .and_then(|rest| rest.strip_suffix(WEAK_PATTERN_ENDINGS));

        match year {
            Some(year)
                if self.full_years.iter().chain(&self.short_years).any(|y| y == year) =>
            {
                WEAK_EXACT_PENALTY
            }
            _ => 0,
        }
    }
}

fn suffix_weight(candidate: &str) -> i64 {
    SUFFIX_WEIGHTS
        .iter()
        .find(|(suffix, _)| candidate.ends_with(suffix))
        .map_or(0, |(_, weight)| *weight)
}

fn capitalization(candidate: &str) -> i64 {
    let mut chars = candidate.chars();
    if !chars.next().is_some_and(char::is_uppercase) {
        return 0;
    }

    let rest = chars.as_str();
    if rest.chars().any(char::is_lowercase) && !rest.chars().any(char::is_uppercase) {
        CAPITALIZED
    } else {
        LEADING_UPPERCASE
    }
}

fn length_adjustment(candidate: &str) -> i64 {
    let len = candidate.chars().count();
    if len <= SHORT_LENGTH_MAX {
        SHORT_LENGTH_BONUS
    } else if len >= LONG_LENGTH_MIN {
        LONG_LENGTH_PENALTY
    } else {
        0
    }
}
