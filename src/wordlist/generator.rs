//! Variant generator: expands seed words into the candidate set

use std::collections::HashSet;

use super::seeds::{case_variants, seed_words, ONE_OFFS};
use super::{AT_SEPARATOR, MAX_SEQUENCE_LEN, SPECIAL_SUFFIXES, TRAILING_ONE};
use crate::types::Context;

/// What a number sequence of a given length contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceEmission {
    /// Too short ("1", "12")
    Skip,
    /// Plain and "@" forms, each with every special suffix ("123")
    WithSpecials,
    /// Plain and "@" forms only ("1234" .. "1234567")
    Bare,
}

impl SequenceEmission {
    pub fn for_length(len: usize) -> Self {
        match len {
            0..=2 => SequenceEmission::Skip,
            3 => SequenceEmission::WithSpecials,
            _ => SequenceEmission::Bare,
        }
    }
}

/// Generator for organization-targeted candidates
pub struct VariantGenerator<'a> {
    ctx: &'a Context,
    results: HashSet<String>,
}

impl<'a> VariantGenerator<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self {
            ctx,
            results: HashSet::new(),
        }
    }

    /// Run every construction rule and return the deduplicated set
    pub fn generate(mut self) -> HashSet<String> {
        self.results.extend(ONE_OFFS.iter().map(|s| s.to_string()));

        let words = seed_words(self.ctx);
        for word in &words {
            for variant in case_variants(word) {
                self.add_bare(&variant);
                self.add_years(&variant);
                self.add_sequences(&variant);
            }
        }

        tracing::debug!(
            company = %self.ctx.company,
            seeds = words.len(),
            candidates = self.results.len(),
            "Generated candidate set"
        );

        self.results
    }

    /// Insert `base` and `base` followed by each suffix
    fn add_with_suffixes(&mut self, base: String, suffixes: &[&str]) {
        for suffix in suffixes {
            self.results.insert(format!("{}{}", base, suffix));
        }
        self.results.insert(base);
    }

    fn add_bare(&mut self, variant: &str) {
        self.add_with_suffixes(variant.to_string(), SPECIAL_SUFFIXES);
        self.results.insert(format!("{}{}", variant, TRAILING_ONE));
    }

    fn add_years(&mut self, variant: &str) {
        for year in self.ctx.years() {
            for form in self.ctx.year_form.forms(year) {
                self.add_with_suffixes(format!("{}{}", variant, form), SPECIAL_SUFFIXES);
                self.add_with_suffixes(
                    format!("{}{}{}", variant, AT_SEPARATOR, form),
                    SPECIAL_SUFFIXES,
                );
            }
        }
    }

    fn add_sequences(&mut self, variant: &str) {
        let mut sequence = String::with_capacity(MAX_SEQUENCE_LEN);
        for digit in 1..=MAX_SEQUENCE_LEN {
            sequence.push_str(&digit.to_string());

            let plain = format!("{}{}", variant, sequence);
            let at = format!("{}{}{}", variant, AT_SEPARATOR, sequence);
            match SequenceEmission::for_length(sequence.len()) {
                SequenceEmission::Skip => {}
                SequenceEmission::WithSpecials => {
                    self.add_with_suffixes(plain, SPECIAL_SUFFIXES);
                    self.add_with_suffixes(at, SPECIAL_SUFFIXES);
                }
                SequenceEmission::Bare => {
                    self.results.insert(plain);
                    self.results.insert(at);
                }
            }
        }
    }
}

/// Expand the context's seed vocabulary into the candidate set
pub fn generate(ctx: &Context) -> HashSet<String> {
    VariantGenerator::new(ctx).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{WordlistConfig, YearForm};

    fn context(company: &str, config: WordlistConfig) -> Context {
        Context::resolve(company, &config, 2024).unwrap()
    }

    fn minimal() -> WordlistConfig {
        WordlistConfig {
            include_seasons: false,
            base_year: Some(2023),
            year_range: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_sequence_emission() {
        assert_eq!(SequenceEmission::for_length(1), SequenceEmission::Skip);
        assert_eq!(SequenceEmission::for_length(2), SequenceEmission::Skip);
        assert_eq!(SequenceEmission::for_length(3), SequenceEmission::WithSpecials);
        for len in 4..=MAX_SEQUENCE_LEN {
            assert_eq!(SequenceEmission::for_length(len), SequenceEmission::Bare);
        }
    }

    #[test]
    fn test_one_offs_always_present() {
        let set = generate(&context("Acme", minimal()));
        for one_off in ONE_OFFS {
            assert!(set.contains(*one_off), "missing {}", one_off);
        }
    }

    #[test]
    fn test_trailing_one_only_on_bare_words() {
        let set = generate(&context("Acme", minimal()));
        assert!(set.contains("acme1"));
        assert!(set.contains("Acme1"));
        assert!(!set.contains("acme20231"));
        assert!(!set.contains("acme@20231"));
        assert!(!set.contains("acme1231"));
    }

    #[test]
    fn test_sequence_specials_only_at_length_three() {
        let set = generate(&context("Acme", minimal()));
        assert!(set.contains("acme123!"));
        assert!(set.contains("acme@123$"));
        assert!(set.contains("acme1234"));
        assert!(set.contains("acme@1234567"));
        assert!(!set.contains("acme1234!"));
        assert!(!set.contains("acme@1234567#"));
        assert!(!set.contains("acme12"));
        assert!(!set.contains("acme@12"));
    }

    #[test]
    fn test_year_range_is_inclusive() {
        let set = generate(&context("Acme", minimal()));
        assert!(set.contains("acme2023"));
        assert!(set.contains("Acme@2024#"));
        assert!(!set.contains("acme2022"));
        assert!(!set.contains("acme2025"));
        assert!(!set.contains("acme23"));
    }

    #[test]
    fn test_short_year_form() {
        let config = WordlistConfig {
            year_form: YearForm::FullAndShort,
            ..minimal()
        };
        let set = generate(&context("Acme", config));
        assert!(set.contains("acme2023"));
        assert!(set.contains("acme23"));
        assert!(set.contains("Acme@24!"));
        assert!(!set.contains("acme241"));
    }

    #[test]
    fn test_seasons_toggle() {
        let with = generate(&context("Acme", WordlistConfig {
            include_seasons: true,
            ..minimal()
        }));
        let without = generate(&context("Acme", minimal()));

        assert!(with.contains("Summer@2024!"));
        assert!(with.contains("fall123"));
        assert!(!without.iter().any(|c| c.to_lowercase().starts_with("summer")));
    }

    #[test]
    fn test_city_keeps_original_case() {
        let config = WordlistConfig {
            city: Some("New York".to_string()),
            ..minimal()
        };
        let set = generate(&context("Acme", config));
        assert!(set.contains("New York2023"));
        assert!(set.contains("new york@2024$"));
        assert!(set.contains("New york1"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let ctx = context("Acme", WordlistConfig::default());
        assert_eq!(generate(&ctx), generate(&ctx));
    }
}
