//! Core types and structures for passforge

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::invalid_input;

/// Which string forms of a year are appended during generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearForm {
    /// Four digits only ("2024")
    #[default]
    Full,
    /// Four digits plus the two-digit short form ("2024", "24")
    FullAndShort,
}

impl YearForm {
    /// String forms of `year` for this setting, four-digit form first
    pub fn forms(&self, year: i32) -> Vec<String> {
        match self {
            YearForm::Full => vec![year.to_string()],
            YearForm::FullAndShort => vec![year.to_string(), short_year(year)],
        }
    }
}

impl std::fmt::Display for YearForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YearForm::Full => write!(f, "full"),
            YearForm::FullAndShort => write!(f, "fullandshort"),
        }
    }
}

/// Last two digits of a year, zero padded ("2024" -> "24", "2005" -> "05")
pub fn short_year(year: i32) -> String {
    format!("{:02}", year.rem_euclid(100))
}

/// Caller-facing generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordlistConfig {
    pub include_seasons: bool,
    /// Defaults to the year before the current one
    pub base_year: Option<i32>,
    pub year_range: u32,
    pub city: Option<String>,
    pub year_form: YearForm,
}

impl Default for WordlistConfig {
    fn default() -> Self {
        Self {
            include_seasons: true,
            base_year: None,
            year_range: 2,
            city: None,
            year_form: YearForm::Full,
        }
    }
}

/// Validated inputs for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Context {
    pub company: String,
    pub city: Option<String>,
    pub base_year: i32,
    pub year_range: u32,
    pub include_seasons: bool,
    pub current_year: i32,
    pub year_form: YearForm,
}

impl Context {
    /// Trim and validate `company`, normalize the city and resolve the base year.
    ///
    /// Fails with `InvalidInput` when `company` is blank. A blank city is
    /// treated as absent.
    pub fn resolve(company: &str, config: &WordlistConfig, current_year: i32) -> Result<Self> {
        let company = company.trim();
        if company.is_empty() {
            return Err(invalid_input!("company must be a non-empty string"));
        }

        let city = config
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(Self {
            company: company.to_string(),
            city,
            base_year: config.base_year.unwrap_or(current_year.saturating_sub(1)),
            year_range: config.year_range,
            include_seasons: config.include_seasons,
            current_year,
            year_form: config.year_form,
        })
    }

    /// Inclusive range of years used for suffixing
    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        let span = i32::try_from(self.year_range).unwrap_or(i32::MAX);
        self.base_year..=self.base_year.saturating_add(span)
    }
}

/// A candidate with its likelihood score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: String,
    pub score: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_trims_and_defaults() {
        let config = WordlistConfig {
            city: Some("  Berlin ".to_string()),
            ..Default::default()
        };
        let ctx = Context::resolve("  Acme  ", &config, 2024).unwrap();
        assert_eq!(ctx.company, "Acme");
        assert_eq!(ctx.city.as_deref(), Some("Berlin"));
        assert_eq!(ctx.base_year, 2023);
        assert_eq!(ctx.years(), 2023..=2025);
    }

    #[test]
    fn test_resolve_blank_city_is_absent() {
        let config = WordlistConfig {
            city: Some("   ".to_string()),
            ..Default::default()
        };
        let ctx = Context::resolve("Acme", &config, 2024).unwrap();
        assert_eq!(ctx.city, None);
    }

    #[test]
    fn test_resolve_rejects_blank_company() {
        let config = WordlistConfig::default();
        for company in ["", "   ", "\t\n"] {
            let err = Context::resolve(company, &config, 2024).unwrap_err();
            assert!(err.is_invalid_input());
        }
    }

    #[test]
    fn test_zero_range_is_single_year() {
        let config = WordlistConfig {
            base_year: Some(2020),
            year_range: 0,
            ..Default::default()
        };
        let ctx = Context::resolve("Acme", &config, 2024).unwrap();
        assert_eq!(ctx.years().collect::<Vec<_>>(), vec![2020]);
    }

    #[test]
    fn test_year_forms() {
        assert_eq!(YearForm::Full.forms(2024), vec!["2024"]);
        assert_eq!(YearForm::FullAndShort.forms(2005), vec!["2005", "05"]);
        assert_eq!(YearForm::default(), YearForm::Full);
    }
}
