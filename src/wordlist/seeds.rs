//! Seed vocabulary for candidate generation

use crate::types::Context;

/// Well-known weak passwords inserted verbatim, independent of context
pub const ONE_OFFS: &[&str] = &["welcome", "letmein", "Password", "P@ssw0rd"];

/// Season vocabulary, used when seasons are enabled
pub const SEASON_WORDS: &[&str] = &["spring", "summer", "winter", "fall", "autumn"];

/// Base word present in every run
const BASE_WORD: &str = "password";

/// Uppercase the first character and lowercase the rest ("nEW yORK" -> "New york")
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Case variants of a seed word: as given, lowercased, capitalized.
///
/// Duplicates are kept; the generator's set collapses them.
pub fn case_variants(word: &str) -> [String; 3] {
    [word.to_string(), word.to_lowercase(), capitalize(word)]
}

/// Seed words derived from the context, excluding one-offs
pub fn seed_words(ctx: &Context) -> Vec<String> {
    let mut words = vec![
        BASE_WORD.to_string(),
        ctx.company.to_lowercase(),
        capitalize(&ctx.company),
    ];

    if ctx.include_seasons {
        words.extend(SEASON_WORDS.iter().map(|s| s.to_string()));
    }

    if let Some(city) = &ctx.city {
        words.extend(case_variants(city));
    }

    words
}
