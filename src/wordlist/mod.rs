//! Candidate wordlist generation
//!
//! Seed words are expanded with special-character, year and number-sequence
//! suffixes into one deduplicated candidate set.

mod generator;
mod seeds;

pub use generator::{generate, SequenceEmission, VariantGenerator};
pub use seeds::{capitalize, case_variants, seed_words, ONE_OFFS, SEASON_WORDS};

/// Suffixes appended to every bare, year and length-3 sequence form
pub const SPECIAL_SUFFIXES: &[&str] = &["!", "@", "#", "$"];

/// Appended to bare words only, never after a year or number sequence
pub const TRAILING_ONE: &str = "1";

/// Separator placed between a word and a year or number sequence
pub const AT_SEPARATOR: &str = "@";

/// Longest number sequence ("1234567")
pub const MAX_SEQUENCE_LEN: usize = 7;
