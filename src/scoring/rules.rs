//! Rule table: point deltas for every scoring signal

/// Candidates starting with the literal base word
pub const BASE_WORD: &str = "password";
pub const BASE_WORD_PREFIX: i64 = 100;

pub const COMPANY_PREFIX: i64 = 80;
pub const COMPANY_SUBSTRING: i64 = 25;

/// Awarded once, for the first season the candidate starts with
pub const SEASON_PREFIX: i64 = 70;

pub const CITY_PREFIX: i64 = 50;
pub const CITY_SUBSTRING: i64 = 15;

pub const AT_SIGN: i64 = 25;

pub const RECENT_YEAR_FULL: i64 = 30;
pub const RECENT_YEAR_SHORT: i64 = 20;

/// Ending bonuses in priority order; only the first match applies
pub const SUFFIX_WEIGHTS: &[(&str, i64)] = &[
    ("1", 40),
    ("!", 35),
    ("123", 30),
    ("123!", 28),
    ("2024", 22),
    ("2023", 18),
    ("2025", 18),
];

pub const LONG_DIGIT_TAIL: &str = "1234567";
pub const LONG_DIGIT_TAIL_PENALTY: i64 = -10;

/// Well-known one-offs; "Password1" takes [`TOP_ONE_OFF_BONUS`] instead
pub const COMMON_ONE_OFFS: &[&str] = &["Password1", "P@ssw0rd"];
pub const COMMON_ONE_OFF: i64 = 50;

/// Pinned to the top of every list it appears in. Replaces the common
/// one-off bonus rather than adding to it.
pub const TOP_ONE_OFF: &str = "Password1";
pub const TOP_ONE_OFF_BONUS: i64 = 1000;

pub const CAPITALIZED: i64 = 12;
pub const LEADING_UPPERCASE: i64 = 6;

pub const THEMED_WITH_DIGIT: i64 = 10;
pub const THEMED_WITH_SPECIAL: i64 = 6;

pub const SEASONAL_EXACT_FULL: i64 = 500;
pub const SEASONAL_EXACT_SHORT: i64 = 480;

pub const COMPANY_YEAR_TAIL_FULL: i64 = 16;
pub const COMPANY_YEAR_SPECIAL_TAIL_FULL: i64 = 20;
pub const COMPANY_YEAR_TAIL_SHORT: i64 = 10;
pub const COMPANY_YEAR_SPECIAL_TAIL_SHORT: i64 = 14;

/// Endings of the `{company}@{year}` pattern that get penalized
pub const WEAK_PATTERN_ENDINGS: &[char] = &['@', '#', '$'];
pub const WEAK_EXACT_PENALTY: i64 = -80;

pub const SHORT_LENGTH_MAX: usize = 10;
pub const SHORT_LENGTH_BONUS: i64 = 5;
pub const LONG_LENGTH_MIN: usize = 20;
pub const LONG_LENGTH_PENALTY: i64 = -5;

pub const SPECIAL_CHARS: &[char] = &['!', '@', '#', '$'];
