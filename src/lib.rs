//! Passforge - organization-targeted password wordlists
//!
//! Generates candidate passwords from a company name, optional city, year
//! range and season vocabulary, then ranks them by estimated likelihood of
//! real-world use. Intended for password-strength audits.

pub mod error;
pub mod ranker;
pub mod scoring;
pub mod types;
pub mod wordlist;

// Re-export commonly used types
pub use error::{PassForgeError, Result};
pub use types::{Context, ScoredCandidate, WordlistConfig, YearForm};

// Re-export main functionality
pub use ranker::{generate_ranked_list, generate_ranked_list_at, generate_scored_list, rank};
pub use scoring::{score, Scorer};
pub use wordlist::generate;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
