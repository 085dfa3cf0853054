//! Weighted optimal string alignment (OSA) distance.
//!
//! OSA distance generalizes Levenshtein distance with a restricted
//! transposition of two adjacent symbols, under caller-supplied and
//! possibly unequal weights for insertion, deletion, replacement, and
//! transposition. Besides the distance itself, this crate enumerates
//! *every* alignment that attains the minimal cost.
//!
//! ```
//! use editdistance::{compute_all_optimal_paths, compute_distance, CostConfig};
//!
//! let config = CostConfig::unit();
//! assert_eq!(compute_distance("ab", "ba", &config), 1.0);
//!
//! let paths = compute_all_optimal_paths("aa", "a", &config);
//! assert_eq!(paths.len(), 2); // either 'a' may be deleted
//! ```

pub mod cost;
pub mod error;
pub mod osa;
pub mod report;

pub use cost::{CostConfig, EditopKind};
pub use error::{OsaError, Result};
pub use osa::{compute_all_optimal_paths, compute_distance, Editop, Path, TIE_TOLERANCE};
pub use report::{format_all_paths, print_all_paths};
