//! Recommendation matcher
//!
//! Scores catalog items against free text from the shopper and the assistant
//! and returns a bounded, deterministic top list. No model call is involved.
//!
//! ## Confidence by signal
//!
//! | Signal | Reason tag | Confidence |
//! |------|------|--------|
//! | Item name mentioned | name-match | 0.9 |
//! | Shopper intent implies the item | heuristic-match | 0.85 |
//! | Category mentioned | category-match | 0.8 |
//! | Shared vocabulary keyword | keyword-match | 0.7 |
//!
//! An item takes the confidence of its strongest signal. Ties keep catalog
//! order.

pub mod catalog;
pub mod ranking;
pub mod signals;

pub use catalog::{Catalog, CatalogItem, PriceRange, ProductCategory};
pub use ranking::{CandidateScore, MAX_RECOMMENDATIONS, ReasonTag, rank};
pub use signals::MatchContext;
