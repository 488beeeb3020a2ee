//! BotQuote pricing engine
//!
//! Pure, synchronous pricing computations over the statically-configured
//! tables in `botquote-core`. Every operation is idempotent given
//! identical inputs; the engine holds no state between calls.
//!
//! # Modules
//!
//! - `bands` - user-count band lookup, plan prices, exact preset matching
//! - `strategy` - per-product-line base price rules and tier labels
//! - `addons` - add-on and provider cost aggregation
//! - `billing` - billing cycle multiplier and display currency conversion
//! - `quoter` - `QuoteService`, the end-to-end quote pipeline
//! - `store` - caller-owned selection persistence facade

pub mod addons;
pub mod bands;
pub mod billing;
pub mod quoter;
pub mod store;
pub mod strategy;

pub use quoter::QuoteService;
pub use store::{JsonFileStore, MemoryStore, SelectionStore, StoredSelection};
