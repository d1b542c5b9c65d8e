//! # tome-recommend
//!
//! The recommendation engine: owns catalog and profile state plus every
//! derived structure, applies purchases, and answers queries through a
//! fixed cascade of strategies.
//!
//! ## Cascade
//!
//! | # | Strategy | Runs when | Signal |
//! |---|----------|-----------|--------|
//! | 1 | User-based | always | Jaccard-similar profiles' unseen items |
//! | 2 | Association | quota open | pattern bases or co-purchase counts |
//! | 3 | Item-based | quota open | items whose buyers overlap owned items' buyers |
//! | 4 | Content-based | quota open, history non-empty | same author |
//! | 5 | Popularity | nothing emitted yet | global purchase count |
//!
//! Every phase shares one accumulator, so an item chosen earlier is never
//! offered again and the result never exceeds five entries.

pub mod catalog;
pub mod engine;
pub mod shared;
pub mod strategies;

pub use catalog::Catalog;
pub use engine::RecommendationEngine;
pub use shared::SharedEngine;
pub use strategies::{Accumulator, RecommendContext};
