//! # tome-index
//!
//! Derived purchase structures maintained alongside the profile store:
//!
//! | Structure | Maps | Maintenance |
//! |-----------|------|-------------|
//! | [`InvertedIndex`] | item → profiles that bought it | one pair per purchase |
//! | [`CooccurrenceModel`] | item → partner → co-purchase count | delta or full recount |
//!
//! [`similarity`] holds the Jaccard ratio used for profile-profile and
//! item-item comparison.

pub mod cooccurrence;
pub mod inverted;
pub mod similarity;

pub use cooccurrence::CooccurrenceModel;
pub use inverted::InvertedIndex;
pub use similarity::jaccard;
