//! # tome-mining
//!
//! FP-Growth style mining over purchase transactions, restricted to
//! single-item conditioning: for every frequent item the miner extracts its
//! conditional pattern base (the weighted items found on tree paths leading
//! to that item). No multi-item rules are generated.
//!
//! The prefix tree is an index-addressed arena ([`FpTree`]); parent, child,
//! and same-item links are node indices, so rebuilding is just clearing the
//! arena. The tree is rebuilt in full after every purchase because the
//! prefix sharing depends on transaction order and global supports.

pub mod fptree;
pub mod miner;
pub mod patterns;

pub use fptree::{FpNode, FpTree, HeaderEntry, HeaderTable, NodeId};
pub use miner::FpGrowthMiner;
pub use patterns::FrequentPatterns;
