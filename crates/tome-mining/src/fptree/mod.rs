//! Arena-backed frequent-pattern tree.

pub mod header;
pub mod node;
pub mod tree;

pub use header::{HeaderEntry, HeaderTable};
pub use node::{FpNode, NodeId};
pub use tree::FpTree;
