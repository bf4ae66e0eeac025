pub mod mock;
pub mod node;

pub use node::{MarkupNode, descendants, find_by_id};

// Re-export test utilities for integration testing in downstream crates
pub use mock::{MockNode, MockTree};
