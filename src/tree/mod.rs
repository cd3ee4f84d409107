//! Directory tree walking logic
//!
//! This module builds the fully materialized tree a render pass consumes:
//!
//! - `TreeWalker`: bounded-depth recursive walk producing a `TreeResult`
//! - `Node` / `TreeResult`: the immutable tree plus aggregate statistics

mod node;
mod utils;
mod walker;

// Re-export public types
pub use node::{Node, NodeKind, TreeResult};
pub use utils::{format_size, glob_match};
pub use walker::TreeWalker;
