//! `path_core` — minimum-hop path from the first named node to the last.
//!
//! No IO. Names are resolved to dense indices once in [`Graph::build`]; the
//! search itself only ever touches indices.

mod engine;
mod error;
mod graph;
mod tokens;
mod types;

pub use engine::{compute, shortest_path};
pub use error::{PathError, TokenError};
pub use graph::Graph;
pub use tokens::{EdgeToken, Problem};
pub use types::*;
