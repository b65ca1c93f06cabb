//! Identity predicate (`SAME`) for graph pattern queries.
//!
//! Arguments are classified by capability before their identifiers are
//! compared; the result is three-valued. [`ElementStore`] evaluates the
//! predicate over SQLite rows, and the `graphsame` binary over a JSON array.

pub mod cache;
pub mod classify;
pub mod cli;
pub mod config;
pub mod element;
pub mod errors;
pub mod identifier;
pub mod identity;
pub mod same;
pub mod schema;
pub mod store;

pub use crate::classify::{Classify, Element, Kind, classify, classify_json};
pub use crate::config::FieldConfig;
pub use crate::element::{Edge, EdgeLike, Value, Vertex, VertexLike};
pub use crate::errors::SameError;
pub use crate::identifier::{IdRef, Identifier};
pub use crate::identity::{cross_kind_equal, equal_edges, equal_vertices, identity_equal};
pub use crate::same::{
    TriState, Verdict, evaluate, evaluate_all, evaluate_json, same, same_all, same_edges,
    same_json, same_json_with, same_vertices,
};
pub use crate::store::{ElementRef, ElementStore};
