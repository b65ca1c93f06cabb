use serde::{Deserialize, Serialize};

use crate::identifier::{IdRef, Identifier};

/// Anything that exposes a vertex identifier.
pub trait VertexLike {
    fn identifier(&self) -> IdRef<'_>;
}

/// Anything that exposes an edge's endpoint identifiers.
pub trait EdgeLike {
    fn source_identifier(&self) -> IdRef<'_>;
    fn target_identifier(&self) -> IdRef<'_>;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vertex {
    pub id: Identifier,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub properties: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    pub source_id: Identifier,
    pub target_id: Identifier,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub properties: serde_json::Value,
}

/// An argument slot value: a typed graph element or a raw JSON payload.
///
/// `Json` payloads are classified by capability with the default field names,
/// exactly like a bare `serde_json::Value`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Vertex(Vertex),
    Edge(Edge),
    Json(serde_json::Value),
}

impl Vertex {
    pub fn new(id: impl Into<Identifier>) -> Self {
        Self {
            id: id.into(),
            label: None,
            properties: serde_json::Value::Null,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_properties(mut self, properties: serde_json::Value) -> Self {
        self.properties = properties;
        self
    }
}

impl Edge {
    pub fn new(source_id: impl Into<Identifier>, target_id: impl Into<Identifier>) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            label: None,
            properties: serde_json::Value::Null,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_properties(mut self, properties: serde_json::Value) -> Self {
        self.properties = properties;
        self
    }
}

impl VertexLike for Vertex {
    fn identifier(&self) -> IdRef<'_> {
        self.id.as_id_ref()
    }
}

impl EdgeLike for Edge {
    fn source_identifier(&self) -> IdRef<'_> {
        self.source_id.as_id_ref()
    }

    fn target_identifier(&self) -> IdRef<'_> {
        self.target_id.as_id_ref()
    }
}

impl<T: VertexLike + ?Sized> VertexLike for &T {
    fn identifier(&self) -> IdRef<'_> {
        (**self).identifier()
    }
}

impl<T: EdgeLike + ?Sized> EdgeLike for &T {
    fn source_identifier(&self) -> IdRef<'_> {
        (**self).source_identifier()
    }

    fn target_identifier(&self) -> IdRef<'_> {
        (**self).target_identifier()
    }
}

impl From<Vertex> for Value {
    fn from(vertex: Vertex) -> Self {
        Value::Vertex(vertex)
    }
}

impl From<Edge> for Value {
    fn from(edge: Edge) -> Self {
        Value::Edge(edge)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::Json(value)
    }
}
