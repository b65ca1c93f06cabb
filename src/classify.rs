//! Classification of arbitrary argument values into vertex, edge, or other.
//!
//! Classification is capability-based: a value is a vertex when it exposes a
//! vertex identifier, an edge when it exposes a source and target identifier
//! pair, and other in every remaining case. The resulting [`Element`] borrows
//! the identity fields from the input and never mutates it.

use crate::{
    config::{DEFAULT_ID_FIELD, DEFAULT_SOURCE_FIELD, DEFAULT_TARGET_FIELD, FieldConfig},
    element::{Edge, EdgeLike, Value, Vertex, VertexLike},
    identifier::{IdRef, Identifier},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Vertex,
    Edge,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexRef<'a> {
    pub id: IdRef<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRef<'a> {
    pub source: IdRef<'a>,
    pub target: IdRef<'a>,
}

/// A classified argument carrying only the fields identity depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'a> {
    Vertex(VertexRef<'a>),
    Edge(EdgeRef<'a>),
    Other,
}

impl Element<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Element::Vertex(_) => Kind::Vertex,
            Element::Edge(_) => Kind::Edge,
            Element::Other => Kind::Other,
        }
    }
}

impl<'a> Element<'a> {
    pub fn vertex<V: VertexLike + ?Sized>(vertex: &'a V) -> Self {
        Element::Vertex(VertexRef {
            id: vertex.identifier(),
        })
    }

    pub fn edge<E: EdgeLike + ?Sized>(edge: &'a E) -> Self {
        Element::Edge(EdgeRef {
            source: edge.source_identifier(),
            target: edge.target_identifier(),
        })
    }
}

impl VertexLike for VertexRef<'_> {
    fn identifier(&self) -> IdRef<'_> {
        self.id
    }
}

impl EdgeLike for EdgeRef<'_> {
    fn source_identifier(&self) -> IdRef<'_> {
        self.source
    }

    fn target_identifier(&self) -> IdRef<'_> {
        self.target
    }
}

pub trait Classify {
    fn classify(&self) -> Element<'_>;
}

pub fn classify<T: Classify + ?Sized>(value: &T) -> Element<'_> {
    value.classify()
}

/// Classifies a JSON argument using the configured capability field names.
pub fn classify_json<'a>(value: &'a serde_json::Value, fields: &FieldConfig) -> Element<'a> {
    classify_json_fields(
        value,
        &fields.id_field,
        &fields.source_field,
        &fields.target_field,
    )
}

fn classify_json_fields<'a>(
    value: &'a serde_json::Value,
    id_field: &str,
    source_field: &str,
    target_field: &str,
) -> Element<'a> {
    let Some(object) = value.as_object() else {
        return Element::Other;
    };
    // Edge rows usually carry their own row id too, so the endpoint pair wins.
    let source = object.get(source_field).and_then(Identifier::from_json);
    let target = object.get(target_field).and_then(Identifier::from_json);
    if let (Some(source), Some(target)) = (source, target) {
        return Element::Edge(EdgeRef { source, target });
    }
    match object.get(id_field).and_then(Identifier::from_json) {
        Some(id) => Element::Vertex(VertexRef { id }),
        None => Element::Other,
    }
}

impl Classify for Vertex {
    fn classify(&self) -> Element<'_> {
        Element::vertex(self)
    }
}

impl Classify for Edge {
    fn classify(&self) -> Element<'_> {
        Element::edge(self)
    }
}

impl Classify for Value {
    fn classify(&self) -> Element<'_> {
        match self {
            Value::Vertex(vertex) => vertex.classify(),
            Value::Edge(edge) => edge.classify(),
            Value::Json(value) => value.classify(),
        }
    }
}

impl Classify for serde_json::Value {
    fn classify(&self) -> Element<'_> {
        classify_json_fields(
            self,
            DEFAULT_ID_FIELD,
            DEFAULT_SOURCE_FIELD,
            DEFAULT_TARGET_FIELD,
        )
    }
}

impl<T: Classify + ?Sized> Classify for &T {
    fn classify(&self) -> Element<'_> {
        (**self).classify()
    }
}

impl<T: Classify + ?Sized> Classify for Box<T> {
    fn classify(&self) -> Element<'_> {
        (**self).classify()
    }
}
