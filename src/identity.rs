//! Identity comparison between classified elements. Only identifier fields
//! take part; labels and property payloads are ignored.

use crate::{
    classify::Element,
    element::{EdgeLike, VertexLike},
};

pub fn equal_vertices<A, B>(a: &A, b: &B) -> bool
where
    A: VertexLike + ?Sized,
    B: VertexLike + ?Sized,
{
    a.identifier() == b.identifier()
}

pub fn equal_edges<A, B>(a: &A, b: &B) -> bool
where
    A: EdgeLike + ?Sized,
    B: EdgeLike + ?Sized,
{
    a.source_identifier() == b.source_identifier()
        && a.target_identifier() == b.target_identifier()
}

/// Kind mismatch is decisive: a vertex, an edge and an unrelated value are
/// never the same, and an unrelated value is not even the same as itself.
pub fn cross_kind_equal(_: &Element<'_>, _: &Element<'_>) -> bool {
    false
}

pub fn identity_equal(a: &Element<'_>, b: &Element<'_>) -> bool {
    match (a, b) {
        (Element::Vertex(x), Element::Vertex(y)) => equal_vertices(x, y),
        (Element::Edge(x), Element::Edge(y)) => equal_edges(x, y),
        (Element::Vertex(_), _) | (Element::Edge(_), _) | (Element::Other, _) => {
            cross_kind_equal(a, b)
        }
    }
}
