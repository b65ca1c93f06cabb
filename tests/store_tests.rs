use graphsame::{Edge, ElementRef, ElementStore, Identifier, SameError, TriState, Vertex};
use serde_json::json;

fn build_store() -> (ElementStore, i64, i64, i64) {
    let store = ElementStore::open_in_memory().expect("store");
    for id in [1, 2, 3] {
        store
            .insert_vertex(
                &Vertex::new(id)
                    .with_label("Person")
                    .with_properties(json!({"rank": id})),
            )
            .expect("insert vertex");
    }
    store
        .insert_vertex(&Vertex::new("1").with_label("Account"))
        .expect("insert text vertex");
    let knows = store
        .insert_edge(&Edge::new(1, 2).with_label("knows"))
        .expect("knows");
    let likes = store
        .insert_edge(&Edge::new(1, 2).with_label("likes"))
        .expect("likes");
    let other = store
        .insert_edge(&Edge::new(1, 3).with_label("knows"))
        .expect("other");
    (store, knows, likes, other)
}

fn vertex(id: impl Into<Identifier>) -> Option<ElementRef> {
    Some(ElementRef::Vertex(id.into()))
}

#[test]
fn test_same_refs_over_stored_vertices() {
    let (store, ..) = build_store();
    assert_eq!(
        store.same_refs(&[vertex(1), vertex(1)]).expect("same"),
        TriState::True
    );
    assert_eq!(
        store.same_refs(&[vertex(1), vertex(2)]).expect("same"),
        TriState::False
    );
    assert_eq!(
        store.same_refs(&[vertex(1), vertex("1")]).expect("same"),
        TriState::False
    );
}

#[test]
fn test_same_refs_over_stored_edges() {
    let (store, knows, likes, other) = build_store();
    let edge = |id| Some(ElementRef::Edge(id));
    assert_eq!(
        store.same_refs(&[edge(knows), edge(likes)]).expect("same"),
        TriState::True
    );
    assert_eq!(
        store.same_refs(&[edge(knows), edge(other)]).expect("same"),
        TriState::False
    );
    assert_eq!(
        store.same_refs(&[edge(knows), vertex(1)]).expect("same"),
        TriState::False
    );
}

#[test]
fn test_same_refs_absent_slot_is_unknown() {
    let (store, ..) = build_store();
    assert_eq!(
        store.same_refs(&[vertex(1), None, vertex(1)]).expect("same"),
        TriState::Unknown
    );
    assert_eq!(store.same_refs(&[vertex(1)]).expect("same"), TriState::Unknown);
    assert_eq!(store.same_refs(&[]).expect("same"), TriState::Unknown);
}

#[test]
fn test_same_refs_missing_row_is_error() {
    let (store, ..) = build_store();
    let err = store.same_refs(&[vertex(1), vertex(99)]).unwrap_err();
    assert!(matches!(err, SameError::NotFound(_)));
    let err = store
        .same_refs(&[vertex(1), Some(ElementRef::Edge(999))])
        .unwrap_err();
    assert!(matches!(err, SameError::NotFound(_)));
}

#[test]
fn test_edge_requires_stored_endpoints() {
    let (store, ..) = build_store();
    let err = store.insert_edge(&Edge::new(1, 42)).unwrap_err();
    assert!(matches!(err, SameError::InvalidInput(_)));
    let err = store.insert_edge(&Edge::new(2, "2")).unwrap_err();
    assert!(matches!(err, SameError::InvalidInput(_)));
}

#[test]
fn test_delete_edge_then_load_fails() {
    let (store, knows, ..) = build_store();
    store.delete_edge(knows).expect("delete");
    assert!(matches!(
        store.load(&ElementRef::Edge(knows)),
        Err(SameError::NotFound(_))
    ));
    assert!(matches!(store.delete_edge(knows), Err(SameError::NotFound(_))));
}

#[test]
fn test_file_backed_store_keeps_identifier_types() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("elements.db");
    {
        let store = ElementStore::open(&path).expect("open");
        store.insert_vertex(&Vertex::new(7)).expect("int");
        store.insert_vertex(&Vertex::new("7")).expect("text");
    }
    let store = ElementStore::open(&path).expect("reopen");
    let int = store.get_vertex(&Identifier::from(7)).expect("int row");
    let text = store.get_vertex(&Identifier::from("7")).expect("text row");
    assert_eq!(int.id, Identifier::Int(7));
    assert_eq!(text.id, Identifier::Text("7".into()));
    assert_eq!(
        store.same_refs(&[vertex(7), vertex("7")]).expect("same"),
        TriState::False
    );
}
