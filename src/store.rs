use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use crate::{
    cache::RowCache,
    element::{Edge, Value, Vertex},
    errors::SameError,
    identifier::Identifier,
    same::{TriState, same_all},
    schema::ensure_schema,
};

/// Reference to a stored element: vertices by identifier, edges by row id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementRef {
    Vertex(Identifier),
    Edge(i64),
}

pub struct ElementStore {
    conn: Connection,
    vertex_cache: RowCache<Identifier, Vertex>,
    edge_cache: RowCache<i64, Edge>,
}

impl ElementStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SameError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| SameError::connection(e.to_string()))?;
        ensure_schema(&conn)?;
        tracing::debug!(path = %path.display(), "opened element store");
        Ok(Self::from_connection(conn))
    }

    pub fn open_in_memory() -> Result<Self, SameError> {
        let conn =
            Connection::open_in_memory().map_err(|e| SameError::connection(e.to_string()))?;
        ensure_schema(&conn)?;
        tracing::debug!("opened in-memory element store");
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            vertex_cache: RowCache::new(),
            edge_cache: RowCache::new(),
        }
    }

    pub fn insert_vertex(&self, vertex: &Vertex) -> Result<(), SameError> {
        if self.vertex_exists(&vertex.id)? {
            return Err(SameError::invalid_input(format!(
                "vertex {} already exists",
                vertex.id
            )));
        }
        let data = serde_json::to_string(&vertex.properties)
            .map_err(|e| SameError::invalid_input(e.to_string()))?;
        self.conn
            .execute(
                "INSERT INTO graph_vertices(id, label, data) VALUES(?1, ?2, ?3)",
                params![&vertex.id, vertex.label.as_deref(), data],
            )
            .map_err(|e| SameError::query(e.to_string()))?;
        tracing::debug!(id = %vertex.id, "inserted vertex");
        Ok(())
    }

    pub fn get_vertex(&self, id: &Identifier) -> Result<Vertex, SameError> {
        self.find_vertex(id)?
            .ok_or_else(|| SameError::not_found(format!("vertex {id}")))
    }

    pub fn find_vertex(&self, id: &Identifier) -> Result<Option<Vertex>, SameError> {
        if let Some(cached) = self.vertex_cache.get(id) {
            return Ok(Some(cached));
        }
        let vertex = self
            .conn
            .query_row(
                "SELECT id, label, data FROM graph_vertices WHERE id=?1",
                params![id],
                row_to_vertex,
            )
            .optional()
            .map_err(|e| SameError::query(e.to_string()))?;
        if let Some(vertex) = &vertex {
            self.vertex_cache.insert(id.clone(), vertex.clone());
        }
        Ok(vertex)
    }

    /// Removes the vertex and every edge touching it in one transaction.
    pub fn delete_vertex(&self, id: &Identifier) -> Result<(), SameError> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| SameError::query(e.to_string()))?;
        let affected = tx
            .execute("DELETE FROM graph_vertices WHERE id=?1", params![id])
            .map_err(|e| SameError::query(e.to_string()))?;
        if affected == 0 {
            return Err(SameError::not_found(format!("vertex {id}")));
        }
        tx.execute(
            "DELETE FROM graph_edges WHERE from_id=?1 OR to_id=?1",
            params![id],
        )
        .map_err(|e| SameError::query(e.to_string()))?;
        tx.commit().map_err(|e| SameError::query(e.to_string()))?;
        self.vertex_cache.remove(id);
        self.edge_cache.clear();
        Ok(())
    }

    /// Inserts an edge and returns its row id. Both endpoints must be stored.
    pub fn insert_edge(&self, edge: &Edge) -> Result<i64, SameError> {
        if !self.vertex_exists(&edge.source_id)? || !self.vertex_exists(&edge.target_id)? {
            return Err(SameError::invalid_input(
                "edge endpoints must reference existing vertices",
            ));
        }
        let data = serde_json::to_string(&edge.properties)
            .map_err(|e| SameError::invalid_input(e.to_string()))?;
        self.conn
            .execute(
                "INSERT INTO graph_edges(from_id, to_id, label, data) VALUES(?1, ?2, ?3, ?4)",
                params![&edge.source_id, &edge.target_id, edge.label.as_deref(), data],
            )
            .map_err(|e| SameError::query(e.to_string()))?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, source = %edge.source_id, target = %edge.target_id, "inserted edge");
        Ok(id)
    }

    pub fn get_edge(&self, id: i64) -> Result<Edge, SameError> {
        if let Some(cached) = self.edge_cache.get(&id) {
            return Ok(cached);
        }
        let edge = self
            .conn
            .query_row(
                "SELECT from_id, to_id, label, data FROM graph_edges WHERE id=?1",
                params![id],
                row_to_edge,
            )
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => SameError::not_found(format!("edge {id}")),
                other => SameError::query(other.to_string()),
            })?;
        self.edge_cache.insert(id, edge.clone());
        Ok(edge)
    }

    pub fn delete_edge(&self, id: i64) -> Result<(), SameError> {
        let affected = self
            .conn
            .execute("DELETE FROM graph_edges WHERE id=?1", params![id])
            .map_err(|e| SameError::query(e.to_string()))?;
        if affected == 0 {
            return Err(SameError::not_found(format!("edge {id}")));
        }
        self.edge_cache.remove(&id);
        Ok(())
    }

    pub fn load(&self, element: &ElementRef) -> Result<Value, SameError> {
        match element {
            ElementRef::Vertex(id) => self.get_vertex(id).map(Value::Vertex),
            ElementRef::Edge(id) => self.get_edge(*id).map(Value::Edge),
        }
    }

    /// Evaluates `SAME` over stored elements. `None` slots are absent operands;
    /// references to rows that do not exist are errors.
    pub fn same_refs(&self, refs: &[Option<ElementRef>]) -> Result<TriState, SameError> {
        let values = refs
            .iter()
            .map(|slot| slot.as_ref().map(|r| self.load(r)).transpose())
            .collect::<Result<Vec<Option<Value>>, SameError>>()?;
        Ok(same_all(values.as_slice()))
    }

    fn vertex_exists(&self, id: &Identifier) -> Result<bool, SameError> {
        self.conn
            .query_row(
                "SELECT 1 FROM graph_vertices WHERE id=?1",
                params![id],
                |_| Ok(()),
            )
            .optional()
            .map(|row| row.is_some())
            .map_err(|e| SameError::query(e.to_string()))
    }
}

fn decode_data(data: String) -> Result<serde_json::Value, rusqlite::Error> {
    serde_json::from_str(&data).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            data.len(),
            rusqlite::types::Type::Text,
            Box::new(e),
        )
    })
}

pub fn row_to_vertex(row: &rusqlite::Row<'_>) -> Result<Vertex, rusqlite::Error> {
    Ok(Vertex {
        id: row.get(0)?,
        label: row.get(1)?,
        properties: decode_data(row.get(2)?)?,
    })
}

pub fn row_to_edge(row: &rusqlite::Row<'_>) -> Result<Edge, rusqlite::Error> {
    Ok(Edge {
        source_id: row.get(0)?,
        target_id: row.get(1)?,
        label: row.get(2)?,
        properties: decode_data(row.get(3)?)?,
    })
}
