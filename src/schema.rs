use rusqlite::Connection;

use crate::errors::SameError;

// Identifier columns are declared without a type so SQLite keeps the stored
// storage class: 1 and '1' stay distinct keys.
pub fn ensure_schema(conn: &Connection) -> Result<(), SameError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS graph_vertices (
            id        NOT NULL PRIMARY KEY,
            label     TEXT,
            data      TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS graph_edges (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            from_id   NOT NULL,
            to_id     NOT NULL,
            label     TEXT,
            data      TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_edges_from ON graph_edges(from_id);
        CREATE INDEX IF NOT EXISTS idx_edges_to ON graph_edges(to_id);
        "#,
    )
    .map_err(|e| SameError::schema(e.to_string()))?;
    Ok(())
}
