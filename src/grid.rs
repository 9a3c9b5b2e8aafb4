//! Grid column and row preparation
//!
//! Columns default to the static field schema of the record kind; key-set
//! inference from the first row remains available for callers that opt in
//! (rows are unspecified-schema JSON and may carry extra fields).

use crate::schema::EntityKind;
use serde::Serialize;
use serde_json::Value;

/// One grid column; every column is sortable and filterable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub field: String,
    pub sortable: bool,
    pub filter: bool,
}

impl ColumnDef {
    fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
            sortable: true,
            filter: true,
        }
    }
}

/// Columns and rows for one grid
#[derive(Debug, Clone, Serialize)]
pub struct GridData {
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<Value>,
}

/// Columns taken from the kind's field schema
pub fn schema_columns(kind: EntityKind) -> Vec<ColumnDef> {
    kind.fields().iter().map(|f| ColumnDef::new(f.name)).collect()
}

/// Columns inferred from the key set of the first row
///
/// An empty row array, or a first row that is not a JSON object, yields
/// no columns.
pub fn infer_columns(rows: &[Value]) -> Vec<ColumnDef> {
    rows.first()
        .and_then(Value::as_object)
        .map(|row| row.keys().map(|key| ColumnDef::new(key)).collect())
        .unwrap_or_default()
}

/// Assemble grid data for a kind's rows
pub fn grid_data(kind: EntityKind, rows: Vec<Value>, dynamic_columns: bool) -> GridData {
    let columns = if dynamic_columns {
        infer_columns(&rows)
    } else {
        schema_columns(kind)
    };

    GridData { columns, rows }
}
