//! Builds parameterized SELECT, INSERT, UPDATE, DELETE statements for the pets table.
//!
//! Column identifiers come from the static contract; caller-supplied values
//! are always bound as `?` parameters. Selection fragments (`breed = ?`) are
//! the caller's own SQL, as in the original provider contract.

use crate::contract;
use crate::values::PetValues;
use serde_json::{json, Value};

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) {
        self.params.push(v);
    }
}

/// Quote identifier for SQLite (safe: only from the contract).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Column list for a SELECT: requested columns filtered to the contract's
/// closed set, all columns when nothing (valid) was requested.
fn projection_list(projection: Option<&[&str]>) -> String {
    let cols: Vec<String> = projection
        .unwrap_or(&[])
        .iter()
        .copied()
        .filter(|c| contract::COLUMNS.contains(c))
        .map(quoted)
        .collect();
    if cols.is_empty() {
        contract::COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
    } else {
        cols.join(", ")
    }
}

fn where_clause(q: &mut QueryBuf, selection: Option<&str>, selection_args: &[Value]) -> String {
    match selection {
        Some(sel) if !sel.trim().is_empty() => {
            for arg in selection_args {
                q.push_param(arg.clone());
            }
            format!(" WHERE {}", sel)
        }
        _ => String::new(),
    }
}

/// SELECT with optional selection fragment, args, and ORDER BY fragment.
pub fn select(
    projection: Option<&[&str]>,
    selection: Option<&str>,
    selection_args: &[Value],
    sort_order: Option<&str>,
) -> QueryBuf {
    let mut q = QueryBuf::new();
    let cols = projection_list(projection);
    let where_part = where_clause(&mut q, selection, selection_args);
    let order_part = match sort_order {
        Some(o) if !o.trim().is_empty() => format!(" ORDER BY {}", o),
        _ => String::new(),
    };
    q.sql = format!(
        "SELECT {} FROM {}{}{}",
        cols,
        quoted(contract::TABLE_PETS),
        where_part,
        order_part
    );
    q
}

/// Selection fragment addressing a single row by id, with its bound argument.
pub fn id_selection(id: i64) -> (String, Vec<Value>) {
    (format!("{} = ?", quoted(contract::COLUMN_ID)), vec![json!(id)])
}

/// INSERT with only the present fields; absent `weight` falls back to the
/// column default, absent `breed` stays NULL.
pub fn insert_pet(values: &PetValues) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (col, val) in present_fields(values) {
        q.push_param(val);
        cols.push(quoted(col));
        placeholders.push("?");
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(contract::TABLE_PETS),
        cols.join(", "),
        placeholders.join(", ")
    );
    q
}

/// UPDATE setting only the present fields, constrained by the selection.
/// The caller guarantees at least one field is present; the provider
/// short-circuits empty value sets before building a statement.
pub fn update_pets(values: &PetValues, selection: Option<&str>, selection_args: &[Value]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (col, val) in present_fields(values) {
        q.push_param(val);
        sets.push(format!("{} = ?", quoted(col)));
    }
    let where_part = where_clause(&mut q, selection, selection_args);
    q.sql = format!(
        "UPDATE {} SET {}{}",
        quoted(contract::TABLE_PETS),
        sets.join(", "),
        where_part
    );
    q
}

/// DELETE constrained by the selection; unfiltered when selection is None.
pub fn delete_pets(selection: Option<&str>, selection_args: &[Value]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_part = where_clause(&mut q, selection, selection_args);
    q.sql = format!("DELETE FROM {}{}", quoted(contract::TABLE_PETS), where_part);
    q
}

/// The (column, value) pairs actually present in the value set, in contract order.
fn present_fields(values: &PetValues) -> Vec<(&'static str, Value)> {
    let mut out = Vec::new();
    if let Some(name) = &values.name {
        out.push((contract::COLUMN_NAME, json!(name)));
    }
    if let Some(breed) = &values.breed {
        out.push((contract::COLUMN_BREED, json!(breed)));
    }
    if let Some(gender) = values.gender {
        out.push((contract::COLUMN_GENDER, json!(gender)));
    }
    if let Some(weight) = values.weight {
        out.push((contract::COLUMN_WEIGHT, json!(weight)));
    }
    out
}
