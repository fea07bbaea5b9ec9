//! CRUD routing and execution against the pets table.

use crate::error::ProviderError;
use crate::service::PetValidator;
use crate::sql::{self, QueryBuf, SqliteBindValue};
use crate::store::PetStore;
use crate::uri::{self, Route};
use crate::values::PetValues;
use serde_json::Value;
use sqlx::sqlite::{SqliteQueryResult, SqliteRow};

/// The public contract: four operations keyed by content URI. Stateless
/// between calls apart from the owned store handle.
pub struct PetProvider {
    store: PetStore,
}

impl PetProvider {
    pub fn new(store: PetStore) -> Self {
        PetProvider { store }
    }

    pub fn store(&self) -> &PetStore {
        &self.store
    }

    /// Query rows for the given URI. A collection URI reads all rows through
    /// the optional selection and sort order; an item URI always reads by the
    /// id in the URI, overriding any caller selection. Rows come back as JSON
    /// objects keyed by the projected column names.
    pub async fn query(
        &self,
        uri: &str,
        projection: Option<&[&str]>,
        selection: Option<&str>,
        selection_args: &[Value],
        sort_order: Option<&str>,
    ) -> Result<Vec<Value>, ProviderError> {
        let q = match Route::classify(uri) {
            Route::Collection => sql::select(projection, selection, selection_args, sort_order),
            Route::Item(id) => {
                let (sel, args) = sql::id_selection(id);
                sql::select(projection, Some(&sel), &args, sort_order)
            }
            Route::Unknown => return Err(ProviderError::InvalidRoute(uri.to_string())),
        };
        self.query_many(&q).await
    }

    /// Insert one pet at a collection URI. Returns the item URI carrying the
    /// id storage assigned. Item URIs do not accept insertion.
    pub async fn insert(&self, uri: &str, values: &PetValues) -> Result<String, ProviderError> {
        if Route::classify(uri) != Route::Collection {
            return Err(ProviderError::InvalidRoute(uri.to_string()));
        }
        PetValidator::validate_insert(values)?;
        let q = sql::insert_pet(values);
        tracing::debug!(sql = %q.sql, params = ?q.params, "insert");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(SqliteBindValue::from_json(p));
        }
        match query.execute(self.store.write()).await {
            Ok(done) => {
                let id = done.last_insert_rowid();
                if id <= 0 {
                    tracing::error!(uri, "storage assigned no row id");
                    return Err(ProviderError::InsertFailed(uri.to_string()));
                }
                tracing::debug!(id, "new row id");
                Ok(uri::with_appended_id(uri, id))
            }
            Err(e) => {
                tracing::error!(uri, error = %e, "failed to insert pet");
                Err(ProviderError::InsertFailed(uri.to_string()))
            }
        }
    }

    /// Update rows for the given URI with the present fields of `values`.
    /// An item URI always updates by the id in the URI, overriding any caller
    /// selection. An empty value set affects zero rows without touching
    /// storage. Returns the number of rows affected; 0 is not an error.
    pub async fn update(
        &self,
        uri: &str,
        values: &PetValues,
        selection: Option<&str>,
        selection_args: &[Value],
    ) -> Result<u64, ProviderError> {
        let (selection, args) = match Route::classify(uri) {
            Route::Collection => (
                selection.map(str::to_string),
                selection_args.to_vec(),
            ),
            Route::Item(id) => {
                let (sel, args) = sql::id_selection(id);
                (Some(sel), args)
            }
            Route::Unknown => return Err(ProviderError::InvalidRoute(uri.to_string())),
        };
        if values.is_empty() {
            return Ok(0);
        }
        PetValidator::validate_present(values)?;
        let q = sql::update_pets(values, selection.as_deref(), &args);
        let done = self.execute(&q).await?;
        Ok(done.rows_affected())
    }

    /// Delete rows for the given URI, with the same routing rules as update.
    /// No field invariants apply. Returns the number of rows affected.
    pub async fn delete(
        &self,
        uri: &str,
        selection: Option<&str>,
        selection_args: &[Value],
    ) -> Result<u64, ProviderError> {
        let (selection, args) = match Route::classify(uri) {
            Route::Collection => (
                selection.map(str::to_string),
                selection_args.to_vec(),
            ),
            Route::Item(id) => {
                let (sel, args) = sql::id_selection(id);
                (Some(sel), args)
            }
            Route::Unknown => return Err(ProviderError::InvalidRoute(uri.to_string())),
        };
        let q = sql::delete_pets(selection.as_deref(), &args);
        let done = self.execute(&q).await?;
        Ok(done.rows_affected())
    }

    async fn query_many(&self, q: &QueryBuf) -> Result<Vec<Value>, ProviderError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(SqliteBindValue::from_json(p));
        }
        let rows = query.fetch_all(self.store.read()).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }

    async fn execute(&self, q: &QueryBuf) -> Result<SqliteQueryResult, ProviderError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(SqliteBindValue::from_json(p));
        }
        Ok(query.execute(self.store.write()).await?)
    }
}

fn row_to_json(row: &SqliteRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

/// Decode one cell by its stored SQLite type. SQLite coerces across types
/// silently, so the value's own type tag drives the decode instead of
/// trial-and-error per Rust type.
fn cell_to_value(row: &SqliteRow, name: &str) -> Value {
    use sqlx::Row;
    use sqlx::TypeInfo;
    use sqlx::ValueRef;
    let Ok(raw) = row.try_get_raw(name) else {
        return Value::Null;
    };
    if raw.is_null() {
        return Value::Null;
    }
    let type_name = raw.type_info().name().to_string();
    match type_name.as_str() {
        "INTEGER" => row
            .try_get::<i64, _>(name)
            .map(|n| Value::Number(n.into()))
            .unwrap_or(Value::Null),
        "REAL" => row
            .try_get::<f64, _>(name)
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        "TEXT" => row
            .try_get::<String, _>(name)
            .map(Value::String)
            .unwrap_or(Value::Null),
        _ => Value::Null,
    }
}
