//! SQLite storage implementation

use std::path::Path;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OptionalExtension, Params, params};
use crate::record::{Amount, NewService, ServiceRecord, parse_amount};
use crate::Result;
use super::schema;

/// SQLite-backed store for service records.
///
/// Every call runs a single statement in autocommit mode; nothing spans
/// more than one statement and nothing is retried.
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Open a database file (creates it and any missing parent directories)
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::debug!("Opening record store at {}", path.display());
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Switch LIKE between SQLite's default (ASCII case-insensitive) and
    /// case-sensitive matching for the rest of this connection.
    pub fn set_case_sensitive_search(&self, enabled: bool) -> Result<()> {
        self.conn.pragma_update(None, "case_sensitive_like", enabled)?;
        Ok(())
    }

    // ========== Generic Execution ==========

    /// Run one parameterized statement and return its rows.
    ///
    /// Statements without a result set (INSERT, UPDATE, DELETE, DDL) return
    /// an empty vector. Result rows must list the `productos` columns in
    /// display order.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<Vec<ServiceRecord>> {
        tracing::debug!(sql, "execute");
        let mut stmt = self.conn.prepare(sql)?;

        if stmt.column_count() == 0 {
            stmt.execute(params)?;
            return Ok(Vec::new());
        }

        let records = stmt
            .query_map(params, |row| Self::row_to_record(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    /// Every record, in the engine's natural scan order
    pub fn fetch_all(&self) -> Result<Vec<ServiceRecord>> {
        self.execute(schema::SELECT_ALL, [])
    }

    // ========== Record Operations ==========

    /// Insert a new record and return its engine-assigned id
    pub fn insert(&self, service: &NewService) -> Result<i64> {
        self.conn.execute(
            schema::INSERT,
            params![
                service.name,
                service.pickup_address,
                service.delivery_address,
                service.phone,
                service.amount,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(id, name = %service.name, "Inserted service");
        Ok(id)
    }

    /// Overwrite every field of record `id`. Returns false if no such record.
    pub fn update(&self, id: i64, service: &NewService) -> Result<bool> {
        let changed = self.conn.execute(
            schema::UPDATE,
            params![
                service.name,
                service.pickup_address,
                service.delivery_address,
                service.phone,
                service.amount,
                id,
            ],
        )?;
        tracing::info!(id, changed, "Updated service");
        Ok(changed > 0)
    }

    /// Delete record `id`. Returns false if no such record.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let changed = self.conn.execute(schema::DELETE, [id])?;
        tracing::info!(id, changed, "Deleted service");
        Ok(changed > 0)
    }

    /// Get a record by id
    pub fn get(&self, id: i64) -> Result<Option<ServiceRecord>> {
        self.conn
            .query_row(schema::SELECT_BY_ID, [id], |row| Self::row_to_record(row))
            .optional()
            .map_err(Into::into)
    }

    /// Records whose name contains `term` (LIKE with wildcards on both sides)
    pub fn search_by_name(&self, term: &str) -> Result<Vec<ServiceRecord>> {
        let pattern = format!("%{}%", term);
        self.execute(schema::SEARCH_BY_NAME, [pattern])
    }

    /// Count all records
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(schema::COUNT, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to a ServiceRecord
    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<ServiceRecord> {
        let name: Option<String> = row.get(1)?;
        let pickup_address: Option<String> = row.get(2)?;
        let delivery_address: Option<String> = row.get(3)?;
        let phone: Option<String> = row.get(4)?;

        Ok(ServiceRecord {
            id: row.get(0)?,
            name: name.unwrap_or_default(),
            pickup_address: pickup_address.unwrap_or_default(),
            delivery_address: delivery_address.unwrap_or_default(),
            phone: phone.unwrap_or_default(),
            amount: Self::read_amount(row.get_ref(5)?),
        })
    }

    /// `Dinero` has INTEGER affinity, but older files may hold text, reals or
    /// NULL. Anything that is not a whole number is kept as its stored text.
    fn read_amount(value: ValueRef<'_>) -> Amount {
        match value {
            ValueRef::Integer(i) => Amount::Whole(i),
            ValueRef::Real(f) => Amount::Raw(f.to_string()),
            ValueRef::Null => Amount::Raw(String::new()),
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                let text = String::from_utf8_lossy(bytes);
                match parse_amount(&text) {
                    Ok(n) => Amount::Whole(n),
                    Err(_) => Amount::Raw(text.into_owned()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn sample(name: &str) -> NewService {
        NewService::new(name, "Calle 1", "Calle 2", "555", 100)
    }

    #[test]
    fn test_schema_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("productos.db");

        let store = RecordStore::open(&path).unwrap();
        store.insert(&sample("Ana")).unwrap();
        drop(store);

        let reopened = RecordStore::open(&path).unwrap();
        assert_eq!(reopened.count().unwrap(), 1);
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("productos.db");

        RecordStore::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_insert_and_fetch_all() {
        let store = RecordStore::open_in_memory().unwrap();
        let id = store.insert(&sample("Ana")).unwrap();

        let all = store.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].name, "Ana");
        assert_eq!(all[0].pickup_address, "Calle 1");
        assert_eq!(all[0].delivery_address, "Calle 2");
        assert_eq!(all[0].phone, "555");
        assert_eq!(all[0].amount, Amount::Whole(100));
    }

    #[test]
    fn test_update_keeps_id() {
        let store = RecordStore::open_in_memory().unwrap();
        let id = store.insert(&sample("Ana")).unwrap();

        let changed = store
            .update(id, &NewService::new("Ana Maria", "Av 9", "Av 10", "777", 250))
            .unwrap();
        assert!(changed);

        let record = store.get(id).unwrap().unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.name, "Ana Maria");
        assert_eq!(record.amount, Amount::Whole(250));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_update_and_delete_missing_id() {
        let store = RecordStore::open_in_memory().unwrap();
        assert!(!store.update(42, &sample("Nadie")).unwrap());
        assert!(!store.delete(42).unwrap());
    }

    #[test]
    fn test_delete() {
        let store = RecordStore::open_in_memory().unwrap();
        let keep = store.insert(&sample("Ana")).unwrap();
        let gone = store.insert(&sample("Bruno")).unwrap();

        assert!(store.delete(gone).unwrap());
        assert!(store.get(gone).unwrap().is_none());
        assert!(store.get(keep).unwrap().is_some());
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_search_by_name_substring() {
        let store = RecordStore::open_in_memory().unwrap();
        for name in ["Ana", "Ananas", "Bruno"] {
            store.insert(&sample(name)).unwrap();
        }

        let mut names: Vec<String> = store
            .search_by_name("an")
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Ana", "Ananas"]);
    }

    #[test]
    fn test_case_sensitive_search() {
        let store = RecordStore::open_in_memory().unwrap();
        for name in ["Ana", "Ananas", "Bruno"] {
            store.insert(&sample(name)).unwrap();
        }
        store.set_case_sensitive_search(true).unwrap();

        let found = store.search_by_name("an").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ananas");
    }

    #[test]
    fn test_search_term_is_bound_not_spliced() {
        let store = RecordStore::open_in_memory().unwrap();
        store.insert(&sample("Ana")).unwrap();

        let found = store.search_by_name("'; DROP TABLE productos; --").unwrap();
        assert!(found.is_empty());
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_execute_reports_engine_errors() {
        let store = RecordStore::open_in_memory().unwrap();
        let err = store.execute("SELECT * FROM no_such_table", []).unwrap_err();
        assert!(matches!(err, Error::Persistence(_)));
        assert!(err.to_string().contains("no_such_table"));
    }

    #[test]
    fn test_execute_without_result_set() {
        let store = RecordStore::open_in_memory().unwrap();
        let rows = store
            .execute(
                "INSERT INTO productos (Nombre, Direccion1, Direccion2, Celular, Dinero) VALUES (?1, ?2, ?3, ?4, ?5)",
                params!["Ana", "Calle 1", "Calle 2", "555", "100"],
            )
            .unwrap();
        assert!(rows.is_empty());

        // INTEGER affinity turns the numeric text into an integer
        let all = store.fetch_all().unwrap();
        assert_eq!(all[0].amount, Amount::Whole(100));
    }

    #[test]
    fn test_reads_legacy_amounts() {
        let store = RecordStore::open_in_memory().unwrap();
        store
            .execute(
                "INSERT INTO productos (id, Nombre, Direccion1, Direccion2, Celular, Dinero) VALUES (1, 'Ana', 'a', 'b', '1', 12.5)",
                [],
            )
            .unwrap();
        store
            .execute(
                "INSERT INTO productos (id, Nombre, Direccion1, Direccion2, Celular, Dinero) VALUES (2, NULL, 'a', 'b', '1', NULL)",
                [],
            )
            .unwrap();

        let all = store.fetch_all().unwrap();
        assert_eq!(all[0].amount, Amount::Raw("12.5".into()));
        assert_eq!(all[1].name, "");
        assert_eq!(all[1].amount, Amount::Raw(String::new()));
    }

    #[test]
    fn test_lists_every_row_of_a_text_bound_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("productos.db");

        // earlier releases bound every input as text
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute(schema::CREATE_PRODUCTOS_TABLE, []).unwrap();
            for (name, amount) in [("Ana", "100"), ("Bruno", "1.500.000"), ("Carla", "12.5"), ("Dario", "$100")] {
                conn.execute(
                    schema::INSERT,
                    params![name, "Calle 1", "Calle 2", "555", amount],
                )
                .unwrap();
            }
        }

        let store = RecordStore::open(&path).unwrap();
        let all = store.fetch_all().unwrap();
        let amounts: Vec<Amount> = all.iter().map(|r| r.amount.clone()).collect();
        assert_eq!(
            amounts,
            vec![
                Amount::Whole(100),
                Amount::Raw("1.500.000".into()),
                Amount::Raw("12.5".into()),
                Amount::Raw("$100".into()),
            ]
        );

        let found = store.search_by_name("bru").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].amount.to_string(), "1.500.000");
    }
}
