//! Database schema definitions

/// SQL to create the productos table
pub const CREATE_PRODUCTOS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS productos (
    id INTEGER PRIMARY KEY,
    Nombre TEXT,
    Direccion1 TEXT,
    Direccion2 TEXT,
    Celular TEXT,
    Dinero INTEGER
)
"#;

/// Every SELECT lists columns in display order; `row_to_record` relies on it
pub const SELECT_ALL: &str = "SELECT id, Nombre, Direccion1, Direccion2, Celular, Dinero FROM productos";

pub const SELECT_BY_ID: &str =
    "SELECT id, Nombre, Direccion1, Direccion2, Celular, Dinero FROM productos WHERE id = ?1";

pub const SEARCH_BY_NAME: &str =
    "SELECT id, Nombre, Direccion1, Direccion2, Celular, Dinero FROM productos WHERE Nombre LIKE ?1";

pub const INSERT: &str =
    "INSERT INTO productos (Nombre, Direccion1, Direccion2, Celular, Dinero) VALUES (?1, ?2, ?3, ?4, ?5)";

pub const UPDATE: &str = "UPDATE productos SET Nombre = ?1, Direccion1 = ?2, Direccion2 = ?3, Celular = ?4, Dinero = ?5 WHERE id = ?6";

pub const DELETE: &str = "DELETE FROM productos WHERE id = ?1";

pub const COUNT: &str = "SELECT COUNT(*) FROM productos";

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_PRODUCTOS_TABLE]
}
