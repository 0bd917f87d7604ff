use organizer_core::db::migrations::{current_user_version, latest_version};
use organizer_core::db::{open_db, open_db_in_memory, DbError};
use organizer_core::{KvError, KvStore, SqliteKvStore};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(current_user_version(&conn).unwrap(), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn open_db_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("organizer.sqlite3");

    let conn = open_db(&path).unwrap();
    assert!(path.exists());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn opening_same_database_twice_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("organizer.sqlite3");

    {
        let mut store = SqliteKvStore::open(&path).unwrap();
        store.set_item("theme", "dark").unwrap();
    }

    let store = SqliteKvStore::open(&path).unwrap();
    assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(
        current_user_version(store.connection()).unwrap(),
        latest_version()
    );
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn kv_store_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteKvStore::try_new(conn).err().unwrap();
    assert!(matches!(err, KvError::MissingTable("kv_entries")));
}

#[test]
fn sqlite_kv_store_supports_full_contract() {
    let mut store = SqliteKvStore::open_in_memory().unwrap();
    store.set_item("b", "2").unwrap();
    store.set_item("a", "1").unwrap();
    store.set_item("a", "one").unwrap();

    assert_eq!(store.get_item("a").unwrap().as_deref(), Some("one"));
    assert_eq!(store.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);

    assert!(store.get_item("missing").unwrap().is_none());

    store.clear().unwrap();
    assert!(store.keys().unwrap().is_empty());
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
