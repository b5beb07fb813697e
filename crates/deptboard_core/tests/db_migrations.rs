use deptboard_core::db::migrations::{apply_migrations, latest_version};
use deptboard_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn migrations_create_all_board_tables() {
    let conn = open_db_in_memory().unwrap();

    for table in [
        "people",
        "journals",
        "projects",
        "project_members",
        "project_entities",
        "project_funding",
        "journal_papers",
        "paper_authors",
    ] {
        let exists: i64 = conn
            .query_row(
                "SELECT EXISTS(
                    SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
                );",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(exists, 1, "missing table {table}");
    }
}

#[test]
fn user_version_matches_latest_migration() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
    assert!(latest_version() >= 1);
}

#[test]
fn reopening_a_file_database_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.db");

    drop(open_db(&path).unwrap());
    let conn = open_db(&path).unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn newer_schema_versions_are_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA user_version = 99;").unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion {
            db_version: 99,
            ..
        }
    ));
}

#[test]
fn foreign_keys_are_enforced() {
    let conn = open_db_in_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO journal_papers (uuid, title, journal_uuid, issue, year)
         VALUES ('p1', 't', 'missing-journal', 1, 2022);",
        [],
    );
    assert!(result.is_err());
}
