use crate::db::schema::force_set_schema_version;
use crate::db::*;
use crate::error::GradeError;
use tempfile::tempdir;

#[test]
fn test_create_schema_is_idempotent() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    assert_eq!(create_schema(&conn).unwrap(), SchemaCreateResult::Created);
    assert_eq!(create_schema(&conn).unwrap(), SchemaCreateResult::Current);
}

#[test]
fn test_newer_schema_is_refused() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gradebook.db");

    {
        let db = Database::open(&path, false).unwrap();
        force_set_schema_version(&db.conn, CURRENT_SCHEMA_VERSION + 1).unwrap();
    }

    let err = Database::open(&path, false).unwrap_err();
    assert!(matches!(err, GradeError::StoreUnavailable { ref reason } if reason.contains("newer")));
}

#[test]
fn test_derived_columns_are_persisted() {
    let db = Database::open_in_memory().unwrap();
    db.insert_student(crate::repository::contract::student("s1", "Kim", 85, 85, 86))
        .unwrap();

    let (total, average, grade): (i64, f64, String) = db
        .conn
        .query_row(
            "SELECT total, average, grade FROM students WHERE id = 's1'",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )
        .unwrap();
    assert_eq!(total, 256);
    assert_eq!(average, 256.0 / 3.0);
    assert_eq!(grade, "B+");
}
