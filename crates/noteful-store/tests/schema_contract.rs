use noteful_store::{latest_version, Database, StoreError, FOLDERS_TABLE, NOTES_TABLE};

#[tokio::test]
async fn file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("noteful.sqlite");

    let db = Database::open(&path).expect("open file db");
    db.call(|conn| conn.execute("INSERT INTO noteful_folders (name) VALUES ('Important')", []))
        .await
        .expect("insert");
    drop(db);

    let reopened = Database::open_url(&format!("sqlite://{}", path.display())).expect("reopen");
    let (name, version): (String, u32) = reopened
        .call(|conn| {
            let name = conn.query_row("SELECT name FROM noteful_folders", [], |row| row.get(0))?;
            let version = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
            Ok((name, version))
        })
        .await
        .expect("read back");
    assert_eq!(name, "Important");
    assert_eq!(version, latest_version());
}

#[tokio::test]
async fn notes_require_an_existing_folder() {
    let db = Database::open_in_memory().expect("open");
    let err = db
        .call(|conn| {
            conn.execute(
                "INSERT INTO noteful_notes (name, folder_id) VALUES ('orphan', 42)",
                [],
            )
        })
        .await
        .expect_err("foreign key violation");
    assert!(matches!(err, StoreError::Sqlite(_)));
}

#[tokio::test]
async fn deleting_a_folder_cascades_to_its_notes() {
    let db = Database::open_in_memory().expect("open");
    let remaining: i64 = db
        .call(|conn| {
            conn.execute_batch(
                "INSERT INTO noteful_folders (id, name) VALUES (1, 'A');
                 INSERT INTO noteful_notes (name, folder_id) VALUES ('n1', 1);
                 DELETE FROM noteful_folders WHERE id = 1;",
            )?;
            conn.query_row("SELECT COUNT(*) FROM noteful_notes", [], |row| row.get(0))
        })
        .await
        .expect("cascade");
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn both_tables_exist_after_bootstrap() {
    let db = Database::open_in_memory().expect("open");
    let tables: Vec<String> = db
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name LIKE 'noteful_%' ORDER BY name",
            )?;
            let rows = stmt.query_map([], |row| row.get(0))?;
            rows.collect()
        })
        .await
        .expect("list tables");
    assert_eq!(tables, [FOLDERS_TABLE, NOTES_TABLE]);
}

#[tokio::test]
async fn notes_may_omit_their_folder() {
    let db = Database::open_in_memory().expect("open");
    let folder: Option<i64> = db
        .call(|conn| {
            conn.execute("INSERT INTO noteful_notes (name) VALUES ('unfiled')", [])?;
            conn.query_row("SELECT folder_id FROM noteful_notes", [], |row| row.get(0))
        })
        .await
        .expect("unfiled note");
    assert_eq!(folder, None);
}
