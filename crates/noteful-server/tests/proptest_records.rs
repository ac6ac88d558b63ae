use noteful_model::{NewFolder, NewNote};
use noteful_server::{FolderService, NoteService};
use noteful_store::Database;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime")
}

fn record_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "\\PC{0,48}",
        "[\"'\\\\ a-zA-Z0-9%_;]{1,24}",
        "[é漢字🙂✓ ]{1,12}",
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(64))]
    #[test]
    fn inserted_folder_reads_back_with_same_name(name in record_name()) {
        let rt = runtime();
        let (created, first, second) = rt.block_on(async {
            let folders = FolderService::new(Database::open_in_memory().expect("open db"));
            let created = folders
                .insert_folder(NewFolder::new(name.clone()))
                .await
                .expect("insert folder");
            let first = folders.get_folder_by_id(created.id).await.expect("first get");
            let second = folders.get_folder_by_id(created.id).await.expect("second get");
            (created, first, second)
        });
        prop_assert!(created.id > 0);
        prop_assert_eq!(&created.name, &name);
        prop_assert_eq!(first.as_ref(), Some(&created));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn inserted_note_reads_back_unchanged(
        name in record_name(),
        content in proptest::option::of("\\PC{0,64}"),
        filed in any::<bool>()
    ) {
        let rt = runtime();
        let (created, first, second) = rt.block_on(async {
            let db = Database::open_in_memory().expect("open db");
            let folder_id = if filed {
                let folder = FolderService::new(db.clone())
                    .insert_folder(NewFolder::new("Important"))
                    .await
                    .expect("insert folder");
                Some(folder.id)
            } else {
                None
            };
            let notes = NoteService::new(db);
            let created = notes
                .insert_note(NewNote {
                    name: name.clone(),
                    content: content.clone(),
                    folder_id,
                })
                .await
                .expect("insert note");
            let first = notes.get_note_by_id(created.id).await.expect("first get");
            let second = notes.get_note_by_id(created.id).await.expect("second get");
            (created, first, second)
        });
        prop_assert!(created.id > 0);
        prop_assert_eq!(&created.name, &name);
        prop_assert_eq!(&created.content, &content);
        prop_assert_eq!(created.folder_id.is_some(), filed);
        prop_assert_eq!(first.as_ref(), Some(&created));
        prop_assert_eq!(first, second);
    }
}
