mod create_note_tests {
    use crate::notes::repository::{create_note, get_note};
    use crate::notes::Note;
    use crate::repository::is_constraint_violation;
    use crate::test::{cleanup, create_folder_db_entry, init_db};

    #[test]
    fn create_note_success() {
        let db = init_db();
        let folder_id = create_folder_db_entry("folder");
        let con = db.open_connection().unwrap();
        let id = create_note("title", Some("content"), Some(folder_id), &con).unwrap();
        assert_eq!(
            Some(Note {
                id,
                title: "title".to_string(),
                content: Some("content".to_string()),
                folder_id: Some(folder_id),
            }),
            get_note(id, &con).unwrap()
        );
        cleanup();
    }

    #[test]
    fn create_note_missing_folder() {
        let db = init_db();
        let con = db.open_connection().unwrap();
        let res = create_note("title", None, Some(12), &con);
        assert!(is_constraint_violation(&res.unwrap_err()));
        cleanup();
    }
}

mod search_note_rows_tests {
    use crate::notes::repository::{get_note_rows, search_note_rows};
    use crate::notes::{NoteFilter, NoteRow};
    use crate::test::*;

    fn ids(rows: Vec<NoteRow>) -> Vec<u32> {
        let mut ids: Vec<u32> = rows.into_iter().map(|row| row.id).collect();
        ids.dedup();
        ids
    }

    #[test]
    fn get_note_rows_one_row_per_tag() {
        let db = init_db();
        let first = create_tag_db_entry("first");
        let second = create_tag_db_entry("second");
        let note = create_note_db_entry("note", None, &[second, first]);
        let con = db.open_connection().unwrap();
        let rows = get_note_rows(note, &con).unwrap();
        let tag_ids: Vec<Option<u32>> = rows.iter().map(|row| row.tag_id).collect();
        assert_eq!(vec![Some(first), Some(second)], tag_ids);
        cleanup();
    }

    #[test]
    fn get_note_rows_no_tags() {
        let db = init_db();
        let folder = create_folder_db_entry("folder");
        let note = create_note_db_entry("note", Some(folder), &[]);
        let con = db.open_connection().unwrap();
        let rows = get_note_rows(note, &con).unwrap();
        assert_eq!(
            vec![NoteRow {
                id: note,
                title: "note".to_string(),
                content: Some("content".to_string()),
                folder_id: Some(folder),
                folder_name: Some("folder".to_string()),
                tag_id: None,
                tag_name: None,
            }],
            rows
        );
        cleanup();
    }

    #[test]
    fn get_note_rows_missing_note() {
        let db = init_db();
        let con = db.open_connection().unwrap();
        assert!(get_note_rows(1, &con).unwrap().is_empty());
        cleanup();
    }

    #[test]
    fn search_note_rows_no_filter_ordered_by_id() {
        let db = init_db();
        create_note_db_entry("b", None, &[]);
        create_note_db_entry("a", None, &[]);
        create_note_db_entry("c", None, &[]);
        let con = db.open_connection().unwrap();
        let rows = search_note_rows(&NoteFilter::default(), &con).unwrap();
        assert_eq!(vec![1, 2, 3], ids(rows));
        cleanup();
    }

    #[test]
    fn search_note_rows_by_search_term() {
        let db = init_db();
        create_note_db_entry("buy food", None, &[]);
        create_note_db_entry("walk dog", None, &[]);
        create_note_db_entry("FOOD again", None, &[]);
        let con = db.open_connection().unwrap();
        let filter = NoteFilter {
            search_term: Some("food".to_string()),
            ..Default::default()
        };
        let rows = search_note_rows(&filter, &con).unwrap();
        assert_eq!(vec![1, 3], ids(rows));
        cleanup();
    }

    #[test]
    fn search_note_rows_search_term_is_literal() {
        let db = init_db();
        create_note_db_entry("100% done", None, &[]);
        create_note_db_entry("1000 done", None, &[]);
        let con = db.open_connection().unwrap();
        let filter = NoteFilter {
            search_term: Some("0%".to_string()),
            ..Default::default()
        };
        let rows = search_note_rows(&filter, &con).unwrap();
        assert_eq!(vec![1], ids(rows));
        cleanup();
    }

    #[test]
    fn search_note_rows_empty_search_term_matches_everything() {
        let db = init_db();
        create_note_db_entry("a", None, &[]);
        create_note_db_entry("b", None, &[]);
        let con = db.open_connection().unwrap();
        let filter = NoteFilter {
            search_term: Some(String::new()),
            ..Default::default()
        };
        let rows = search_note_rows(&filter, &con).unwrap();
        assert_eq!(vec![1, 2], ids(rows));
        cleanup();
    }

    #[test]
    fn search_note_rows_by_folder() {
        let db = init_db();
        let work = create_folder_db_entry("work");
        let home = create_folder_db_entry("home");
        create_note_db_entry("one", Some(work), &[]);
        create_note_db_entry("two", Some(home), &[]);
        create_note_db_entry("three", Some(work), &[]);
        create_note_db_entry("four", None, &[]);
        let con = db.open_connection().unwrap();
        let filter = NoteFilter {
            folder_id: Some(work),
            ..Default::default()
        };
        let rows = search_note_rows(&filter, &con).unwrap();
        assert_eq!(vec![1, 3], ids(rows));
        cleanup();
    }

    #[test]
    fn search_note_rows_by_tag_keeps_other_tags() {
        let db = init_db();
        let urgent = create_tag_db_entry("urgent");
        let later = create_tag_db_entry("later");
        create_note_db_entry("one", None, &[urgent, later]);
        create_note_db_entry("two", None, &[later]);
        let con = db.open_connection().unwrap();
        let filter = NoteFilter {
            tag_id: Some(urgent),
            ..Default::default()
        };
        let rows = search_note_rows(&filter, &con).unwrap();
        assert_eq!(2, rows.len());
        assert!(rows.iter().all(|row| row.id == 1));
        cleanup();
    }

    #[test]
    fn search_note_rows_combines_filters() {
        let db = init_db();
        let work = create_folder_db_entry("work");
        let urgent = create_tag_db_entry("urgent");
        create_note_db_entry("foo in work", Some(work), &[urgent]);
        create_note_db_entry("foo at home", None, &[urgent]);
        create_note_db_entry("bar in work", Some(work), &[urgent]);
        create_note_db_entry("foo in work, not urgent", Some(work), &[]);
        let con = db.open_connection().unwrap();
        let filter = NoteFilter {
            search_term: Some("foo".to_string()),
            folder_id: Some(work),
            tag_id: Some(urgent),
        };
        let rows = search_note_rows(&filter, &con).unwrap();
        assert_eq!(vec![1], ids(rows));
        cleanup();
    }
}

mod update_note_tests {
    use crate::notes::repository::{
        add_tags_to_note, create_note, get_note, get_note_rows, remove_tags_from_note, update_note,
    };
    use crate::notes::Note;
    use crate::test::{cleanup, create_tag_db_entry, init_db};

    #[test]
    fn update_note_overwrites_columns() {
        let db = init_db();
        let con = db.open_connection().unwrap();
        let id = create_note("title", Some("content"), None, &con).unwrap();
        let note = Note {
            id,
            title: "new title".to_string(),
            content: None,
            folder_id: None,
        };
        update_note(&note, &con).unwrap();
        assert_eq!(Some(note), get_note(id, &con).unwrap());
        cleanup();
    }

    #[test]
    fn remove_tags_from_note_removes_all() {
        let db = init_db();
        let first = create_tag_db_entry("first");
        let second = create_tag_db_entry("second");
        let con = db.open_connection().unwrap();
        let id = create_note("title", None, None, &con).unwrap();
        add_tags_to_note(id, &[first, second], &con).unwrap();
        remove_tags_from_note(id, &con).unwrap();
        let rows = get_note_rows(id, &con).unwrap();
        assert_eq!(1, rows.len());
        assert_eq!(None, rows[0].tag_id);
        cleanup();
    }
}

mod delete_note_tests {
    use crate::notes::repository::{delete_note, get_note};
    use crate::test::{cleanup, create_note_db_entry, create_tag_db_entry, init_db};

    #[test]
    fn delete_note_removes_tag_links() {
        let db = init_db();
        let tag = create_tag_db_entry("tag");
        let id = create_note_db_entry("note", None, &[tag]);
        let con = db.open_connection().unwrap();
        delete_note(id, &con).unwrap();
        assert_eq!(None, get_note(id, &con).unwrap());
        let links: u32 = con
            .query_row("select count(*) from notes_tags", [], |row| row.get(0))
            .unwrap();
        assert_eq!(0, links);
        cleanup();
    }
}
