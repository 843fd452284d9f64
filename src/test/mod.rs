use std::fs::remove_file;
use std::path::Path;

use rocket::local::blocking::Client;

use crate::build_rocket;
use crate::folders::repository as folder_repository;
use crate::notes::repository as note_repository;
use crate::repository::{initialize_db, Db};
use crate::tags::repository as tag_repository;

/// each test gets its own database file, named after the test's thread, so tests can run in parallel
pub fn test_db() -> Db {
    Db::new(db_file_name())
}

/// removes any leftover database for the current test and creates a fresh one
pub fn init_db() -> Db {
    cleanup();
    let db = test_db();
    initialize_db(&db).unwrap();
    db
}

/// a client for a server running against [`test_db`]. The server creates the tables on ignite if needed
pub fn client() -> Client {
    Client::tracked(build_rocket(test_db())).unwrap()
}

pub fn create_folder_db_entry(name: &str) -> u32 {
    let connection = test_db().open_connection().unwrap();
    folder_repository::create_folder(name, &connection)
        .unwrap()
        .id
}

pub fn create_tag_db_entry(name: &str) -> u32 {
    let connection = test_db().open_connection().unwrap();
    tag_repository::create_tag(name, &connection).unwrap().id
}

pub fn create_note_db_entry(title: &str, folder_id: Option<u32>, tag_ids: &[u32]) -> u32 {
    let connection = test_db().open_connection().unwrap();
    let id = note_repository::create_note(title, Some("content"), folder_id, &connection).unwrap();
    note_repository::add_tags_to_note(id, tag_ids, &connection).unwrap();
    id
}

pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread.name().unwrap().to_string()
}

pub fn cleanup() {
    remove_file(Path::new(db_file_name().as_str())).unwrap_or(());
}

fn db_file_name() -> String {
    format!("{}.sqlite", current_thread_name())
}
