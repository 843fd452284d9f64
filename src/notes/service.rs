use std::backtrace::Backtrace;

use rusqlite::Connection;

use crate::model::error::ServiceError;
use crate::notes::hydration::hydrate_notes;
use crate::notes::repository as note_repository;
use crate::notes::{CreateNoteRequest, Note, NoteApi, NoteFilter, UpdateNoteRequest};
use crate::repository::{is_constraint_violation, Db};
use crate::util::{dedupe_ids, open_connection, required_field};

static BAD_REFERENCE_MESSAGE: &str =
    "`folderId` or `tags` references a record that does not exist";

/// lists every note matching `filter`, hydrated with its folder and tags and ordered by id
pub fn search_notes(filter: NoteFilter, db: &Db) -> Result<Vec<NoteApi>, ServiceError> {
    let con = open_connection(db)?;
    match note_repository::search_note_rows(&filter, &con) {
        Ok(rows) => Ok(hydrate_notes(rows)),
        Err(e) => {
            log::error!(
                "Failed to search notes with filter {filter:?}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(ServiceError::DbError)
        }
    }
}

/// will return the note with the passed id, with its folder and tags
pub fn get_note(id: u32, db: &Db) -> Result<NoteApi, ServiceError> {
    let con = open_connection(db)?;
    get_hydrated_note(id, &con)
}

/// Creates a note and puts the requested tags on it, then returns the note hydrated the same way [`get_note`] does.
///
/// `title` is required. The note and its tags are written in a single transaction, so if any tag
/// can't be added the note isn't created either
pub fn create_note(request: CreateNoteRequest, db: &Db) -> Result<NoteApi, ServiceError> {
    let title = required_field(request.title, "title")?;
    let tags = dedupe_ids(request.tags);
    let mut con = open_connection(db)?;
    let tx = con.transaction().map_err(|e| log_db_error("start a transaction", e))?;
    let id = note_repository::create_note(
        &title,
        request.content.as_deref(),
        request.folder_id,
        &tx,
    )
    .map_err(|e| map_write_error(&format!("create a note titled {title}"), e))?;
    note_repository::add_tags_to_note(id, &tags, &tx)
        .map_err(|e| map_write_error(&format!("add tags {tags:?} to note {id}"), e))?;
    let note = get_hydrated_note(id, &tx)?;
    tx.commit().map_err(|e| log_db_error("commit the new note", e))?;
    Ok(note)
}

/// Updates the note with the passed id and returns it hydrated.
///
/// `title` is required on every update. `content` and `folderId` are only changed if they were
/// in the request. If `tags` was in the request the note's tags are replaced with exactly those tags,
/// otherwise they're left alone. Everything happens in one transaction
pub fn update_note(
    id: u32,
    request: UpdateNoteRequest,
    db: &Db,
) -> Result<NoteApi, ServiceError> {
    let title = required_field(request.title, "title")?;
    let mut con = open_connection(db)?;
    let tx = con.transaction().map_err(|e| log_db_error("start a transaction", e))?;
    let existing = match note_repository::get_note(id, &tx) {
        Ok(Some(note)) => note,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => return Err(log_db_error(&format!("retrieve note {id}"), e)),
    };
    let note = Note {
        id,
        title,
        content: request.content.unwrap_or(existing.content),
        folder_id: request.folder_id.unwrap_or(existing.folder_id),
    };
    note_repository::update_note(&note, &tx)
        .map_err(|e| map_write_error(&format!("update note {id}"), e))?;
    if let Some(tags) = request.tags {
        let tags = dedupe_ids(tags);
        note_repository::remove_tags_from_note(id, &tx)
            .map_err(|e| log_db_error(&format!("remove the tags from note {id}"), e))?;
        note_repository::add_tags_to_note(id, &tags, &tx)
            .map_err(|e| map_write_error(&format!("add tags {tags:?} to note {id}"), e))?;
    }
    let note = get_hydrated_note(id, &tx)?;
    tx.commit().map_err(|e| log_db_error(&format!("commit the update to note {id}"), e))?;
    Ok(note)
}

/// deletes the note with the passed id. Does nothing if that note doesn't exist
pub fn delete_note(id: u32, db: &Db) -> Result<(), ServiceError> {
    let con = open_connection(db)?;
    note_repository::delete_note(id, &con)
        .map_err(|e| log_db_error(&format!("delete note {id}"), e))
}

fn get_hydrated_note(id: u32, con: &Connection) -> Result<NoteApi, ServiceError> {
    let rows = note_repository::get_note_rows(id, con)
        .map_err(|e| log_db_error(&format!("retrieve note {id}"), e))?;
    hydrate_notes(rows)
        .into_iter()
        .next()
        .ok_or(ServiceError::NotFound)
}

fn log_db_error(action: &str, e: rusqlite::Error) -> ServiceError {
    log::error!(
        "Failed to {action}! Error is {e:?}\n{}",
        Backtrace::force_capture()
    );
    ServiceError::DbError
}

/// a constraint failure on a note write means the request pointed at a folder or tag that doesn't exist
fn map_write_error(action: &str, e: rusqlite::Error) -> ServiceError {
    if is_constraint_violation(&e) {
        log::warn!("Failed to {action}, the request references a missing record: {e:?}");
        ServiceError::Validation(BAD_REFERENCE_MESSAGE.to_string())
    } else {
        log_db_error(action, e)
    }
}
