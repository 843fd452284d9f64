use rocket::serde::json::Json;
use rocket::State;

use crate::model::error::ServiceError;
use crate::model::response::note_responses::{
    CreateNoteResponse, DeleteNoteResponse, GetNoteResponse, ListNotesResponse, UpdateNoteResponse,
};
use crate::model::response::{location, BasicMessage};
use crate::notes::{service, CreateNoteRequest, NoteFilter, NoteQuery, UpdateNoteRequest};
use crate::repository::Db;

#[get("/?<query..>")]
pub fn list_notes(query: NoteQuery, db: &State<Db>) -> ListNotesResponse {
    let filter = match NoteFilter::try_from(query) {
        Ok(filter) => filter,
        Err(message) => return ListNotesResponse::BadRequest(BasicMessage::new(&message)),
    };
    match service::search_notes(filter, db) {
        Ok(notes) => ListNotesResponse::Success(Json::from(notes)),
        Err(_) => ListNotesResponse::NoteDbError(BasicMessage::new(
            "Failed to search notes in database. Check server logs for details",
        )),
    }
}

#[get("/<id>")]
pub fn get_note(id: u32, db: &State<Db>) -> GetNoteResponse {
    match service::get_note(id, db) {
        Ok(note) => GetNoteResponse::Success(Json::from(note)),
        Err(ServiceError::NotFound) => GetNoteResponse::NoteNotFound(()),
        Err(_) => GetNoteResponse::NoteDbError(BasicMessage::new(
            "Failed to pull note info from database. Check server logs for details",
        )),
    }
}

#[post("/", data = "<note>")]
pub fn create_note(note: Json<CreateNoteRequest>, db: &State<Db>) -> CreateNoteResponse {
    match service::create_note(note.into_inner(), db) {
        Ok(note) => {
            let header = location("/notes", note.id);
            CreateNoteResponse::Success(Json::from(note), header)
        }
        Err(ServiceError::Validation(message)) => {
            CreateNoteResponse::BadRequest(BasicMessage::new(&message))
        }
        Err(_) => CreateNoteResponse::NoteDbError(BasicMessage::new(
            "Failed to create note in database. Check server logs for details",
        )),
    }
}

#[put("/<id>", data = "<note>")]
pub fn update_note(id: u32, note: Json<UpdateNoteRequest>, db: &State<Db>) -> UpdateNoteResponse {
    match service::update_note(id, note.into_inner(), db) {
        Ok(note) => UpdateNoteResponse::Success(Json::from(note)),
        Err(ServiceError::Validation(message)) => {
            UpdateNoteResponse::BadRequest(BasicMessage::new(&message))
        }
        Err(ServiceError::NotFound) => UpdateNoteResponse::NoteNotFound(()),
        Err(ServiceError::DbError) => UpdateNoteResponse::NoteDbError(BasicMessage::new(
            "Failed to update note in database. Check server logs for details",
        )),
    }
}

#[delete("/<id>")]
pub fn delete_note(id: u32, db: &State<Db>) -> DeleteNoteResponse {
    match service::delete_note(id, db) {
        Ok(()) => DeleteNoteResponse::Success(()),
        Err(_) => DeleteNoteResponse::NoteDbError(BasicMessage::new(
            "Failed to delete note from database. Check server logs for details.",
        )),
    }
}
