use rocket::http::Header;
use rocket::serde::json::Json;

use crate::model::response::{BasicMessage, NoContent};
use crate::notes::NoteApi;

#[derive(Responder)]
pub enum ListNotesResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<NoteApi>>),
}

#[derive(Responder)]
pub enum GetNoteResponse {
    #[response(status = 404)]
    NoteNotFound(NoContent),
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<NoteApi>),
}

#[derive(Responder)]
pub enum CreateNoteResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<BasicMessage>),
    #[response(status = 201, content_type = "json")]
    Success(Json<NoteApi>, Header<'static>),
}

#[derive(Responder)]
pub enum UpdateNoteResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 404)]
    NoteNotFound(NoContent),
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<NoteApi>),
}

#[derive(Responder)]
pub enum DeleteNoteResponse {
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
}
