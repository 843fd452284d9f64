use rocket::http::Header;
use rocket::serde::json::Json;

use crate::folders::FolderApi;
use crate::model::response::{BasicMessage, NoContent};

#[derive(Responder)]
pub enum ListFoldersResponse {
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<FolderApi>>),
}

#[derive(Responder)]
pub enum GetFolderResponse {
    #[response(status = 404)]
    FolderNotFound(NoContent),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<FolderApi>),
}

#[derive(Responder)]
pub enum CreateFolderResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 201, content_type = "json")]
    Success(Json<FolderApi>, Header<'static>),
}

#[derive(Responder)]
pub enum UpdateFolderResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 404)]
    FolderNotFound(NoContent),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<FolderApi>),
}

#[derive(Responder)]
pub enum DeleteFolderResponse {
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
}
