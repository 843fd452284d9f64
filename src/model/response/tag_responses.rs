use rocket::http::Header;
use rocket::serde::json::Json;

use crate::model::response::{BasicMessage, NoContent};
use crate::tags::TagApi;

#[derive(Responder)]
pub enum ListTagsResponse {
    #[response(status = 500, content_type = "json")]
    TagDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<TagApi>>),
}

#[derive(Responder)]
pub enum GetTagResponse {
    #[response(status = 404)]
    TagNotFound(NoContent),
    #[response(status = 500, content_type = "json")]
    TagDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<TagApi>),
}

#[derive(Responder)]
pub enum CreateTagResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    TagDbError(Json<BasicMessage>),
    #[response(status = 201, content_type = "json")]
    Success(Json<TagApi>, Header<'static>),
}

#[derive(Responder)]
pub enum UpdateTagResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 404)]
    TagNotFound(NoContent),
    #[response(status = 500, content_type = "json")]
    TagDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<TagApi>),
}

#[derive(Responder)]
pub enum DeleteTagResponse {
    #[response(status = 500, content_type = "json")]
    TagDbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
}
