use rocket::serde::json::Json;
use rocket::State;

use crate::model::error::ServiceError;
use crate::model::response::tag_responses::{
    CreateTagResponse, DeleteTagResponse, GetTagResponse, ListTagsResponse, UpdateTagResponse,
};
use crate::model::response::{location, BasicMessage};
use crate::repository::Db;
use crate::tags::{service, TagRequest};

#[get("/")]
pub fn list_tags(db: &State<Db>) -> ListTagsResponse {
    match service::get_all_tags(db) {
        Ok(tags) => ListTagsResponse::Success(Json::from(tags)),
        Err(_) => ListTagsResponse::TagDbError(BasicMessage::new(
            "Failed to pull tags from database. Check server logs for details",
        )),
    }
}

#[get("/<id>")]
pub fn get_tag(id: u32, db: &State<Db>) -> GetTagResponse {
    match service::get_tag(id, db) {
        Ok(tag) => GetTagResponse::Success(Json::from(tag)),
        Err(ServiceError::NotFound) => GetTagResponse::TagNotFound(()),
        Err(_) => GetTagResponse::TagDbError(BasicMessage::new(
            "Failed to pull tag info from database. Check server logs for details",
        )),
    }
}

#[post("/", data = "<tag>")]
pub fn create_tag(tag: Json<TagRequest>, db: &State<Db>) -> CreateTagResponse {
    match service::create_tag(tag.into_inner(), db) {
        Ok(tag) => {
            let header = location("/tags", tag.id);
            CreateTagResponse::Success(Json::from(tag), header)
        }
        Err(ServiceError::Validation(message)) => {
            CreateTagResponse::BadRequest(BasicMessage::new(&message))
        }
        Err(_) => CreateTagResponse::TagDbError(BasicMessage::new(
            "Failed to create tag in database. Check server logs for details",
        )),
    }
}

#[put("/<id>", data = "<tag>")]
pub fn update_tag(
    id: u32,
    tag: Json<TagRequest>,
    db: &State<Db>,
) -> UpdateTagResponse {
    match service::update_tag(id, tag.into_inner(), db) {
        Ok(tag) => UpdateTagResponse::Success(Json::from(tag)),
        Err(ServiceError::Validation(message)) => {
            UpdateTagResponse::BadRequest(BasicMessage::new(&message))
        }
        Err(ServiceError::NotFound) => UpdateTagResponse::TagNotFound(()),
        Err(ServiceError::DbError) => UpdateTagResponse::TagDbError(BasicMessage::new(
            "Failed to update tag in database. Check server logs for details",
        )),
    }
}

#[delete("/<id>")]
pub fn delete_tag(id: u32, db: &State<Db>) -> DeleteTagResponse {
    match service::delete_tag(id, db) {
        Ok(()) => DeleteTagResponse::Success(()),
        Err(_) => DeleteTagResponse::TagDbError(BasicMessage::new(
            "Failed to delete tag from database. Check server logs for details.",
        )),
    }
}
