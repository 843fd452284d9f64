use rocket::serde::json::Json;
use rocket::State;

use crate::folders::{service, FolderRequest};
use crate::model::error::ServiceError;
use crate::model::response::folder_responses::{
    CreateFolderResponse, DeleteFolderResponse, GetFolderResponse, ListFoldersResponse,
    UpdateFolderResponse,
};
use crate::model::response::{location, BasicMessage};
use crate::repository::Db;

#[get("/")]
pub fn list_folders(db: &State<Db>) -> ListFoldersResponse {
    match service::get_all_folders(db) {
        Ok(folders) => ListFoldersResponse::Success(Json::from(folders)),
        Err(_) => ListFoldersResponse::FolderDbError(BasicMessage::new(
            "Failed to pull folders from database. Check server logs for details",
        )),
    }
}

#[get("/<id>")]
pub fn get_folder(id: u32, db: &State<Db>) -> GetFolderResponse {
    match service::get_folder(id, db) {
        Ok(folder) => GetFolderResponse::Success(Json::from(folder)),
        Err(ServiceError::NotFound) => GetFolderResponse::FolderNotFound(()),
        Err(_) => GetFolderResponse::FolderDbError(BasicMessage::new(
            "Failed to pull folder info from database. Check server logs for details",
        )),
    }
}

#[post("/", data = "<folder>")]
pub fn create_folder(folder: Json<FolderRequest>, db: &State<Db>) -> CreateFolderResponse {
    match service::create_folder(folder.into_inner(), db) {
        Ok(folder) => {
            let header = location("/folders", folder.id);
            CreateFolderResponse::Success(Json::from(folder), header)
        }
        Err(ServiceError::Validation(message)) => {
            CreateFolderResponse::BadRequest(BasicMessage::new(&message))
        }
        Err(_) => CreateFolderResponse::FolderDbError(BasicMessage::new(
            "Failed to create folder in database. Check server logs for details",
        )),
    }
}

#[put("/<id>", data = "<folder>")]
pub fn update_folder(
    id: u32,
    folder: Json<FolderRequest>,
    db: &State<Db>,
) -> UpdateFolderResponse {
    match service::update_folder(id, folder.into_inner(), db) {
        Ok(folder) => UpdateFolderResponse::Success(Json::from(folder)),
        Err(ServiceError::Validation(message)) => {
            UpdateFolderResponse::BadRequest(BasicMessage::new(&message))
        }
        Err(ServiceError::NotFound) => UpdateFolderResponse::FolderNotFound(()),
        Err(ServiceError::DbError) => UpdateFolderResponse::FolderDbError(BasicMessage::new(
            "Failed to update folder in database. Check server logs for details",
        )),
    }
}

#[delete("/<id>")]
pub fn delete_folder(id: u32, db: &State<Db>) -> DeleteFolderResponse {
    match service::delete_folder(id, db) {
        Ok(()) => DeleteFolderResponse::Success(()),
        Err(_) => DeleteFolderResponse::FolderDbError(BasicMessage::new(
            "Failed to delete folder from database. Check server logs for details.",
        )),
    }
}
