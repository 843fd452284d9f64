use std::backtrace::Backtrace;

use crate::folders::repository as folder_repository;
use crate::folders::{Folder, FolderApi, FolderRequest};
use crate::model::error::ServiceError;
use crate::repository::Db;
use crate::util::{open_connection, required_field};

pub fn get_all_folders(db: &Db) -> Result<Vec<FolderApi>, ServiceError> {
    let con = open_connection(db)?;
    match folder_repository::get_all_folders(&con) {
        Ok(folders) => Ok(folders.into_iter().map(FolderApi::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to retrieve folders! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(ServiceError::DbError)
        }
    }
}

/// will return the folder with the passed id
pub fn get_folder(id: u32, db: &Db) -> Result<FolderApi, ServiceError> {
    let con = open_connection(db)?;
    match folder_repository::get_folder(id, &con) {
        Ok(Some(folder)) => Ok(FolderApi::from(folder)),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!(
                "Could not retrieve folder with id {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(ServiceError::DbError)
        }
    }
}

/// creates a folder with the name from the request. The name must be present and non-empty
pub fn create_folder(request: FolderRequest, db: &Db) -> Result<FolderApi, ServiceError> {
    let name = required_field(request.name, "name")?;
    let con = open_connection(db)?;
    match folder_repository::create_folder(&name, &con) {
        Ok(folder) => Ok(FolderApi::from(folder)),
        Err(e) => {
            log::error!(
                "Failed to create a new folder with the name {name}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(ServiceError::DbError)
        }
    }
}

/// renames the folder with the passed id. `name` is the only field that can be updated, and it's
/// required even if the request doesn't intend to change it
pub fn update_folder(id: u32, request: FolderRequest, db: &Db) -> Result<FolderApi, ServiceError> {
    let name = required_field(request.name, "name")?;
    let con = open_connection(db)?;
    let folder = Folder { id, name };
    match folder_repository::update_folder(&folder, &con) {
        Ok(true) => Ok(FolderApi::from(folder)),
        Ok(false) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!(
                "Could not update folder with id {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(ServiceError::DbError)
        }
    }
}

/// deletes the folder with the passed id. Does nothing if that folder doesn't exist
pub fn delete_folder(id: u32, db: &Db) -> Result<(), ServiceError> {
    let con = open_connection(db)?;
    if let Err(e) = folder_repository::delete_folder(id, &con) {
        log::error!(
            "Could not delete folder with id {id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(ServiceError::DbError);
    }
    Ok(())
}
