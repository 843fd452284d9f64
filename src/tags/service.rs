use std::backtrace::Backtrace;

use crate::model::error::ServiceError;
use crate::repository::Db;
use crate::tags::repository as tag_repository;
use crate::tags::{Tag, TagApi, TagRequest};
use crate::util::{open_connection, required_field};

/// lists every tag, in whatever order the database returns them
pub fn get_all_tags(db: &Db) -> Result<Vec<TagApi>, ServiceError> {
    let con = open_connection(db)?;
    match tag_repository::get_all_tags(&con) {
        Ok(tags) => Ok(tags.into_iter().map(TagApi::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to retrieve tags! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(ServiceError::DbError)
        }
    }
}

/// will return the tag with the passed id
pub fn get_tag(id: u32, db: &Db) -> Result<TagApi, ServiceError> {
    let con = open_connection(db)?;
    match tag_repository::get_tag(id, &con) {
        Ok(Some(tag)) => Ok(TagApi::from(tag)),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!(
                "Could not retrieve tag with id {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(ServiceError::DbError)
        }
    }
}

/// creates a tag with the name from the request. The name must be present and non-empty
pub fn create_tag(request: TagRequest, db: &Db) -> Result<TagApi, ServiceError> {
    let name = required_field(request.name, "name")?;
    let con = open_connection(db)?;
    match tag_repository::create_tag(&name, &con) {
        Ok(tag) => Ok(TagApi::from(tag)),
        Err(e) => {
            log::error!(
                "Failed to create a new tag with the name {name}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(ServiceError::DbError)
        }
    }
}

/// renames the tag with the passed id. `name` is the only field that can be updated, and it's
/// required even if the request doesn't intend to change it
pub fn update_tag(id: u32, request: TagRequest, db: &Db) -> Result<TagApi, ServiceError> {
    let name = required_field(request.name, "name")?;
    let con = open_connection(db)?;
    let tag = Tag { id, name };
    match tag_repository::update_tag(&tag, &con) {
        Ok(true) => Ok(TagApi::from(tag)),
        Ok(false) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!(
                "Could not update tag with id {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(ServiceError::DbError)
        }
    }
}

/// deletes the tag with the passed id. Does nothing if that tag doesn't exist
pub fn delete_tag(id: u32, db: &Db) -> Result<(), ServiceError> {
    let con = open_connection(db)?;
    if let Err(e) = tag_repository::delete_tag(id, &con) {
        log::error!(
            "Could not delete tag with id {id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(ServiceError::DbError);
    }
    Ok(())
}
