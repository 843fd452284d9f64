use rocket::serde::{Deserialize, Serialize};

/// represents a folder in the folders table of the database
#[derive(Debug, PartialEq, Clone)]
pub struct Folder {
    /// the id of the folder
    pub id: u32,
    /// the display name of the folder
    pub name: String,
}

/// the folder as it's sent to and returned from the api
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct FolderApi {
    pub id: u32,
    pub name: String,
}

/// body of both create and update requests. Only `name` is ever read from the body,
/// and it's optional here so that a missing name gets a proper message instead of a parse failure
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(crate = "rocket::serde")]
pub struct FolderRequest {
    pub name: Option<String>,
}

impl From<Folder> for FolderApi {
    fn from(value: Folder) -> Self {
        FolderApi {
            id: value.id,
            name: value.name,
        }
    }
}
