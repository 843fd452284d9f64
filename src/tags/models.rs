use rocket::serde::{Deserialize, Serialize};

/// represents a tag in the tags table of the database. Tags on a note are pulled through the notes queries instead
#[derive(Debug, PartialEq, Clone)]
pub struct Tag {
    /// the id of the tag
    pub id: u32,
    /// the display name of the tag
    pub name: String,
}

/// the tag as the api returns it. This is also what shows up in a note's `tags` list
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct TagApi {
    pub id: u32,
    pub name: String,
}

/// body of both create and update requests. Only `name` is ever read from the body,
/// and it's optional here so that a missing name gets a proper message instead of a parse failure
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(crate = "rocket::serde")]
pub struct TagRequest {
    pub name: Option<String>,
}

impl From<Tag> for TagApi {
    fn from(value: Tag) -> Self {
        TagApi {
            id: value.id,
            name: value.name,
        }
    }
}
