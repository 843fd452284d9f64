use rocket::serde::{Deserialize, Serialize};

use crate::tags::TagApi;
use crate::util::deserialize_some;

/// represents a note in the notes table of the database, without any of its joined data
#[derive(Debug, PartialEq, Clone)]
pub struct Note {
    pub id: u32,
    pub title: String,
    pub content: Option<String>,
    /// `None` if the note isn't in a folder
    pub folder_id: Option<u32>,
}

/// a single row of the notes/folders/tags left join. A note with multiple tags
/// shows up once per tag, and a note without tags shows up once with no tag fields
#[derive(Debug, PartialEq, Clone)]
pub struct NoteRow {
    pub id: u32,
    pub title: String,
    pub content: Option<String>,
    pub folder_id: Option<u32>,
    pub folder_name: Option<String>,
    pub tag_id: Option<u32>,
    pub tag_name: Option<String>,
}

/// a note hydrated with its folder and all of its tags
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct NoteApi {
    pub id: u32,
    pub title: String,
    pub content: Option<String>,
    #[serde(rename = "folderId")]
    pub folder_id: Option<u32>,
    #[serde(rename = "folderName")]
    pub folder_name: Option<String>,
    pub tags: Vec<TagApi>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(crate = "rocket::serde")]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "folderId", alias = "folder_id")]
    pub folder_id: Option<u32>,
    /// ids of the tags to put on the note
    #[serde(default)]
    pub tags: Vec<u32>,
}

/// `title` is always required. `content` and `folder_id` are only changed when they're in the body
/// (an explicit `null` clears them), and `tags` replaces the note's tags only when present
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(crate = "rocket::serde")]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<Option<String>>,
    #[serde(
        rename = "folderId",
        alias = "folder_id",
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub folder_id: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<u32>>,
}

/// raw query parameters for listing notes. Ids are kept as text so a value that isn't a number
/// can be rejected instead of being dropped
#[derive(FromForm, Debug, Default)]
pub struct NoteQuery {
    #[field(name = "searchTerm")]
    pub search_term: Option<String>,
    #[field(name = "folderId")]
    pub folder_id: Option<String>,
    #[field(name = "tagId")]
    pub tag_id: Option<String>,
}

/// filters for listing notes. Every filter that's present has to match
#[derive(Debug, Default, PartialEq)]
pub struct NoteFilter {
    /// matched as a substring of the note's title
    pub search_term: Option<String>,
    pub folder_id: Option<u32>,
    pub tag_id: Option<u32>,
}

impl TryFrom<NoteQuery> for NoteFilter {
    /// message for the client naming the bad parameter
    type Error = String;

    fn try_from(query: NoteQuery) -> Result<Self, Self::Error> {
        Ok(NoteFilter {
            search_term: query.search_term,
            folder_id: parse_id_param(query.folder_id, "folderId")?,
            tag_id: parse_id_param(query.tag_id, "tagId")?,
        })
    }
}

fn parse_id_param(value: Option<String>, name: &str) -> Result<Option<u32>, String> {
    match value {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| format!("`{name}` must be a whole number, got `{raw}`")),
    }
}

#[cfg(test)]
mod note_filter_tests {
    use crate::notes::{NoteFilter, NoteQuery};

    #[test]
    fn try_from_parses_ids() {
        let query = NoteQuery {
            search_term: Some("foo".to_string()),
            folder_id: Some("3".to_string()),
            tag_id: Some("7".to_string()),
        };
        let expected = NoteFilter {
            search_term: Some("foo".to_string()),
            folder_id: Some(3),
            tag_id: Some(7),
        };
        assert_eq!(Ok(expected), NoteFilter::try_from(query));
    }

    #[test]
    fn try_from_missing_ids() {
        assert_eq!(
            Ok(NoteFilter::default()),
            NoteFilter::try_from(NoteQuery::default())
        );
    }

    #[test]
    fn try_from_rejects_non_numeric_tag() {
        let query = NoteQuery {
            tag_id: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(
            Err("`tagId` must be a whole number, got `x`".to_string()),
            NoteFilter::try_from(query)
        );
    }

    #[test]
    fn try_from_rejects_negative_and_empty_folder() {
        for raw in ["-1", ""] {
            let query = NoteQuery {
                folder_id: Some(raw.to_string()),
                ..Default::default()
            };
            assert!(NoteFilter::try_from(query).is_err(), "accepted `{raw}`");
        }
    }
}
