use std::collections::HashMap;

use crate::notes::{NoteApi, NoteRow};
use crate::tags::TagApi;

/// Merges the flat rows of the notes/folders/tags join into one [`NoteApi`] per note id.
///
/// Notes are returned in the order their id first shows up in `rows`, and each note's tags
/// are in the order they first show up for that note. Rows without a tag add nothing to `tags`,
/// and a tag that shows up more than once for the same note is only added once.
pub fn hydrate_notes(rows: Vec<NoteRow>) -> Vec<NoteApi> {
    let mut notes: Vec<NoteApi> = Vec::new();
    // note id -> index in `notes`
    let mut positions: HashMap<u32, usize> = HashMap::new();
    for row in rows {
        let index = *positions.entry(row.id).or_insert_with(|| {
            notes.push(NoteApi {
                id: row.id,
                title: row.title.clone(),
                content: row.content.clone(),
                folder_id: row.folder_id,
                folder_name: row.folder_name.clone(),
                tags: Vec::new(),
            });
            notes.len() - 1
        });
        if let (Some(tag_id), Some(tag_name)) = (row.tag_id, row.tag_name) {
            let note = &mut notes[index];
            if !note.tags.iter().any(|tag| tag.id == tag_id) {
                note.tags.push(TagApi {
                    id: tag_id,
                    name: tag_name,
                });
            }
        }
    }
    notes
}
