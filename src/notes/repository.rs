use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension};

use crate::notes::{Note, NoteFilter, NoteRow};
use crate::repository::row_id;

/// runs the notes/folders/tags join with `where_clause` spliced in, which must be empty or a full `where ...`
fn query_note_rows(
    where_clause: &str,
    params: Vec<Value>,
    con: &Connection,
) -> Result<Vec<NoteRow>, rusqlite::Error> {
    let formatted_query = format!(
        include_str!("../assets/queries/notes/get_hydrated_notes.sql"),
        where_clause
    );
    let mut pst = con.prepare(formatted_query.as_str())?;
    let rows = pst.query_map(rusqlite::params_from_iter(params), note_row_mapper)?;
    rows.collect::<Result<Vec<NoteRow>, rusqlite::Error>>()
}

/// retrieves the joined rows for every note matching `filter`, ordered by note id.
/// Each note comes back once per tag and needs to be hydrated
pub fn search_note_rows(
    filter: &NoteFilter,
    con: &Connection,
) -> Result<Vec<NoteRow>, rusqlite::Error> {
    // conditions use anonymous parameters, so `params` has to stay in the same order
    let mut conditions: Vec<&str> = Vec::new();
    let mut params: Vec<Value> = Vec::new();
    if let Some(term) = filter.search_term.as_deref().filter(|it| !it.is_empty()) {
        params.push(Value::Text(format!("%{}%", escape_like(term))));
        conditions.push("notes.title like ? escape '\\'");
    }
    if let Some(folder_id) = filter.folder_id {
        params.push(Value::Integer(folder_id.into()));
        conditions.push("notes.folder_id = ?");
    }
    if let Some(tag_id) = filter.tag_id {
        // filter on the note instead of the joined row, so the matching notes still have all their tags
        params.push(Value::Integer(tag_id.into()));
        conditions.push("notes.id in (select note_id from notes_tags where tag_id = ?)");
    }
    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("where {}", conditions.join(" and "))
    };
    query_note_rows(&where_clause, params, con)
}

/// retrieves the joined rows for a single note. Empty if the note doesn't exist
pub fn get_note_rows(id: u32, con: &Connection) -> Result<Vec<NoteRow>, rusqlite::Error> {
    query_note_rows(
        "where notes.id = ?1",
        vec![Value::Integer(id.into())],
        con,
    )
}

/// retrieves just the note record, without its folder or tags
pub fn get_note(id: u32, con: &Connection) -> Result<Option<Note>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/notes/get_note_by_id.sql"))?;
    pst.query_row(rusqlite::params![id], note_mapper).optional()
}

/// creates the note record and returns its new id. Tags need to be added separately
pub fn create_note(
    title: &str,
    content: Option<&str>,
    folder_id: Option<u32>,
    con: &Connection,
) -> Result<u32, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/notes/create_note.sql"))?;
    let id = row_id(pst.insert(rusqlite::params![title, content, folder_id])?)?;
    Ok(id)
}

/// overwrites every column of the note with the values in `note`
pub fn update_note(note: &Note, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/notes/update_note.sql"))?;
    pst.execute(rusqlite::params![
        note.title,
        note.content,
        note.folder_id,
        note.id
    ])?;
    Ok(())
}

/// deletes the note if it exists. Its rows in notes_tags are removed by the foreign key cascade
pub fn delete_note(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/notes/delete_note.sql"))?;
    pst.execute(rusqlite::params![id])?;
    Ok(())
}

/// the caller needs to make sure the same tag isn't added to a note twice
pub fn add_tags_to_note(
    note_id: u32,
    tag_ids: &[u32],
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/notes/add_tag_to_note.sql"))?;
    for tag_id in tag_ids {
        pst.execute(rusqlite::params![note_id, tag_id])?;
    }
    Ok(())
}

pub fn remove_tags_from_note(note_id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/notes/remove_tags_from_note.sql"
    ))?;
    pst.execute(rusqlite::params![note_id])?;
    Ok(())
}

/// escapes the `like` wildcards so the search term is matched literally. Pairs with `escape '\'`
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn note_row_mapper(row: &rusqlite::Row) -> Result<NoteRow, rusqlite::Error> {
    Ok(NoteRow {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        folder_id: row.get(3)?,
        folder_name: row.get(4)?,
        tag_id: row.get(5)?,
        tag_name: row.get(6)?,
    })
}

fn note_mapper(row: &rusqlite::Row) -> Result<Note, rusqlite::Error> {
    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        folder_id: row.get(3)?,
    })
}
