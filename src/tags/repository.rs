use rusqlite::{Connection, OptionalExtension};

use crate::repository::row_id;
use crate::tags::Tag;

pub fn get_all_tags(con: &Connection) -> Result<Vec<Tag>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/tags/get_all_tags.sql"))?;
    let rows = pst.query_map([], tag_mapper)?;
    rows.collect::<Result<Vec<Tag>, rusqlite::Error>>()
}

/// retrieves a tag from the database with the passed `id`
///
/// # Parameters
/// - `id`: the unique identifier of the tag to retrieve
/// - `con`: the database connection to use
///
/// # Returns
/// - `Ok(Some(Tag))`: the tag with the specified ID if the tag exists
/// - `Ok(None)`: if no tag has that id
/// - `Err(rusqlite::Error)`: if there was an error during the database operation
pub fn get_tag(id: u32, con: &Connection) -> Result<Option<Tag>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/tags/get_tag_by_id.sql"))?;
    pst.query_row(rusqlite::params![id], tag_mapper).optional()
}

/// creates a new tag in the database. This does not check if a tag with the same name already exists
pub fn create_tag(name: &str, con: &Connection) -> Result<Tag, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/tags/create_tag.sql"))?;
    let id = row_id(pst.insert(rusqlite::params![name])?)?;
    Ok(Tag {
        id,
        name: name.to_string(),
    })
}

/// renames the tag. Returns `false` if no tag with that id exists
pub fn update_tag(tag: &Tag, con: &Connection) -> Result<bool, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/tags/update_tag.sql"))?;
    let changed = pst.execute(rusqlite::params![tag.name, tag.id])?;
    Ok(changed > 0)
}

/// deletes the tag if it exists. The tag is removed from every note it was on
pub fn delete_tag(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/tags/delete_tag.sql"))?;
    pst.execute(rusqlite::params![id])?;
    Ok(())
}

/// maps a [`Tag`] from a database row
fn tag_mapper(row: &rusqlite::Row) -> Result<Tag, rusqlite::Error> {
    let id: u32 = row.get(0)?;
    let name: String = row.get(1)?;
    Ok(Tag { id, name })
}
