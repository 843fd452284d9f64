use rusqlite::{Connection, OptionalExtension};

use crate::folders::Folder;
use crate::repository::row_id;

pub fn get_all_folders(con: &Connection) -> Result<Vec<Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folders/get_all_folders.sql"))?;
    let rows = pst.query_map([], folder_mapper)?;
    rows.collect::<Result<Vec<Folder>, rusqlite::Error>>()
}

/// retrieves the folder with the passed `id`, or `None` if no folder has that id
pub fn get_folder(id: u32, con: &Connection) -> Result<Option<Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folders/get_folder_by_id.sql"))?;
    pst.query_row(rusqlite::params![id], folder_mapper).optional()
}

/// creates a new folder in the database. Name validation has to be done by the caller
pub fn create_folder(name: &str, con: &Connection) -> Result<Folder, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folders/create_folder.sql"))?;
    let id = row_id(pst.insert(rusqlite::params![name])?)?;
    Ok(Folder {
        id,
        name: name.to_string(),
    })
}

/// renames the folder. Returns `false` if no folder with that id exists
pub fn update_folder(folder: &Folder, con: &Connection) -> Result<bool, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folders/update_folder.sql"))?;
    let changed = pst.execute(rusqlite::params![folder.name, folder.id])?;
    Ok(changed > 0)
}

/// deletes the folder if it exists. Notes in the folder are kept, with their folder cleared
pub fn delete_folder(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folders/delete_folder.sql"))?;
    pst.execute(rusqlite::params![id])?;
    Ok(())
}

/// maps a [`Folder`] from a database row
fn folder_mapper(row: &rusqlite::Row) -> Result<Folder, rusqlite::Error> {
    let id: u32 = row.get(0)?;
    let name: String = row.get(1)?;
    Ok(Folder { id, name })
}
