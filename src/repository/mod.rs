use std::path::{Path, PathBuf};

use rusqlite::{Connection, ErrorCode, OpenFlags, OptionalExtension, Result};

/// handle to the sqlite database. Handlers receive this through rocket's managed state
/// instead of opening connections against a global location
#[derive(Debug, Clone)]
pub struct Db {
    location: PathBuf,
}

impl Db {
    pub fn new(location: impl Into<PathBuf>) -> Db {
        Db {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// opens a new connection with foreign keys enforced. Callers own the connection and it closes on drop
    pub fn open_connection(&self) -> Result<Connection> {
        let con = Connection::open_with_flags(&self.location, OpenFlags::default())?;
        con.execute_batch("pragma foreign_keys = on;")?;
        Ok(con)
    }
}

/// retrieves the schema version from the metadata table. `None` means the schema was never created
pub fn get_version(con: &Connection) -> Result<Option<String>> {
    let mut pst = match con.prepare(include_str!("../assets/queries/get_version.sql")) {
        Ok(pst) => pst,
        Err(e) if is_missing_table(&e) => return Ok(None),
        Err(e) => return Err(e),
    };
    pst.query_row([], |row| row.get(0)).optional()
}

fn is_missing_table(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(_, Some(message)) if message.starts_with("no such table")
    )
}

/// converts a rowid from an insert into the u32 ids used across the api
pub fn row_id(id: i64) -> Result<u32> {
    u32::try_from(id).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, id))
}

/// runs init.sql on the database
fn create_db(con: &Connection) -> Result<()> {
    con.execute_batch(include_str!("../assets/init.sql"))
}

/// handles checking if the database exists and creates the tables if it doesn't
pub fn initialize_db(db: &Db) -> Result<()> {
    let con = db.open_connection()?;
    match get_version(&con)? {
        Some(version) => log::debug!("Database already at v{version}"),
        None => {
            log::info!("No database found at {:?}, creating...", db.location());
            create_db(&con)?;
        }
    };
    Ok(())
}

/// true if the error came from a failed foreign key, primary key, or not null constraint
pub fn is_constraint_violation(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}
