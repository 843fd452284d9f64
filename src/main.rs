#[macro_use]
extern crate rocket;

use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};

use crate::config::NOTES_SERVER_CONFIG;
use crate::repository::{initialize_db, Db};

mod catchers;
mod config;
mod folders;
mod logger;
mod model;
mod notes;
mod repository;
mod tags;
#[cfg(test)]
mod test;
mod util;

#[launch]
fn rocket() -> Rocket<Build> {
    if let Err(e) = logger::setup_logger(&NOTES_SERVER_CONFIG.log) {
        eprintln!("Failed to set up logging, continuing without it: {e}");
    }
    build_rocket(Db::new(NOTES_SERVER_CONFIG.database.location.as_str()))
}

/// builds the server around `db`. The database is created (if needed) before the server launches,
/// and launch is aborted if that fails
pub fn build_rocket(db: Db) -> Rocket<Build> {
    rocket::build()
        .manage(db)
        .attach(AdHoc::try_on_ignite(
            "Initialize Database",
            |rocket| async move {
                match rocket.state::<Db>().map(initialize_db) {
                    Some(Ok(())) => Ok(rocket),
                    Some(Err(e)) => {
                        log::error!("Failed to initialize the database! Error is {e:?}");
                        Err(rocket)
                    }
                    None => Err(rocket),
                }
            },
        ))
        .mount(
            "/folders",
            routes![
                folders::handler::list_folders,
                folders::handler::get_folder,
                folders::handler::create_folder,
                folders::handler::update_folder,
                folders::handler::delete_folder
            ],
        )
        .mount(
            "/tags",
            routes![
                tags::handler::list_tags,
                tags::handler::get_tag,
                tags::handler::create_tag,
                tags::handler::update_tag,
                tags::handler::delete_tag
            ],
        )
        .mount(
            "/notes",
            routes![
                notes::handler::list_notes,
                notes::handler::get_note,
                notes::handler::create_note,
                notes::handler::update_note,
                notes::handler::delete_note
            ],
        )
        .register(
            "/",
            catchers![
                catchers::bad_request,
                catchers::not_found,
                catchers::unprocessable_entity,
                catchers::internal_error
            ],
        )
}
