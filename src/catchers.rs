use rocket::serde::json::Json;
use rocket::Request;

use crate::model::response::BasicMessage;

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<BasicMessage> {
    BasicMessage::new("The request body could not be read. Make sure it is valid json")
}

#[catch(404)]
pub fn not_found(req: &Request) -> Json<BasicMessage> {
    Json::from(BasicMessage::from(format!(
        "Nothing exists at {} {}",
        req.method(),
        req.uri()
    )))
}

/// rocket's response when the json body is well formed but has the wrong types, like a string for `tags`
#[catch(422)]
pub fn unprocessable_entity(_req: &Request) -> Json<BasicMessage> {
    BasicMessage::new("The request body has fields with the wrong type")
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<BasicMessage> {
    BasicMessage::new("Something went wrong on the server. Check server logs for details")
}
