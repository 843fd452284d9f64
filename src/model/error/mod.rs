/// every failure a service function can return. Handlers map each kind to a status code
#[derive(PartialEq, Debug)]
pub enum ServiceError {
    /// the request body was missing a required field, or referenced something that doesn't exist.
    /// Contains the message to send back to the client
    Validation(String),
    /// no record with the requested id exists
    NotFound,
    /// the database failed to run a query. Details are in the server logs
    DbError,
}

impl ServiceError {
    pub fn missing_field(field: &str) -> ServiceError {
        ServiceError::Validation(format!("Missing `{field}` in request body"))
    }
}
