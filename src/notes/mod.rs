pub mod handler;
pub mod hydration;
pub mod models;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

// make it easier to just use models
pub use models::*;
