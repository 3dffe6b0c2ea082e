pub mod error;
pub mod input;
pub mod models;
pub mod prelude;

/// Default origin of the Manga Store API
pub static DEFAULT_API_URL: &str = "http://localhost:3000";
