#[macro_use]
extern crate log;

pub mod api;
pub mod auth;
pub mod config;
pub mod detail;
pub mod home;
pub mod loadable;
pub mod navbar;
pub mod navigation;
pub mod profile;
pub mod route;
pub mod search;
pub mod session;
pub mod transport;

#[cfg(test)]
mod testing;

pub use api::Api;
pub use config::ClientConfig;
pub use loadable::Loadable;
pub use navigation::Navigator;
pub use route::Route;
pub use session::Session;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

pub use manga_store_lib::prelude::*;
