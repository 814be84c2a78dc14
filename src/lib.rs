#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod api_state;
pub mod apod;
pub mod database;
pub mod routes;
mod server;
mod settings;

pub use routes::create_router;
pub use server::*;
pub use settings::*;
