pub mod error;
pub mod handlers;
mod hashing;
pub mod interfaces;
pub mod middleware;
pub mod router;
pub mod service;
