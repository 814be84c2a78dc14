pub mod app_user;
pub mod error;
pub mod favorite;
pub mod favorite_store;
pub mod user_store;

pub use app_user::*;
pub use error::*;
pub use favorite::*;
pub use favorite_store::*;
pub use user_store::*;
