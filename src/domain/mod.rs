mod data_stores;
mod email;
mod error;
mod password;
mod user;
mod user_id;
mod user_password_hash;

pub use data_stores::*;
pub use email::*;
pub use error::*;
pub use password::*;
pub use user::*;
pub use user_id::*;
pub use user_password_hash::*;
