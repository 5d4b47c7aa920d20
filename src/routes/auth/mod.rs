mod login;
mod signup;

pub use login::*;
pub use signup::*;
