pub mod email;
pub mod password;
pub mod profile;
pub mod role;
pub mod user;
pub mod username;
