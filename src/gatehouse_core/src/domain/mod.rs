pub mod credentials;
pub mod password;
pub mod session;
pub mod user;
pub mod username;
